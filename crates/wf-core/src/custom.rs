//! Commands attached to entities at authoring time.

use std::fmt;
use std::rc::Rc;

use crate::reaction::Reaction;
use crate::world::World;

/// Signature of a custom command handler. Receives the world and any
/// arguments that followed the command text.
pub type CommandHandler = dyn Fn(&mut World, &[String]) -> Reaction;

/// Help text for a command: what to type and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHelp {
    /// The text the player types.
    pub command: String,
    /// What the command does.
    pub description: String,
}

impl CommandHelp {
    /// Create a help entry.
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// A command declared by an entity, matched by its exact text.
#[derive(Clone)]
pub struct CustomCommand {
    /// Command text and description.
    pub help: CommandHelp,
    /// Whether the command is listed to the player. Hidden commands still match.
    pub is_player_visible: bool,
    handler: Rc<CommandHandler>,
}

impl CustomCommand {
    /// Create a visible custom command.
    pub fn new(
        command: impl Into<String>,
        description: impl Into<String>,
        handler: impl Fn(&mut World, &[String]) -> Reaction + 'static,
    ) -> Self {
        Self {
            help: CommandHelp::new(command, description),
            is_player_visible: true,
            handler: Rc::new(handler),
        }
    }

    /// Set whether the command is listed to the player.
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.is_player_visible = visible;
        self
    }

    /// Check whether raw input is this command's text.
    pub fn matches(&self, input: &str) -> bool {
        self.help.command.eq_ignore_ascii_case(input.trim())
    }

    /// Split raw input into this command's text plus trailing arguments.
    ///
    /// Returns `None` unless the input starts with the command text followed
    /// by whitespace.
    pub fn arguments(&self, input: &str) -> Option<Vec<String>> {
        let input = input.trim();
        let text = self.help.command.as_str();
        let head = input.get(..text.len())?;
        let rest = input.get(text.len()..)?;
        if !head.eq_ignore_ascii_case(text) || !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.split_whitespace().map(str::to_string).collect())
    }

    /// Run the handler against the world.
    pub fn invoke(&self, world: &mut World, args: &[String]) -> Reaction {
        (self.handler)(world, args)
    }
}

impl PartialEq for CustomCommand {
    fn eq(&self, other: &Self) -> bool {
        self.help == other.help && Rc::ptr_eq(&self.handler, &other.handler)
    }
}

impl fmt::Debug for CustomCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomCommand")
            .field("help", &self.help)
            .field("is_player_visible", &self.is_player_visible)
            .finish_non_exhaustive()
    }
}

/// Anything that can carry custom commands.
pub trait CommandBearer {
    /// The commands declared on this entity.
    fn commands(&self) -> &[CustomCommand];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whistle() -> CustomCommand {
        CustomCommand::new("whistle", "Whistle a tune.", |_, args| {
            Reaction::ok(format!("You whistle {}.", args.join(" ")))
        })
    }

    #[test]
    fn matches_whole_text_ignoring_case() {
        let command = whistle();
        assert!(command.matches("WHISTLE"));
        assert!(command.matches("  whistle "));
        assert!(!command.matches("whistle loudly"));
        assert!(!command.matches("whist"));
    }

    #[test]
    fn arguments_follow_the_command_text() {
        let command = whistle();
        assert_eq!(
            command.arguments("Whistle  a  jig"),
            Some(vec!["a".to_string(), "jig".to_string()])
        );
        assert_eq!(command.arguments("whistler"), None);
        assert_eq!(command.arguments("whistle"), None);
        assert_eq!(command.arguments("wh"), None);
    }

    #[test]
    fn clones_compare_equal() {
        let command = whistle();
        assert_eq!(command.clone(), command);
        assert_ne!(whistle(), command);
    }
}
