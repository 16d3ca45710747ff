//! Display toggles.

use wf_core::CommandHelp;

use super::{Context, Interpreter};
use crate::command::{Command, FrameCommand};

/// Keyword, its two-word spelling, command, description.
const KEYWORDS: &[(&str, &str, FrameCommand, &str)] = &[
    ("commandson", "commands on", FrameCommand::CommandsOn, "Show the command list."),
    ("commandsoff", "commands off", FrameCommand::CommandsOff, "Hide the command list."),
    ("keyon", "key on", FrameCommand::KeyOn, "Show the map key."),
    ("keyoff", "key off", FrameCommand::KeyOff, "Hide the map key."),
];

/// Recognises `commandson`, `commandsoff`, `keyon` and `keyoff`, in any case.
///
/// The two-word spellings with a single space, such as `commands off`, also
/// match. Nothing else does.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInterpreter;

impl Interpreter for FrameInterpreter {
    fn interpret(&self, input: &str, _context: &Context<'_>) -> Option<Command> {
        let input = input.trim().to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, spaced, _, _)| *keyword == input || *spaced == input)
            .map(|(_, _, command, _)| Command::Frame(*command))
    }

    fn supported_commands(&self) -> Vec<CommandHelp> {
        KEYWORDS
            .iter()
            .map(|(keyword, _, _, description)| CommandHelp::new(*keyword, *description))
            .collect()
    }
}
