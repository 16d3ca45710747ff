//! Keywords that work in every game.

use wf_core::CommandHelp;

use super::{Context, Interpreter};
use crate::command::{Command, GlobalCommand};

const KEYWORDS: &[(&str, GlobalCommand, &str)] = &[
    ("about", GlobalCommand::About, "Show information about the game."),
    ("exit", GlobalCommand::Exit, "Quit the game."),
    ("help", GlobalCommand::Help, "List every command."),
    ("map", GlobalCommand::Map, "Show a map of the region."),
    ("new", GlobalCommand::New, "Start a new game."),
];

/// Recognises `about`, `exit`, `help`, `map` and `new`, with no arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalInterpreter;

impl Interpreter for GlobalInterpreter {
    fn interpret(&self, input: &str, _context: &Context<'_>) -> Option<Command> {
        let input = input.trim();
        KEYWORDS
            .iter()
            .find(|(keyword, _, _)| keyword.eq_ignore_ascii_case(input))
            .map(|(_, command, _)| Command::Global(*command))
    }

    fn supported_commands(&self) -> Vec<CommandHelp> {
        KEYWORDS
            .iter()
            .map(|(keyword, _, description)| CommandHelp::new(*keyword, *description))
            .collect()
    }
}
