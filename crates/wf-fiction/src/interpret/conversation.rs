//! Input while a conversation is in progress.

use wf_core::CommandHelp;

use super::{Context, Interpreter};
use crate::command::{Command, ConversationCommand};

/// Recognises `end`, empty input and response numbers.
///
/// Declines everything when no conversation is in progress, and declines
/// numbers the current paragraph does not offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversationInterpreter;

impl Interpreter for ConversationInterpreter {
    fn interpret(&self, input: &str, context: &Context<'_>) -> Option<Command> {
        let conversation = context.conversation?;
        let responses = conversation
            .current_paragraph()
            .map_or(0, |p| p.responses.len());
        let input = input.trim();

        if input.eq_ignore_ascii_case("end") {
            return Some(Command::Conversation(ConversationCommand::End));
        }

        if input.is_empty() {
            return Some(Command::Conversation(ConversationCommand::Next));
        }

        let choice: usize = input.parse().ok()?;
        if (1..=responses).contains(&choice) {
            Some(Command::Conversation(ConversationCommand::Respond(choice - 1)))
        } else {
            None
        }
    }

    fn supported_commands(&self) -> Vec<CommandHelp> {
        vec![
            CommandHelp::new("<number>", "Choose a response."),
            CommandHelp::new("(enter)", "Continue the conversation."),
            CommandHelp::new("end", "End the conversation."),
        ]
    }

    fn contextual_commands(&self, context: &Context<'_>) -> Vec<CommandHelp> {
        let Some(paragraph) = context.conversation.and_then(|c| c.current_paragraph()) else {
            return Vec::new();
        };

        let mut commands: Vec<CommandHelp> = paragraph
            .responses
            .iter()
            .enumerate()
            .map(|(i, r)| CommandHelp::new((i + 1).to_string(), r.line.clone()))
            .collect();
        if commands.is_empty() {
            commands.push(CommandHelp::new("(enter)", "Continue."));
        }
        commands.push(CommandHelp::new("end", "End the conversation."));
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::fixtures;
    use wf_core::{Conversation, Paragraph, Response};

    fn with_responses() -> Conversation {
        let mut conversation = Conversation::new(vec![
            Paragraph::new("Well?")
                .with_response(Response::new("Yes."))
                .with_response(Response::new("No.")),
        ]);
        conversation.advance();
        conversation
    }

    #[test]
    fn inactive_without_conversation() {
        let world = fixtures::world();
        assert!(ConversationInterpreter
            .interpret("end", &Context::new(&world))
            .is_none());
    }

    #[test]
    fn empty_input_advances_without_responses() {
        let world = fixtures::world();
        let mut conversation = Conversation::new(vec![Paragraph::new("Test")]);
        conversation.advance();
        let context = Context::new(&world).with_conversation(&conversation);

        assert_eq!(
            ConversationInterpreter.interpret("  ", &context),
            Some(Command::Conversation(ConversationCommand::Next))
        );
    }

    #[test]
    fn empty_input_advances_even_with_responses() {
        let world = fixtures::world();
        let conversation = with_responses();
        let context = Context::new(&world).with_conversation(&conversation);

        assert_eq!(
            ConversationInterpreter.interpret("", &context),
            Some(Command::Conversation(ConversationCommand::Next))
        );
        assert_eq!(
            ConversationInterpreter.interpret("   ", &context),
            Some(Command::Conversation(ConversationCommand::Next))
        );
    }

    #[test]
    fn response_numbers_are_one_based_and_bounded() {
        let world = fixtures::world();
        let conversation = with_responses();
        let context = Context::new(&world).with_conversation(&conversation);

        assert_eq!(
            ConversationInterpreter.interpret("1", &context),
            Some(Command::Conversation(ConversationCommand::Respond(0)))
        );
        assert_eq!(
            ConversationInterpreter.interpret("2", &context),
            Some(Command::Conversation(ConversationCommand::Respond(1)))
        );
        for invalid in ["0", "3", "-1", "one"] {
            assert_eq!(ConversationInterpreter.interpret(invalid, &context), None);
        }
    }

    #[test]
    fn end_is_recognised() {
        let world = fixtures::world();
        let conversation = with_responses();
        let context = Context::new(&world).with_conversation(&conversation);

        assert_eq!(
            ConversationInterpreter.interpret("END", &context),
            Some(Command::Conversation(ConversationCommand::End))
        );
    }
}
