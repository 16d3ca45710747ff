//! Branching dialogue.
//!
//! A [`Conversation`] is an ordered list of [`Paragraph`]s with a play head
//! and a transcript. Paragraphs jump with [`Instruction`]s; any jump that
//! lands outside the list ends the conversation.

#[allow(clippy::module_inception)]
mod conversation;
mod paragraph;

pub use conversation::{Conversation, LogEntry, Participant, PlayHead, Step};
pub use paragraph::{Instruction, Paragraph, ParagraphAction, Response};
