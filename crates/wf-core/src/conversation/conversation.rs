use std::rc::Rc;

use tracing::debug;

use crate::conversation::{Instruction, Paragraph, ParagraphAction};

/// Where a conversation's play head is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayHead {
    /// Nothing has been said yet.
    #[default]
    NotStarted,
    /// At a paragraph.
    At(usize),
    /// The conversation is over.
    Ended,
}

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    /// The player.
    Player,
    /// The character the player is talking to.
    Other,
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Who spoke.
    pub participant: Participant,
    /// What they said.
    pub line: String,
}

/// The outcome of moving the play head.
#[derive(Clone)]
pub enum Step {
    /// The play head landed on a paragraph.
    Arrived {
        /// The paragraph's line.
        line: String,
        /// The paragraph's action, for the caller to run once.
        action: Option<Rc<ParagraphAction>>,
    },
    /// The conversation ended.
    Ended,
}

impl Step {
    /// Return `true` if this step ended the conversation.
    pub fn is_ended(&self) -> bool {
        matches!(self, Step::Ended)
    }
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Arrived { line, action } => f
                .debug_struct("Arrived")
                .field("line", line)
                .field("has_action", &action.is_some())
                .finish(),
            Step::Ended => f.write_str("Ended"),
        }
    }
}

/// A branching dialogue with a play head and transcript.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    paragraphs: Vec<Paragraph>,
    head: PlayHead,
    log: Vec<LogEntry>,
}

impl Conversation {
    /// Create a conversation that has not started.
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            head: PlayHead::NotStarted,
            log: Vec::new(),
        }
    }

    /// Append a paragraph.
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// All paragraphs.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// The play head.
    pub fn head(&self) -> PlayHead {
        self.head
    }

    /// The transcript so far.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// The paragraph under the play head.
    pub fn current_paragraph(&self) -> Option<&Paragraph> {
        match self.head {
            PlayHead::At(index) => self.paragraphs.get(index),
            PlayHead::NotStarted | PlayHead::Ended => None,
        }
    }

    /// Return `true` once the conversation has ended.
    pub fn has_ended(&self) -> bool {
        self.head == PlayHead::Ended
    }

    /// Move the play head without a player response.
    ///
    /// Starts at the first paragraph, then follows the current paragraph's
    /// instruction. An ended conversation stays ended.
    pub fn advance(&mut self) -> Step {
        let target = match self.head {
            PlayHead::NotStarted => 0,
            PlayHead::At(index) => {
                let instruction = self
                    .paragraphs
                    .get(index)
                    .and_then(|p| p.instruction.clone())
                    .unwrap_or_default();
                instruction.target(index, &self.paragraphs)
            }
            PlayHead::Ended => return Step::Ended,
        };
        self.land(target)
    }

    /// Answer the current paragraph with a response, by index.
    ///
    /// Returns `None` and changes nothing if there is no current paragraph or
    /// the index is out of range.
    pub fn respond(&mut self, index: usize) -> Option<Step> {
        let PlayHead::At(current) = self.head else {
            return None;
        };
        let response = self.paragraphs.get(current)?.responses.get(index)?.clone();

        self.log.push(LogEntry {
            participant: Participant::Player,
            line: response.line,
        });
        let instruction = response.instruction.unwrap_or(Instruction::Next);
        let target = instruction.target(current, &self.paragraphs);
        Some(self.land(target))
    }

    /// Rewind to the beginning and clear the transcript.
    pub fn restart(&mut self) {
        self.head = PlayHead::NotStarted;
        self.log.clear();
    }

    fn land(&mut self, target: isize) -> Step {
        let paragraph = usize::try_from(target)
            .ok()
            .and_then(|i| self.paragraphs.get(i).map(|p| (i, p)));

        let Some((index, paragraph)) = paragraph else {
            debug!(target, "conversation ended");
            self.head = PlayHead::Ended;
            return Step::Ended;
        };

        let line = paragraph.line.clone();
        let action = paragraph.action();
        debug!(index, "conversation advanced");
        self.head = PlayHead::At(index);
        self.log.push(LogEntry {
            participant: Participant::Other,
            line: line.clone(),
        });
        Step::Arrived { line, action }
    }
}
