//! Outcomes of executing a command.

/// How a command's execution turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    /// The command did what the player asked.
    Ok,
    /// The command could not be carried out; world state is unchanged.
    Error,
    /// A state transition with nothing of note to tell the player.
    Internal,
    /// The command killed the player.
    Fatal,
}

/// The result of executing a command: a kind plus a message for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    /// Outcome kind.
    pub kind: ReactionKind,
    /// Text to show the player.
    pub message: String,
}

impl Reaction {
    /// Create a reaction of the given kind.
    pub fn new(kind: ReactionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A successful reaction.
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(ReactionKind::Ok, message)
    }

    /// A failed reaction.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ReactionKind::Error, message)
    }

    /// An internal state transition.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ReactionKind::Internal, message)
    }

    /// A fatal reaction.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(ReactionKind::Fatal, message)
    }

    /// Return `true` if this reaction reports a failure.
    pub fn is_error(&self) -> bool {
        self.kind == ReactionKind::Error
    }
}
