//! Error types for the fiction engine.

use thiserror::Error;
use wf_core::CoreError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while running a game.
///
/// Ordinary game-play failures are not errors; they come back as
/// [`wf_core::Reaction`]s of kind `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FictionError {
    /// No interpreter recognised the input.
    #[error("could not interpret \"{0}\"")]
    UnknownCommand(String),

    /// A response index that the current paragraph does not offer.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// A conversation command arrived with no conversation in progress.
    #[error("no conversation is in progress")]
    NoActiveConversation,

    /// Input was given before the game started or after it finished.
    #[error("the game is not running")]
    GameNotActive,

    /// The world is inconsistent.
    #[error(transparent)]
    Core(#[from] CoreError),
}
