//! Checks that decide when a game is over.

use wf_core::World;

/// Signature of an end check.
pub type EndCheck = dyn Fn(&World) -> EndCheckResult;

/// Whether the game has ended, and how to announce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndCheckResult {
    /// Whether the game is over.
    pub has_ended: bool,
    /// Title of the end frame.
    pub title: String,
    /// Body of the end frame.
    pub description: String,
}

impl EndCheckResult {
    /// The game goes on.
    pub fn not_ended() -> Self {
        Self {
            has_ended: false,
            title: String::new(),
            description: String::new(),
        }
    }

    /// The game is over.
    pub fn ended(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            has_ended: true,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Completion check used when none is given: the game never completes.
pub fn never_completes(_: &World) -> EndCheckResult {
    EndCheckResult::not_ended()
}

/// Game-over check used when none is given: the game is lost when the player dies.
pub fn player_dead(world: &World) -> EndCheckResult {
    if world.player.is_alive {
        EndCheckResult::not_ended()
    } else {
        EndCheckResult::ended("Game Over", "You have died.")
    }
}
