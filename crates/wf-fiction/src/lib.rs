//! Interactive fiction engine for Wayfarer.
//!
//! Turns lines of player input into typed commands, executes them against a
//! [`wf_core::World`], and tracks the game's lifecycle and conversations.
//! Rendering and I/O are left to the host through the traits in [`frame`].

/// The command type and its execution.
pub mod command;
/// Game configuration.
pub mod config;
/// End-of-game checks.
pub mod end;
/// Error types for the fiction engine.
pub mod error;
/// Interfaces implemented by hosts.
pub mod frame;
/// The game state machine.
pub mod game;
/// Interpreters and the interpreter chain.
pub mod interpret;

pub use command::{
    Command, ConversationCommand, FrameCommand, GameCommand, GlobalCommand, ItemRef, Target,
};
pub use config::{GameConfig, GameInfo};
pub use end::{EndCheck, EndCheckResult};
pub use error::{FictionError, FictionResult};
pub use frame::{
    ConversationView, FrameBuilder, FramePresenter, KeyWaiter, LineReader, SceneView,
};
pub use game::{DisplayMode, Game, GameState};
pub use interpret::{Context, Interpreter, InterpreterChain};
