//! The narrow interfaces a host implements to show frames and collect input.
//!
//! The engine never performs I/O itself. It hands read-only views to a
//! [`FrameBuilder`], passes the result to a [`FramePresenter`], and asks a
//! [`LineReader`] or [`KeyWaiter`] when it needs the player.

use wf_core::{CommandHelp, Conversation, Identifier, Region, Room, ViewPoint, World};

use crate::config::GameInfo;

/// Everything needed to draw the player's surroundings.
#[derive(Debug)]
pub struct SceneView<'a> {
    /// The whole world, for rendering conditional descriptions.
    pub world: &'a World,
    /// The current region.
    pub region: &'a Region,
    /// The current room.
    pub room: &'a Room,
    /// The room's description, already rendered.
    pub description: String,
    /// The rooms around the current one.
    pub view_point: ViewPoint<'a>,
    /// Result of the last command.
    pub message: Option<&'a str>,
    /// Commands that make sense right now. Empty when the list is hidden.
    pub commands: Vec<CommandHelp>,
}

/// Everything needed to draw a conversation in progress.
#[derive(Debug)]
pub struct ConversationView<'a> {
    /// Who the player is talking to.
    pub character: &'a Identifier,
    /// The conversation, including its transcript.
    pub conversation: &'a Conversation,
    /// Result of the last command.
    pub message: Option<&'a str>,
    /// Commands that make sense right now. Empty when the list is hidden.
    pub commands: Vec<CommandHelp>,
}

/// Builds displayable frames from views.
pub trait FrameBuilder {
    /// The rendered frame.
    type Frame;

    /// The player's surroundings.
    fn build_scene(&self, view: &SceneView<'_>) -> Self::Frame;

    /// A conversation in progress.
    fn build_conversation(&self, view: &ConversationView<'_>) -> Self::Frame;

    /// The end of the game.
    fn build_end(&self, title: &str, description: &str) -> Self::Frame;

    /// Information about the game.
    fn build_about(&self, info: &GameInfo) -> Self::Frame;

    /// A list of commands.
    fn build_help(&self, commands: &[CommandHelp]) -> Self::Frame;

    /// A map of a region, with or without its key.
    fn build_map(&self, region: &Region, show_key: bool) -> Self::Frame;
}

/// Blocks until the player enters a line.
pub trait LineReader {
    /// The next line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String>;
}

/// Blocks until the player presses a key.
pub trait KeyWaiter {
    /// Wait for a key.
    fn wait_for_key(&mut self);
}

/// Shows frames to the player.
pub trait FramePresenter<F> {
    /// Show a frame.
    fn present(&mut self, frame: F);
}
