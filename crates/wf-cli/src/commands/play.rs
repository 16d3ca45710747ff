//! Play the built-in adventure on stdin and stdout.

use std::io;

use tracing::info;
use wf_fiction::GameConfig;

use crate::console::Console;
use crate::render::TextFrameBuilder;

/// Presentation options for a play session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Label put in front of error messages.
    pub error_prefix: String,
    /// Whether frames list the commands that make sense right now.
    pub show_commands: bool,
    /// Whether the map key is shown.
    pub show_key: bool,
}

/// Play until the game ends or input runs out.
pub fn run(options: PlayOptions) -> Result<(), String> {
    let config = GameConfig::new()
        .with_error_prefix(options.error_prefix)
        .with_command_list(options.show_commands)
        .with_key(options.show_key);
    let mut game = super::demo_game(config)?;
    info!(title = %game.config().info.name, "starting game");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    game.run(&TextFrameBuilder::new(), &mut console)
        .map_err(|e| e.to_string())
}
