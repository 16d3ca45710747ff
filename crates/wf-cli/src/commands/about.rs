use wf_fiction::{FrameBuilder, GameConfig};

use crate::render::TextFrameBuilder;

/// Print the built-in adventure's title and blurb.
pub fn run() -> Result<(), String> {
    let game = super::demo_game(GameConfig::new())?;
    print!("{}", TextFrameBuilder::new().build_about(&game.config().info));
    Ok(())
}
