pub mod about;
pub mod play;
pub mod verbs;

use wf_fiction::{Game, GameConfig};

use crate::demo;

/// Build the built-in adventure with the given config.
fn demo_game(config: GameConfig) -> Result<Game, String> {
    let world = demo::world().map_err(|e| format!("failed to build world: {e}"))?;
    let game = Game::new(world, config.with_info(demo::info()))
        .map_err(|e| e.to_string())?
        .with_completion_check(demo::beacon_lit);
    Ok(game)
}
