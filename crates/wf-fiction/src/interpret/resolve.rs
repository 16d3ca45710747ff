//! Name resolution for examine and use targets, with fuzzy suggestions.

use strsim::jaro_winkler;
use wf_core::{Direction, Examinable, World};

use crate::command::{ItemRef, Target};

/// Minimum similarity score for a "did you mean" suggestion (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

pub(super) fn strip_article(input: &str) -> &str {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((article, rest)) if article.eq_ignore_ascii_case("the") => rest.trim(),
        _ => input,
    }
}

/// Resolve a name to a target.
///
/// Candidates are tried in priority order: the player's items, the room's
/// items, the room's characters, a direction naming one of the room's exits,
/// the keywords `me`, `room`, `region` and `overworld`, and finally the names
/// of the player, room, region and overworld. Hidden entities never match.
pub fn resolve_target(world: &World, input: &str) -> Option<Target> {
    let input = strip_article(input);
    if input.is_empty() {
        return None;
    }
    let room = world.current_room();

    if let Some(item) = world
        .player
        .items()
        .iter()
        .find(|i| i.is_player_visible && i.identifier.matches(input))
    {
        return Some(Target::PlayerItem(item.identifier.clone()));
    }

    if let Some(room) = room {
        if let Some(item) = room
            .items()
            .iter()
            .find(|i| i.is_player_visible && i.identifier.matches(input))
        {
            return Some(Target::RoomItem(item.identifier.clone()));
        }

        if let Some(character) = room
            .characters()
            .iter()
            .find(|c| c.is_player_visible && c.identifier.matches(input))
        {
            return Some(Target::Character(character.identifier.clone()));
        }

        if let Some(exit) = Direction::parse(input)
            .and_then(|d| room.find_exit(d))
            .filter(|e| e.is_player_visible)
        {
            return Some(Target::Exit(exit.direction));
        }
    }

    match input.to_lowercase().as_str() {
        "me" => return Some(Target::Player),
        "room" => return Some(Target::Room),
        "region" => return Some(Target::Region),
        "overworld" => return Some(Target::Overworld),
        _ => {}
    }

    if world.player.identifier.matches(input) {
        Some(Target::Player)
    } else if room.is_some_and(|r| r.identifier.matches(input)) {
        Some(Target::Room)
    } else if world
        .current_region()
        .is_some_and(|r| r.identifier.matches(input))
    {
        Some(Target::Region)
    } else if world.overworld.identifier.matches(input) {
        Some(Target::Overworld)
    } else {
        None
    }
}

/// Resolve the name of an item to use: the player's items first, then the
/// room's.
pub fn resolve_item(world: &World, input: &str) -> Option<ItemRef> {
    let input = strip_article(input);
    if input.is_empty() {
        return None;
    }

    if let Some(item) = world
        .player
        .items()
        .iter()
        .find(|i| i.is_player_visible && i.identifier.matches(input))
    {
        return Some(ItemRef::Player(item.identifier.clone()));
    }

    world
        .current_room()?
        .items()
        .iter()
        .find(|i| i.is_player_visible && i.identifier.matches(input))
        .map(|i| ItemRef::Room(i.identifier.clone()))
}

/// Names the player can currently see.
fn visible_names(world: &World) -> Vec<&str> {
    let mut names: Vec<&str> = world
        .player
        .items()
        .iter()
        .filter(|i| i.is_player_visible())
        .map(|i| i.identifier.name())
        .collect();

    if let Some(room) = world.current_room() {
        names.push(room.identifier.name());
        names.extend(
            room.items()
                .iter()
                .filter(|i| i.is_player_visible())
                .map(|i| i.identifier.name()),
        );
        names.extend(
            room.characters()
                .iter()
                .filter(|c| c.is_player_visible())
                .map(|c| c.identifier.name()),
        );
    }
    names.push(world.player.identifier.name());
    names
}

/// The visible name most similar to the input, if any is similar enough.
pub fn suggest(world: &World, input: &str) -> Option<String> {
    let input_lower = strip_article(input).to_lowercase();
    visible_names(world)
        .into_iter()
        .map(|name| (name, jaro_winkler(&input_lower, &name.to_lowercase())))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name.to_string())
}

/// "There is no X here." plus a suggestion when one is close.
pub(crate) fn not_found(world: &World, input: &str) -> String {
    match suggest(world, input) {
        Some(name) => format!("There is no {input} here. Did you mean {name}?"),
        None => format!("There is no {input} here."),
    }
}
