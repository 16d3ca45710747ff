//! The grammar for acting on the world.

use wf_core::{CommandHelp, Direction, Examinable, World};

use super::resolve::{not_found, resolve_item, resolve_target, strip_article};
use super::{Context, Interpreter, split_verb};
use crate::command::{Command, GameCommand, Target};

/// Verb synonyms.
const MOVE_VERBS: &[&str] = &["go", "move", "walk"];
const TAKE_VERBS: &[&str] = &["take", "get", "t"];
const DROP_VERBS: &[&str] = &["drop", "r"];
const TALK_VERBS: &[&str] = &["talk", "l"];
const EXAMINE_VERBS: &[&str] = &["examine", "x"];
const USE_VERBS: &[&str] = &["use"];

fn unactionable(reason: impl Into<String>) -> Option<Command> {
    Some(Command::Game(GameCommand::Unactionable(reason.into())))
}

fn game(command: GameCommand) -> Option<Command> {
    Some(Command::Game(command))
}

/// Recognises movement, take, drop, talk, examine and use.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameInterpreter;

impl Interpreter for GameInterpreter {
    fn interpret(&self, input: &str, context: &Context<'_>) -> Option<Command> {
        let (verb, noun) = split_verb(input);
        let world = context.world;

        if let Some(direction) = Direction::parse(&verb) {
            return if noun.is_empty() {
                game(GameCommand::Move(direction))
            } else {
                None
            };
        }

        let verb = verb.as_str();
        if MOVE_VERBS.contains(&verb) {
            return parse_move(noun);
        }
        if TAKE_VERBS.contains(&verb) {
            return parse_take(world, noun);
        }
        if DROP_VERBS.contains(&verb) {
            return parse_drop(world, noun);
        }
        if TALK_VERBS.contains(&verb) {
            return parse_talk(world, noun);
        }
        if EXAMINE_VERBS.contains(&verb) {
            return parse_examine(world, noun);
        }
        if USE_VERBS.contains(&verb) {
            return parse_use(world, noun);
        }
        None
    }

    fn supported_commands(&self) -> Vec<CommandHelp> {
        vec![
            CommandHelp::new("north, south, east, west, up, down", "Move (or n, s, e, w, u, d)."),
            CommandHelp::new("take <item>", "Pick up an item (or t, get)."),
            CommandHelp::new("take all", "Pick up everything you can."),
            CommandHelp::new("drop <item>", "Put down an item (or r)."),
            CommandHelp::new("talk to <character>", "Start a conversation (or l)."),
            CommandHelp::new("examine <target>", "Look at something (or x)."),
            CommandHelp::new("use <item> on <target>", "Use an item on something."),
        ]
    }

    fn contextual_commands(&self, context: &Context<'_>) -> Vec<CommandHelp> {
        let world = context.world;
        let Some(room) = world.current_room() else {
            return Vec::new();
        };

        let mut commands: Vec<CommandHelp> = room
            .exits()
            .iter()
            .filter(|e| e.is_player_visible && !e.is_locked())
            .map(|e| CommandHelp::new(e.direction.name(), format!("Go {}.", e.direction)))
            .collect();

        commands.extend(
            room.items()
                .iter()
                .filter(|i| i.is_player_visible && i.is_takeable)
                .map(|i| {
                    CommandHelp::new(format!("take {}", i.identifier), "Pick it up.")
                }),
        );
        commands.extend(
            room.characters()
                .iter()
                .filter(|c| c.is_player_visible && c.is_alive)
                .map(|c| {
                    CommandHelp::new(format!("talk to {}", c.identifier), "Start a conversation.")
                }),
        );
        commands.extend(
            world
                .player
                .items()
                .iter()
                .filter(|i| i.is_player_visible())
                .map(|i| CommandHelp::new(format!("drop {}", i.identifier), "Put it down.")),
        );
        commands.push(CommandHelp::new("examine", "Look around."));
        commands
    }
}

fn parse_move(noun: &str) -> Option<Command> {
    if noun.is_empty() {
        return unactionable("Go where?");
    }
    match Direction::parse(noun) {
        Some(direction) => game(GameCommand::Move(direction)),
        None => unactionable(format!("{noun} is not a direction.")),
    }
}

fn parse_take(world: &World, noun: &str) -> Option<Command> {
    let room = world.current_room()?;

    if noun.is_empty() {
        return match room
            .items()
            .iter()
            .find(|i| i.is_player_visible && i.is_takeable)
        {
            Some(item) => game(GameCommand::Take(item.identifier.clone())),
            None => unactionable(format!(
                "There are no takeable items in {}.",
                room.identifier
            )),
        };
    }

    if noun.eq_ignore_ascii_case("all") {
        return game(GameCommand::TakeAll);
    }

    // A carried item of the same name does not block taking this one.
    let name = strip_article(noun);
    let mut visible = room
        .items()
        .iter()
        .filter(|i| i.is_player_visible && i.identifier.matches(name));
    let first = visible.clone().next();
    if let Some(item) = visible.find(|i| i.is_takeable).or(first) {
        return game(GameCommand::Take(item.identifier.clone()));
    }

    match resolve_target(world, noun) {
        Some(Target::RoomItem(name)) => game(GameCommand::Take(name)),
        Some(Target::PlayerItem(name)) => unactionable(format!("You already have {name}.")),
        Some(other) => unactionable(format!("You cannot take {other}.")),
        None => unactionable(not_found(world, noun)),
    }
}

fn parse_drop(world: &World, noun: &str) -> Option<Command> {
    if noun.is_empty() {
        return unactionable("Drop what?");
    }
    match world
        .player
        .items()
        .iter()
        .find(|i| i.is_player_visible && i.identifier.matches(noun))
    {
        Some(item) => game(GameCommand::Drop(item.identifier.clone())),
        None => unactionable(format!("You do not have {noun}.")),
    }
}

fn parse_talk(world: &World, noun: &str) -> Option<Command> {
    let room = world.current_room()?;
    let name = match noun.split_once(char::is_whitespace) {
        Some((to, rest)) if to.eq_ignore_ascii_case("to") => rest.trim(),
        _ if noun.eq_ignore_ascii_case("to") => "",
        _ => noun,
    };

    if name.is_empty() {
        let mut present = room
            .characters()
            .iter()
            .filter(|c| c.is_player_visible && c.is_alive);
        return match (present.next(), present.next()) {
            (Some(only), None) => game(GameCommand::Talk(only.identifier.clone())),
            (None, _) => unactionable("There is no one here to talk to."),
            (Some(_), Some(_)) => unactionable("Talk to whom?"),
        };
    }

    match resolve_target(world, name) {
        Some(Target::Character(id)) => game(GameCommand::Talk(id)),
        Some(other) => unactionable(format!("You cannot talk to {other}.")),
        None => unactionable(not_found(world, name)),
    }
}

fn parse_examine(world: &World, noun: &str) -> Option<Command> {
    let target = match noun.split_once(char::is_whitespace) {
        Some((at, rest)) if at.eq_ignore_ascii_case("at") => rest.trim(),
        _ => noun,
    };
    if target.is_empty() {
        return game(GameCommand::Examine(Target::Room));
    }

    match resolve_target(world, target) {
        Some(target) => game(GameCommand::Examine(target)),
        None => unactionable(not_found(world, target)),
    }
}

/// Split `use X on Y`.
///
/// Only the whole word `on` separates item from target. Every occurrence is
/// tried from the left, and the first split where both sides resolve wins. If
/// none does, the first split is kept and its unresolved side reported.
fn parse_use(world: &World, noun: &str) -> Option<Command> {
    if noun.is_empty() {
        return unactionable("Use what?");
    }

    let words: Vec<&str> = noun.split_whitespace().collect();
    let splits: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, w)| w.eq_ignore_ascii_case("on"))
        .map(|(i, _)| i)
        .collect();

    if splits.is_empty() {
        return match resolve_item(world, noun) {
            Some(item) => game(GameCommand::UseOn {
                item,
                target: Target::Room,
            }),
            None => unactionable(format!("You do not have {noun}.")),
        };
    }

    for &at in &splits {
        let item = words[..at].join(" ");
        let target = words[at + 1..].join(" ");
        if let (Some(item), Some(target)) =
            (resolve_item(world, &item), resolve_target(world, &target))
        {
            return game(GameCommand::UseOn { item, target });
        }
    }

    let at = splits[0];
    let item = words[..at].join(" ");
    let target = words[at + 1..].join(" ");
    if item.is_empty() {
        unactionable("Use what?")
    } else if resolve_item(world, &item).is_none() {
        unactionable(format!("You do not have {item}."))
    } else if target.is_empty() {
        unactionable(format!("Use {item} on what?"))
    } else {
        unactionable(not_found(world, &target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ItemRef;
    use crate::interpret::fixtures;
    use wf_core::{Identifier, Item};

    fn id(name: &str) -> Identifier {
        Identifier::new(name)
    }

    fn interpret(world: &World, input: &str) -> Option<Command> {
        GameInterpreter.interpret(input, &Context::new(world))
    }

    fn reason(command: Option<Command>) -> String {
        match command {
            Some(Command::Game(GameCommand::Unactionable(reason))) => reason,
            other => panic!("expected unactionable, got {other:?}"),
        }
    }

    #[test]
    fn bare_and_verbed_directions() {
        let world = fixtures::world();
        for input in ["East", "e", "go east", "walk E", "move east"] {
            assert_eq!(
                interpret(&world, input),
                Some(Command::Game(GameCommand::Move(Direction::East))),
                "{input}"
            );
        }
        assert_eq!(interpret(&world, "east now"), None);
        assert!(reason(interpret(&world, "go home")).contains("not a direction"));
    }

    #[test]
    fn unknown_verbs_decline() {
        let world = fixtures::world();
        assert_eq!(interpret(&world, "UnknownVerb xyz"), None);
        assert_eq!(interpret(&world, ""), None);
    }

    #[test]
    fn bare_take_picks_first_takeable_item() {
        let world = fixtures::world();
        assert_eq!(
            interpret(&world, "take"),
            Some(Command::Game(GameCommand::Take(id("Lamp"))))
        );
        assert_eq!(
            interpret(&world, "t all"),
            Some(Command::Game(GameCommand::TakeAll))
        );
    }

    #[test]
    fn bare_take_without_takeable_items() {
        let mut world = fixtures::world();
        world.current_room_mut().unwrap().remove_item("lamp");

        let message = reason(interpret(&world, "Take"));
        assert_eq!(message, "There are no takeable items in Hall.");
    }

    #[test]
    fn take_named_item() {
        let world = fixtures::world();
        assert_eq!(
            interpret(&world, "get the lamp"),
            Some(Command::Game(GameCommand::Take(id("Lamp"))))
        );
        assert!(reason(interpret(&world, "take key")).contains("already have"));
        assert!(reason(interpret(&world, "take lammp")).contains("Did you mean Lamp?"));
    }

    #[test]
    fn take_prefers_room_item_over_carried_namesake() {
        let mut world = fixtures::world();
        world
            .current_room_mut()
            .unwrap()
            .add_item(Item::new("Key", "A spare.").with_takeable(true));

        assert_eq!(
            interpret(&world, "take the key"),
            Some(Command::Game(GameCommand::Take(id("Key"))))
        );
    }

    #[test]
    fn drop_requires_inventory() {
        let world = fixtures::world();
        assert_eq!(
            interpret(&world, "r key"),
            Some(Command::Game(GameCommand::Drop(id("Key"))))
        );
        assert!(reason(interpret(&world, "drop lamp")).contains("do not have"));
    }

    #[test]
    fn talk_infers_the_only_character() {
        let world = fixtures::world();
        for input in ["talk", "talk to", "talk to butler", "l Butler"] {
            assert_eq!(
                interpret(&world, input),
                Some(Command::Game(GameCommand::Talk(id("Butler")))),
                "{input}"
            );
        }
    }

    #[test]
    fn talk_with_several_characters_needs_a_name() {
        let mut world = fixtures::world();
        world
            .current_room_mut()
            .unwrap()
            .add_character(wf_core::NonPlayableCharacter::new("Maid", ""));

        assert_eq!(reason(interpret(&world, "talk")), "Talk to whom?");
        assert!(reason(interpret(&world, "talk to lamp")).contains("cannot talk"));
    }

    #[test]
    fn examine_defaults_to_room() {
        let world = fixtures::world();
        assert_eq!(
            interpret(&world, "x"),
            Some(Command::Game(GameCommand::Examine(Target::Room)))
        );
        assert_eq!(
            interpret(&world, "examine at north"),
            Some(Command::Game(GameCommand::Examine(Target::Exit(
                Direction::North
            ))))
        );
        assert!(reason(interpret(&world, "examine ghost")).starts_with("There is no ghost here."));
    }

    #[test]
    fn examine_prefers_player_items() {
        let mut world = fixtures::world();
        world.player.add_item(Item::new("Lamp", "Yours."));
        assert_eq!(
            interpret(&world, "examine lamp"),
            Some(Command::Game(GameCommand::Examine(Target::PlayerItem(id(
                "Lamp"
            )))))
        );
    }

    #[test]
    fn use_without_target_uses_on_room() {
        let world = fixtures::world();
        assert_eq!(
            interpret(&world, "use key"),
            Some(Command::Game(GameCommand::UseOn {
                item: ItemRef::Player(id("Key")),
                target: Target::Room,
            }))
        );
    }

    #[test]
    fn use_on_splits_on_whole_word() {
        let world = fixtures::world();
        assert_eq!(
            interpret(&world, "use key on north"),
            Some(Command::Game(GameCommand::UseOn {
                item: ItemRef::Player(id("Key")),
                target: Target::Exit(Direction::North),
            }))
        );
        assert_eq!(
            interpret(&world, "use lamp on me"),
            Some(Command::Game(GameCommand::UseOn {
                item: ItemRef::Room(id("Lamp")),
                target: Target::Player,
            }))
        );
    }

    #[test]
    fn use_on_tries_each_split() {
        let mut world = fixtures::world();
        world.player.add_item(Item::new("Hold on Tight", "A mysterious rope."));

        assert_eq!(
            interpret(&world, "use hold on tight on butler"),
            Some(Command::Game(GameCommand::UseOn {
                item: ItemRef::Player(id("Hold on Tight")),
                target: Target::Character(id("Butler")),
            }))
        );
    }

    #[test]
    fn use_on_reports_unresolved_side() {
        let world = fixtures::world();
        assert!(reason(interpret(&world, "use wand on butler")).contains("do not have wand"));
        assert!(reason(interpret(&world, "use key on ghost")).starts_with("There is no ghost"));
        assert_eq!(reason(interpret(&world, "use key on")), "Use key on what?");
        assert_eq!(reason(interpret(&world, "use")), "Use what?");
    }

    #[test]
    fn contextual_commands_follow_the_room() {
        let world = fixtures::world();
        let commands = GameInterpreter.contextual_commands(&Context::new(&world));
        let names: Vec<&str> = commands.iter().map(|c| c.command.as_str()).collect();

        assert!(names.contains(&"east"));
        assert!(!names.contains(&"north"));
        assert!(names.contains(&"take Lamp"));
        assert!(!names.contains(&"take Statue"));
        assert!(names.contains(&"talk to Butler"));
        assert!(names.contains(&"drop Key"));
    }
}
