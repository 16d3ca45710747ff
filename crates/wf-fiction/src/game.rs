//! The game state machine.
//!
//! A [`Game`] owns the world and drives one turn per input line: choose an
//! interpreter chain, interpret, invoke, then run the end checks.

use std::fmt;

use tracing::{debug, info, warn};
use wf_core::{
    CommandHelp, Conversation, CoreError, Examinable, Identifier, ParagraphAction, Reaction,
    ReactionKind, Step, ViewPoint, World,
};

use crate::config::GameConfig;
use crate::end::{EndCheck, EndCheckResult, never_completes, player_dead};
use crate::error::{FictionError, FictionResult};
use crate::frame::{
    ConversationView, FrameBuilder, FramePresenter, KeyWaiter, LineReader, SceneView,
};
use crate::interpret::{Context, InterpreterChain};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Created but not entered.
    NotStarted,
    /// Accepting input.
    Active,
    /// Over; no more input is accepted.
    Finished,
}

/// What the next frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// The scene, or the conversation when one is in progress.
    #[default]
    Scene,
    /// The about overlay.
    About,
    /// The help overlay.
    Help,
    /// The map overlay.
    Map,
}

impl DisplayMode {
    /// Return `true` for modes shown once and then dismissed.
    pub fn is_overlay(self) -> bool {
        self != DisplayMode::Scene
    }
}

/// A conversation taken from its character while it is being played.
#[derive(Debug)]
struct ActiveConversation {
    character: Identifier,
    conversation: Conversation,
}

/// An interactive fiction game.
pub struct Game {
    world: World,
    snapshot: World,
    config: GameConfig,
    state: GameState,
    mode: DisplayMode,
    conversation: Option<ActiveConversation>,
    ending: Option<EndCheckResult>,
    completion: Box<EndCheck>,
    game_over: Box<EndCheck>,
    scene_chain: InterpreterChain,
    conversation_chain: InterpreterChain,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("conversation", &self.conversation)
            .field("ending", &self.ending)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Create a game. The world must have a current room.
    pub fn new(world: World, config: GameConfig) -> FictionResult<Self> {
        if world.current_room().is_none() {
            return Err(CoreError::NoCurrentRoom.into());
        }

        Ok(Self {
            snapshot: world.clone(),
            world,
            config,
            state: GameState::NotStarted,
            mode: DisplayMode::Scene,
            conversation: None,
            ending: None,
            completion: Box::new(never_completes),
            game_over: Box::new(player_dead),
            scene_chain: InterpreterChain::scene(),
            conversation_chain: InterpreterChain::conversation(),
        })
    }

    /// Set the check that decides when the player has won.
    pub fn with_completion_check(
        mut self,
        check: impl Fn(&World) -> EndCheckResult + 'static,
    ) -> Self {
        self.completion = Box::new(check);
        self
    }

    /// Set the check that decides when the player has lost.
    pub fn with_game_over_check(
        mut self,
        check: impl Fn(&World) -> EndCheckResult + 'static,
    ) -> Self {
        self.game_over = Box::new(check);
        self
    }

    /// Replace the interpreter chain used while exploring.
    pub fn with_scene_chain(mut self, chain: InterpreterChain) -> Self {
        self.scene_chain = chain;
        self
    }

    /// Replace the interpreter chain used mid-conversation.
    pub fn with_conversation_chain(mut self, chain: InterpreterChain) -> Self {
        self.conversation_chain = chain;
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut GameConfig {
        &mut self.config
    }

    /// The lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// What the next frame shows.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// How the game ended, once a check has ended it.
    pub fn ending(&self) -> Option<&EndCheckResult> {
        self.ending.as_ref()
    }

    /// The conversation in progress.
    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.conversation.as_ref().map(|a| &a.conversation)
    }

    /// Who the player is talking to.
    pub fn conversation_partner(&self) -> Option<&Identifier> {
        self.conversation.as_ref().map(|a| &a.character)
    }

    /// The interpreter chain for the current state.
    pub fn current_chain(&self) -> &InterpreterChain {
        if self.conversation.is_some() {
            &self.conversation_chain
        } else {
            &self.scene_chain
        }
    }

    fn context(&self) -> Context<'_> {
        let context = Context::new(&self.world);
        match self.active_conversation() {
            Some(conversation) => context.with_conversation(conversation),
            None => context,
        }
    }

    /// The commands that make sense right now.
    pub fn contextual_commands(&self) -> Vec<CommandHelp> {
        self.current_chain().contextual_commands(&self.context())
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Start the game. Does nothing unless the game has not started.
    pub fn enter(&mut self) -> FictionResult<()> {
        if self.state != GameState::NotStarted {
            return Ok(());
        }

        let room = self.world.current_room_mut().ok_or(CoreError::NoCurrentRoom)?;
        room.has_been_visited = true;
        info!(room = %room.identifier, "game started");

        self.state = GameState::Active;
        self.mode = DisplayMode::Scene;
        self.check_end();
        Ok(())
    }

    /// Run one turn.
    ///
    /// Input no interpreter recognises is an
    /// [`FictionError::UnknownCommand`]; everything else comes back as a
    /// [`Reaction`], including commands that could not be carried out.
    pub fn update(&mut self, input: &str) -> FictionResult<Reaction> {
        if self.state != GameState::Active {
            return Err(FictionError::GameNotActive);
        }
        self.mode = DisplayMode::Scene;

        let command = self.current_chain().interpret(input, &self.context())?;
        let reaction = command.invoke(self);
        debug!(kind = ?reaction.kind, message = %reaction.message, "reaction");

        self.check_end();
        Ok(reaction)
    }

    fn check_end(&mut self) {
        if self.state != GameState::Active {
            return;
        }

        for check in [&self.game_over, &self.completion] {
            let result = check(&self.world);
            if result.has_ended {
                info!(title = %result.title, "game finished");
                self.state = GameState::Finished;
                self.ending = Some(result);
                return;
            }
        }
    }

    /// Quit without an end frame.
    pub fn exit(&mut self) {
        info!("game exited");
        self.state = GameState::Finished;
        self.ending = None;
    }

    /// Throw away all progress and start again from the authored world.
    pub fn restart(&mut self) -> FictionResult<()> {
        info!("game restarted");
        self.world = self.snapshot.clone();
        self.conversation = None;
        self.ending = None;
        self.state = GameState::NotStarted;
        self.enter()
    }

    /// Show an overlay instead of the scene until the next input.
    pub fn show_overlay(&mut self, mode: DisplayMode) -> Reaction {
        self.mode = mode;
        Reaction::internal("")
    }

    /// Label error reactions with the configured prefix.
    pub fn display_message(&self, reaction: &Reaction) -> String {
        match reaction.kind {
            ReactionKind::Error => format!("{}: {}", self.config.error_prefix, reaction.message),
            ReactionKind::Ok | ReactionKind::Internal | ReactionKind::Fatal => {
                reaction.message.clone()
            }
        }
    }

    // -----------------------------------------------------------------------
    // Conversations
    // -----------------------------------------------------------------------

    /// Start talking to a character in the current room.
    ///
    /// The character's conversation is held by the game until it ends. The
    /// first paragraph is shown straight away.
    pub fn start_conversation(&mut self, name: &Identifier) -> Reaction {
        if self.conversation.is_some() {
            return Reaction::error("You are already in a conversation.");
        }

        let Some(character) = self
            .world
            .current_room_mut()
            .and_then(|r| r.find_character_mut(name.name()))
            .filter(|c| c.is_player_visible)
        else {
            return Reaction::error(format!("There is no {name} here."));
        };

        if !character.is_alive {
            return Reaction::error(format!("{} cannot talk any more.", character.identifier));
        }
        let identifier = character.identifier.clone();
        let Some(mut conversation) = character.conversation.take() else {
            return Reaction::error(format!("{identifier} has nothing to say."));
        };

        debug!(character = %identifier, "conversation started");
        match conversation.advance() {
            Step::Arrived { line, action } => {
                self.conversation = Some(ActiveConversation {
                    character: identifier.clone(),
                    conversation,
                });
                self.run_action(action);
                Reaction::internal(format!("{identifier}: {line}"))
            }
            Step::Ended => {
                self.return_conversation(&identifier, conversation);
                Reaction::ok(format!("{identifier} has nothing more to say."))
            }
        }
    }

    /// Advance the conversation in progress without responding.
    pub fn advance_conversation(&mut self) -> FictionResult<Reaction> {
        let active = self
            .conversation
            .as_mut()
            .ok_or(FictionError::NoActiveConversation)?;
        let step = active.conversation.advance();
        Ok(self.follow(step))
    }

    /// Pick a response, by zero-based index, in the conversation in progress.
    pub fn respond(&mut self, index: usize) -> FictionResult<Reaction> {
        let active = self
            .conversation
            .as_mut()
            .ok_or(FictionError::NoActiveConversation)?;
        let step = active
            .conversation
            .respond(index)
            .ok_or(FictionError::InvalidChoice(index))?;
        Ok(self.follow(step))
    }

    /// Stop the conversation in progress and give it back to its character.
    /// Returns the character's name.
    pub fn end_conversation(&mut self) -> FictionResult<Identifier> {
        let active = self
            .conversation
            .take()
            .ok_or(FictionError::NoActiveConversation)?;
        debug!(character = %active.character, "conversation ended");
        self.return_conversation(&active.character, active.conversation);
        Ok(active.character)
    }

    fn follow(&mut self, step: Step) -> Reaction {
        match step {
            Step::Arrived { line, action } => {
                self.run_action(action);
                Reaction::internal(line)
            }
            Step::Ended => match self.end_conversation() {
                Ok(name) => Reaction::internal(format!("{name} has finished talking.")),
                Err(e) => Reaction::error(e.to_string()),
            },
        }
    }

    fn run_action(&mut self, action: Option<std::rc::Rc<ParagraphAction>>) {
        if let Some(action) = action {
            action(&mut self.world);
        }
    }

    fn return_conversation(&mut self, name: &Identifier, conversation: Conversation) {
        match self.world.find_character_anywhere_mut(name.name()) {
            Some(character) => character.conversation = Some(conversation),
            None => warn!(character = %name, "conversation owner disappeared"),
        }
    }

    // -----------------------------------------------------------------------
    // Frames and the main loop
    // -----------------------------------------------------------------------

    /// Build the frame for the current state.
    pub fn frame<B: FrameBuilder>(
        &self,
        builder: &B,
        message: Option<&str>,
    ) -> FictionResult<B::Frame> {
        if self.state == GameState::Finished {
            return Ok(match &self.ending {
                Some(ending) => builder.build_end(&ending.title, &ending.description),
                None => builder.build_end(&self.config.info.name, "Goodbye."),
            });
        }

        let region = self.world.current_region().ok_or(CoreError::NoCurrentRoom)?;
        match self.mode {
            DisplayMode::About => return Ok(builder.build_about(&self.config.info)),
            DisplayMode::Help => {
                return Ok(builder.build_help(&self.current_chain().supported_commands()));
            }
            DisplayMode::Map => return Ok(builder.build_map(region, self.config.show_key)),
            DisplayMode::Scene => {}
        }

        let commands = if self.config.show_command_list {
            self.contextual_commands()
        } else {
            Vec::new()
        };

        if let Some(active) = &self.conversation {
            return Ok(builder.build_conversation(&ConversationView {
                character: &active.character,
                conversation: &active.conversation,
                message,
                commands,
            }));
        }

        let room = region.current_room().ok_or(CoreError::NoCurrentRoom)?;
        Ok(builder.build_scene(&SceneView {
            world: &self.world,
            region,
            room,
            description: room.examine(&self.world),
            view_point: ViewPoint::of(region),
            message,
            commands,
        }))
    }

    /// Play until the game finishes or input runs out.
    pub fn run<B, H>(&mut self, builder: &B, host: &mut H) -> FictionResult<()>
    where
        B: FrameBuilder,
        H: LineReader + KeyWaiter + FramePresenter<B::Frame>,
    {
        self.enter()?;
        let mut message: Option<String> = None;

        loop {
            if self.state == GameState::Finished {
                if self.ending.is_some() {
                    host.present(self.frame(builder, None)?);
                    host.wait_for_key();
                }
                return Ok(());
            }

            host.present(self.frame(builder, message.as_deref())?);
            if self.mode.is_overlay() {
                host.wait_for_key();
                self.mode = DisplayMode::Scene;
                message = None;
                continue;
            }

            let Some(line) = host.read_line() else {
                info!("input closed");
                self.exit();
                return Ok(());
            };

            let reaction = self
                .update(&line)
                .unwrap_or_else(|e| Reaction::error(e.to_string()));
            message = Some(self.display_message(&reaction)).filter(|m| !m.is_empty());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::config::GameInfo;
    use crate::interpret::fixtures;
    use wf_core::{
        Direction, Exit, Interaction, InteractionEffect, InteractionResult, Item,
        NonPlayableCharacter, Paragraph, Region, Response,
    };

    fn game() -> Game {
        let mut game = Game::new(fixtures::world(), GameConfig::default()).unwrap();
        game.enter().unwrap();
        game
    }

    fn room_name(game: &Game) -> String {
        game.world().current_room().unwrap().identifier.name().to_string()
    }

    fn give_butler(game: &mut Game, conversation: Conversation) {
        game.world_mut()
            .find_character_anywhere_mut("Butler")
            .unwrap()
            .conversation = Some(conversation);
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    #[test]
    fn new_requires_a_current_room() {
        let world = World::new(
            wf_core::Overworld::new("Empty", ""),
            wf_core::PlayableCharacter::new("Ada", ""),
        );
        let err = Game::new(world, GameConfig::default()).unwrap_err();
        assert_eq!(err, FictionError::Core(CoreError::NoCurrentRoom));
    }

    #[test]
    fn input_before_enter_is_rejected() {
        let mut game = Game::new(fixtures::world(), GameConfig::default()).unwrap();
        assert_eq!(game.state(), GameState::NotStarted);
        assert_eq!(game.update("east"), Err(FictionError::GameNotActive));

        game.enter().unwrap();
        assert_eq!(game.state(), GameState::Active);
        assert!(game.world().current_room().unwrap().has_been_visited);
    }

    #[test]
    fn unknown_input_is_an_interpretation_failure() {
        let mut game = game();
        assert_eq!(
            game.update("UnknownVerb xyz"),
            Err(FictionError::UnknownCommand("UnknownVerb xyz".to_string()))
        );
        assert_eq!(game.state(), GameState::Active);
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    #[test]
    fn east_moves_to_neighbour() {
        let mut game = game();

        let reaction = game.update("East").unwrap();
        assert_eq!(reaction.kind, ReactionKind::Ok);

        let room = game.world().current_room().unwrap();
        assert_eq!(room.identifier.name(), "Kitchen");
        assert_eq!(room.entered_from, Some(Direction::West));
    }

    #[test]
    fn blocked_moves_report_why() {
        let mut game = game();
        game.world_mut()
            .current_room_mut()
            .unwrap()
            .add_exit(Exit::new(Direction::Up));

        let locked = game.update("north").unwrap();
        assert_eq!(locked.message, "The north exit is locked.");
        assert_eq!(game.display_message(&locked), "Oops: The north exit is locked.");

        let missing = game.update("s").unwrap();
        assert_eq!(missing.message, "There is no exit to the south.");

        let nowhere = game.update("up").unwrap();
        assert_eq!(nowhere.message, "You cannot move up.");
        assert!(nowhere.is_error());
        assert_eq!(room_name(&game), "Hall");
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    #[test]
    fn take_and_drop() {
        let mut game = game();

        assert_eq!(game.update("take lamp").unwrap().message, "Took Lamp.");
        assert!(game.world().player.has_item("lamp"));
        assert!(!game.world().current_room().unwrap().contains_item("lamp"));

        assert_eq!(game.update("drop lamp").unwrap().message, "Dropped Lamp.");
        assert!(game.world().current_room().unwrap().contains_item("lamp"));
    }

    #[test]
    fn bare_take_with_nothing_takeable_changes_nothing() {
        let mut game = game();
        game.world_mut().current_room_mut().unwrap().remove_item("lamp");
        let before = game.world().current_room().unwrap().items().len();

        let reaction = game.update("Take").unwrap();
        assert!(reaction.is_error());
        assert!(!reaction.message.is_empty());
        assert_eq!(game.world().current_room().unwrap().items().len(), before);
        assert_eq!(game.world().player.items().len(), 1);
    }

    #[test]
    fn untakeable_items_stay_put() {
        let mut game = game();
        let reaction = game.update("take statue").unwrap();
        assert_eq!(reaction.message, "You cannot take Statue.");
        assert!(game.world().current_room().unwrap().contains_item("statue"));
    }

    #[test]
    fn take_all_takes_visible_takeables() {
        let mut game = game();
        game.world_mut()
            .current_room_mut()
            .unwrap()
            .add_item(Item::new("Rope", "").with_takeable(true));

        assert_eq!(game.update("take all").unwrap().message, "Took Lamp, Rope.");
        assert!(game.world().current_room().unwrap().contains_item("coin"));
        assert!(game.world().current_room().unwrap().contains_item("statue"));
    }

    #[test]
    fn take_item_already_carried_under_same_name() {
        let mut game = game();
        game.world_mut()
            .current_room_mut()
            .unwrap()
            .add_item(Item::new("Key", "A spare.").with_takeable(true));

        let reaction = game.update("take key").unwrap();
        assert!(!reaction.is_error());
        assert!(!game.world().current_room().unwrap().contains_item("key"));
        let keys = game
            .world()
            .player
            .items()
            .iter()
            .filter(|i| i.identifier.matches("key"))
            .count();
        assert_eq!(keys, 2);
    }

    #[test]
    fn take_skips_hidden_namesake() {
        let mut game = game();
        // The fixture's hidden Coin comes first in the room.
        game.world_mut()
            .current_room_mut()
            .unwrap()
            .add_item(Item::new("Coin", "A shiny coin.").with_takeable(true));

        assert_eq!(game.update("take coin").unwrap().message, "Took Coin.");
        let taken = game.world().player.find_item("coin").unwrap();
        assert!(taken.is_player_visible);
        let left = game.world().current_room().unwrap().find_item("coin").unwrap();
        assert!(!left.is_player_visible);

        assert!(game.update("take coin").unwrap().is_error());
        assert!(game.world().current_room().unwrap().contains_item("coin"));
    }

    #[test]
    fn take_all_leaves_hidden_namesakes() {
        let mut game = game();
        game.world_mut()
            .current_room_mut()
            .unwrap()
            .add_item(Item::new("Coin", "A shiny coin.").with_takeable(true));

        assert_eq!(game.update("take all").unwrap().message, "Took Lamp, Coin.");
        let left = game.world().current_room().unwrap().find_item("coin").unwrap();
        assert!(!left.is_player_visible);
        assert!(game.world().player.find_item("coin").unwrap().is_player_visible);
    }

    #[test]
    fn examine_player_item_over_room_item() {
        let mut game = game();
        game.world_mut()
            .player
            .add_item(Item::new("Lamp", "Your trusty lamp."));

        assert_eq!(game.update("examine lamp").unwrap().message, "Your trusty lamp.");
    }

    #[test]
    fn key_unlocks_door_pair() {
        let mut game = game();
        game.world_mut()
            .current_room_mut()
            .unwrap()
            .find_exit_mut(Direction::North)
            .unwrap()
            .interaction = Some(Interaction::new(|item, world| {
            if !item.identifier.matches("key") {
                return InteractionResult::no_effect();
            }
            if let Some(region) = world.current_region_mut() {
                region.unlock_door_pair(Direction::North);
            }
            InteractionResult::new(InteractionEffect::SelfContained, "The door swings open.")
        }));

        assert_eq!(
            game.update("use key on north").unwrap().message,
            "The door swings open."
        );
        game.update("north").unwrap();
        assert_eq!(room_name(&game), "Vault");
    }

    #[test]
    fn using_on_something_inert_fails() {
        let mut game = game();
        let reaction = game.update("use key on statue").unwrap();
        assert!(reaction.is_error());
        assert_eq!(reaction.message, "There was no effect.");
        assert!(game.world().player.has_item("key"));
    }

    #[test]
    fn used_up_items_disappear() {
        let mut game = game();
        game.world_mut().current_room_mut().unwrap().add_item(
            Item::new("Lock", "A padlock.").with_interaction(|_, _| {
                InteractionResult::new(InteractionEffect::ItemUsedUp, "The key snaps.")
            }),
        );

        game.update("use key on lock").unwrap();
        assert!(!game.world().player.has_item("key"));
    }

    #[test]
    fn used_up_targets_disappear() {
        let mut game = game();
        game.world_mut().current_room_mut().unwrap().add_character(
            NonPlayableCharacter::new("Ghost", "").with_interaction(|_, _| {
                InteractionResult::new(InteractionEffect::TargetUsedUp, "The ghost fades.")
            }),
        );

        game.update("use key on ghost").unwrap();
        assert!(game.world().current_room().unwrap().find_character("ghost").is_none());
    }

    #[test]
    fn fatal_interaction_ends_the_game() {
        let mut game = game();
        game.world_mut().player.add_item(
            Item::new("Potion", "Smells odd.").with_interaction(|_, _| {
                InteractionResult::new(InteractionEffect::Fatal, "It was poison.")
            }),
        );

        let reaction = game.update("use key on potion").unwrap();
        assert_eq!(reaction.kind, ReactionKind::Fatal);
        assert_eq!(game.state(), GameState::Finished);
        assert_eq!(game.ending().unwrap().title, "Game Over");
        assert_eq!(game.update("look"), Err(FictionError::GameNotActive));
    }

    // -----------------------------------------------------------------------
    // Conversations
    // -----------------------------------------------------------------------

    #[test]
    fn single_paragraph_conversation_ends_on_empty_input() {
        let mut game = game();
        give_butler(&mut game, Conversation::new(vec![Paragraph::new("Test")]));

        let reaction = game.update("talk to butler").unwrap();
        assert_eq!(reaction.kind, ReactionKind::Internal);
        assert!(game.active_conversation().is_some());

        game.update("").unwrap();
        assert!(game.active_conversation().is_none());
        let butler = game.world().find_character_anywhere("butler").unwrap();
        assert!(butler.conversation.as_ref().unwrap().has_ended());
    }

    #[test]
    fn responses_run_paragraph_actions() {
        let mut game = game();
        give_butler(
            &mut game,
            Conversation::new(vec![
                Paragraph::new("Tea?")
                    .with_response(Response::new("Please."))
                    .with_response(
                        Response::new("No.").with_instruction(wf_core::Instruction::End),
                    ),
                Paragraph::new("Here you are.").with_action(|world| {
                    world.player.add_item(Item::new("Tea", "Hot."));
                }),
            ]),
        );

        game.update("talk").unwrap();
        assert!(game.update("3").is_err());

        let reaction = game.update("1").unwrap();
        assert_eq!(reaction.message, "Here you are.");
        assert!(game.world().player.has_item("tea"));
        assert_eq!(game.active_conversation().unwrap().log().len(), 3);
    }

    #[test]
    fn empty_input_continues_past_offered_responses() {
        let mut game = game();
        give_butler(
            &mut game,
            Conversation::new(vec![
                Paragraph::new("Tea?").with_response(Response::new("Please.")),
                Paragraph::new("Suit yourself."),
            ]),
        );

        game.update("talk").unwrap();
        let reaction = game.update("").unwrap();
        assert!(!reaction.is_error());
        assert_eq!(reaction.message, "Suit yourself.");
        assert_eq!(game.active_conversation().unwrap().log().len(), 2);
    }

    #[test]
    fn ending_returns_conversation_to_character() {
        let mut game = game();
        give_butler(
            &mut game,
            Conversation::new(vec![Paragraph::new("One."), Paragraph::new("Two.")]),
        );

        game.update("talk").unwrap();
        assert!(game
            .world()
            .find_character_anywhere("butler")
            .unwrap()
            .conversation
            .is_none());
        assert!(game.update("east").is_err());

        game.update("end").unwrap();
        assert!(game.active_conversation().is_none());
        let butler = game.world().find_character_anywhere("butler").unwrap();
        assert!(butler.conversation.is_some());
    }

    #[test]
    fn talking_without_conversation_fails() {
        let mut game = game();
        let reaction = game.update("talk to butler").unwrap();
        assert_eq!(reaction.message, "Butler has nothing to say.");
        assert!(game.active_conversation().is_none());
    }

    #[test]
    fn conversation_commands_need_a_conversation() {
        let mut game = game();
        assert_eq!(game.respond(0), Err(FictionError::NoActiveConversation));
        assert_eq!(
            game.advance_conversation(),
            Err(FictionError::NoActiveConversation)
        );
        assert_eq!(game.end_conversation(), Err(FictionError::NoActiveConversation));
    }

    // -----------------------------------------------------------------------
    // Global and frame commands
    // -----------------------------------------------------------------------

    #[test]
    fn overlays_last_one_turn() {
        let mut game = game();
        game.update("map").unwrap();
        assert_eq!(game.mode(), DisplayMode::Map);

        game.update("east").unwrap();
        assert_eq!(game.mode(), DisplayMode::Scene);
    }

    #[test]
    fn frame_toggles_change_config() {
        let mut game = game();
        game.update("commandsoff").unwrap();
        game.update("key off").unwrap();
        assert!(!game.config().show_command_list);
        assert!(!game.config().show_key);

        game.update("commandson").unwrap();
        assert!(game.config().show_command_list);
    }

    #[test]
    fn new_restores_the_authored_world() {
        let mut game = game();
        game.update("take lamp").unwrap();
        game.update("east").unwrap();

        game.update("new").unwrap();
        assert_eq!(game.state(), GameState::Active);
        assert_eq!(room_name(&game), "Hall");
        assert!(!game.world().player.has_item("lamp"));
    }

    #[test]
    fn exit_finishes_without_ending() {
        let mut game = game();
        game.update("exit").unwrap();
        assert_eq!(game.state(), GameState::Finished);
        assert!(game.ending().is_none());
    }

    #[test]
    fn completion_check_finishes_the_game() {
        let mut game = Game::new(fixtures::world(), GameConfig::default())
            .unwrap()
            .with_completion_check(|world| {
                if world.player.has_item("lamp") {
                    EndCheckResult::ended("Victory", "You found the lamp.")
                } else {
                    EndCheckResult::not_ended()
                }
            });
        game.enter().unwrap();

        game.update("take lamp").unwrap();
        assert_eq!(game.state(), GameState::Finished);
        assert_eq!(game.ending().unwrap().title, "Victory");
    }

    #[test]
    fn custom_commands_run_against_the_world() {
        let mut game = game();
        game.world_mut()
            .current_room_mut()
            .unwrap()
            .commands
            .push(wf_core::CustomCommand::new("pray", "Pray.", |world, _| {
                world.player.set_knowledge("prayed", true);
                Reaction::ok("You feel blessed.")
            }));

        assert_eq!(game.update("pray").unwrap().message, "You feel blessed.");
        assert!(game.world().player.has_knowledge("prayed"));
    }

    // -----------------------------------------------------------------------
    // Frames and the main loop
    // -----------------------------------------------------------------------

    struct Labels;

    impl FrameBuilder for Labels {
        type Frame = String;

        fn build_scene(&self, view: &SceneView<'_>) -> String {
            format!(
                "scene:{}:{}",
                view.room.identifier,
                view.message.unwrap_or_default()
            )
        }

        fn build_conversation(&self, view: &ConversationView<'_>) -> String {
            format!("talk:{}", view.character)
        }

        fn build_end(&self, title: &str, _description: &str) -> String {
            format!("end:{title}")
        }

        fn build_about(&self, info: &GameInfo) -> String {
            format!("about:{}", info.name)
        }

        fn build_help(&self, commands: &[CommandHelp]) -> String {
            format!("help:{}", commands.len())
        }

        fn build_map(&self, region: &Region, _show_key: bool) -> String {
            format!("map:{}", region.identifier)
        }
    }

    #[derive(Default)]
    struct Script {
        input: VecDeque<&'static str>,
        frames: Vec<String>,
        keys: usize,
    }

    impl LineReader for Script {
        fn read_line(&mut self) -> Option<String> {
            self.input.pop_front().map(str::to_string)
        }
    }

    impl KeyWaiter for Script {
        fn wait_for_key(&mut self) {
            self.keys += 1;
        }
    }

    impl FramePresenter<String> for Script {
        fn present(&mut self, frame: String) {
            self.frames.push(frame);
        }
    }

    #[test]
    fn run_presents_a_frame_per_turn() {
        let mut game = Game::new(fixtures::world(), GameConfig::default()).unwrap();
        let mut script = Script {
            input: VecDeque::from(["east", "dance", "map", "exit"]),
            ..Script::default()
        };

        game.run(&Labels, &mut script).unwrap();
        assert_eq!(
            script.frames,
            [
                "scene:Hall:",
                "scene:Kitchen:You move east.",
                "scene:Kitchen:Oops: could not interpret \"dance\"",
                "map:Manor",
                "scene:Kitchen:",
            ]
        );
        assert_eq!(script.keys, 1);
        assert_eq!(game.state(), GameState::Finished);
    }

    #[test]
    fn run_shows_end_frame_and_stops_at_end_of_input() {
        let mut game = Game::new(fixtures::world(), GameConfig::default())
            .unwrap()
            .with_completion_check(|world| {
                if world.current_room().is_some_and(|r| r.identifier.matches("kitchen")) {
                    EndCheckResult::ended("Fed", "")
                } else {
                    EndCheckResult::not_ended()
                }
            });
        let mut script = Script {
            input: VecDeque::from(["e"]),
            ..Script::default()
        };

        game.run(&Labels, &mut script).unwrap();
        assert_eq!(script.frames.last().unwrap(), "end:Fed");
        assert_eq!(script.keys, 1);

        let mut game = Game::new(fixtures::world(), GameConfig::default()).unwrap();
        let mut script = Script::default();
        game.run(&Labels, &mut script).unwrap();
        assert_eq!(script.frames, ["scene:Hall:"]);
        assert_eq!(game.state(), GameState::Finished);
    }

    #[test]
    fn conversation_frame_replaces_scene() {
        let mut game = game();
        give_butler(&mut game, Conversation::new(vec![Paragraph::new("Yes?")]));
        game.update("talk").unwrap();

        assert_eq!(game.frame(&Labels, None).unwrap(), "talk:Butler");
    }
}
