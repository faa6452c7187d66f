//! Concurrent registry of live games.
//!
//! Each game lives behind its own mutex, so actions on different games never
//! contend; actions on the same game serialize, which gives every game a
//! single authoritative ordering of moves. The map shard lock is always
//! released (by cloning the `Arc`) before the per-game mutex is taken.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::domain::board::Position;
use crate::domain::game::PlayOutcome;
use crate::domain::snapshot::{self, GameSnapshot, PrivateHand};
use crate::domain::state::{Game, GameId};
use crate::errors::GameError;

/// Shared, thread-safe collection of all live games.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: DashMap<GameId, Arc<Mutex<Game>>>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }

    /// Create a game with the caller as host and return its id.
    pub fn create_game(&self, host_id: &str, host_name: &str, config: GameConfig) -> GameId {
        let game_id = Uuid::new_v4().simple().to_string();
        let mut game = Game::new(game_id.clone(), host_id.to_string(), config);
        // Host is always seat zero; a fresh lobby holds at least one seat
        // since GameConfig clamps max_players to 1..=12.
        let host_joined = game.add_player(host_id, host_name).is_ok();
        debug_assert!(host_joined, "fresh lobby rejected its host");
        self.games
            .insert(game_id.clone(), Arc::new(Mutex::new(game)));
        info!(game_id = %game_id, host_id, "game registered");
        game_id
    }

    fn get(&self, game_id: &str) -> Result<Arc<Mutex<Game>>, GameError> {
        self.games
            .get(game_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| GameError::GameNotFound(game_id.to_string()))
    }

    /// Join a game, or reconnect if the player is already seated.
    pub fn join_game(
        &self,
        game_id: &str,
        player_id: &str,
        name: &str,
    ) -> Result<GameSnapshot, GameError> {
        let game = self.get(game_id)?;
        let mut game = game.lock();
        game.add_player(player_id, name)?;
        Ok(snapshot::snapshot(&game))
    }

    /// Start a game. Host only.
    pub fn start_game(&self, game_id: &str, requester_id: &str) -> Result<GameSnapshot, GameError> {
        let game = self.get(game_id)?;
        let mut game = game.lock();
        game.start(requester_id)?;
        Ok(snapshot::snapshot(&game))
    }

    /// Play a card at a position on behalf of a player.
    pub fn submit_play(
        &self,
        game_id: &str,
        player_id: &str,
        card_id: &str,
        target: Position,
    ) -> Result<(PlayOutcome, GameSnapshot), GameError> {
        let game = self.get(game_id)?;
        let mut game = game.lock();
        let outcome = game.play(player_id, card_id, target)?;
        Ok((outcome, snapshot::snapshot(&game)))
    }

    /// Exchange a dead card for a fresh draw.
    pub fn declare_dead_card(
        &self,
        game_id: &str,
        player_id: &str,
        card_id: &str,
    ) -> Result<GameSnapshot, GameError> {
        let game = self.get(game_id)?;
        let mut game = game.lock();
        game.declare_dead_card(player_id, card_id)?;
        Ok(snapshot::snapshot(&game))
    }

    /// Record a dropped connection. An unfinished game with no connected
    /// players left is removed from the registry.
    pub fn mark_disconnected(&self, game_id: &str, player_id: &str) -> Result<(), GameError> {
        let game = self.get(game_id)?;
        let abandoned = {
            let mut game = game.lock();
            game.mark_disconnected(player_id)?
        };
        if abandoned {
            self.games.remove(game_id);
            info!(game_id, "abandoned game removed");
        }
        Ok(())
    }

    /// The broadcast view of a game.
    pub fn snapshot(&self, game_id: &str) -> Result<GameSnapshot, GameError> {
        let game = self.get(game_id)?;
        let game = game.lock();
        Ok(snapshot::snapshot(&game))
    }

    /// One player's own hand.
    pub fn private_hand(&self, game_id: &str, player_id: &str) -> Result<PrivateHand, GameError> {
        let game = self.get(game_id)?;
        let game = game.lock();
        snapshot::private_hand(&game, player_id)
    }

    /// Drop a game unconditionally.
    pub fn remove_game(&self, game_id: &str) -> bool {
        self.games.remove(game_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
