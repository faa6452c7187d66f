//! The game state machine: lobby management, move validation and mutation,
//! dead-card exchange, turn advancement.
//!
//! Every entry point validates fully before mutating, so a rejected action
//! leaves the game untouched. The registry serializes calls per game; these
//! methods assume exclusive access.

use rand::RngCore;
use tracing::{debug, info, warn};

use super::board::{Board, Occupant, Position};
use super::cards::Card;
use super::deck;
use super::rules::{
    chip_color_for_join, hand_size_for_players, MAX_SUPPORTED_PLAYERS, MIN_PLAYERS_TO_START,
    NUM_DECKS,
};
use super::sequence::detect_new_sequences;
use super::state::{Game, GameId, Phase, Player, PlayerId};
use crate::config::GameConfig;
use crate::errors::GameError;

/// What a successful play did to the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlayKind {
    /// A chip was placed (normal card or two-eyed jack).
    Placed,
    /// An opponent's chip was removed (one-eyed jack).
    Removed,
}

/// Structural changes reported back to the caller after a successful action,
/// for fan-out notification.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayOutcome {
    pub kind: PlayKind,
    /// Sequences newly completed by this action.
    pub new_sequences: u32,
    /// The acting player's running total.
    pub total_sequences: u32,
    pub phase: Phase,
    pub winner: Option<PlayerId>,
}

impl Game {
    /// Create a game in the lobby phase with a freshly shuffled double-deck
    /// draw pile and the standard board.
    pub fn new(id: GameId, host_id: PlayerId, config: GameConfig) -> Self {
        let mut draw_pile = deck::build_deck(NUM_DECKS);
        deck::shuffle(&mut draw_pile);
        Self::from_parts(id, host_id, config, draw_pile)
    }

    /// As [`Game::new`] but with a caller-supplied RNG, for deterministic
    /// tests.
    pub fn new_with_rng<R: RngCore>(
        id: GameId,
        host_id: PlayerId,
        config: GameConfig,
        rng: &mut R,
    ) -> Self {
        let mut draw_pile = deck::build_deck(NUM_DECKS);
        deck::shuffle_with(&mut draw_pile, rng);
        Self::from_parts(id, host_id, config, draw_pile)
    }

    fn from_parts(id: GameId, host_id: PlayerId, config: GameConfig, draw_pile: Vec<Card>) -> Self {
        info!(game_id = %id, host_id = %host_id, "new game created");
        Self {
            id,
            board: Board::standard(),
            players: Default::default(),
            player_order: Vec::new(),
            current_turn_index: 0,
            draw_pile,
            discard_pile: Vec::new(),
            phase: Phase::Lobby,
            winner: None,
            sequences_to_win: config.sequences_to_win(),
            max_players: config.max_players(),
            host_id,
        }
    }

    /// Add a player in the lobby, or treat a request carrying an
    /// already-registered id as a reconnection.
    ///
    /// Reconnection updates liveness and display name only; hand, color, and
    /// turn order are untouched, and it succeeds in any phase.
    pub fn add_player(&mut self, player_id: &str, name: &str) -> Result<&Player, GameError> {
        if self.players.contains_key(player_id) {
            if let Some(existing) = self.players.get_mut(player_id) {
                existing.is_connected = true;
                existing.name = name.to_string();
            }
            info!(game_id = %self.id, player_id, "player reconnected");
            return self
                .players
                .get(player_id)
                .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()));
        }

        if self.players.len() >= self.max_players {
            return Err(GameError::GameFull);
        }
        if self.phase != Phase::Lobby {
            return Err(GameError::GameNotJoinable);
        }

        let chip_color = chip_color_for_join(self.players.len());
        let player = Player::new(player_id.to_string(), name.to_string(), chip_color);
        self.player_order.push(player_id.to_string());
        info!(game_id = %self.id, player_id, name, chip_color, "player joined");
        Ok(self
            .players
            .entry(player_id.to_string())
            .or_insert(player))
    }

    /// Deal hands and move from Lobby to InProgress. Host only.
    pub fn start(&mut self, requester_id: &str) -> Result<(), GameError> {
        if self.host_id != requester_id {
            return Err(GameError::NotHost);
        }
        if self.phase != Phase::Lobby {
            return Err(GameError::NotInLobby);
        }
        if self.players.len() < MIN_PLAYERS_TO_START {
            return Err(GameError::TooFewPlayers(self.players.len()));
        }

        self.deal_cards();
        self.phase = Phase::InProgress;
        self.current_turn_index = 0;
        info!(game_id = %self.id, requester_id, players = self.players.len(), "game started");
        Ok(())
    }

    /// Deal round-robin in player order until every hand holds the size the
    /// occupancy table dictates. Stops quietly if the pile runs dry.
    fn deal_cards(&mut self) {
        let num_players = self.players.len();
        if num_players > MAX_SUPPORTED_PLAYERS {
            warn!(
                game_id = %self.id,
                num_players,
                "too many players for standard dealing, dealing 3 each"
            );
        }
        let cards_per_player = hand_size_for_players(num_players);

        for _ in 0..cards_per_player {
            for i in 0..self.player_order.len() {
                let Some(card) = self.draw_pile.pop() else {
                    return;
                };
                let player_id = &self.player_order[i];
                if let Some(player) = self.players.get_mut(player_id) {
                    player.hand.push(card);
                }
            }
        }
    }

    /// Move the top of the draw pile into the player's hand.
    pub fn draw_card(&mut self, player_id: &str) -> Result<Card, GameError> {
        if !self.players.contains_key(player_id) {
            return Err(GameError::PlayerNotFound(player_id.to_string()));
        }
        let card = self.draw_pile.pop().ok_or(GameError::DrawPileEmpty)?;
        if let Some(player) = self.players.get_mut(player_id) {
            player.hand.push(card);
        }
        Ok(card)
    }

    /// The central transition: play a card from hand at a board position.
    ///
    /// Preconditions are checked in a fixed order, each with its own error:
    /// phase, turn, hand, bounds, then the card-kind specific cell rules.
    /// On success the played card leaves the hand, a replacement is drawn if
    /// the pile allows, sequences are detected and claimed, and the turn
    /// advances unless the game just finished.
    pub fn play(
        &mut self,
        player_id: &str,
        card_id: &str,
        target: Position,
    ) -> Result<PlayOutcome, GameError> {
        self.require_in_progress()?;
        self.require_turn(player_id)?;

        let player = self
            .players
            .get(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))?;
        let card_index = player
            .find_card(card_id)
            .ok_or_else(|| GameError::CardNotInHand(card_id.to_string()))?;
        let played = player.hand[card_index];

        let space = self.board.space(target)?;

        let kind = if played.is_one_eyed_jack() {
            match &space.occupant {
                Occupant::Empty | Occupant::Corner => return Err(GameError::TargetNotOccupied),
                Occupant::Chip(owner) => {
                    if owner == player_id {
                        return Err(GameError::CannotRemoveOwnChip);
                    }
                    if space.is_locked {
                        return Err(GameError::TargetLocked);
                    }
                }
            }
            PlayKind::Removed
        } else {
            match &space.occupant {
                Occupant::Chip(_) | Occupant::Corner => {
                    return Err(GameError::TargetOccupied {
                        x: target.x,
                        y: target.y,
                    })
                }
                Occupant::Empty => {}
            }
            if !played.is_two_eyed_jack() {
                let printed = space.card.ok_or(GameError::BoardCellEmpty {
                    x: target.x,
                    y: target.y,
                })?;
                if printed != played {
                    return Err(GameError::CardDoesNotMatchCell {
                        card: card_id.to_string(),
                        x: target.x,
                        y: target.y,
                    });
                }
            }
            PlayKind::Placed
        };

        // Validation complete; mutate.
        let space = self.board.space_mut(target)?;
        match kind {
            PlayKind::Removed => {
                let removed_from = space.occupant.chip().cloned().unwrap_or_default();
                space.occupant = Occupant::Empty;
                info!(
                    game_id = %self.id,
                    player_id,
                    card = card_id,
                    x = target.x,
                    y = target.y,
                    removed_from = %removed_from,
                    "one-eyed jack removed a chip"
                );
            }
            PlayKind::Placed => {
                space.occupant = Occupant::Chip(player_id.to_string());
                info!(
                    game_id = %self.id,
                    player_id,
                    card = card_id,
                    x = target.x,
                    y = target.y,
                    "chip placed"
                );
            }
        }

        if let Some(player) = self.players.get_mut(player_id) {
            let card = player.hand.remove(card_index);
            self.discard_pile.push(card);
        }
        if let Err(err) = self.draw_card(player_id) {
            // The pile running out near the end is expected; play continues
            // with a smaller hand.
            debug!(game_id = %self.id, player_id, %err, "no replacement card drawn");
        }

        let new_sequences = detect_new_sequences(&mut self.board, player_id, target);
        let mut total_sequences = 0;
        if let Some(player) = self.players.get_mut(player_id) {
            player.sequences += new_sequences;
            total_sequences = player.sequences;
        }
        if new_sequences > 0 && total_sequences >= self.sequences_to_win {
            self.phase = Phase::Finished;
            self.winner = Some(player_id.to_string());
            info!(game_id = %self.id, winner = player_id, total_sequences, "game finished");
        }

        if self.phase == Phase::InProgress {
            self.advance_turn();
        }

        Ok(PlayOutcome {
            kind,
            new_sequences,
            total_sequences,
            phase: self.phase,
            winner: self.winner.clone(),
        })
    }

    /// Exchange a dead card for a fresh draw without placing a chip.
    ///
    /// A card is dead only if every board space printed with it is already
    /// occupied; jacks are never dead. Consumes the turn like a play.
    pub fn declare_dead_card(&mut self, player_id: &str, card_id: &str) -> Result<(), GameError> {
        self.require_in_progress()?;
        self.require_turn(player_id)?;

        let player = self
            .players
            .get(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))?;
        let card_index = player
            .find_card(card_id)
            .ok_or_else(|| GameError::CardNotInHand(card_id.to_string()))?;
        let declared = player.hand[card_index];

        if declared.is_jack() {
            return Err(GameError::JackNotDeclarable);
        }

        let mut printed_spots = 0;
        let mut has_open_spot = false;
        for (_, _, space) in self.board.iter() {
            if space.card == Some(declared) {
                printed_spots += 1;
                if space.occupant == Occupant::Empty {
                    has_open_spot = true;
                }
            }
        }
        if printed_spots == 0 {
            // Layout defect, not a player mistake.
            tracing::error!(
                game_id = %self.id,
                player_id,
                card = card_id,
                "dead-card declaration for a card with no printed spot"
            );
            return Err(GameError::CardNotOnBoard(card_id.to_string()));
        }
        if has_open_spot {
            return Err(GameError::CardNotDead(card_id.to_string()));
        }

        if let Some(player) = self.players.get_mut(player_id) {
            let card = player.hand.remove(card_index);
            self.discard_pile.push(card);
        }
        info!(game_id = %self.id, player_id, card = card_id, "dead card exchanged");
        if let Err(err) = self.draw_card(player_id) {
            debug!(game_id = %self.id, player_id, %err, "no replacement card drawn");
        }

        // No chip moved, so no sequence check.
        self.advance_turn();
        Ok(())
    }

    /// Record that the owning connection dropped. Returns true when the game
    /// is left with no connected player and has not finished, i.e. it is
    /// eligible for removal by the registry.
    pub fn mark_disconnected(&mut self, player_id: &str) -> Result<bool, GameError> {
        let player = self
            .players
            .get_mut(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))?;
        player.is_connected = false;
        info!(game_id = %self.id, player_id, "player disconnected");

        let all_disconnected = self.players.values().all(|p| !p.is_connected);
        Ok(all_disconnected && self.phase != Phase::Finished)
    }

    fn require_in_progress(&self) -> Result<(), GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::GameNotActive);
        }
        Ok(())
    }

    fn require_turn(&self, player_id: &str) -> Result<(), GameError> {
        match self.player_order.get(self.current_turn_index) {
            Some(current) if current == player_id => Ok(()),
            _ => Err(GameError::NotYourTurn(player_id.to_string())),
        }
    }

    fn advance_turn(&mut self) {
        if !self.player_order.is_empty() {
            self.current_turn_index = (self.current_turn_index + 1) % self.player_order.len();
        }
    }
}
