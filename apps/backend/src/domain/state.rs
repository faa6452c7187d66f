//! Game aggregate state: phases, players, piles, turn order.

use std::collections::HashMap;

use super::board::Board;
use super::cards::Card;

pub type PlayerId = String;
pub type GameId = String;

/// Overall game progression. One-way: Lobby -> InProgress -> Finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Game created, players may join.
    Lobby,
    /// Hands dealt, turns running.
    InProgress,
    /// A player reached the win threshold.
    Finished,
}

/// One seated player.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Private hand; only ever exposed to the owner, others see a count.
    pub hand: Vec<Card>,
    /// Assigned by join order from the fixed palette, cycling.
    pub chip_color: &'static str,
    /// Completed sequences claimed so far.
    pub sequences: u32,
    /// Liveness of the owning connection, maintained by the transport layer.
    pub is_connected: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: String, chip_color: &'static str) -> Self {
        Self {
            id,
            name,
            hand: Vec::new(),
            chip_color,
            sequences: 0,
            is_connected: true,
        }
    }

    /// Position of a card in hand by canonical id.
    pub fn find_card(&self, card_id: &str) -> Option<usize> {
        self.hand.iter().position(|c| c.id() == card_id)
    }
}

/// The aggregate root for one game instance. All board, player, and pile
/// state is owned exclusively by this struct; concurrent access is
/// serialized by the registry's per-game mutex.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: GameId,
    pub board: Board,
    pub players: HashMap<PlayerId, Player>,
    /// Join order; turn order is this list, independent of map iteration.
    pub player_order: Vec<PlayerId>,
    /// Index into `player_order` of the player to act.
    pub current_turn_index: usize,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub phase: Phase,
    /// Set exactly once, on the transition to Finished.
    pub winner: Option<PlayerId>,
    pub sequences_to_win: u32,
    pub max_players: usize,
    /// The player permitted to start the game.
    pub host_id: PlayerId,
}

impl Game {
    /// The id of the player whose turn it is, if turns are running.
    pub fn current_turn_player(&self) -> Option<&PlayerId> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.player_order.get(self.current_turn_index)
    }
}
