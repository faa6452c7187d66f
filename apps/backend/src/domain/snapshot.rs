//! Client-facing views of game state.
//!
//! Snapshots never expose another player's hand contents, only counts. All
//! wire fields are camelCase for the JavaScript clients.

use serde::Serialize;

use super::board::{Board, Occupant};
use super::state::{Game, Phase};
use crate::errors::GameError;

/// Wire marker for a free corner in `occupiedBy`.
const CORNER_OCCUPANT: &str = "CORNER";

/// One board cell as the client renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCellView {
    /// Canonical card id, or empty for corners and degraded cells.
    pub card_id: String,
    pub display_value: String,
    /// "" when empty, "CORNER" for a free corner, else the chip owner's id.
    pub occupied_by: String,
    pub is_corner: bool,
    pub is_locked: bool,
}

/// Public roster entry. Hands stay private; only the count travels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPublic {
    pub id: String,
    pub name: String,
    pub chip_color: String,
    pub sequences: u32,
    pub hand_count: usize,
    pub is_connected: bool,
    pub is_my_turn: bool,
}

/// Full public state of one game, safe to broadcast to every participant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: String,
    pub phase: Phase,
    pub board: Vec<Vec<BoardCellView>>,
    pub players: Vec<PlayerPublic>,
    pub player_order: Vec<String>,
    pub current_turn_player_id: Option<String>,
    pub draw_pile_count: usize,
    pub sequences_to_win: u32,
    pub max_players: usize,
    pub host_id: String,
    pub winner: Option<String>,
}

fn board_view(board: &Board) -> Vec<Vec<BoardCellView>> {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|space| BoardCellView {
                    card_id: space.card.map(|c| c.id()).unwrap_or_default(),
                    display_value: space.display_value.clone(),
                    occupied_by: match &space.occupant {
                        Occupant::Empty => String::new(),
                        Occupant::Corner => CORNER_OCCUPANT.to_string(),
                        Occupant::Chip(owner) => owner.clone(),
                    },
                    is_corner: space.is_corner(),
                    is_locked: space.is_locked,
                })
                .collect()
        })
        .collect()
}

/// Build the broadcast view of a game.
pub fn snapshot(game: &Game) -> GameSnapshot {
    let current_turn = game.current_turn_player().cloned();
    let players = game
        .player_order
        .iter()
        .filter_map(|id| game.players.get(id))
        .map(|p| PlayerPublic {
            id: p.id.clone(),
            name: p.name.clone(),
            chip_color: p.chip_color.to_string(),
            sequences: p.sequences,
            hand_count: p.hand.len(),
            is_connected: p.is_connected,
            is_my_turn: current_turn.as_deref() == Some(p.id.as_str()),
        })
        .collect();

    GameSnapshot {
        game_id: game.id.clone(),
        phase: game.phase,
        board: board_view(&game.board),
        players,
        player_order: game.player_order.clone(),
        current_turn_player_id: current_turn,
        draw_pile_count: game.draw_pile.len(),
        sequences_to_win: game.sequences_to_win,
        max_players: game.max_players,
        host_id: game.host_id.clone(),
        winner: game.winner.clone(),
    }
}

/// One player's own hand, for the private per-connection update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateHand {
    pub player_id: String,
    pub hand: Vec<String>,
}

/// The acting player's hand as canonical card ids.
pub fn private_hand(game: &Game, player_id: &str) -> Result<PrivateHand, GameError> {
    let player = game
        .players
        .get(player_id)
        .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))?;
    Ok(PrivateHand {
        player_id: player.id.clone(),
        hand: player.hand.iter().map(|c| c.id()).collect(),
    })
}
