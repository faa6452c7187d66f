//! Shared builders for game-engine tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::board::{Occupant, Position};
use super::cards::Card;
use super::state::{Game, Phase};
use crate::config::GameConfig;

/// Deterministic in-progress game with players "p0".."pN", hosted and
/// started by "p0".
pub(super) fn started_game(num_players: usize, seed: u64) -> Game {
    let mut game = lobby_game(num_players, seed, GameConfig::default());
    game.start("p0").expect("start succeeds");
    game
}

/// Deterministic lobby with players "p0".."pN" seated, "p0" hosting.
pub(super) fn lobby_game(num_players: usize, seed: u64, config: GameConfig) -> Game {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = Game::new_with_rng("test-game".to_string(), "p0".to_string(), config, &mut rng);
    for i in 0..num_players {
        let id = format!("p{i}");
        game.add_player(&id, &format!("Player {i}")).expect("join succeeds");
    }
    game
}

pub(super) fn card(id: &str) -> Card {
    id.parse().expect("valid card id")
}

/// Replace a player's hand wholesale.
pub(super) fn set_hand(game: &mut Game, player_id: &str, ids: &[&str]) {
    let player = game.players.get_mut(player_id).expect("player seated");
    player.hand = ids.iter().map(|id| card(id)).collect();
}

/// Drop a chip onto the board directly, bypassing play validation.
pub(super) fn place_chip(game: &mut Game, pos: Position, player_id: &str) {
    let space = game.board.space_mut(pos).expect("in bounds");
    space.occupant = Occupant::Chip(player_id.to_string());
}

/// Make it the given player's turn.
pub(super) fn force_turn(game: &mut Game, player_id: &str) {
    let index = game
        .player_order
        .iter()
        .position(|id| id == player_id)
        .expect("player seated");
    game.current_turn_index = index;
}

/// First empty board space printed with the given card.
pub(super) fn empty_spot_for(game: &Game, card_id: &str) -> Position {
    let wanted = card(card_id);
    for (x, y, space) in game.board.iter() {
        if space.card == Some(wanted) && space.occupant == Occupant::Empty {
            return Position::new(x as i32, y as i32);
        }
    }
    panic!("no empty spot printed with {card_id}");
}

/// Every board space printed with the given card.
pub(super) fn spots_for(game: &Game, card_id: &str) -> Vec<Position> {
    let wanted = card(card_id);
    game.board
        .iter()
        .filter(|(_, _, space)| space.card == Some(wanted))
        .map(|(x, y, _)| Position::new(x as i32, y as i32))
        .collect()
}

pub(super) fn assert_in_progress(game: &Game) {
    assert_eq!(game.phase, Phase::InProgress);
}
