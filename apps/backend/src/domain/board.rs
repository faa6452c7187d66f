//! The 10x10 board: layout parsing, spaces, occupancy and locking.
//!
//! Every non-corner space is printed with one of the 48 non-jack cards, each
//! appearing exactly twice (two identical decks in play). The four grid
//! corners are free spaces that count for any player's sequence.

use tracing::error;

use super::cards::Card;
use super::cards_parsing::parse_layout_token;
use super::rules::BOARD_SIZE;
use super::state::PlayerId;
use crate::errors::GameError;

/// Layout token marking a free corner space.
pub const CORNER_TOKEN: &str = "FREE";
/// Display sentinel for a space whose layout token failed to parse.
pub const ERROR_DISPLAY: &str = "ERR";

/// Standard Sequence board layout. An underscore suffix ("_alt")
/// disambiguates the second printing of a card and is stripped during
/// parsing. Jacks are never printed on the board.
pub const STANDARD_LAYOUT: [[&str; BOARD_SIZE]; BOARD_SIZE] = [
    ["FREE", "2S", "3S", "4S", "5S", "6S", "7S", "8S", "9S", "FREE"],
    ["6C", "7C", "8C", "9C", "10C", "QC", "KC", "AC", "AD", "10S"],
    ["5C", "4C", "3C", "2C", "AH", "KH", "QH", "10H", "KD", "AS"],
    ["4D", "5D", "6D", "7D", "8D", "9D", "10D", "QD", "KS", "2D"],
    [
        "3D", "2D_alt", "AS_alt", "KS_alt", "QS", "10S_alt", "9S_alt", "8S_alt", "QS_alt", "2H",
    ],
    [
        "4H", "5H", "6H", "7H", "8H", "9H", "10H_alt", "QH_alt", "KH_alt", "3H",
    ],
    [
        "3S_alt", "2H_alt", "AH_alt", "AC_alt", "KC_alt", "QC_alt", "10C_alt", "9C_alt", "8C_alt",
        "4S_alt",
    ],
    [
        "2S_alt", "3H_alt", "4H_alt", "5H_alt", "6H_alt", "7H_alt", "8H_alt", "9H_alt", "7C_alt",
        "5S_alt",
    ],
    [
        "AD_alt", "KD_alt", "QD_alt", "10D_alt", "9D_alt", "8D_alt", "7D_alt", "6D_alt", "6C_alt",
        "6S_alt",
    ],
    [
        "FREE", "5C_alt", "4C_alt", "3C_alt", "2C_alt", "4D_alt", "5D_alt", "7S_alt", "3D_alt",
        "FREE",
    ],
];

/// A board coordinate as submitted by a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Who, if anyone, sits on a space.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Occupant {
    Empty,
    /// Permanent free-corner marker; corners are never placed on or removed.
    Corner,
    Chip(PlayerId),
}

impl Occupant {
    pub fn chip(&self) -> Option<&PlayerId> {
        match self {
            Occupant::Chip(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_chip_of(&self, player_id: &str) -> bool {
        matches!(self, Occupant::Chip(id) if id == player_id)
    }
}

/// One space on the board.
#[derive(Debug, Clone)]
pub struct BoardSpace {
    /// The card printed on this space; None for corners and degraded cells.
    pub card: Option<Card>,
    pub occupant: Occupant,
    /// True once the space is part of a completed, claimed sequence.
    pub is_locked: bool,
    /// "FREE", "ERR", or the printed card's display string.
    pub display_value: String,
}

impl BoardSpace {
    fn corner() -> Self {
        Self {
            card: None,
            occupant: Occupant::Corner,
            is_locked: false,
            display_value: CORNER_TOKEN.to_string(),
        }
    }

    fn printed(card: Card) -> Self {
        Self {
            display_value: card.display(),
            card: Some(card),
            occupant: Occupant::Empty,
            is_locked: false,
        }
    }

    fn degraded() -> Self {
        Self {
            card: None,
            occupant: Occupant::Empty,
            is_locked: false,
            display_value: ERROR_DISPLAY.to_string(),
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(self.occupant, Occupant::Corner)
    }
}

/// The full 10x10 grid.
#[derive(Debug, Clone)]
pub struct Board {
    spaces: Vec<Vec<BoardSpace>>,
}

impl Board {
    /// Build the standard board.
    pub fn standard() -> Self {
        Self::from_layout(&STANDARD_LAYOUT)
    }

    /// Build a board from a layout table. A token that fails to parse
    /// degrades that one cell to the "ERR" sentinel instead of aborting
    /// construction; the failure is logged prominently since it indicates a
    /// configuration defect.
    pub fn from_layout(layout: &[[&str; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut spaces = Vec::with_capacity(BOARD_SIZE);
        for (x, row) in layout.iter().enumerate() {
            let mut built = Vec::with_capacity(BOARD_SIZE);
            for (y, token) in row.iter().enumerate() {
                if *token == CORNER_TOKEN {
                    built.push(BoardSpace::corner());
                    continue;
                }
                match parse_layout_token(token) {
                    Ok(card) => built.push(BoardSpace::printed(card)),
                    Err(err) => {
                        error!(token, x, y, %err, "failed to parse board layout token");
                        built.push(BoardSpace::degraded());
                    }
                }
            }
            spaces.push(built);
        }
        Self { spaces }
    }

    pub fn in_bounds(pos: Position) -> bool {
        (0..BOARD_SIZE as i32).contains(&pos.x) && (0..BOARD_SIZE as i32).contains(&pos.y)
    }

    /// The space at a validated position.
    pub fn space(&self, pos: Position) -> Result<&BoardSpace, GameError> {
        if !Self::in_bounds(pos) {
            return Err(GameError::OutOfBounds { x: pos.x, y: pos.y });
        }
        Ok(&self.spaces[pos.x as usize][pos.y as usize])
    }

    pub fn space_mut(&mut self, pos: Position) -> Result<&mut BoardSpace, GameError> {
        if !Self::in_bounds(pos) {
            return Err(GameError::OutOfBounds { x: pos.x, y: pos.y });
        }
        Ok(&mut self.spaces[pos.x as usize][pos.y as usize])
    }

    /// Unchecked indexed access for internal scans.
    pub(crate) fn at(&self, x: usize, y: usize) -> &BoardSpace {
        &self.spaces[x][y]
    }

    pub(crate) fn at_mut(&mut self, x: usize, y: usize) -> &mut BoardSpace {
        &mut self.spaces[x][y]
    }

    /// Iterate all spaces with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &BoardSpace)> {
        self.spaces
            .iter()
            .enumerate()
            .flat_map(|(x, row)| row.iter().enumerate().map(move |(y, s)| (x, y, s)))
    }

    pub fn rows(&self) -> &[Vec<BoardSpace>] {
        &self.spaces
    }
}
