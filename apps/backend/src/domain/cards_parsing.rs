//! Card parsing from layout tokens and canonical identifiers.
//!
//! Board layout tables disambiguate the second occurrence of a card with an
//! underscore suffix ("10S_alt", "9S_another"); the suffix is stripped before
//! the rank and suit are interpreted. The suit is the final character and the
//! rank is everything before it, so a token is 2 or 3 characters after
//! stripping ("10" is the only two-character rank).

use std::str::FromStr;

use super::cards::{Card, Rank, Suit};
use crate::errors::GameError;

/// Parse a board-layout token (e.g. "AS", "10D_alt") into a card.
pub fn parse_layout_token(token: &str) -> Result<Card, GameError> {
    let normalized = match token.find('_') {
        Some(idx) => &token[..idx],
        None => token,
    };

    // The suit is always the final character; the rank is everything before
    // it ("A".."10"), so a valid token is 2 or 3 characters long.
    if normalized.len() < 2 || normalized.len() > 3 {
        return Err(GameError::MalformedCardToken(token.to_string()));
    }
    let (rank_str, suit_str) = normalized.split_at(normalized.len() - 1);

    let rank = match rank_str {
        "A" => Rank::Ace,
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        _ => return Err(GameError::UnknownRank(token.to_string())),
    };

    let suit = match suit_str {
        "H" => Suit::Hearts,
        "D" => Suit::Diamonds,
        "C" => Suit::Clubs,
        "S" => Suit::Spades,
        _ => return Err(GameError::UnknownSuit(token.to_string())),
    };

    Ok(Card::new(rank, suit))
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_layout_token(s)
    }
}
