use std::fmt;

use super::basic::{Card, Rank};

/// The five poker-like patterns a five-card play can form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FiveCardType {
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl FiveCardType {
    pub fn name(self) -> &'static str {
        match self {
            FiveCardType::Straight => "Straight",
            FiveCardType::Flush => "Flush",
            FiveCardType::FullHouse => "Full House",
            FiveCardType::FourOfAKind => "Four of a Kind",
            FiveCardType::StraightFlush => "Straight Flush",
        }
    }
}

/// Structural category of a play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PlayType {
    Invalid,
    Single,
    Pair,
    Triple,
    FiveCard(FiveCardType),
}

impl PlayType {
    pub fn is_valid(self) -> bool {
        self != PlayType::Invalid
    }

    pub fn five_card_type(self) -> Option<FiveCardType> {
        match self {
            PlayType::FiveCard(five) => Some(five),
            _ => None,
        }
    }

    /// Display name for the play ("Pair", "Full House", ...)
    pub fn name(self) -> &'static str {
        match self {
            PlayType::Invalid => "Invalid",
            PlayType::Single => "Single",
            PlayType::Pair => "Pair",
            PlayType::Triple => "Triple",
            PlayType::FiveCard(five) => five.name(),
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify an arbitrary set of cards. Never fails: anything that is not a
/// recognised shape comes back as `PlayType::Invalid`.
pub fn determine_play_type(cards: &[Card]) -> PlayType {
    match cards.len() {
        1 => PlayType::Single,
        2 if is_pair(cards) => PlayType::Pair,
        3 if is_triple(cards) => PlayType::Triple,
        5 => determine_five_card_type(cards).map_or(PlayType::Invalid, PlayType::FiveCard),
        _ => PlayType::Invalid,
    }
}

/// Five-card sub-shape, checked strongest first so a straight flush is never
/// reported as a plain straight or flush
pub fn determine_five_card_type(cards: &[Card]) -> Option<FiveCardType> {
    if cards.len() != 5 {
        return None;
    }

    if is_straight_flush(cards) {
        Some(FiveCardType::StraightFlush)
    } else if is_four_of_a_kind(cards) {
        Some(FiveCardType::FourOfAKind)
    } else if is_full_house(cards) {
        Some(FiveCardType::FullHouse)
    } else if is_flush(cards) {
        Some(FiveCardType::Flush)
    } else if is_straight(cards) {
        Some(FiveCardType::Straight)
    } else {
        None
    }
}

pub fn is_pair(cards: &[Card]) -> bool {
    cards.len() == 2 && cards[0].rank == cards[1].rank
}

pub fn is_triple(cards: &[Card]) -> bool {
    cards.len() == 3 && cards[0].rank == cards[1].rank && cards[1].rank == cards[2].rank
}

/// Five literally consecutive ranks on the 3..2 scale. There is no
/// wraparound: K-A-2-3-4 is not a straight, J-Q-K-A-2 is.
pub fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }

    let ranks = sorted_ranks(cards);
    ranks
        .windows(2)
        .all(|pair| pair[1].strength() == pair[0].strength() + 1)
}

pub fn is_flush(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }

    let suit = cards[0].suit;
    cards.iter().all(|card| card.suit == suit)
}

/// Sorted ranks form AAABB or AABBB
pub fn is_full_house(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }

    let r = sorted_ranks(cards);
    let low_triple = r[0] == r[1] && r[1] == r[2] && r[3] == r[4];
    let high_triple = r[0] == r[1] && r[2] == r[3] && r[3] == r[4];
    low_triple || high_triple
}

/// Sorted ranks form AAAAB or ABBBB; the kicker may sort to either end
pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }

    let r = sorted_ranks(cards);
    let low_quad = r[0] == r[1] && r[1] == r[2] && r[2] == r[3];
    let high_quad = r[1] == r[2] && r[2] == r[3] && r[3] == r[4];
    low_quad || high_quad
}

pub fn is_straight_flush(cards: &[Card]) -> bool {
    is_straight(cards) && is_flush(cards)
}

fn sorted_ranks(cards: &[Card]) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = cards.iter().map(|card| card.rank).collect();
    ranks.sort();
    ranks
}
