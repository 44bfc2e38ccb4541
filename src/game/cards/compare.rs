use super::basic::Card;
use super::hands::{determine_five_card_type, determine_play_type, FiveCardType, PlayType};

impl FiveCardType {
    /// Fixed strength table for five-card plays. A stronger sub-shape beats a
    /// weaker one regardless of the cards involved.
    pub const fn strength(self) -> u8 {
        match self {
            FiveCardType::Straight => 1,
            FiveCardType::Flush => 2,
            FiveCardType::FullHouse => 3,
            FiveCardType::FourOfAKind => 4,
            FiveCardType::StraightFlush => 5,
        }
    }
}

/// Strength of an optional sub-shape; "no five-card type" ranks below all of them
pub fn five_card_strength(five: Option<FiveCardType>) -> u8 {
    five.map_or(0, FiveCardType::strength)
}

/// Highest card of a set under the rank-then-suit order, `None` when empty
pub fn highest_card(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().max()
}

pub fn single_beats(new_card: Card, last_card: Card) -> bool {
    new_card > last_card
}

pub fn pair_beats(new_pair: &[Card], last_pair: &[Card]) -> bool {
    new_pair.len() == 2 && last_pair.len() == 2 && high_card_beats(new_pair, last_pair)
}

pub fn triple_beats(new_triple: &[Card], last_triple: &[Card]) -> bool {
    new_triple.len() == 3 && last_triple.len() == 3 && high_card_beats(new_triple, last_triple)
}

/// Sub-shape strength first, then the highest card of the whole five. For a
/// four of a kind that may be the kicker.
pub fn five_card_beats(new_cards: &[Card], last_cards: &[Card]) -> bool {
    let new_strength = five_card_strength(determine_five_card_type(new_cards));
    let last_strength = five_card_strength(determine_five_card_type(last_cards));

    match new_strength.cmp(&last_strength) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => high_card_beats(new_cards, last_cards),
    }
}

/// Whether `new_play` out-ranks `last_play`. An empty last play is beaten by
/// anything; plays of different sizes never beat each other.
pub fn does_play_beat(new_play: &[Card], last_play: &[Card]) -> bool {
    if last_play.is_empty() {
        return true;
    }

    if new_play.len() != last_play.len() {
        return false;
    }

    match determine_play_type(new_play) {
        PlayType::Single => single_beats(new_play[0], last_play[0]),
        PlayType::Pair => pair_beats(new_play, last_play),
        PlayType::Triple => triple_beats(new_play, last_play),
        PlayType::FiveCard(_) => five_card_beats(new_play, last_play),
        PlayType::Invalid => false,
    }
}

/// Strictly higher max card wins; ties do not beat
fn high_card_beats(new_cards: &[Card], last_cards: &[Card]) -> bool {
    match (highest_card(new_cards), highest_card(last_cards)) {
        (Some(new_high), Some(last_high)) => new_high > last_high,
        _ => false,
    }
}
