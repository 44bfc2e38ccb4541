pub mod basic;
pub mod compare;
pub mod hands;


pub use basic::{format_cards, parse_cards, Card, CardParseError, Rank, Suit, THREE_OF_DIAMONDS};
pub use compare::{
    does_play_beat, five_card_beats, five_card_strength, highest_card, pair_beats, single_beats,
    triple_beats,
};
pub use hands::{
    determine_five_card_type, determine_play_type, is_flush, is_four_of_a_kind, is_full_house,
    is_pair, is_straight, is_straight_flush, is_triple, FiveCardType, PlayType,
};
