// Public API
pub use cards::{
    determine_play_type, does_play_beat, format_cards, parse_cards, Card, CardParseError,
    FiveCardType, PlayType, Rank, Suit,
};
pub use deck::Deck;
pub use logic::{
    Game, GameError, GamePhase, PassOutcome, PlayOutcome, Player, PlayerKind, PlayerSpec,
    SortOrder,
};
pub use rules::{validate_play, PlayValidation, RejectReason, TableContext, OPENING_CARD};

pub mod cards;
pub mod deck;
pub mod logic;
pub mod rules;
