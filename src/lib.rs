// Library crate for the Big Two rules engine
// This file exposes the public API for the binary and integration tests

pub mod bot;
pub mod cli;
pub mod config;
pub mod game;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use bot::{BasicBotStrategy, BotStrategy};
pub use cli::{Command, CommandError, Session, SessionEnd};
pub use config::GameConfig;
pub use game::{
    determine_play_type, does_play_beat, parse_cards, validate_play, Card, FiveCardType, Game,
    GameError, PlayType, PlayValidation, Rank, RejectReason, Suit, TableContext,
};
pub use shared::AppError;
