pub mod basic_strategy;
pub mod types;

pub use basic_strategy::BasicBotStrategy;
pub use types::BotStrategy;
