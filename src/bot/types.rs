use crate::game::{Card, Game};

/// Trait for computer decision-making strategies
pub trait BotStrategy: Send + Sync {
    /// Decide which cards `seat` should play given the current game state.
    /// Returns None if the seat should pass
    fn decide_move(&self, game: &Game, seat: usize) -> Option<Vec<Card>>;

    /// Get the name of this strategy
    fn strategy_name(&self) -> &'static str;
}
