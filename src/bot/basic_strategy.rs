use tracing::debug;

use crate::game::{Card, Game};

use super::types::BotStrategy;

/// Leads with its lowest card and passes whenever it has to follow
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicBotStrategy;

impl BasicBotStrategy {
    pub fn new() -> Self {
        Self
    }

    fn lowest_card(&self, cards: &[Card]) -> Option<Card> {
        cards.iter().min().copied()
    }
}

impl BotStrategy for BasicBotStrategy {
    fn decide_move(&self, game: &Game, seat: usize) -> Option<Vec<Card>> {
        if game.current_seat() != seat {
            debug!(seat, "Not bot's turn");
            return None;
        }

        // Following would need play enumeration, so only lead
        if !game.last_play().is_empty() {
            debug!(seat, "Bot passes");
            return None;
        }

        let player = game.player(seat)?;
        let card = self.lowest_card(&player.cards)?;
        let chosen = vec![card];

        // On the opening move the lowest card is 3D when its holder leads
        if !game.validate(&chosen).is_valid {
            debug!(seat, card = %card, "Lowest card is not playable");
            return None;
        }

        debug!(seat, card = %card, "Bot decided on move");
        Some(chosen)
    }

    fn strategy_name(&self) -> &'static str {
        "BasicBotStrategy"
    }
}
