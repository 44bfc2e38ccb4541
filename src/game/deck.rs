use rand::seq::SliceRandom;
use rand::Rng;

use super::cards::Card;
use super::logic::GameError;

/// A standard 52-card deck. Cards are dealt from the top (the end of the list).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self {
            cards: Card::all_cards(),
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn deal_multiple(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        if count > self.cards.len() {
            return Err(GameError::NotEnoughCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        let split_at = self.cards.len() - count;
        let mut dealt = self.cards.split_off(split_at);
        dealt.reverse();
        Ok(dealt)
    }

    /// Back to a full, unshuffled deck
    pub fn reset(&mut self) {
        self.cards = Card::all_cards();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
