#![allow(dead_code)]

use bigtwo_rules::{
    game::{Player, PlayerKind},
    parse_cards, Card, Game,
};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(::bigtwo_rules::Card::new(
            ::bigtwo_rules::Rank::$rank,
            ::bigtwo_rules::Suit::$suit,
        )),*]
    };
}

/// Parse a whitespace separated card list, panicking on bad input
pub fn hand(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

// ============================================================================
// Game Setup Utilities
// ============================================================================

pub struct GameBuilder {
    players: Vec<Player>,
    starting_seat: Option<usize>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![],
            starting_seat: None,
        }
    }

    pub fn with_human(mut self, name: &str, cards: &str) -> Self {
        self.players
            .push(Player::with_cards(name, PlayerKind::Human, hand(cards)));
        self
    }

    pub fn with_computer(mut self, name: &str, cards: &str) -> Self {
        self.players
            .push(Player::with_cards(name, PlayerKind::Computer, hand(cards)));
        self
    }

    /// Four humans with three cards each. Alice has 3D, goes first
    pub fn with_simple_four_player_game(self) -> Self {
        self.with_human("alice", "3D 4H 5S")
            .with_human("bob", "6C 7D 8H")
            .with_human("charlie", "9S 10C JD")
            .with_human("david", "QH KS AC")
    }

    /// Pairs for every seat, Alice leads with the 3s
    pub fn with_pair_scenario(self) -> Self {
        self.with_human("alice", "3D 3S 9C")
            .with_human("bob", "4D 4C 5H")
            .with_human("charlie", "KH KS 6D")
            .with_human("david", "2C 2H 7S")
    }

    pub fn starting_at(mut self, seat: usize) -> Self {
        self.starting_seat = Some(seat);
        self
    }

    /// Build the game. Without an explicit start, the 3D holder leads.
    pub fn build(self) -> Game {
        let opening = Card::new(bigtwo_rules::Rank::Three, bigtwo_rules::Suit::Diamonds);
        let start = self.starting_seat.unwrap_or_else(|| {
            self.players
                .iter()
                .position(|p| p.has_card(&opening))
                .unwrap_or(0)
        });
        Game::new("test-game".to_string(), self.players, start)
    }
}
