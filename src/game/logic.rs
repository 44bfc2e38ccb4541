// Game tracks one deal of Big Two: the seats and their hands, whose turn it is,
// the play currently on the table and who made it, and the pass flags used to
// decide when a round is over.

// Rules decisions are delegated to `rules::validate_play`; this module only
// feeds it the table context and applies accepted plays.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::cards::{format_cards, Card, PlayType};
use super::deck::Deck;
use super::rules::{validate_play, PlayValidation, RejectReason, TableContext, OPENING_CARD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Rank first, then suit
    ByRank,
    /// Suit first, then rank
    BySuit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub cards: Vec<Card>,
    pub score: u32,
    pub has_passed: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            cards: vec![],
            score: 0,
            has_passed: false,
        }
    }

    pub fn with_cards(name: impl Into<String>, kind: PlayerKind, cards: Vec<Card>) -> Self {
        Self {
            cards,
            ..Self::new(name, kind)
        }
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn has_cards(&self, cards: &[Card]) -> bool {
        cards.iter().all(|card| self.has_card(card))
    }

    /// Removes all of `cards` or none of them
    pub fn remove_cards(&mut self, cards: &[Card]) -> bool {
        if !self.has_cards(cards) {
            return false;
        }

        for card in cards {
            if let Some(pos) = self.cards.iter().position(|c| c == card) {
                self.cards.remove(pos);
            }
        }
        true
    }

    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::ByRank => self.cards.sort(),
            SortOrder::BySuit => self.cards.sort_by_key(|card| (card.suit, card.rank)),
        }
    }

    pub fn has_won(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn hand_string(&self) -> String {
        if self.cards.is_empty() {
            "Empty hand".to_string()
        } else {
            format_cards(&self.cards)
        }
    }
}

/// Who sits where, before any cards are dealt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub name: String,
    pub kind: PlayerKind,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Big Two needs 2 to 4 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("Game is not in progress")]
    GameNotInProgress,
    #[error("No player in seat {0}")]
    UnknownSeat(usize),
    #[error("It's not your turn! Current player: {0}")]
    InvalidPlayerTurn(String),
    #[error("Player does not own card: {0}")]
    CardNotOwned(Card),
    #[error("Card selected more than once: {0}")]
    DuplicateCard(Card),
    #[error("Invalid play: {0}")]
    IllegalPlay(RejectReason),
    #[error("Cannot pass while leading - the table is clear")]
    CannotPassWhileLeading,
    #[error("Not enough cards in deck. Requested: {requested}, Available: {available}")]
    NotEnoughCards { requested: usize, available: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub play_type: PlayType,
    pub player_won: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// Seat that won the round when this pass cleared the table
    pub round_won_by: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Game {
    id: String,
    players: Vec<Player>,
    current_turn: usize,
    last_play: Vec<Card>,
    last_player: usize,
    phase: GamePhase,
    consecutive_passes: usize,
    first_play_of_game: bool,
    opening_card_dealt: bool,
}

impl Game {
    /// Start a game from hands that are already dealt
    pub fn new(id: String, players: Vec<Player>, current_turn: usize) -> Self {
        let opening_card_dealt = players.iter().any(|p| p.has_card(&OPENING_CARD));
        Self {
            id,
            players,
            current_turn,
            last_play: vec![],
            last_player: current_turn,
            phase: GamePhase::InProgress,
            consecutive_passes: 0,
            first_play_of_game: true,
            opening_card_dealt,
        }
    }

    /// Shuffle a fresh deck and deal `52 / n` cards to each seat round-robin.
    /// The holder of the 3 of Diamonds moves first.
    pub fn new_game<R: Rng + ?Sized>(specs: &[PlayerSpec], rng: &mut R) -> Result<Self, GameError> {
        if !(2..=4).contains(&specs.len()) {
            return Err(GameError::InvalidPlayerCount(specs.len()));
        }

        let mut deck = Deck::new();
        deck.shuffle(rng);

        let mut players: Vec<Player> = specs
            .iter()
            .map(|spec| Player::new(spec.name.clone(), spec.kind))
            .collect();

        let cards_per_player = 52 / players.len();
        let dealt = deck.deal_multiple(cards_per_player * players.len())?;
        let seats = players.len();
        for (i, card) in dealt.into_iter().enumerate() {
            players[i % seats].cards.push(card);
        }
        for player in &mut players {
            player.sort(SortOrder::ByRank);
        }

        let starting_player = Self::find_starting_player(&players);
        let game = Self::new(Uuid::new_v4().to_string(), players, starting_player);

        info!(
            game_id = %game.id,
            players = seats,
            cards_per_player,
            undealt = deck.len(),
            starting_player = %game.players[starting_player].name,
            "Dealt new game"
        );

        Ok(game)
    }

    /// Seat holding the opening card, or seat 0 when it was not dealt
    fn find_starting_player(players: &[Player]) -> usize {
        players
            .iter()
            .position(|p| p.has_card(&OPENING_CARD))
            .unwrap_or(0)
    }

    /// What the validator needs to judge the next play
    pub fn table_context(&self) -> TableContext<'_> {
        TableContext::new(
            &self.last_play,
            self.first_play_of_game,
            self.first_play_of_game && self.opening_card_dealt,
        )
    }

    /// Judge `cards` against the current table without playing them
    pub fn validate(&self, cards: &[Card]) -> PlayValidation {
        validate_play(cards, &self.table_context())
    }

    fn check_turn(&self, seat: usize) -> Result<(), GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::GameNotInProgress);
        }
        if seat >= self.players.len() {
            return Err(GameError::UnknownSeat(seat));
        }
        if seat != self.current_turn {
            return Err(GameError::InvalidPlayerTurn(
                self.players[self.current_turn].name.clone(),
            ));
        }
        Ok(())
    }

    pub fn play_cards(&mut self, seat: usize, cards: &[Card]) -> Result<PlayOutcome, GameError> {
        self.check_turn(seat)?;

        let player = &self.players[seat];
        if let Some(card) = cards.iter().find(|card| !player.has_card(card)) {
            return Err(GameError::CardNotOwned(*card));
        }
        for (i, card) in cards.iter().enumerate() {
            if cards[i + 1..].contains(card) {
                return Err(GameError::DuplicateCard(*card));
            }
        }

        let validation = self.validate(cards);
        if let Some(reason) = validation.reason {
            debug!(game_id = %self.id, seat, cards = %format_cards(cards), %reason, "Rejected play");
            return Err(GameError::IllegalPlay(reason));
        }

        let player = &mut self.players[seat];
        player.remove_cards(cards);
        player.has_passed = false;
        let player_won = player.has_won();

        self.last_play = cards.to_vec();
        self.last_player = seat;
        self.consecutive_passes = 0;
        self.first_play_of_game = false;

        info!(
            game_id = %self.id,
            seat,
            play_type = %validation.play_type,
            cards = %format_cards(cards),
            remaining = self.players[seat].cards.len(),
            "Play accepted"
        );

        if player_won {
            self.players[seat].score += 1;
            self.phase = GamePhase::Finished;
            info!(game_id = %self.id, winner = %self.players[seat].name, "Game won");
        } else {
            self.next_turn();
        }

        Ok(PlayOutcome {
            play_type: validation.play_type,
            player_won,
        })
    }

    /// Pass the turn. When everyone but the last player has passed, the table
    /// clears and the last player leads the next round.
    pub fn pass(&mut self, seat: usize) -> Result<PassOutcome, GameError> {
        self.check_turn(seat)?;

        if self.last_play.is_empty() {
            return Err(GameError::CannotPassWhileLeading);
        }

        self.players[seat].has_passed = true;
        self.consecutive_passes += 1;
        self.next_turn();
        debug!(game_id = %self.id, seat, passes = self.consecutive_passes, "Player passed");

        if !self.all_others_have_passed() {
            return Ok(PassOutcome { round_won_by: None });
        }

        let winner = self.last_player;
        self.clear_last_play();
        self.current_turn = winner;
        info!(game_id = %self.id, winner = %self.players[winner].name, "Round won, table cleared");

        Ok(PassOutcome {
            round_won_by: Some(winner),
        })
    }

    fn next_turn(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.players.len();
    }

    fn all_others_have_passed(&self) -> bool {
        let passed = self
            .players
            .iter()
            .enumerate()
            .filter(|(seat, player)| *seat != self.last_player && player.has_passed)
            .count();
        passed + 1 >= self.players.len()
    }

    fn clear_last_play(&mut self) {
        self.last_play.clear();
        self.consecutive_passes = 0;
        for player in &mut self.players {
            player.has_passed = false;
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    pub fn current_seat(&self) -> usize {
        self.current_turn
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    pub fn last_play(&self) -> &[Card] {
        &self.last_play
    }

    /// Who made the play on the table, if there is one
    pub fn last_playing_player(&self) -> Option<&Player> {
        if self.last_play.is_empty() {
            None
        } else {
            self.players.get(self.last_player)
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    pub fn is_first_play_of_game(&self) -> bool {
        self.first_play_of_game
    }

    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.has_won())
    }

    pub fn status_message(&self) -> String {
        match self.phase {
            GamePhase::InProgress => {
                let mut status = format!("{}'s turn", self.current_player().name);
                match self.last_playing_player() {
                    Some(last) => status.push_str(&format!(
                        " - Last play: {} by {}",
                        format_cards(&self.last_play),
                        last.name
                    )),
                    None => status.push_str(" - No cards played yet"),
                }
                status
            }
            GamePhase::Finished => match self.winner() {
                Some(winner) => format!("{} wins!", winner.name),
                None => "Game finished".to_string(),
            },
        }
    }
}
