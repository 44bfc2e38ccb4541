use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Failure to decode the text form of a card ("3H", "10S", "as")
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("Empty card string")]
    Empty,
    #[error("Invalid card string: {0}")]
    InvalidLength(String),
    #[error("Invalid rank character: {0}")]
    InvalidRank(char),
    #[error("Invalid suit character: {0}")]
    InvalidSuit(char),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Diamonds = 0,
    Clubs = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub fn from_char(c: char) -> Result<Self, CardParseError> {
        match c.to_ascii_uppercase() {
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(CardParseError::InvalidSuit(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Suit::from_char(c)
    }
}

/// Card ranks in Big Two strength order. Two is the highest rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
}

impl Rank {
    /// Position on the linear 3..2 strength scale (Three = 0, Two = 12)
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// Decode a single rank character. `T` and `1` both mean ten.
    pub fn from_char(c: char) -> Result<Self, CardParseError> {
        match c.to_ascii_uppercase() {
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' | '1' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            '2' => Ok(Rank::Two),
            _ => Err(CardParseError::InvalidRank(c)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
                Rank::Two => "2",
            }
        )
    }
}

impl TryFrom<char> for Rank {
    type Error = CardParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Rank::from_char(c)
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

/// A playing card. Serialized through its text form, e.g. `"10S"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// The lowest card in the deck; it must open the game.
pub const THREE_OF_DIAMONDS: Card = Card::new(Rank::Three, Suit::Diamonds);

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.rank.cmp(&other.rank) {
            Ordering::Equal => self.suit.cmp(&other.suit),
            other => other,
        }
    }
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// All 52 cards, rank-major, so the result is already in ascending order
    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::iter() {
            for suit in Suit::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let first = chars.next().ok_or(CardParseError::Empty)?;
        let rest = chars.as_str();

        let (rank, suit_part) = match rest.strip_prefix('0') {
            Some(after_ten) if first == '1' => (Rank::Ten, after_ten),
            _ => (Rank::from_char(first)?, rest),
        };

        let mut suit_chars = suit_part.chars();
        let suit_char = suit_chars
            .next()
            .ok_or_else(|| CardParseError::InvalidLength(s.to_string()))?;
        if suit_chars.next().is_some() {
            return Err(CardParseError::InvalidLength(s.to_string()));
        }

        Ok(Card::new(rank, Suit::from_char(suit_char)?))
    }
}

impl TryFrom<&str> for Card {
    type Error = CardParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Decode a whitespace separated list of cards, failing on the first bad token
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardParseError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Space separated canonical text of a card list
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ordering() {
        let card1 = Card::new(Rank::Three, Suit::Diamonds);
        let card2 = Card::new(Rank::Three, Suit::Spades);
        let card3 = Card::new(Rank::Two, Suit::Diamonds);

        assert!(card2 > card1); // Same rank, higher suit
        assert!(card3 > card1); // Higher rank
        assert!(card3 > card2); // Higher rank beats higher suit
    }

    #[test]
    fn test_two_outranks_ace_outranks_king() {
        assert!(Rank::Two > Rank::Ace);
        assert!(Rank::Ace > Rank::King);
        assert!(Card::new(Rank::Two, Suit::Diamonds) > Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(Rank::Three.strength(), 0);
        assert_eq!(Rank::Two.strength(), 12);
    }

    #[test]
    fn test_card_ordering_is_total() {
        let cards = Card::all_cards();
        for a in &cards {
            for b in &cards {
                let outcomes = [a < b, a == b, a > b];
                assert_eq!(
                    outcomes.iter().filter(|holds| **holds).count(),
                    1,
                    "{} vs {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_all_cards_sorted_and_unique() {
        let cards = Card::all_cards();
        assert_eq!(cards.len(), 52);
        assert_eq!(cards[0], THREE_OF_DIAMONDS);
        assert!(cards.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_card_from_string() {
        let king_hearts: Card = "KH".parse().unwrap();
        assert_eq!(king_hearts.rank, Rank::King);
        assert_eq!(king_hearts.suit, Suit::Hearts);

        let two_spades: Card = "2S".parse().unwrap();
        assert_eq!(two_spades, Card::new(Rank::Two, Suit::Spades));

        // Ten has three spellings
        let ten = Card::new(Rank::Ten, Suit::Diamonds);
        assert_eq!("10D".parse::<Card>().unwrap(), ten);
        assert_eq!("TD".parse::<Card>().unwrap(), ten);
        assert_eq!("1D".parse::<Card>().unwrap(), ten);

        // Input is case-insensitive
        assert_eq!("as".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(" qc ".parse::<Card>().unwrap(), Card::new(Rank::Queen, Suit::Clubs));
    }

    #[test]
    fn test_card_from_string_errors() {
        assert_eq!("".parse::<Card>(), Err(CardParseError::Empty));
        assert_eq!("ZH".parse::<Card>(), Err(CardParseError::InvalidRank('Z')));
        assert_eq!("KX".parse::<Card>(), Err(CardParseError::InvalidSuit('X')));
        assert!(matches!("K".parse::<Card>(), Err(CardParseError::InvalidLength(_))));
        assert!(matches!("KHS".parse::<Card>(), Err(CardParseError::InvalidLength(_))));
        assert!(matches!("10".parse::<Card>(), Err(CardParseError::InvalidLength(_))));
        assert!(matches!("100S".parse::<Card>(), Err(CardParseError::InvalidLength(_))));
    }

    #[test]
    fn test_suit_from_char() {
        assert_eq!(Suit::try_from('D'), Ok(Suit::Diamonds));
        assert_eq!(Suit::try_from('c'), Ok(Suit::Clubs));
        assert_eq!(Suit::try_from('H'), Ok(Suit::Hearts));
        assert_eq!(Suit::try_from('s'), Ok(Suit::Spades));
        assert!(Suit::try_from('X').is_err());
    }

    #[test]
    fn test_rank_from_char() {
        assert_eq!(Rank::try_from('3'), Ok(Rank::Three));
        assert_eq!(Rank::try_from('9'), Ok(Rank::Nine));
        assert_eq!(Rank::try_from('t'), Ok(Rank::Ten));
        assert_eq!(Rank::try_from('j'), Ok(Rank::Jack));
        assert_eq!(Rank::try_from('A'), Ok(Rank::Ace));
        assert_eq!(Rank::try_from('2'), Ok(Rank::Two));
        assert!(Rank::try_from('0').is_err());
        assert!(Rank::try_from('X').is_err());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::King, Suit::Hearts).to_string(), "KH");
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10S");
        assert_eq!(Card::new(Rank::Three, Suit::Hearts).to_string(), "3H");
    }

    #[test]
    fn test_encode_decode_gives_canonical_form() {
        let tokens = [
            ("3h", "3H"),
            ("10s", "10S"),
            ("TS", "10S"),
            ("1c", "10C"),
            ("as", "AS"),
            ("2D", "2D"),
        ];
        for (input, canonical) in tokens {
            let card: Card = input.parse().unwrap();
            assert_eq!(card.to_string(), canonical);
        }

        for card in Card::all_cards() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn test_parse_cards_list() {
        let cards = parse_cards("3D 4d  10h").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Three, Suit::Diamonds),
                Card::new(Rank::Four, Suit::Diamonds),
                Card::new(Rank::Ten, Suit::Hearts),
            ]
        );
        assert_eq!(format_cards(&cards), "3D 4D 10H");
        assert_eq!(parse_cards("3D ZZ"), Err(CardParseError::InvalidRank('Z')));
        assert_eq!(parse_cards(""), Ok(vec![]));
    }

    #[test]
    fn test_card_serializes_as_text() {
        let card = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"10C\"");
        let back: Card = serde_json::from_str("\"10C\"").unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>("\"1X\"").is_err());
    }
}
