//! Play validation against the table: first-play constraint, matching size and
//! beat comparison. Stateless; every call builds its verdict from its inputs.

use serde::Serialize;
use thiserror::Error;

use super::cards::{determine_play_type, does_play_beat, Card, PlayType, THREE_OF_DIAMONDS};

/// Card that must appear in the first play of a game
pub const OPENING_CARD: Card = THREE_OF_DIAMONDS;

/// Read-only view of the table a play is validated against
#[derive(Debug, Clone, Copy, Default)]
pub struct TableContext<'a> {
    /// Last accepted play; empty when the table is clear
    pub last_play: &'a [Card],
    /// This is the very first play of the whole game
    pub is_first_play: bool,
    /// The play has to contain [`OPENING_CARD`]
    pub must_include_opening_card: bool,
}

impl<'a> TableContext<'a> {
    pub fn new(last_play: &'a [Card], is_first_play: bool, must_include_opening_card: bool) -> Self {
        Self {
            last_play,
            is_first_play,
            must_include_opening_card,
        }
    }

    /// Opening move of a game that dealt the opening card
    pub fn opening() -> Self {
        Self::new(&[], true, true)
    }

    /// Follow `last_play` in the middle of a game
    pub fn following(last_play: &'a [Card]) -> Self {
        Self::new(last_play, false, false)
    }
}

/// Why a play was rejected. `Display` gives the text shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum RejectReason {
    #[error("No cards selected")]
    NoCards,
    #[error("First play must include the 3 of Diamonds")]
    MissingOpeningCard,
    #[error("Invalid card combination")]
    InvalidCombination,
    #[error("Must play same number of cards as last play")]
    SizeMismatch,
    #[error("Play does not beat the previous play")]
    DoesNotBeat,
}

/// Verdict for one proposed play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayValidation {
    pub is_valid: bool,
    pub play_type: PlayType,
    pub reason: Option<RejectReason>,
}

impl PlayValidation {
    fn accepted(play_type: PlayType) -> Self {
        Self {
            is_valid: true,
            play_type,
            reason: None,
        }
    }

    fn rejected(play_type: PlayType, reason: RejectReason) -> Self {
        Self {
            is_valid: false,
            play_type,
            reason: Some(reason),
        }
    }

    /// Human readable reason, present iff the play was rejected
    pub fn error_message(&self) -> Option<String> {
        self.reason.map(|reason| reason.to_string())
    }
}

pub fn contains_opening_card(cards: &[Card]) -> bool {
    cards.contains(&OPENING_CARD)
}

/// Decide whether `cards` may be played on the table described by `table`.
///
/// Rejections come back as a verdict carrying a [`RejectReason`]; this never
/// fails. The classified play type is carried on accepted verdicts and on
/// rejections that happen after classification.
pub fn validate_play(cards: &[Card], table: &TableContext<'_>) -> PlayValidation {
    if cards.is_empty() {
        return PlayValidation::rejected(PlayType::Invalid, RejectReason::NoCards);
    }

    if table.must_include_opening_card && !contains_opening_card(cards) {
        return PlayValidation::rejected(PlayType::Invalid, RejectReason::MissingOpeningCard);
    }

    // Five cards matching no sub-shape classify as Invalid too
    let play_type = determine_play_type(cards);
    if play_type == PlayType::Invalid {
        return PlayValidation::rejected(play_type, RejectReason::InvalidCombination);
    }

    // Opening move, or the round was passed out: no beat comparison
    if table.is_first_play || table.last_play.is_empty() {
        return PlayValidation::accepted(play_type);
    }

    if cards.len() != table.last_play.len() {
        return PlayValidation::rejected(play_type, RejectReason::SizeMismatch);
    }

    if !does_play_beat(cards, table.last_play) {
        return PlayValidation::rejected(play_type, RejectReason::DoesNotBeat);
    }

    PlayValidation::accepted(play_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{parse_cards, FiveCardType};

    fn cards(text: &str) -> Vec<Card> {
        parse_cards(text).unwrap()
    }

    #[test]
    fn test_empty_play_rejected_first() {
        let verdict = validate_play(&[], &TableContext::opening());
        assert!(!verdict.is_valid);
        assert_eq!(verdict.reason, Some(RejectReason::NoCards));
        assert_eq!(verdict.error_message().as_deref(), Some("No cards selected"));
    }

    #[test]
    fn test_opening_card_required() {
        let verdict = validate_play(&cards("4D"), &TableContext::opening());
        assert_eq!(verdict.reason, Some(RejectReason::MissingOpeningCard));

        // Checked before the shape, so junk without 3D reports the opening card
        let verdict = validate_play(&cards("4D 5C"), &TableContext::opening());
        assert_eq!(verdict.reason, Some(RejectReason::MissingOpeningCard));

        let verdict = validate_play(&cards("3D 3S"), &TableContext::opening());
        assert!(verdict.is_valid);
        assert_eq!(verdict.play_type, PlayType::Pair);
    }

    #[test]
    fn test_first_play_accepts_any_shape_with_opening_card() {
        let verdict = validate_play(&cards("3D 4C 5H 6S 7D"), &TableContext::opening());
        assert!(verdict.is_valid);
        assert_eq!(
            verdict.play_type,
            PlayType::FiveCard(FiveCardType::Straight)
        );
        assert_eq!(verdict.play_type.five_card_type(), Some(FiveCardType::Straight));
    }

    #[test]
    fn test_first_play_ignores_last_play() {
        let last = cards("2S");
        let table = TableContext::new(&last, true, false);
        assert!(validate_play(&cards("3C"), &table).is_valid);
    }

    #[test]
    fn test_invalid_combination() {
        let last = cards("3S 3H");
        let verdict = validate_play(&cards("4D 5C"), &TableContext::following(&last));
        assert_eq!(verdict.play_type, PlayType::Invalid);
        assert_eq!(verdict.reason, Some(RejectReason::InvalidCombination));

        let verdict = validate_play(&cards("3H 4S 5D 6C 8H"), &TableContext::default());
        assert_eq!(verdict.reason, Some(RejectReason::InvalidCombination));
    }

    #[test]
    fn test_cleared_table_is_unconstrained() {
        let verdict = validate_play(&cards("9D 9C 9H"), &TableContext::default());
        assert!(verdict.is_valid);
        assert_eq!(verdict.play_type, PlayType::Triple);
        assert_eq!(verdict.reason, None);
    }

    #[test]
    fn test_size_mismatch() {
        let last = cards("3S 3H");
        let verdict = validate_play(&cards("2S"), &TableContext::following(&last));
        assert!(!verdict.is_valid);
        assert_eq!(verdict.play_type, PlayType::Single);
        assert_eq!(verdict.reason, Some(RejectReason::SizeMismatch));
    }

    #[test]
    fn test_does_not_beat() {
        let last = cards("KH");
        let verdict = validate_play(&cards("3C"), &TableContext::following(&last));
        assert_eq!(verdict.reason, Some(RejectReason::DoesNotBeat));
        assert_eq!(
            verdict.error_message().as_deref(),
            Some("Play does not beat the previous play")
        );
    }

    #[test]
    fn test_verdict_serializes() {
        let verdict = validate_play(&cards("3D"), &TableContext::opening());
        let json = serde_json::to_value(verdict).unwrap();
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["play_type"], "Single");
        assert!(json["reason"].is_null());

        let last = cards("KH");
        let verdict = validate_play(&cards("3C"), &TableContext::following(&last));
        let json = serde_json::to_value(verdict).unwrap();
        assert_eq!(json["reason"], "DoesNotBeat");
    }
}
