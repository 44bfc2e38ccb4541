use thiserror::Error;

use crate::game::{parse_cards, Card, CardParseError, SortOrder};

pub const HELP_TEXT: &str = "\
Commands:
  play <cards>      play cards, e.g. 'play 3D' or 'play 10H 10S'
  check <cards>     check a play without making it
  pass              pass the turn
  sort [rank|suit]  sort your hand (rank by default)
  hand              show your hand
  status            show the table
  help              show this help
  quit              leave the game
Cards are rank then suit: 3-9, 10 (or T), J, Q, K, A, 2 and D, C, H, S.";

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Vec<Card>),
    Check(Vec<Card>),
    Pass,
    Sort(SortOrder),
    Hand,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' to see available commands")]
    Unknown(String),
    #[error("'{0}' needs at least one card, e.g. '{0} 3D'")]
    MissingCards(&'static str),
    #[error("Unknown sort order '{0}'. Use 'rank' or 'suit'")]
    InvalidSortOrder(String),
    #[error(transparent)]
    Card(#[from] CardParseError),
}

impl Command {
    /// Parse a line of input. Blank lines give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = parts.collect();

        let command = match verb.to_lowercase().as_str() {
            "play" | "p" => Command::Play(parse_card_args("play", &rest)?),
            "check" | "c" => Command::Check(parse_card_args("check", &rest)?),
            "pass" => Command::Pass,
            "sort" => match rest.first().map(|arg| arg.to_lowercase()) {
                None => Command::Sort(SortOrder::ByRank),
                Some(arg) if arg == "rank" => Command::Sort(SortOrder::ByRank),
                Some(arg) if arg == "suit" => Command::Sort(SortOrder::BySuit),
                Some(arg) => return Err(CommandError::InvalidSortOrder(arg)),
            },
            "hand" | "h" => Command::Hand,
            "status" | "s" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_card_args(verb: &'static str, args: &[&str]) -> Result<Vec<Card>, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingCards(verb));
    }
    Ok(parse_cards(&args.join(" "))?)
}
