// Interactive table: reads commands for human seats, auto-plays computer seats
// and writes a plain-text transcript. Generic over its input and output so
// tests can script a whole game through byte buffers.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

use crate::bot::BotStrategy;
use crate::game::{format_cards, Card, Game, GamePhase};
use crate::shared::AppError;

use super::commands::{Command, HELP_TEXT};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    Quit,
    EndOfInput,
}

enum Flow {
    Continue,
    /// A move was made; announce the next turn
    Moved,
    Quit,
}

pub struct Session {
    game: Game,
    strategy: Box<dyn BotStrategy>,
    ai_delay: Duration,
}

impl Session {
    pub fn new(game: Game, strategy: Box<dyn BotStrategy>, ai_delay: Duration) -> Self {
        Self {
            game,
            strategy,
            ai_delay,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    /// Run until the game is won, the player quits, or input runs out
    #[instrument(skip_all, fields(game_id = %self.game.id(), strategy = self.strategy.strategy_name()))]
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<SessionEnd, AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(players = self.game.players().len(), "Session started");
        say(
            &mut writer,
            &format!(
                "Big Two - {} players. Type 'help' for commands.",
                self.game.players().len()
            ),
        )
        .await?;

        let mut announce = true;
        loop {
            if self.run_computers(&mut writer).await? {
                announce = true;
            }

            if self.game.phase() == GamePhase::Finished {
                self.write_results(&mut writer).await?;
                info!("Session finished");
                return Ok(SessionEnd::GameOver);
            }

            let seat = self.game.current_seat();
            if announce {
                self.write_turn(&mut writer, seat).await?;
                announce = false;
            }
            writer.write_all(b"> ").await?;
            writer.flush().await?;

            let mut line = String::new();
            if reader.read_line(&mut line).await? == 0 {
                debug!("Input closed");
                say(&mut writer, "").await?;
                return Ok(SessionEnd::EndOfInput);
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    say(&mut writer, &format!("Error: {}", err)).await?;
                    continue;
                }
            };

            match self.handle(seat, command, &mut writer).await? {
                Flow::Continue => {}
                Flow::Moved => announce = true,
                Flow::Quit => {
                    info!("Player quit");
                    say(&mut writer, "Goodbye!").await?;
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    async fn handle<W>(&mut self, seat: usize, command: Command, writer: &mut W) -> Result<Flow, AppError>
    where
        W: AsyncWrite + Unpin,
    {
        match command {
            Command::Play(cards) => self.human_play(seat, &cards, writer).await,
            Command::Check(cards) => {
                let verdict = self.game.validate(&cards);
                say(writer, &serde_json::to_string(&verdict)?).await?;
                Ok(Flow::Continue)
            }
            Command::Pass => {
                let name = self.seat_name(seat);
                match self.game.pass(seat) {
                    Ok(outcome) => {
                        say(writer, &format!("{} passed", name)).await?;
                        if let Some(winner) = outcome.round_won_by {
                            self.write_round_won(writer, winner).await?;
                        }
                        Ok(Flow::Moved)
                    }
                    Err(err) => {
                        say(writer, &format!("Error: {}", err)).await?;
                        Ok(Flow::Continue)
                    }
                }
            }
            Command::Sort(order) => {
                if let Some(player) = self.game.player_mut(seat) {
                    player.sort(order);
                }
                self.write_hand(writer, seat).await?;
                Ok(Flow::Continue)
            }
            Command::Hand => {
                self.write_hand(writer, seat).await?;
                Ok(Flow::Continue)
            }
            Command::Status => {
                self.write_table(writer).await?;
                Ok(Flow::Continue)
            }
            Command::Help => {
                say(writer, HELP_TEXT).await?;
                Ok(Flow::Continue)
            }
            Command::Quit => Ok(Flow::Quit),
        }
    }

    async fn human_play<W>(&mut self, seat: usize, cards: &[Card], writer: &mut W) -> Result<Flow, AppError>
    where
        W: AsyncWrite + Unpin,
    {
        let name = self.seat_name(seat);
        match self.game.play_cards(seat, cards) {
            Ok(outcome) => {
                say(
                    writer,
                    &format!("{} played {} ({})", name, format_cards(cards), outcome.play_type),
                )
                .await?;
                Ok(Flow::Moved)
            }
            Err(err) => {
                debug!(seat, cards = %format_cards(cards), %err, "Human play refused");
                say(writer, &format!("Error: {}", err)).await?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Let computer seats move until a human is up or the game ends.
    /// Returns whether any computer moved.
    async fn run_computers<W>(&mut self, writer: &mut W) -> Result<bool, AppError>
    where
        W: AsyncWrite + Unpin,
    {
        let mut moved = false;
        while self.game.phase() == GamePhase::InProgress && !self.game.current_player().is_human() {
            if !self.ai_delay.is_zero() {
                tokio::time::sleep(self.ai_delay).await;
            }

            let seat = self.game.current_seat();
            let name = self.seat_name(seat);
            match self.strategy.decide_move(&self.game, seat) {
                Some(cards) => {
                    let outcome = self.game.play_cards(seat, &cards)?;
                    say(
                        writer,
                        &format!("{} played {} ({})", name, format_cards(&cards), outcome.play_type),
                    )
                    .await?;
                }
                None => {
                    let outcome = self.game.pass(seat).inspect_err(|err| {
                        warn!(seat, %err, "Computer could not pass");
                    })?;
                    say(writer, &format!("{} passed", name)).await?;
                    if let Some(winner) = outcome.round_won_by {
                        self.write_round_won(writer, winner).await?;
                    }
                }
            }
            moved = true;
        }
        Ok(moved)
    }

    fn seat_name(&self, seat: usize) -> String {
        self.game
            .player(seat)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Seat {}", seat))
    }

    async fn write_turn<W>(&self, writer: &mut W, seat: usize) -> Result<(), AppError>
    where
        W: AsyncWrite + Unpin,
    {
        say(writer, "").await?;
        say(writer, &self.game.status_message()).await?;
        if self.game.is_first_play_of_game() && self.game.table_context().must_include_opening_card {
            say(writer, "Your first play must include the 3 of Diamonds (3D).").await?;
        }
        self.write_hand(writer, seat).await
    }

    async fn write_hand<W>(&self, writer: &mut W, seat: usize) -> Result<(), AppError>
    where
        W: AsyncWrite + Unpin,
    {
        if let Some(player) = self.game.player(seat) {
            say(writer, &format!("{}'s hand: {}", player.name, player.hand_string())).await?;
        }
        Ok(())
    }

    async fn write_table<W>(&self, writer: &mut W) -> Result<(), AppError>
    where
        W: AsyncWrite + Unpin,
    {
        say(writer, &self.game.status_message()).await?;
        for (seat, player) in self.game.players().iter().enumerate() {
            let marker = if seat == self.game.current_seat() { "*" } else { " " };
            let passed = if player.has_passed { " (passed)" } else { "" };
            say(
                writer,
                &format!("{} {}: {} cards{}", marker, player.name, player.cards.len(), passed),
            )
            .await?;
        }
        Ok(())
    }

    async fn write_round_won<W>(&self, writer: &mut W, winner: usize) -> Result<(), AppError>
    where
        W: AsyncWrite + Unpin,
    {
        say(
            writer,
            &format!("Table cleared. Round won by {}.", self.seat_name(winner)),
        )
        .await?;
        Ok(())
    }

    async fn write_results<W>(&self, writer: &mut W) -> Result<(), AppError>
    where
        W: AsyncWrite + Unpin,
    {
        say(writer, "").await?;
        say(writer, &self.game.status_message()).await?;
        for player in self.game.players() {
            say(
                writer,
                &format!(
                    "  {}: {} cards left, score {}",
                    player.name,
                    player.cards.len(),
                    player.score
                ),
            )
            .await?;
        }
        writer.flush().await?;
        Ok(())
    }
}

async fn say<W>(writer: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await
}
