use std::time::Duration;

use tracing::warn;

use crate::game::{PlayerKind, PlayerSpec};

const DEFAULT_PLAYERS: usize = 4;
const DEFAULT_HUMANS: usize = 1;
const DEFAULT_AI_DELAY_MS: u64 = 500;

const COMPUTER_NAMES: [&str; 4] = ["CPU Alice", "CPU Bob", "CPU Charlie", "CPU Dana"];

/// Table setup for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seats at the table, 2 to 4
    pub players: usize,
    /// Human seats, taken from the front of the table
    pub humans: usize,
    /// Fixed shuffle seed for reproducible deals
    pub seed: Option<u64>,
    /// Pause before each computer move
    pub ai_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            humans: DEFAULT_HUMANS,
            seed: None,
            ai_delay: Duration::from_millis(DEFAULT_AI_DELAY_MS),
        }
    }
}

impl GameConfig {
    /// Load from `BIGTWO_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source. Bad values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let players = parse_or(&lookup, "BIGTWO_PLAYERS", DEFAULT_PLAYERS);
        let players = clamp_logged("BIGTWO_PLAYERS", players, 2, 4);

        let humans = parse_or(&lookup, "BIGTWO_HUMANS", DEFAULT_HUMANS);
        let humans = clamp_logged("BIGTWO_HUMANS", humans, 0, players);

        let seed = lookup("BIGTWO_SEED").and_then(|raw| match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(var = "BIGTWO_SEED", value = %raw, "Ignoring unparseable seed");
                None
            }
        });

        let delay_ms = parse_or(&lookup, "BIGTWO_AI_DELAY_MS", DEFAULT_AI_DELAY_MS);

        Self {
            players,
            humans,
            seed,
            ai_delay: Duration::from_millis(delay_ms),
        }
    }

    /// Seat list for `Game::new_game`: humans first, then computers
    pub fn player_specs(&self) -> Vec<PlayerSpec> {
        let mut specs = Vec::with_capacity(self.players);
        for seat in 0..self.humans {
            let name = if self.humans == 1 {
                "You".to_string()
            } else {
                format!("Player {}", seat + 1)
            };
            specs.push(PlayerSpec::new(name, PlayerKind::Human));
        }
        for name in COMPUTER_NAMES.iter().take(self.players - self.humans) {
            specs.push(PlayerSpec::new(*name, PlayerKind::Computer));
        }
        specs
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(var = key, value = %raw, "Unparseable value, using default");
            default
        }),
    }
}

fn clamp_logged(key: &str, value: usize, min: usize, max: usize) -> usize {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(var = key, value, clamped, "Value out of range");
    }
    clamped
}
