use bigtwo_rules::{AppError, BasicBotStrategy, Game, GameConfig, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // Logs go to stderr; stdout carries the game
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bigtwo_rules=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GameConfig::from_env();
    info!(?config, "Starting Big Two");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let game = Game::new_game(&config.player_specs(), &mut rng)?;

    let mut session = Session::new(game, Box::new(BasicBotStrategy::new()), config.ai_delay);
    let end = session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!(?end, "Session ended");
    Ok(())
}
