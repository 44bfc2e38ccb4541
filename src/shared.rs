use thiserror::Error;

use crate::game::GameError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
