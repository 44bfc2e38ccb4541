#[macro_use]
pub mod game_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use game_builders::{hand, GameBuilder};
