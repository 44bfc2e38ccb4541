pub mod commands;
pub mod session;

pub use commands::{Command, CommandError, HELP_TEXT};
pub use session::{Session, SessionEnd};
