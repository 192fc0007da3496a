//! Command-line front end: dispatch table, interactive reader, executor and
//! output formatting.

pub mod commands;
pub mod format;
pub mod prompt;
pub mod session;

pub use commands::{lookup, parse_line, Command, CommandSpec, COMMANDS};
pub use format::NOT_AVAILABLE;
pub use prompt::Prompt;
pub use session::Session;
