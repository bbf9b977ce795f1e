//! Command handler modules for the Hanabi CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and stdin
//!   (`&mut dyn BufRead`) are passed in, so handlers run against buffers in tests
//! - Error propagation: all errors propagated via `CliError`

pub mod cfg;
pub mod deal;
pub mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
