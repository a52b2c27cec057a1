//! Command handler modules for the cubik CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod apply;
pub mod cfg;
pub mod check;
pub mod scramble;
pub mod solve;

pub use apply::handle_apply_command;
pub use cfg::handle_cfg_command;
pub use check::handle_check_command;
pub use scramble::handle_scramble_command;
pub use solve::handle_solve_command;
