//! # cubik-web: HTTP API for the cube engine
//!
//! A warp server exposing the cube state, the scramble generator, the
//! external solver, and the camera scan flow as a small JSON API. The server
//! owns one shared cube plus a registry of live scan sessions.

pub mod errors;
pub mod handlers;
pub mod logging;
pub mod scan;
pub mod server;
pub mod solver;
pub mod state;

pub use errors::{ErrorResponse, ErrorSeverity, IntoErrorResponse};
pub use logging::init_logging;
pub use scan::{FrameResult, ScanError, ScanId, ScanManager, ScanProgress};
pub use server::{
    AppContext, ServerConfig, ServerError, ServerHandle, WebServer, DEFAULT_SOLVER_COMMAND,
};
pub use solver::{CommandSolver, SolverError};
pub use state::{CubeStore, CubeView, ScrambleOutcome, StateError};
