pub mod cube;
pub mod health;
pub mod scan;
pub mod solving;

pub use cube::{
    apply_moves, get_cube, reset_cube, scramble_cube, set_state, ApplyMovesRequest,
    ScrambleRequest, SetStateRequest,
};
pub use health::health;
pub use scan::{cancel_scan, scan_frame, start_scan, FrameRequest, StartScanResponse};
pub use solving::{start_solving, SolvingResponse};
