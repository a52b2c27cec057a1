//! # cubik-scan: Face-Capture Aggregation
//!
//! Collects six per-face color readings from an external vision detector
//! into one 54-character facelet string. The detector itself (camera access,
//! contour finding, color classification) is an external collaborator; this
//! crate owns the session state machine, the bounded retry policy, and the
//! color canonicalization of the assembled string.
//!
//! ## Core Components
//!
//! - [`detector`] - The detector report contract and failure classification
//! - [`session`] - The capture session state machine and string assembly
//!
//! ## Quick Start
//!
//! ```rust
//! use cubik_scan::detector::DetectionReport;
//! use cubik_scan::session::CaptureSession;
//!
//! let mut session = CaptureSession::new();
//! session.begin();
//!
//! // Feed a detector report for the first face (front, white center)
//! let report = DetectionReport {
//!     success: true,
//!     valid_detection: true,
//!     colors: vec!["white".to_string(); 9],
//!     error: None,
//! };
//! let outcome = session.record(&report).expect("capture in progress");
//! println!("outcome: {:?}", outcome);
//! ```

pub mod detector;
pub mod session;

pub use detector::{DetectionFailure, DetectionReport};
pub use session::{
    CaptureError, CaptureFace, CaptureOutcome, CapturePhase, CaptureSession, CAPTURE_ORDER,
    MAX_CONSECUTIVE_FAILURES, RETRY_DELAY,
};
