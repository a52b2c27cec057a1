use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use cubik_engine::facelet::Color;

use crate::detector::{DetectionFailure, DetectionReport, REPEATED_FAILURE_GUIDANCE};

pub const FACE_COUNT: usize = 6;

/// Consecutive failures tolerated per face before the session surfaces
/// terminal guidance and resets its counter. The session never advances or
/// aborts on its own; the operator re-triggers capture.
pub const MAX_CONSECUTIVE_FAILURES: u8 = 3;

/// Delay the capture UI waits before an automatic retry. Scheduling is the
/// caller's responsibility; the session itself never sleeps.
pub const RETRY_DELAY: Duration = Duration::from_millis(1500);

/// Camera capture order. This is not the notation face order; see
/// [`CaptureSession::assemble`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureFace {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

pub const CAPTURE_ORDER: [CaptureFace; 6] = [
    CaptureFace::Front,
    CaptureFace::Right,
    CaptureFace::Back,
    CaptureFace::Left,
    CaptureFace::Top,
    CaptureFace::Bottom,
];

impl CaptureFace {
    pub fn name(self) -> &'static str {
        match self {
            CaptureFace::Front => "front",
            CaptureFace::Right => "right",
            CaptureFace::Back => "back",
            CaptureFace::Left => "left",
            CaptureFace::Top => "top",
            CaptureFace::Bottom => "bottom",
        }
    }

    /// Center color the detector expects at this capture position.
    pub fn expected_center(self) -> Color {
        match self {
            CaptureFace::Front => Color::White,
            CaptureFace::Right => Color::Red,
            CaptureFace::Back => Color::Yellow,
            CaptureFace::Left => Color::Orange,
            CaptureFace::Top => Color::Green,
            CaptureFace::Bottom => Color::Blue,
        }
    }

    pub fn from_index(index: usize) -> Option<CaptureFace> {
        CAPTURE_ORDER.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Capturing(usize),
    Complete,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("no capture in progress")]
    NotCapturing,
    #[error("capture incomplete: {0} of 6 faces recorded")]
    Incomplete(usize),
    #[error("canonicalization failed: color `{letter}` appears {count} times, expected 9")]
    Canonicalization { letter: char, count: usize },
}

/// What one recorded detector report did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Face accepted; `next_face` is the capture index to aim at next.
    FaceAccepted { next_face: usize },
    /// All six faces captured; `state` is the assembled 54-character string.
    Complete { state: String },
    /// Transient failure; the caller may retry the same face after
    /// [`RETRY_DELAY`]. `attempt` counts consecutive failures so far.
    Retry {
        failure: DetectionFailure,
        attempt: u8,
    },
    /// The attempt bound was hit. The face index is unchanged, the failure
    /// counter is reset, and the operator must re-trigger capture.
    AttemptsExhausted {
        failure: DetectionFailure,
        guidance: &'static str,
    },
}

/// State machine collecting six per-face captures into one facelet string.
///
/// `Idle -> Capturing(0..5) -> Complete`, with in-place retry on detection
/// failure. One detector report is processed at a time; concurrent captures
/// for the same session must be serialized by the caller.
#[derive(Debug)]
pub struct CaptureSession {
    phase: CapturePhase,
    captured: [Option<[Color; 9]>; FACE_COUNT],
    consecutive_failures: u8,
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            phase: CapturePhase::Idle,
            captured: [None; FACE_COUNT],
            consecutive_failures: 0,
        }
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    /// The face currently being captured, if any.
    pub fn current_face(&self) -> Option<CaptureFace> {
        match self.phase {
            CapturePhase::Capturing(index) => CaptureFace::from_index(index),
            _ => None,
        }
    }

    pub fn captured_count(&self) -> usize {
        self.captured.iter().filter(|face| face.is_some()).count()
    }

    /// Start (or restart) a scan at the first capture face.
    pub fn begin(&mut self) {
        *self = Self::new();
        self.phase = CapturePhase::Capturing(0);
    }

    /// Full reset to `Idle`. Safe in any state.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    /// Feed one detector report into the session.
    ///
    /// Fails with [`CaptureError::NotCapturing`] outside the `Capturing`
    /// phase. A usable report records the face and advances; anything else
    /// counts against the per-face attempt bound.
    pub fn record(&mut self, report: &DetectionReport) -> Result<CaptureOutcome, CaptureError> {
        let index = match self.phase {
            CapturePhase::Capturing(index) => index,
            _ => return Err(CaptureError::NotCapturing),
        };

        if !report.is_usable() {
            return Ok(self.record_failure(report.failure_kind()));
        }

        match convert_colors(&report.colors) {
            Some(colors) => self.record_success(index, colors),
            // Unknown color names slip through detectors with loose
            // validation; treat them as a color failure at this boundary.
            None => Ok(self.record_failure(DetectionFailure::ColorValidationFailed)),
        }
    }

    fn record_success(
        &mut self,
        index: usize,
        colors: [Color; 9],
    ) -> Result<CaptureOutcome, CaptureError> {
        self.captured[index] = Some(colors);
        self.consecutive_failures = 0;

        let next_face = index + 1;
        if next_face < FACE_COUNT {
            self.phase = CapturePhase::Capturing(next_face);
            Ok(CaptureOutcome::FaceAccepted { next_face })
        } else {
            self.phase = CapturePhase::Complete;
            let state = self.assemble()?;
            Ok(CaptureOutcome::Complete { state })
        }
    }

    fn record_failure(&mut self, failure: DetectionFailure) -> CaptureOutcome {
        self.consecutive_failures += 1;
        if self.consecutive_failures < MAX_CONSECUTIVE_FAILURES {
            CaptureOutcome::Retry {
                failure,
                attempt: self.consecutive_failures,
            }
        } else {
            self.consecutive_failures = 0;
            CaptureOutcome::AttemptsExhausted {
                failure,
                guidance: REPEATED_FAILURE_GUIDANCE,
            }
        }
    }

    /// Concatenate the six captured faces into a 54-character string and
    /// canonicalize it (each of the six letters exactly nine times).
    ///
    /// Faces are concatenated in capture order (front, right, back, left,
    /// top, bottom), not notation order. Remapping would change the solver
    /// input format this pipeline has always produced, so the order stays
    /// until the vision pipeline owners rule on it.
    pub fn assemble(&self) -> Result<String, CaptureError> {
        let recorded = self.captured_count();
        if recorded < FACE_COUNT {
            return Err(CaptureError::Incomplete(recorded));
        }

        let mut state = String::with_capacity(FACE_COUNT * 9);
        for face in self.captured.iter().flatten() {
            for color in face {
                state.push(color.letter());
            }
        }

        for letter in ['U', 'R', 'F', 'D', 'L', 'B'] {
            let count = state.chars().filter(|&ch| ch == letter).count();
            if count != 9 {
                return Err(CaptureError::Canonicalization { letter, count });
            }
        }
        Ok(state)
    }
}

fn convert_colors(names: &[String]) -> Option<[Color; 9]> {
    let mut colors = [Color::White; 9];
    for (slot, name) in colors.iter_mut().zip(names) {
        *slot = Color::from_name(name)?;
    }
    Some(colors)
}
