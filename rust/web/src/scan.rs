//! Scan session registry for the web server.
//!
//! Each browser-driven capture flow gets its own [`CaptureSession`] keyed by
//! a UUID. Frame reports arrive one HTTP request at a time; the per-session
//! mutex serializes them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;
use warp::http::StatusCode;

use cubik_scan::detector::DetectionReport;
use cubik_scan::session::{CaptureError, CaptureOutcome, CaptureSession, RETRY_DELAY};

use crate::errors::IntoErrorResponse;

pub type ScanId = String;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan session not found: {0}")]
    NotFound(ScanId),
    #[error("scan storage lock poisoned")]
    StoragePoisoned,
    #[error("{0}")]
    Capture(#[from] CaptureError),
}

impl IntoErrorResponse for ScanError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScanError::NotFound(_) => StatusCode::NOT_FOUND,
            ScanError::StoragePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
            ScanError::Capture(CaptureError::NotCapturing) => StatusCode::CONFLICT,
            ScanError::Capture(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ScanError::NotFound(_) => "scan_not_found",
            ScanError::StoragePoisoned => "storage_poisoned",
            ScanError::Capture(CaptureError::NotCapturing) => "scan_not_capturing",
            ScanError::Capture(CaptureError::Incomplete(_)) => "scan_incomplete",
            ScanError::Capture(CaptureError::Canonicalization { .. }) => {
                "scan_canonicalization_failed"
            }
        }
    }

    fn error_message(&self) -> String {
        self.to_string()
    }
}

/// Progress snapshot returned alongside every frame outcome.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScanProgress {
    pub scan_id: ScanId,
    pub current_face: Option<&'static str>,
    pub captured_faces: usize,
}

/// What one frame did to the scan, in wire form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FrameResult {
    FaceAccepted {
        next_face: &'static str,
    },
    Complete {
        state: String,
    },
    Retry {
        failure: &'static str,
        guidance: &'static str,
        attempt: u8,
        retry_after_ms: u64,
    },
    AttemptsExhausted {
        failure: &'static str,
        guidance: &'static str,
    },
}

impl FrameResult {
    fn of(outcome: CaptureOutcome) -> Self {
        match outcome {
            CaptureOutcome::FaceAccepted { next_face } => FrameResult::FaceAccepted {
                next_face: cubik_scan::session::CAPTURE_ORDER[next_face].name(),
            },
            CaptureOutcome::Complete { state } => FrameResult::Complete { state },
            CaptureOutcome::Retry { failure, attempt } => FrameResult::Retry {
                failure: failure.code(),
                guidance: failure.guidance(),
                attempt,
                retry_after_ms: RETRY_DELAY.as_millis() as u64,
            },
            CaptureOutcome::AttemptsExhausted { failure, guidance } => {
                FrameResult::AttemptsExhausted {
                    failure: failure.code(),
                    guidance,
                }
            }
        }
    }
}

/// Registry of live capture sessions.
#[derive(Debug, Default)]
pub struct ScanManager {
    sessions: RwLock<HashMap<ScanId, Arc<Mutex<CaptureSession>>>>,
}

impl ScanManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_scans(&self) -> usize {
        self.sessions.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Start a new scan and return its id with the initial progress.
    pub fn start(&self) -> Result<ScanProgress, ScanError> {
        let scan_id = Uuid::new_v4().to_string();
        let mut session = CaptureSession::new();
        session.begin();

        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ScanError::StoragePoisoned)?;
        sessions.insert(scan_id.clone(), Arc::new(Mutex::new(session)));
        drop(sessions);

        self.progress(&scan_id)
    }

    /// Feed one detector report into the scan.
    ///
    /// A completed scan is removed from the registry along with a cancelled
    /// one; stale ids then answer 404.
    pub fn frame(
        &self,
        scan_id: &str,
        report: &DetectionReport,
    ) -> Result<(FrameResult, ScanProgress), ScanError> {
        let session = self.get(scan_id)?;
        let mut session = session.lock().map_err(|_| ScanError::StoragePoisoned)?;
        let outcome = session.record(report)?;

        let progress = ScanProgress {
            scan_id: scan_id.to_string(),
            current_face: session.current_face().map(|f| f.name()),
            captured_faces: session.captured_count(),
        };
        drop(session);

        let result = FrameResult::of(outcome);
        if matches!(result, FrameResult::Complete { .. }) {
            self.remove(scan_id)?;
        }
        Ok((result, progress))
    }

    /// Cancel and drop a scan.
    pub fn cancel(&self, scan_id: &str) -> Result<(), ScanError> {
        let session = self.get(scan_id)?;
        {
            let mut session = session.lock().map_err(|_| ScanError::StoragePoisoned)?;
            session.cancel();
        }
        self.remove(scan_id)
    }

    pub fn progress(&self, scan_id: &str) -> Result<ScanProgress, ScanError> {
        let session = self.get(scan_id)?;
        let session = session.lock().map_err(|_| ScanError::StoragePoisoned)?;
        Ok(ScanProgress {
            scan_id: scan_id.to_string(),
            current_face: session.current_face().map(|f| f.name()),
            captured_faces: session.captured_count(),
        })
    }

    fn get(&self, scan_id: &str) -> Result<Arc<Mutex<CaptureSession>>, ScanError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| ScanError::StoragePoisoned)?;
        sessions
            .get(scan_id)
            .cloned()
            .ok_or_else(|| ScanError::NotFound(scan_id.to_string()))
    }

    fn remove(&self, scan_id: &str) -> Result<(), ScanError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ScanError::StoragePoisoned)?;
        sessions.remove(scan_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_report(color: &str) -> DetectionReport {
        DetectionReport {
            success: true,
            valid_detection: true,
            colors: vec![color.to_string(); 9],
            error: None,
        }
    }

    fn failure_report(code: &str) -> DetectionReport {
        DetectionReport {
            success: false,
            valid_detection: false,
            colors: Vec::new(),
            error: Some(code.to_string()),
        }
    }

    #[test]
    fn start_registers_a_scan_at_the_front_face() {
        let manager = ScanManager::new();
        let progress = manager.start().unwrap();

        assert_eq!(progress.current_face, Some("front"));
        assert_eq!(progress.captured_faces, 0);
        assert_eq!(manager.active_scans(), 1);
    }

    #[test]
    fn full_capture_flow_completes_and_drops_the_scan() {
        let manager = ScanManager::new();
        let progress = manager.start().unwrap();

        let mut last = None;
        for color in ["white", "red", "yellow", "orange", "green", "blue"] {
            last = Some(
                manager
                    .frame(&progress.scan_id, &solid_report(color))
                    .unwrap(),
            );
        }

        let (result, progress) = last.unwrap();
        match result {
            FrameResult::Complete { state } => assert_eq!(state.len(), 54),
            other => panic!("expected Complete, got {:?}", other),
        }
        assert_eq!(progress.captured_faces, 6);
        assert_eq!(manager.active_scans(), 0);
    }

    #[test]
    fn retry_outcome_carries_guidance_and_delay() {
        let manager = ScanManager::new();
        let progress = manager.start().unwrap();

        let (result, _) = manager
            .frame(&progress.scan_id, &failure_report("cube_contour_not_found"))
            .unwrap();
        match result {
            FrameResult::Retry {
                failure,
                attempt,
                retry_after_ms,
                guidance,
            } => {
                assert_eq!(failure, "cube_contour_not_found");
                assert_eq!(attempt, 1);
                assert_eq!(retry_after_ms, 1500);
                assert!(!guidance.is_empty());
            }
            other => panic!("expected Retry, got {:?}", other),
        }
    }

    #[test]
    fn exhausted_attempts_keep_the_scan_alive() {
        let manager = ScanManager::new();
        let progress = manager.start().unwrap();

        let report = failure_report("perspective_failed");
        for _ in 0..2 {
            manager.frame(&progress.scan_id, &report).unwrap();
        }
        let (result, after) = manager.frame(&progress.scan_id, &report).unwrap();

        assert!(matches!(result, FrameResult::AttemptsExhausted { .. }));
        assert_eq!(after.current_face, Some("front"));
        assert_eq!(manager.active_scans(), 1, "operator may re-trigger capture");
    }

    #[test]
    fn cancel_removes_the_scan() {
        let manager = ScanManager::new();
        let progress = manager.start().unwrap();

        manager.cancel(&progress.scan_id).unwrap();
        assert_eq!(manager.active_scans(), 0);
        assert!(matches!(
            manager.frame(&progress.scan_id, &solid_report("white")),
            Err(ScanError::NotFound(_))
        ));
    }

    #[test]
    fn unknown_id_answers_not_found() {
        let manager = ScanManager::new();
        assert!(matches!(
            manager.cancel("nope"),
            Err(ScanError::NotFound(_))
        ));
    }
}
