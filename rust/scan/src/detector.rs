use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-face result payload returned by the external vision service.
///
/// Mirrors the detector's JSON: `colors` carries nine lowercase color names
/// in row-major order when the detection succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    pub success: bool,
    #[serde(rename = "validDetection", default)]
    pub valid_detection: bool,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectionReport {
    /// True when the report carries nine usable color readings.
    pub fn is_usable(&self) -> bool {
        self.success && self.valid_detection && self.colors.len() == 9
    }

    /// Classify a failed report. Reports without a recognized error code
    /// fall back to [`DetectionFailure::Unknown`].
    pub fn failure_kind(&self) -> DetectionFailure {
        self.error
            .as_deref()
            .map(DetectionFailure::from_code)
            .unwrap_or(DetectionFailure::Unknown)
    }
}

/// Transient detection failures, retried up to the session's attempt bound
/// and then surfaced as operator guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DetectionFailure {
    #[error("cube_contour_not_found")]
    ContourNotFound,
    #[error("color_validation_failed")]
    ColorValidationFailed,
    #[error("perspective_failed")]
    PerspectiveFailed,
    #[error("detection_failed")]
    Unknown,
}

impl DetectionFailure {
    /// Machine-readable code, matching the vision service's error strings.
    pub fn code(self) -> &'static str {
        match self {
            DetectionFailure::ContourNotFound => "cube_contour_not_found",
            DetectionFailure::ColorValidationFailed => "color_validation_failed",
            DetectionFailure::PerspectiveFailed => "perspective_failed",
            DetectionFailure::Unknown => "detection_failed",
        }
    }

    pub fn from_code(code: &str) -> DetectionFailure {
        match code {
            "cube_contour_not_found" => DetectionFailure::ContourNotFound,
            "color_validation_failed" => DetectionFailure::ColorValidationFailed,
            "perspective_failed" => DetectionFailure::PerspectiveFailed,
            _ => DetectionFailure::Unknown,
        }
    }

    /// Operator guidance shown for one failed attempt.
    pub fn guidance(self) -> &'static str {
        match self {
            DetectionFailure::ContourNotFound => {
                "Can't find cube face. Move closer, center the face, and reduce rotation."
            }
            DetectionFailure::ColorValidationFailed => {
                "Colors unclear. Improve lighting, avoid glare, and hold steady."
            }
            DetectionFailure::PerspectiveFailed => {
                "Perspective correction failed. Align the face parallel to the camera."
            }
            DetectionFailure::Unknown => "Detection failed. Adjust distance and lighting.",
        }
    }
}

/// Guidance shown once the per-face attempt bound is exhausted.
pub const REPEATED_FAILURE_GUIDANCE: &str =
    "Detection failed repeatedly. Try a different angle or lighting.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_codes_round_trip() {
        for kind in [
            DetectionFailure::ContourNotFound,
            DetectionFailure::ColorValidationFailed,
            DetectionFailure::PerspectiveFailed,
        ] {
            assert_eq!(DetectionFailure::from_code(kind.code()), kind);
        }
        assert_eq!(
            DetectionFailure::from_code("something_else"),
            DetectionFailure::Unknown
        );
    }

    #[test]
    fn report_deserializes_from_service_json() {
        let json = r#"{
            "success": false,
            "validDetection": false,
            "colors": [],
            "error": "cube_contour_not_found"
        }"#;
        let report: DetectionReport = serde_json::from_str(json).expect("valid report json");
        assert!(!report.is_usable());
        assert_eq!(report.failure_kind(), DetectionFailure::ContourNotFound);
    }

    #[test]
    fn report_without_error_code_is_unknown_failure() {
        let report = DetectionReport {
            success: false,
            valid_detection: false,
            colors: Vec::new(),
            error: None,
        };
        assert_eq!(report.failure_kind(), DetectionFailure::Unknown);
    }
}
