//! Face-capture scan endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::Reply;

use cubik_scan::detector::DetectionReport;

use crate::errors::IntoErrorResponse;
use crate::scan::{FrameResult, ScanManager, ScanProgress};

#[derive(Debug, Deserialize)]
pub struct FrameRequest {
    #[serde(flatten)]
    pub report: DetectionReport,
}

#[derive(Debug, Serialize)]
pub struct StartScanResponse {
    #[serde(flatten)]
    pub progress: ScanProgress,
}

#[derive(Debug, Serialize)]
struct FrameResponse {
    #[serde(flatten)]
    result: FrameResult,
    #[serde(flatten)]
    progress: ScanProgress,
}

/// POST `/api/scan/start` - open a new capture session.
pub async fn start_scan(scans: Arc<ScanManager>) -> Response {
    match scans.start() {
        Ok(progress) => reply::with_status(
            reply::json(&StartScanResponse { progress }),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(err) => err.into_http_response(),
    }
}

/// POST `/api/scan/{id}/frame` - feed one detector report into the scan.
pub async fn scan_frame(scan_id: String, scans: Arc<ScanManager>, request: FrameRequest) -> Response {
    match scans.frame(&scan_id, &request.report) {
        Ok((result, progress)) => reply::with_status(
            reply::json(&FrameResponse { result, progress }),
            StatusCode::OK,
        )
        .into_response(),
        Err(err) => err.into_http_response(),
    }
}

/// POST `/api/scan/{id}/cancel` - drop a scan.
pub async fn cancel_scan(scan_id: String, scans: Arc<ScanManager>) -> Response {
    match scans.cancel(&scan_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_http_response(),
    }
}
