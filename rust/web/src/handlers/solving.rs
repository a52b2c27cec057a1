//! Solving endpoint.

use std::sync::Arc;

use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::Reply;

use cubik_engine::moves;

use crate::errors::IntoErrorResponse;
use crate::solver::CommandSolver;
use crate::state::CubeStore;

#[derive(Debug, Serialize)]
pub struct SolvingResponse {
    pub state: String,
    pub solution: String,
    pub moves: usize,
    pub already_solved: bool,
}

/// POST `/api/solving/start` - hand the current cube to the external solver.
///
/// The cube itself is not mutated; the caller decides whether to animate or
/// apply the returned solution.
pub async fn start_solving(cube: Arc<CubeStore>, solver: Arc<CommandSolver>) -> Response {
    let view = match cube.snapshot() {
        Ok(view) => view,
        Err(err) => return err.into_http_response(),
    };

    match solver.solve(&view.state).await {
        Ok(solution) => {
            let body = SolvingResponse {
                state: view.state,
                moves: solution.len(),
                already_solved: solution.is_empty(),
                solution: moves::format_sequence(&solution),
            };
            reply::with_status(reply::json(&body), StatusCode::OK).into_response()
        }
        Err(err) => err.into_http_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = warp::hyper::body::to_bytes(response.into_body())
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn solved_cube_needs_no_solver() {
        let cube = Arc::new(CubeStore::new());
        let solver = Arc::new(CommandSolver::new("/nonexistent/solver"));

        let response = start_solving(cube, solver).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["already_solved"], true);
        assert_eq!(json["moves"], 0);
        assert_eq!(json["solution"], "");
    }

    #[tokio::test]
    async fn missing_solver_maps_to_bad_gateway() {
        let cube = Arc::new(CubeStore::new());
        cube.apply_moves("R U").unwrap();
        let solver = Arc::new(CommandSolver::new("/nonexistent/solver"));

        let response = start_solving(cube, solver).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let json = body_json(response).await;
        assert_eq!(json["error"], "solver_unavailable");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn stub_solver_reports_solution() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("solver.sh");
        std::fs::write(&script, "#!/bin/sh\necho \"U' R'\"\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let cube = Arc::new(CubeStore::new());
        cube.apply_moves("R U").unwrap();
        let solver = Arc::new(CommandSolver::new(script.display().to_string()));

        let response = start_solving(cube, solver).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["solution"], "U' R'");
        assert_eq!(json["moves"], 2);
        assert_eq!(json["already_solved"], false);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn solver_error_line_maps_to_unprocessable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("solver.sh");
        std::fs::write(&script, "#!/bin/sh\necho \"ERROR: Invalid cube state\"\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let cube = Arc::new(CubeStore::new());
        cube.apply_moves("B2").unwrap();
        let solver = Arc::new(CommandSolver::new(script.display().to_string()));

        let response = start_solving(cube, solver).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["error"], "unsolvable_state");
    }
}
