//! Cube state endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::Reply;

use cubik_engine::scramble::DEFAULT_SCRAMBLE_LENGTH;

use crate::errors::IntoErrorResponse;
use crate::state::CubeStore;

#[derive(Debug, Default, Deserialize)]
pub struct ScrambleRequest {
    pub length: Option<usize>,
    pub seed: Option<u64>,
    pub double_chance: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyMovesRequest {
    pub moves: String,
}

#[derive(Debug, Deserialize)]
pub struct SetStateRequest {
    pub state: String,
}

/// GET `/api/cube` - current cube snapshot.
pub async fn get_cube(cube: Arc<CubeStore>) -> Response {
    match cube.snapshot() {
        Ok(view) => success_response(StatusCode::OK, view),
        Err(err) => err.into_http_response(),
    }
}

/// POST `/api/cube/reset` - back to the solved cube.
pub async fn reset_cube(cube: Arc<CubeStore>) -> Response {
    match cube.reset() {
        Ok(view) => success_response(StatusCode::OK, view),
        Err(err) => err.into_http_response(),
    }
}

/// POST `/api/cube/scramble` - scramble from solved, returning the sequence
/// and the seed to reproduce it.
pub async fn scramble_cube(cube: Arc<CubeStore>, request: ScrambleRequest) -> Response {
    let length = request.length.unwrap_or(DEFAULT_SCRAMBLE_LENGTH);
    if length == 0 || length > 1000 {
        return crate::errors::ErrorResponse::new(
            "invalid_cube_input",
            "length must be within 1..=1000",
        )
        .into_response(StatusCode::BAD_REQUEST);
    }
    if let Some(chance) = request.double_chance {
        if !(0.0..=1.0).contains(&chance) {
            return crate::errors::ErrorResponse::new(
                "invalid_cube_input",
                "double_chance must be within 0..=1",
            )
            .into_response(StatusCode::BAD_REQUEST);
        }
    }

    match cube.scramble(length, request.seed, request.double_chance) {
        Ok(outcome) => success_response(StatusCode::OK, outcome),
        Err(err) => err.into_http_response(),
    }
}

/// POST `/api/cube/moves` - apply a move sequence to the current cube.
pub async fn apply_moves(cube: Arc<CubeStore>, request: ApplyMovesRequest) -> Response {
    match cube.apply_moves(&request.moves) {
        Ok(view) => success_response(StatusCode::OK, view),
        Err(err) => err.into_http_response(),
    }
}

/// POST `/api/cube/state` - replace the cube from a facelet string.
pub async fn set_state(cube: Arc<CubeStore>, request: SetStateRequest) -> Response {
    match cube.set_state(&request.state) {
        Ok(view) => success_response(StatusCode::OK, view),
        Err(err) => err.into_http_response(),
    }
}

fn success_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    reply::with_status(reply::json(&body), status).into_response()
}
