//! Cube API integration tests driven through the full warp route stack.

use cubik_web::{AppContext, WebServer};
use serde_json::{json, Value};

fn routes(ctx: &AppContext) -> warp::filters::BoxedFilter<(warp::reply::Response,)> {
    WebServer::routes(ctx)
}

fn parse(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("json body")
}

#[tokio::test]
async fn get_cube_starts_solved() {
    let ctx = AppContext::new_for_tests();
    let routes = routes(&ctx);

    let response = warp::test::request()
        .method("GET")
        .path("/api/cube")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    let body = parse(response.body());
    assert_eq!(body["solved"], true);
    assert_eq!(body["state"].as_str().unwrap().len(), 54);
}

#[tokio::test]
async fn moves_endpoint_mutates_the_shared_cube() {
    let ctx = AppContext::new_for_tests();
    let routes = routes(&ctx);

    let response = warp::test::request()
        .method("POST")
        .path("/api/cube/moves")
        .json(&json!({ "moves": "R U R' U'" }))
        .reply(&routes)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(parse(response.body())["solved"], false);

    // The same cube is visible through GET
    let response = warp::test::request()
        .method("GET")
        .path("/api/cube")
        .reply(&routes)
        .await;
    assert_eq!(parse(response.body())["solved"], false);

    let response = warp::test::request()
        .method("POST")
        .path("/api/cube/reset")
        .reply(&routes)
        .await;
    assert_eq!(parse(response.body())["solved"], true);
}

#[tokio::test]
async fn scramble_endpoint_is_reproducible_by_seed() {
    let ctx = AppContext::new_for_tests();
    let routes = routes(&ctx);

    let request = json!({ "length": 12, "seed": 42 });
    let first = warp::test::request()
        .method("POST")
        .path("/api/cube/scramble")
        .json(&request)
        .reply(&routes)
        .await;
    assert_eq!(first.status(), 200);
    let first = parse(first.body());

    let second = warp::test::request()
        .method("POST")
        .path("/api/cube/scramble")
        .json(&request)
        .reply(&routes)
        .await;
    let second = parse(second.body());

    assert_eq!(first["sequence"], second["sequence"]);
    assert_eq!(first["cube"]["state"], second["cube"]["state"]);
    assert_eq!(first["seed"], 42);
}

#[tokio::test]
async fn bad_move_token_answers_bad_request() {
    let ctx = AppContext::new_for_tests();
    let routes = routes(&ctx);

    let response = warp::test::request()
        .method("POST")
        .path("/api/cube/moves")
        .json(&json!({ "moves": "R Z2" }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
    let body = parse(response.body());
    assert_eq!(body["error"], "invalid_cube_input");
    assert!(body["message"].as_str().unwrap().contains("Z2"));
}

#[tokio::test]
async fn state_endpoint_round_trips_a_snapshot() {
    let ctx = AppContext::new_for_tests();
    let routes = routes(&ctx);

    let scrambled = warp::test::request()
        .method("POST")
        .path("/api/cube/scramble")
        .json(&json!({ "length": 10, "seed": 7 }))
        .reply(&routes)
        .await;
    let state = parse(scrambled.body())["cube"]["state"]
        .as_str()
        .unwrap()
        .to_string();

    warp::test::request()
        .method("POST")
        .path("/api/cube/reset")
        .reply(&routes)
        .await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/cube/state")
        .json(&json!({ "state": state }))
        .reply(&routes)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(parse(response.body())["state"], state);
}

#[tokio::test]
async fn invalid_state_answers_bad_request() {
    let ctx = AppContext::new_for_tests();
    let routes = routes(&ctx);

    let response = warp::test::request()
        .method("POST")
        .path("/api/cube/state")
        .json(&json!({ "state": "UUXUU" }))
        .reply(&routes)
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn solving_start_with_solved_cube_returns_empty_solution() {
    let ctx = AppContext::new_for_tests();
    let routes = routes(&ctx);

    let response = warp::test::request()
        .method("POST")
        .path("/api/solving/start")
        .reply(&routes)
        .await;
    assert_eq!(response.status(), 200);

    let body = parse(response.body());
    assert_eq!(body["already_solved"], true);
    assert_eq!(body["moves"], 0);
}
