use http::StatusCode;
use todos::{Method, Request, Response, Router};

async fn echo_params(req: Request) -> Response {
    let mut pairs: Vec<String> = req.params().iter().map(|(k, v)| format!("{k}={v}")).collect();
    pairs.sort();
    Response::text(pairs.join("&"))
}

async fn tagged_first(_req: Request) -> Response {
    Response::text("first")
}

async fn tagged_second(_req: Request) -> Response {
    Response::text("second")
}

fn body(response: &Response) -> &str {
    std::str::from_utf8(response.body()).unwrap()
}

#[tokio::test]
async fn capture_is_available_to_handler() {
    let router = Router::new().get("/todos/{id}", |req: Request| async move {
        Response::text(req.param("id").unwrap_or_default().to_owned())
    });

    let response = router.dispatch(Request::new("GET", "/todos/42")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(body(&response), "42");
}

#[tokio::test]
async fn params_contain_exactly_the_declared_captures() {
    let router = Router::new().get("/users/{user}/todos/{id}", echo_params);

    let response = router.dispatch(Request::new("GET", "/users/ann/todos/7")).await;
    assert_eq!(body(&response), "id=7&user=ann");
}

#[tokio::test]
async fn wrong_method_is_405_with_allow() {
    let router = Router::new().get("/todos/{id}", echo_params);

    let response = router.dispatch(Request::new("DELETE", "/todos/42")).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.header("allow"), Some("GET"));
    assert_eq!(body(&response), "method not allowed\n");
}

#[tokio::test]
async fn allow_lists_every_matching_method_once() {
    let router = Router::new()
        .put("/todos/{id}", echo_params)
        .get("/todos/{id}", echo_params)
        .get("/todos/{slug}", echo_params)
        .delete("/todos/{id}", echo_params)
        .post("/todos", echo_params);

    let response = router.dispatch(Request::new("PATCH", "/todos/9")).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.header("allow"), Some("DELETE, GET, PUT"));
}

#[tokio::test]
async fn exact_match_wins_over_capture() {
    let router = Router::new()
        .get("/todos/{id}", echo_params)
        .get("/todos", |_req: Request| async { "list" });

    let response = router.dispatch(Request::new("GET", "/todos")).await;
    assert_eq!(body(&response), "list");

    let router = Router::new()
        .get("/todos/{id}", echo_params)
        .get("/todos/active", |_req: Request| async { "active" });

    let response = router.dispatch(Request::new("GET", "/todos/active")).await;
    assert_eq!(body(&response), "active");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let router = Router::new()
        .get("/todos", echo_params)
        .get("/todos/{id}", echo_params);

    let response = router.dispatch(Request::new("GET", "/unknown/path")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.header("allow"), None);
    assert_eq!(body(&response), "404 page not found\n");
}

#[tokio::test]
async fn segment_count_must_match() {
    let router = Router::new().get("/todos/{id}", echo_params);

    for path in ["/todos/1/2", "/todos", "/"] {
        let response = router.dispatch(Request::new("GET", path)).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn first_registered_capture_wins() {
    let router = Router::new()
        .get("/todos/{id}", tagged_first)
        .get("/todos/{slug}", tagged_second);

    let response = router.dispatch(Request::new("GET", "/todos/1")).await;
    assert_eq!(body(&response), "first");
}

#[tokio::test]
async fn re_registration_overwrites() {
    let router = Router::new()
        .get("/todos", tagged_first)
        .get("/todos", tagged_second);

    let response = router.dispatch(Request::new("GET", "/todos")).await;
    assert_eq!(body(&response), "second");
}

#[tokio::test]
async fn trailing_slash_still_matches() {
    let router = Router::new().get("/todos/{id}", echo_params);

    let response = router.dispatch(Request::new("GET", "/todos/5/")).await;
    assert_eq!(body(&response), "id=5");
}

#[tokio::test]
async fn unmatched_route_has_no_params() {
    let router = Router::new().on(Method::Get, "/todos", |req: Request| async move {
        assert!(req.params().is_empty());
        Response::text(req.param("id").unwrap_or("none").to_owned())
    });

    let response = router.dispatch(Request::new("GET", "/todos")).await;
    assert_eq!(body(&response), "none");
}
