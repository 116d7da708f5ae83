//! Request router.
//!
//! One route table per HTTP method. Within a table, a literal-only pattern
//! equal to the request path always wins. Otherwise patterns are tried in
//! registration order and the first structural match wins. Build the router
//! once at startup; after that it is only ever read.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::pattern::{Params, Pattern};
use crate::request::Request;
use crate::response::Response;

struct Route<S> {
    pattern: Pattern,
    handler: BoxedHandler<S>,
}

/// Routes registered under one method.
struct Table<S> {
    exact: HashMap<String, BoxedHandler<S>>,
    routes: Vec<Route<S>>,
}

impl<S> Default for Table<S> {
    fn default() -> Self {
        Self { exact: HashMap::new(), routes: Vec::new() }
    }
}

impl<S> Table<S> {
    /// Re-registering a pattern replaces its handler in place.
    fn insert(&mut self, pattern: Pattern, handler: BoxedHandler<S>) {
        if pattern.is_literal() {
            self.exact.insert(pattern.as_str().to_owned(), Arc::clone(&handler));
        }

        match self.routes.iter_mut().find(|r| r.pattern.as_str() == pattern.as_str()) {
            Some(route) => route.handler = handler,
            None => self.routes.push(Route { pattern, handler }),
        }
    }

    fn find(&self, path: &str) -> Option<(&BoxedHandler<S>, Params)> {
        if let Some(handler) = self.exact.get(path) {
            return Some((handler, Params::default()));
        }

        self.routes.iter().find_map(|route| {
            route.pattern.matches(path).map(|params| (&route.handler, params))
        })
    }
}

/// Outcome of routing one (method, path) pair.
pub enum Resolution<S> {
    /// A handler was found, along with the parameters its pattern captured.
    Matched(BoxedHandler<S>, Params),
    /// The path is routed, but only under these methods (sorted, unique).
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

/// The application router.
///
/// `S` is shared state handed to every handler that asks for it; a router
/// built with [`Router::new`] has none.
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use todos::{Request, Response, Router};
/// # struct Db;
/// # async fn list(_: Arc<Db>, _: Request) -> Response { Response::text("") }
/// # async fn ping(_: Request) -> Response { Response::text("") }
/// let app = Router::with_state(Arc::new(Db))
///     .get("/todos", list)
///     .get("/ping", ping);
/// ```
pub struct Router<S = ()> {
    tables: HashMap<Method, Table<S>>,
    state: S,
}

impl Router<()> {
    pub fn new() -> Self {
        Self::with_state(())
    }
}

impl Default for Router<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + 'static> Router<S> {
    /// A router whose handlers may take a clone of `state` as first argument.
    pub fn with_state(state: S) -> Self {
        Self { tables: HashMap::new(), state }
    }

    /// Register a handler for a method + pattern pair. Returns `self` for chaining.
    ///
    /// Patterns are not validated. Registering the same method and pattern
    /// twice keeps the later handler.
    pub fn on<H>(mut self, method: Method, pattern: &str, handler: impl Handler<S, H>) -> Self {
        self.tables
            .entry(method)
            .or_default()
            .insert(Pattern::parse(pattern), handler.into_boxed_handler());
        self
    }

    pub fn get<H>(self, pattern: &str, handler: impl Handler<S, H>) -> Self {
        self.on(Method::Get, pattern, handler)
    }

    pub fn post<H>(self, pattern: &str, handler: impl Handler<S, H>) -> Self {
        self.on(Method::Post, pattern, handler)
    }

    pub fn put<H>(self, pattern: &str, handler: impl Handler<S, H>) -> Self {
        self.on(Method::Put, pattern, handler)
    }

    pub fn delete<H>(self, pattern: &str, handler: impl Handler<S, H>) -> Self {
        self.on(Method::Delete, pattern, handler)
    }

    /// Routes `path` under `method` without invoking anything.
    ///
    /// `method` is the raw request method. Methods the router does not know
    /// have no table, so they can only ever produce `405` or `404`.
    pub fn resolve(&self, method: &str, path: &str) -> Resolution<S> {
        let table = method.parse::<Method>().ok().and_then(|m| self.tables.get(&m));
        if let Some((handler, params)) = table.and_then(|t| t.find(path)) {
            return Resolution::Matched(Arc::clone(handler), params);
        }

        let allowed = self.allowed_methods(path);
        if allowed.is_empty() {
            Resolution::NotFound
        } else {
            Resolution::MethodNotAllowed(allowed)
        }
    }

    /// Every method under which some pattern matches `path`, sorted by name.
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let mut allowed: Vec<Method> = self.tables.iter()
            .filter(|(_, table)| table.find(path).is_some())
            .map(|(method, _)| *method)
            .collect();
        allowed.sort_by_key(|m| m.as_str());
        allowed.dedup();
        allowed
    }

    /// Routes `req` and runs the matched handler, or produces the `404` /
    /// `405` response.
    pub async fn dispatch(&self, mut req: Request) -> Response {
        let response = match self.resolve(&req.method, &req.path) {
            Resolution::Matched(handler, params) => {
                req.params = params;
                let method = req.method.clone();
                let path = req.path.clone();
                let response = handler.call(self.state.clone(), req).await;
                debug!(%method, %path, status = response.status.as_u16(), "handled");
                return response;
            }
            Resolution::MethodNotAllowed(allowed) => {
                let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
                Response::method_not_allowed(&allow)
            }
            Resolution::NotFound => Response::not_found(),
        };

        debug!(method = %req.method, path = %req.path, status = response.status.as_u16(), "unrouted");
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn noop(_req: Request) -> Response {
        Response::text("")
    }

    #[test]
    fn literal_beats_earlier_capture() {
        let router = Router::new()
            .get("/todos/{id}", noop)
            .get("/todos/new", noop);

        match router.resolve("GET", "/todos/new") {
            Resolution::Matched(_, params) => assert!(params.is_empty()),
            _ => panic!("expected a match"),
        }
    }

    #[test]
    fn duplicate_registration_keeps_one_route() {
        let router = Router::new()
            .get("/todos/{id}", noop)
            .get("/todos/{id}", noop);

        assert_eq!(router.tables[&Method::Get].routes.len(), 1);
    }

    #[test]
    fn allowed_methods_are_sorted() {
        let router = Router::new()
            .put("/todos/{id}", noop)
            .delete("/todos/{id}", noop)
            .get("/todos/{id}", noop);

        assert_eq!(
            router.allowed_methods("/todos/1"),
            vec![Method::Delete, Method::Get, Method::Put],
        );
        assert!(router.allowed_methods("/nope").is_empty());
    }

    #[tokio::test]
    async fn stateful_and_plain_handlers_share_a_router() {
        async fn greet(name: Arc<String>, _req: Request) -> Response {
            Response::text(format!("hello {name}"))
        }

        let router = Router::with_state(Arc::new("ann".to_owned()))
            .get("/hello", greet)
            .get("/ping", noop);

        let response = router.dispatch(Request::new("GET", "/hello")).await;
        assert_eq!(response.body(), b"hello ann");

        let response = router.dispatch(Request::new("GET", "/ping")).await;
        assert_eq!(response.status_code(), http::StatusCode::OK);
    }

    #[test]
    fn unknown_method_on_routed_path_is_not_allowed() {
        let router = Router::new().get("/todos", noop);

        match router.resolve("BREW", "/todos") {
            Resolution::MethodNotAllowed(allowed) => assert_eq!(allowed, vec![Method::Get]),
            _ => panic!("expected 405"),
        }
    }
}
