//! # todos
//!
//! A small CRUD service for todo items, and the router it runs on.
//!
//! ## Routing
//!
//! Routes are `(method, pattern)` pairs. A pattern is a `/`-separated list of
//! literal segments and `{name}` captures, each capture matching exactly one
//! non-empty segment:
//!
//! - a literal-only pattern equal to the request path always wins;
//! - otherwise patterns are tried in registration order, first match wins;
//! - a path routed only under other methods gets `405` with a sorted `Allow`;
//! - anything else gets `404`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use todos::{Request, Response, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .get("/todos", list)
//!         .get("/todos/{id}", show);
//!
//!     Server::bind(([0, 0, 0, 0], 3000).into()).serve(app).await.unwrap();
//! }
//!
//! async fn list(_req: Request) -> Response {
//!     Response::json(b"[]".to_vec())
//! }
//!
//! async fn show(req: Request) -> Response {
//!     let id = req.param("id").unwrap_or_default();
//!     Response::json(format!(r#"{{"id":"{id}"}}"#).into_bytes())
//! }
//! ```

mod error;
mod handler;
mod method;
mod pattern;
mod request;
mod response;
mod router;
mod server;

pub mod config;
pub mod todo;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::{Method, UnknownMethod};
pub use pattern::Params;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::{Resolution, Router};
pub use server::Server;
