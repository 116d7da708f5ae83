//! The five CRUD handlers.
//!
//! Each one takes the shared store as router state; see
//! [`routes`](super::routes). Storage failures are logged and answered with a
//! plain-text `500`, bad input with a `400`.

use std::sync::Arc;

use http::StatusCode;
use serde::de::DeserializeOwned;
use tracing::error;
use uuid::Uuid;

use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};

use super::model::{CreateTodo, TodoChanges, UpdateTodo};
use super::store::{StoreError, TodoStore};

/// What the `id` path parameter resolved to.
enum TodoId {
    Missing,
    /// Syntactically not a UUID, so it cannot name a stored todo.
    Unknown,
    Valid(Uuid),
}

fn todo_id(req: &Request) -> TodoId {
    match req.param("id") {
        None | Some("") => TodoId::Missing,
        Some(raw) => Uuid::parse_str(raw).map_or(TodoId::Unknown, TodoId::Valid),
    }
}

macro_rules! require_id {
    ($req:expr) => {
        match todo_id(&$req) {
            TodoId::Valid(id) => id,
            TodoId::Unknown => return Response::not_found(),
            TodoId::Missing => {
                return Response::error(StatusCode::BAD_REQUEST, "missing todo id");
            }
        }
    };
}

/// Decodes a JSON body. A literal `null` reads as the all-defaults value,
/// so it fails the same validation as `{}`.
fn parse_body<T: DeserializeOwned + Default>(req: &Request) -> Option<T> {
    serde_json::from_slice::<Option<T>>(req.body())
        .ok()
        .map(Option::unwrap_or_default)
}

fn store_failure(what: &str, e: StoreError) -> Response {
    error!(error = %e, "{what}");
    Response::error(StatusCode::INTERNAL_SERVER_ERROR, what)
}

/// `GET /todos`
pub async fn list_todos<S: TodoStore>(store: Arc<S>, _req: Request) -> Response {
    match store.list().await {
        Ok(todos) => Json(todos).into_response(),
        Err(e) => store_failure("failed to fetch todos", e),
    }
}

/// `GET /todos/{id}`
pub async fn get_todo<S: TodoStore>(store: Arc<S>, req: Request) -> Response {
    let id = require_id!(req);

    match store.get(id).await {
        Ok(Some(todo)) => Json(todo).into_response(),
        Ok(None) => Response::not_found(),
        Err(e) => store_failure("failed to fetch todo", e),
    }
}

/// `POST /todos`
pub async fn create_todo<S: TodoStore>(store: Arc<S>, req: Request) -> Response {
    let Some(input) = parse_body::<CreateTodo>(&req) else {
        return Response::error(StatusCode::BAD_REQUEST, "invalid request body");
    };

    if input.description.is_empty() {
        return Response::error(StatusCode::BAD_REQUEST, "description is required");
    }

    match store.create(input.description).await {
        Ok(todo) => (StatusCode::CREATED, Json(todo)).into_response(),
        Err(e) => store_failure("failed to create todo", e),
    }
}

/// `PUT /todos/{id}`
///
/// Existence is checked before the description is validated, so an empty
/// description on an unknown id is a `404`.
pub async fn update_todo<S: TodoStore>(store: Arc<S>, req: Request) -> Response {
    let id = require_id!(req);

    let Some(input) = parse_body::<UpdateTodo>(&req) else {
        return Response::error(StatusCode::BAD_REQUEST, "invalid request body");
    };

    if input.is_empty() {
        return Response::error(StatusCode::BAD_REQUEST, "nothing to update");
    }

    match store.get(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Response::not_found(),
        Err(e) => return store_failure("failed to fetch todo", e),
    }

    if input.description.as_deref() == Some("") {
        return Response::error(StatusCode::BAD_REQUEST, "description cannot be empty");
    }

    match store.update(id, TodoChanges::from(input)).await {
        Ok(Some(todo)) => Json(todo).into_response(),
        // Deleted between the lookup and the update.
        Ok(None) => Response::not_found(),
        Err(e) => store_failure("failed to update todo", e),
    }
}

/// `DELETE /todos/{id}`
pub async fn delete_todo<S: TodoStore>(store: Arc<S>, req: Request) -> Response {
    let id = require_id!(req);

    match store.delete(id).await {
        Ok(true) => Response::builder().status(StatusCode::NO_CONTENT).no_body(),
        Ok(false) => Response::not_found(),
        Err(e) => store_failure("failed to delete todo", e),
    }
}
