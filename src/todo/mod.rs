//! The todo-item resource: model, storage backends and CRUD routes.

mod handlers;
mod memory;
mod model;
mod postgres;
mod store;

use std::sync::Arc;

use crate::router::Router;

pub use handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};
pub use memory::MemoryStore;
pub use model::{CreateTodo, Todo, TodoChanges, UpdateTodo};
pub use postgres::PgStore;
pub use store::{StoreError, TodoStore};

/// Builds the router for the todo endpoints on top of `store`.
///
/// | Method | Path          | Handler         |
/// |--------|---------------|-----------------|
/// | GET    | `/todos`      | [`list_todos`]  |
/// | POST   | `/todos`      | [`create_todo`] |
/// | GET    | `/todos/{id}` | [`get_todo`]    |
/// | PUT    | `/todos/{id}` | [`update_todo`] |
/// | DELETE | `/todos/{id}` | [`delete_todo`] |
pub fn routes<S: TodoStore>(store: Arc<S>) -> Router<Arc<S>> {
    Router::with_state(store)
        .get("/todos", list_todos::<S>)
        .post("/todos", create_todo::<S>)
        .get("/todos/{id}", get_todo::<S>)
        .put("/todos/{id}", update_todo::<S>)
        .delete("/todos/{id}", delete_todo::<S>)
}
