use std::future::Future;

use uuid::Uuid;

use super::model::{Todo, TodoChanges};

/// Failure talking to the backing store.
///
/// A missing todo is not an error: lookups return `Ok(None)` and deletes
/// return `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for todo items.
///
/// Futures are `Send` so handlers built on a store can run on any tokio
/// worker.
pub trait TodoStore: Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Result<Vec<Todo>, StoreError>> + Send;

    fn get(&self, id: Uuid) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    /// Inserts a new, not-done todo with a fresh id.
    fn create(&self, description: String) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    /// Returns the updated todo, or `None` if `id` does not exist.
    fn update(
        &self,
        id: Uuid,
        changes: TodoChanges,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    /// Returns whether a todo was deleted.
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<bool, StoreError>> + Send;
}
