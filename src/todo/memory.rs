//! Process-local store. Todos are lost on restart.

use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Todo, TodoChanges};
use super::store::{StoreError, TodoStore};

/// Keeps todos in insertion order behind a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        Ok(self.todos.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, description: String) -> Result<Todo, StoreError> {
        let todo = Todo { id: Uuid::new_v4(), description, is_done: false };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: Uuid, changes: TodoChanges) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        let Some(slot) = todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        *slot = changes.apply(slot.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_list_in_order() {
        let store = MemoryStore::new();
        let a = store.create("a".into()).await.unwrap();
        let b = store.create("b".into()).await.unwrap();

        assert!(!a.is_done);
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn update_missing_is_none() {
        let store = MemoryStore::new();
        let changes = TodoChanges { is_done: Some(true), ..Default::default() };
        assert_eq!(store.update(Uuid::new_v4(), changes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_and_delete() {
        let store = MemoryStore::new();
        let todo = store.create("milk".into()).await.unwrap();

        let changes = TodoChanges { is_done: Some(true), ..Default::default() };
        let updated = store.update(todo.id, changes).await.unwrap().unwrap();
        assert!(updated.is_done);
        assert_eq!(store.get(todo.id).await.unwrap(), Some(updated));

        assert!(store.delete(todo.id).await.unwrap());
        assert!(!store.delete(todo.id).await.unwrap());
        assert_eq!(store.get(todo.id).await.unwrap(), None);
    }
}
