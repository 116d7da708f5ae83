use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub description: String,
    pub is_done: bool,
}

/// Body of `POST /todos`. A missing description reads as empty.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub description: String,
}

/// Body of `PUT /todos/{id}`. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl UpdateTodo {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.done.is_none()
    }
}

/// A validated partial update, as handed to a [`TodoStore`](super::TodoStore).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub description: Option<String>,
    pub is_done: Option<bool>,
}

impl TodoChanges {
    /// Applies the changes to `todo`, keeping fields that were not set.
    pub fn apply(self, todo: Todo) -> Todo {
        Todo {
            description: self.description.unwrap_or(todo.description),
            is_done: self.is_done.unwrap_or(todo.is_done),
            ..todo
        }
    }
}

impl From<UpdateTodo> for TodoChanges {
    fn from(input: UpdateTodo) -> Self {
        Self { description: input.description, is_done: input.done }
    }
}
