//! PostgreSQL store on an sqlx connection pool.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use uuid::Uuid;

use super::model::{Todo, TodoChanges};
use super::store::{StoreError, TodoStore};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id UUID PRIMARY KEY,
        description TEXT NOT NULL,
        is_done BOOLEAN NOT NULL DEFAULT FALSE
    )
"#;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Opens a pool and makes sure the `todos` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;
        info!(max_connections, "connected to postgres");

        Ok(Self { pool })
    }
}

impl TodoStore for PgStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, description, is_done FROM todos")
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, description, is_done FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn create(&self, description: String) -> Result<Todo, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (id, description) VALUES ($1, $2) \
             RETURNING id, description, is_done",
        )
        .bind(Uuid::new_v4())
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn update(&self, id: Uuid, changes: TodoChanges) -> Result<Option<Todo>, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET \
                 description = COALESCE($2, description), \
                 is_done = COALESCE($3, is_done) \
             WHERE id = $1 \
             RETURNING id, description, is_done",
        )
        .bind(id)
        .bind(changes.description)
        .bind(changes.is_done)
        .fetch_optional(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
