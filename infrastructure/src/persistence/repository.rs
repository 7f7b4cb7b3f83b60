//! The SQLite implementation of the todo list repository port.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use todolist_application::{RepositoryError, TodoListRepository};
use todolist_domain::{DomainEvents, Entity, TodoItem, TodoItemId, TodoList, TodoListId};
use uuid::Uuid;

use crate::events::DomainEventDispatcher;

/// [`TodoListRepository`] over a SQLite pool.
///
/// This is the unit-of-work boundary of the service: `add` and `save` write
/// the aggregate's rows inside one transaction, commit, and only then hand
/// the aggregate to the dispatcher so its pending events are published after
/// the write is durable. With no dispatcher configured the publish step is
/// skipped and pending events stay on the aggregate.
pub struct SqliteTodoListRepository {
    pool: SqlitePool,
    dispatcher: Option<Arc<DomainEventDispatcher>>,
}

/// One row of `todo_lists`.
#[derive(Debug, FromRow)]
struct ListRow {
    id: String,
    name: String,
    description: String,
    date_created: DateTime<Utc>,
    date_completed: Option<DateTime<Utc>>,
    completed: bool,
}

/// One row of `todo_items`.
#[derive(Debug, FromRow)]
struct ItemRow {
    id: String,
    name: String,
    description: String,
    date_created: DateTime<Utc>,
    date_completed: Option<DateTime<Utc>>,
    completed: bool,
}

impl SqliteTodoListRepository {
    /// Creates a repository without a dispatcher; persistence succeeds with
    /// no publish step.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            dispatcher: None,
        }
    }

    /// Creates a repository that flushes pending events through `dispatcher`
    /// after every durable write.
    #[must_use]
    pub const fn with_dispatcher(pool: SqlitePool, dispatcher: Arc<DomainEventDispatcher>) -> Self {
        Self {
            pool,
            dispatcher: Some(dispatcher),
        }
    }

    /// Publishes the aggregate's pending events, if a dispatcher is
    /// configured. Called once per `add`/`save`, after the commit.
    async fn flush_events(&self, list: &mut TodoList) -> Result<(), RepositoryError> {
        let Some(dispatcher) = &self.dispatcher else {
            return Ok(());
        };
        if list.domain_events().is_empty() {
            return Ok(());
        }
        let mut batch: [&mut dyn DomainEvents; 1] = [list];
        dispatcher
            .dispatch_and_clear(&mut batch)
            .await
            .map_err(|e| RepositoryError::DispatchFailed {
                reason: e.to_string(),
            })
    }

    /// Loads the item rows of one list, in insertion (rowid) order.
    async fn load_items(&self, list_id: &str) -> Result<Vec<TodoItem>, RepositoryError> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            "SELECT id, name, description, date_created, date_completed, completed
             FROM todo_items WHERE list_id = ? ORDER BY rowid",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.into_iter().map(rehydrate_item).collect()
    }

    async fn load_list(&self, row: ListRow) -> Result<TodoList, RepositoryError> {
        let items = self.load_items(&row.id).await?;
        rehydrate_list(row, items)
    }
}

#[async_trait]
impl TodoListRepository for SqliteTodoListRepository {
    async fn add(&self, list: &mut TodoList) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        sqlx::query(
            "INSERT INTO todo_lists (id, name, description, date_created, date_completed, completed)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(list.id().to_string())
        .bind(list.name())
        .bind(list.description())
        .bind(list.date_created())
        .bind(list.date_completed())
        .bind(list.completed())
        .execute(&mut *tx)
        .await
        .map_err(storage_error)?;

        insert_items(&mut tx, list).await?;

        tx.commit().await.map_err(storage_error)?;
        tracing::debug!(list_id = %list.id(), items = list.items().len(), "todo list inserted");

        self.flush_events(list).await
    }

    async fn find(&self, id: TodoListId) -> Result<Option<TodoList>, RepositoryError> {
        let row: Option<ListRow> = sqlx::query_as(
            "SELECT id, name, description, date_created, date_completed, completed
             FROM todo_lists WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        match row {
            Some(row) => Ok(Some(self.load_list(row).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<TodoList>, RepositoryError> {
        let rows: Vec<ListRow> = sqlx::query_as(
            "SELECT id, name, description, date_created, date_completed, completed
             FROM todo_lists ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        let mut lists = Vec::with_capacity(rows.len());
        for row in rows {
            lists.push(self.load_list(row).await?);
        }
        Ok(lists)
    }

    async fn save(&self, list: &mut TodoList) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let updated = sqlx::query(
            "UPDATE todo_lists
             SET name = ?, description = ?, date_created = ?, date_completed = ?, completed = ?
             WHERE id = ?",
        )
        .bind(list.name())
        .bind(list.description())
        .bind(list.date_created())
        .bind(list.date_completed())
        .bind(list.completed())
        .bind(list.id().to_string())
        .execute(&mut *tx)
        .await
        .map_err(storage_error)?;

        if updated.rows_affected() == 0 {
            return Err(RepositoryError::NotFound { id: list.id() });
        }

        // Items live and die with their list; rewriting them wholesale keeps
        // the row set an exact mirror of the aggregate.
        sqlx::query("DELETE FROM todo_items WHERE list_id = ?")
            .bind(list.id().to_string())
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;
        insert_items(&mut tx, list).await?;

        tx.commit().await.map_err(storage_error)?;
        tracing::debug!(list_id = %list.id(), completed = list.completed(), "todo list saved");

        self.flush_events(list).await
    }
}

/// Inserts every item row of `list` inside the open transaction.
async fn insert_items(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    list: &TodoList,
) -> Result<(), RepositoryError> {
    for item in list.items() {
        sqlx::query(
            "INSERT INTO todo_items
                 (id, list_id, name, description, date_created, date_completed, completed)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item.id().to_string())
        .bind(list.id().to_string())
        .bind(item.name())
        .bind(item.description())
        .bind(item.date_created())
        .bind(item.date_completed())
        .bind(item.completed())
        .execute(&mut **tx)
        .await
        .map_err(storage_error)?;
    }
    Ok(())
}

fn storage_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage {
        reason: e.to_string(),
    }
}

fn corrupted(id: &str, reason: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Corrupted {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_uuid(raw: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(raw).map_err(|e| corrupted(raw, e))
}

fn rehydrate_item(row: ItemRow) -> Result<TodoItem, RepositoryError> {
    let id = TodoItemId::from_uuid(parse_uuid(&row.id)?).map_err(|e| corrupted(&row.id, e))?;
    TodoItem::rehydrate(
        id,
        row.name,
        row.description,
        row.date_created,
        row.date_completed,
        row.completed,
    )
    .map_err(|e| corrupted(&id.to_string(), e))
}

fn rehydrate_list(row: ListRow, items: Vec<TodoItem>) -> Result<TodoList, RepositoryError> {
    let id = TodoListId::from_uuid(parse_uuid(&row.id)?).map_err(|e| corrupted(&row.id, e))?;
    TodoList::rehydrate(
        id,
        row.name,
        row.description,
        row.date_created,
        row.date_completed,
        row.completed,
        items,
    )
    .map_err(|e| corrupted(&id.to_string(), e))
}
