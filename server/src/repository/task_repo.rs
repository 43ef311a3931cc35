//! Task Repository Implementation
//!
//! SQLite-backed implementation of Repository<Task>.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Task, TaskPatch};
use super::traits::Repository;

const SELECT_COLUMNS: &str = "SELECT id, name, completed, created_at, updated_at FROM todos";

/// SQLite implementation of Task repository
pub struct TaskRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TaskRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Load, patch and store a task under a single lock.
    ///
    /// `PATCH /todos/:id` goes through here rather than `find_by_id` + `update`,
    /// so two partial updates to the same task cannot overwrite each other's fields.
    pub async fn patch(&self, id: &str, patch: &TaskPatch) -> DomainResult<Task> {
        let conn = self.conn.lock().await;
        let mut task = fetch(&conn, id)?.ok_or_else(|| not_found(id))?;
        patch.apply(&mut task)?;
        write(&conn, &task)
    }
}

#[async_trait]
impl Repository<Task> for TaskRepository {
    async fn create(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;
        let now = now();

        conn.execute(
            "INSERT INTO todos (name, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
            params![entity.name, entity.completed, now],
        )?;

        Ok(Task {
            id: conn.last_insert_rowid().to_string(),
            name: entity.name.clone(),
            completed: entity.completed,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        })
    }

    async fn find_by_id(&self, id: String) -> DomainResult<Option<Task>> {
        let conn = self.conn.lock().await;
        fetch(&conn, &id)
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Whole-row replace, kept for the generic CRUD surface; HTTP updates use [`TaskRepository::patch`]
    async fn update(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;
        write(&conn, entity)
    }

    async fn delete(&self, id: String) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let rowid = parse_id(&id).ok_or_else(|| not_found(&id))?;
        let changed = conn.execute("DELETE FROM todos WHERE id = ?1", params![rowid])?;
        if changed == 0 {
            return Err(not_found(&id));
        }
        Ok(())
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound(format!("todo {}", id))
}

/// Ids are SQLite rowids; anything that is not one cannot exist
fn parse_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok().filter(|v| *v > 0)
}

fn fetch(conn: &Connection, id: &str) -> DomainResult<Option<Task>> {
    let Some(rowid) = parse_id(id) else {
        return Ok(None);
    };
    let task = conn
        .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), params![rowid], row_to_task)
        .optional()?;
    Ok(task)
}

fn write(conn: &Connection, task: &Task) -> DomainResult<Task> {
    let rowid = parse_id(&task.id).ok_or_else(|| not_found(&task.id))?;
    let now = now();

    let changed = conn.execute(
        "UPDATE todos SET name = ?1, completed = ?2, updated_at = ?3 WHERE id = ?4",
        params![task.name, task.completed, now, rowid],
    )?;
    if changed == 0 {
        return Err(not_found(&task.id));
    }

    let mut stored = task.clone();
    stored.updated_at = Some(now);
    Ok(stored)
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get::<_, i64>(0)?.to_string(),
        name: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
