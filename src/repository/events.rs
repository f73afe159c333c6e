//! SQLite events repository

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    FromRow, Pool, Sqlite,
};
use std::str::FromStr;
use uuid::Uuid;

use super::EventRepository;
use crate::{
    error::{AppError, AppResult},
    models::{category::Category, event::Event},
};

#[derive(Clone)]
pub struct SqliteEventRepository {
    pool: Pool<Sqlite>,
}

/// Row layout of the `events` table
#[derive(FromRow)]
struct EventRow {
    id: String,
    title: String,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
    location: String,
    category: String,
    reminder_message: Option<String>,
}

impl TryFrom<EventRow> for Event {
    type Error = AppError;

    fn try_from(row: EventRow) -> AppResult<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| AppError::Repository(format!("Corrupt event id '{}': {}", row.id, e)))?;
        Ok(Event {
            id,
            title: row.title,
            start: row.start_at,
            end: row.end_at,
            location: row.location,
            category: Category::new(row.category),
            reminder_message: row.reminder_message,
        })
    }
}

impl SqliteEventRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database at `url` and apply migrations
    pub async fn connect(url: &str, max_connections: u32) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let repository = Self::new(pool);
        repository.migrate().await?;
        Ok(repository)
    }

    /// Run embedded schema migrations
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Repository(format!("Migration failed: {}", e)))
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events WHERE id = ?")
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, EventRow>("SELECT * FROM events WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .map(Event::try_from)
            .transpose()
    }

    async fn save(&self, event: &Event) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO events (id, title, start_at, end_at, location, category, reminder_message)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                start_at = excluded.start_at,
                end_at = excluded.end_at,
                location = excluded.location,
                category = excluded.category,
                reminder_message = excluded.reminder_message
            "#,
        )
        .bind(event.id.to_string())
        .bind(&event.title)
        .bind(event.start)
        .bind(event.end)
        .bind(&event.location)
        .bind(event.category.as_str())
        .bind(&event.reminder_message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn events_for_day(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        let next = date
            .succ_opt()
            .ok_or_else(|| AppError::Validation(format!("Date {} is out of range", date)))?;

        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT * FROM events WHERE start_at >= ? AND start_at < ? ORDER BY start_at, id",
        )
        .bind(date.and_time(chrono::NaiveTime::MIN))
        .bind(next.and_time(chrono::NaiveTime::MIN))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Event::try_from).collect()
    }
}
