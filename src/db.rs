//! SQLite-backed guest and upload stores.
//!
//! Guest names carry a UNIQUE constraint, so "insert if absent" is a single
//! statement and two racing registrations cannot both land.

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use uuid::Uuid;

use crate::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub name: String,
    pub uuid: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBatch {
    pub id: i64,
    pub image_urls: Vec<String>,
}

/// Open the pool and bring the schema up to date.
pub async fn init_pool(database_url: &str, max_connections: u32) -> AppResult<SqlitePool> {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&db_pool).await?;

    Ok(db_pool)
}

/// Returns `None` when `name` is already taken.
pub async fn insert_guest(db_pool: &SqlitePool, name: &str) -> AppResult<Option<Guest>> {
    let uuid = Uuid::now_v7();
    let result = sqlx::query("INSERT INTO guests (name,uuid) VALUES (?,?)")
        .bind(name)
        .bind(uuid.to_string())
        .execute(db_pool)
        .await;

    match result {
        Ok(_) => Ok(Some(Guest { name: name.to_owned(), uuid })),
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
pub(crate) async fn find_guest(db_pool: &SqlitePool, name: &str) -> AppResult<Option<Guest>> {
    let row: Option<(String, String)> =
        sqlx::query_as("SELECT name,uuid FROM guests WHERE name=?")
            .bind(name)
            .fetch_optional(db_pool)
            .await?;

    match row {
        Some((name, uuid)) => {
            let uuid = Uuid::parse_str(&uuid).map_err(anyhow::Error::from)?;
            Ok(Some(Guest { name, uuid }))
        }
        None => Ok(None),
    }
}

pub async fn guest_names(db_pool: &SqlitePool) -> AppResult<Vec<String>> {
    let names: Vec<String> = sqlx::query_scalar("SELECT name FROM guests ORDER BY id")
        .fetch_all(db_pool)
        .await?;

    Ok(names)
}

pub async fn insert_batch(db_pool: &SqlitePool, image_urls: &[String]) -> AppResult<UploadBatch> {
    let id = sqlx::query("INSERT INTO upload_batches (image_urls) VALUES (?)")
        .bind(serde_json::to_string(image_urls)?)
        .execute(db_pool)
        .await?
        .last_insert_rowid();

    Ok(UploadBatch { id, image_urls: image_urls.to_vec() })
}

pub async fn all_batches(db_pool: &SqlitePool) -> AppResult<Vec<UploadBatch>> {
    let rows: Vec<(i64, String)> =
        sqlx::query_as("SELECT id,image_urls FROM upload_batches ORDER BY id")
            .fetch_all(db_pool)
            .await?;

    rows.into_iter()
        .map(|(id, image_urls)| -> AppResult<UploadBatch> {
            Ok(UploadBatch { id, image_urls: serde_json::from_str(&image_urls)? })
        })
        .collect()
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    // Each in-memory connection is its own database, so stay on one.
    init_pool("sqlite::memory:", 1).await.unwrap()
}

#[cfg(test)]
#[path = "db_test.rs"]
mod tests;
