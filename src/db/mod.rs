pub mod directors;
pub mod movies;
pub mod users;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

pub type DB = SqlitePool;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS movies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        director TEXT NOT NULL,
        year INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS directors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        birthYear INTEGER NOT NULL
    )",
];

/// Opens the SQLite database at `url` and makes sure the tables exist.
///
/// The file is created on first run. `sqlite::memory:` works too, but every
/// connection gets its own empty database, so we pin the pool to one connection there.
pub async fn connect(url: &str) -> Result<DB> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool = if url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let db = pool.connect_with(options).await?;

    init_schema(&db).await?;

    Ok(db)
}

async fn init_schema(db: &DB) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(*statement).execute(db).await?;
    }
    Ok(())
}
