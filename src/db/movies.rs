use super::DB;
use crate::models::movie::{Movie, NewMovie};

pub async fn list(db: &DB) -> Result<Vec<Movie>, sqlx::Error> {
    sqlx::query_as::<_, Movie>("SELECT id, title, director, year FROM movies ORDER BY id ASC")
        .fetch_all(db)
        .await
}

pub async fn get(db: &DB, id: i64) -> Result<Vec<Movie>, sqlx::Error> {
    sqlx::query_as::<_, Movie>("SELECT id, title, director, year FROM movies WHERE id = ?")
        .bind(id)
        .fetch_all(db)
        .await
}

pub async fn insert(db: &DB, movie: &NewMovie) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO movies (title, director, year) VALUES (?, ?, ?)")
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(movie.year)
        .execute(db)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrites every column of the row. Returns how many rows were touched (0 or 1).
///
/// `None` fields are written as NULL and bounce off the NOT NULL constraints.
pub async fn update(
    db: &DB,
    id: i64,
    title: Option<&str>,
    director: Option<&str>,
    year: Option<i64>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE movies SET title = ?, director = ?, year = ? WHERE id = ?")
        .bind(title)
        .bind(director)
        .bind(year)
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete(db: &DB, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM movies WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
