use super::DB;
use crate::models::director::{Director, NewDirector};

pub async fn list(db: &DB) -> Result<Vec<Director>, sqlx::Error> {
    sqlx::query_as::<_, Director>("SELECT id, name, birthYear FROM directors ORDER BY id ASC")
        .fetch_all(db)
        .await
}

pub async fn get(db: &DB, id: i64) -> Result<Vec<Director>, sqlx::Error> {
    sqlx::query_as::<_, Director>("SELECT id, name, birthYear FROM directors WHERE id = ?")
        .bind(id)
        .fetch_all(db)
        .await
}

pub async fn insert(db: &DB, director: &NewDirector) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO directors (name, birthYear) VALUES (?, ?)")
        .bind(&director.name)
        .bind(director.birth_year)
        .execute(db)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn update(
    db: &DB,
    id: i64,
    name: Option<&str>,
    birth_year: Option<i64>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE directors SET name = ?, birthYear = ? WHERE id = ?")
        .bind(name)
        .bind(birth_year)
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete(db: &DB, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM directors WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
