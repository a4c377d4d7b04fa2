use color_eyre::Result;
use sqlx::{Executor, Sqlite};

use super::models::ResultModel;
use super::Db;

/// Appends one leaderboard row; the timestamp is assigned by the database.
pub(super) async fn insert_result<'e, E>(
    executor: E,
    name: &str,
    score: i64,
    total: i64,
) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id: i64 =
        sqlx::query_scalar("INSERT INTO results (name, score, total) VALUES (?, ?, ?) RETURNING id")
            .bind(name)
            .bind(score)
            .bind(total)
            .fetch_one(executor)
            .await?;

    Ok(id)
}

impl Db {
    pub async fn append_result(&self, name: &str, score: i64, total: i64) -> Result<i64> {
        insert_result(&self.pool, name, score, total).await
    }

    /// Best score first; equal scores keep the order they were achieved in.
    pub async fn leaderboard(&self) -> Result<Vec<ResultModel>> {
        let ranking = sqlx::query_as::<_, ResultModel>(
            r#"
            SELECT id, name, score, total, created_at
            FROM results
            ORDER BY score DESC, created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ranking)
    }
}
