use color_eyre::Result;
use ulid::Ulid;

use super::models::{AnswerRecord, RunModel};
use super::result::insert_result;
use super::Db;
use crate::names;

const NOW: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

fn ttl_modifier() -> String {
    format!("+{} seconds", names::SESSION_TTL_SECS)
}

impl Db {
    /// Starts a run with a fixed question order. Returns the run token.
    ///
    /// Expired runs are purged in the same transaction.
    pub async fn create_run(&self, name: &str, order: &[i64]) -> Result<String> {
        let token = Ulid::new().to_string();
        let total = order.len() as i64;

        let mut tx = self.pool.begin().await?;

        let purged = sqlx::query(&format!("DELETE FROM quiz_sessions WHERE expires_at <= {NOW}"))
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let session_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO quiz_sessions (token, name, total, expires_at)
            VALUES (?, ?, ?, strftime('%Y-%m-%d %H:%M:%f', 'now', ?))
            RETURNING id
            "#,
        )
        .bind(&token)
        .bind(name)
        .bind(total)
        .bind(ttl_modifier())
        .fetch_one(&mut *tx)
        .await?;

        for (idx, question_id) in order.iter().enumerate() {
            sqlx::query(
                "INSERT INTO session_questions (session_id, step, question_id) VALUES (?, ?, ?)",
            )
            .bind(session_id)
            .bind(idx as i64 + 1)
            .bind(question_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        if purged > 0 {
            tracing::debug!(purged, "purged expired quiz runs");
        }
        tracing::info!("run started for '{name}': session_id={session_id}, total={total}");
        Ok(token)
    }

    /// Looks up a live run. Unknown and expired tokens both yield `None`.
    pub async fn get_run(&self, token: &str) -> Result<Option<RunModel>> {
        let run = sqlx::query_as::<_, RunModel>(&format!(
            r#"
            SELECT session_id, name, total, answered, score, finished_at
            FROM session_stats
            WHERE token = ? AND expires_at > {NOW}
            "#
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(run)
    }

    /// Question id at 1-based `step` of the run's order.
    pub async fn run_question_id(&self, session_id: i64, step: i64) -> Result<Option<i64>> {
        let question_id: Option<i64> = sqlx::query_scalar(
            "SELECT question_id FROM session_questions WHERE session_id = ? AND step = ?",
        )
        .bind(session_id)
        .bind(step)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question_id)
    }

    /// Appends an answer to the run's history. With `finish`, the run is also
    /// closed and its result written, all in one transaction.
    ///
    /// Returns `false` without changing anything when the step already has an
    /// answer, e.g. when the same form was submitted twice.
    pub async fn record_answer(
        &self,
        session_id: i64,
        step: i64,
        record: &AnswerRecord,
        finish: bool,
    ) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO session_answers (session_id, step, question, submitted, correct_answer, is_correct)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (session_id, step) DO NOTHING
            "#,
        )
        .bind(session_id)
        .bind(step)
        .bind(&record.question)
        .bind(&record.submitted)
        .bind(&record.correct_answer)
        .bind(record.is_correct)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            tx.rollback().await?;
            tracing::warn!("step {step} already answered: session_id={session_id}");
            return Ok(false);
        }

        if finish {
            sqlx::query(&format!(
                "UPDATE quiz_sessions SET finished_at = {NOW} WHERE id = ? AND finished_at IS NULL"
            ))
            .bind(session_id)
            .execute(&mut *tx)
            .await?;

            let (name, score, total): (String, i64, i64) = sqlx::query_as(
                "SELECT name, score, total FROM session_stats WHERE session_id = ?",
            )
            .bind(session_id)
            .fetch_one(&mut *tx)
            .await?;

            insert_result(&mut *tx, &name, score, total).await?;
        }

        tx.commit().await?;

        if finish {
            tracing::info!("run finished: session_id={session_id}");
        }
        Ok(true)
    }

    pub async fn run_answers(&self, session_id: i64) -> Result<Vec<AnswerRecord>> {
        let answers = sqlx::query_as::<_, AnswerRecord>(
            r#"
            SELECT question, submitted, correct_answer, is_correct
            FROM session_answers
            WHERE session_id = ?
            ORDER BY step
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }
}
