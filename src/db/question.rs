use color_eyre::Result;

use super::models::QuestionModel;
use super::Db;
use crate::models::NewQuestion;

impl Db {
    /// Inserts a question that has already passed [`NewQuestion::validate`].
    pub async fn create_question(&self, question: &NewQuestion) -> Result<i64> {
        let [o1, o2, o3, o4] = &question.options;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (text, option_1, option_2, option_3, option_4, answer)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&question.text)
        .bind(o1)
        .bind(o2)
        .bind(o3)
        .bind(o4)
        .bind(&question.answer)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(question_id = id, "question created");
        Ok(id)
    }

    pub async fn get_question(&self, question_id: i64) -> Result<Option<QuestionModel>> {
        let question = sqlx::query_as::<_, QuestionModel>(
            "SELECT id, text, option_1, option_2, option_3, option_4, answer FROM questions WHERE id = ?",
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn question_ids(&self) -> Result<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM questions ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    pub async fn questions(&self) -> Result<Vec<QuestionModel>> {
        let questions = sqlx::query_as::<_, QuestionModel>(
            "SELECT id, text, option_1, option_2, option_3, option_4, answer FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Loads `questions` only when the store is empty. Returns how many were inserted.
    pub async fn seed_questions(&self, questions: &[NewQuestion]) -> Result<usize> {
        if self.questions_count().await? > 0 {
            tracing::info!("question store is not empty, skipping seed");
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        for question in questions {
            let [o1, o2, o3, o4] = &question.options;
            sqlx::query(
                r#"
                INSERT INTO questions (text, option_1, option_2, option_3, option_4, answer)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&question.text)
            .bind(o1)
            .bind(o2)
            .bind(o3)
            .bind(o4)
            .bind(&question.answer)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        tracing::info!(count = questions.len(), "seeded question store");
        Ok(questions.len())
    }
}
