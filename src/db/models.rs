// Database model structs

use crate::names::OPTIONS_PER_QUESTION;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct QuestionModel {
    pub id: i64,
    pub text: String,
    pub option_1: String,
    pub option_2: String,
    pub option_3: String,
    pub option_4: String,
    pub answer: String,
}

impl QuestionModel {
    /// Options in their stored order.
    pub fn options(&self) -> [&str; OPTIONS_PER_QUESTION] {
        [
            &self.option_1,
            &self.option_2,
            &self.option_3,
            &self.option_4,
        ]
    }
}

/// One completed run, as shown on the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct ResultModel {
    pub id: i64,
    pub name: String,
    pub score: i64,
    pub total: i64,
    pub created_at: String,
}

/// A quiz run with its progress derived from the recorded answers.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct RunModel {
    #[sqlx(rename = "session_id")]
    pub id: i64,
    pub name: String,
    /// Question count fixed when the run started.
    pub total: i64,
    pub answered: i64,
    pub score: i64,
    pub finished_at: Option<String>,
}

impl RunModel {
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// The step that accepts the next answer.
    pub fn current_step(&self) -> i64 {
        self.answered + 1
    }
}

/// One entry of a run's answer history.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct AnswerRecord {
    pub question: String,
    pub submitted: String,
    pub correct_answer: String,
    pub is_correct: bool,
}
