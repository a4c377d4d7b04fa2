use color_eyre::Result;

use crate::db::models::{AnswerRecord, QuestionModel, RunModel};
use crate::db::Db;
use crate::shuffle::{self, Shuffle, ThreadRngShuffle};

// ---------------------------------------------------------------------------
// QuizRepository trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuizRepository: Send + Sync {
    fn question_ids(&self) -> impl std::future::Future<Output = Result<Vec<i64>>> + Send;

    fn get_question(
        &self,
        question_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<QuestionModel>>> + Send;

    fn create_run(
        &self,
        name: &str,
        order: &[i64],
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    fn get_run(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Option<RunModel>>> + Send;

    fn run_question_id(
        &self,
        session_id: i64,
        step: i64,
    ) -> impl std::future::Future<Output = Result<Option<i64>>> + Send;

    fn record_answer(
        &self,
        session_id: i64,
        step: i64,
        record: &AnswerRecord,
        finish: bool,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;

    fn run_answers(
        &self,
        session_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<AnswerRecord>>> + Send;
}

impl QuizRepository for Db {
    async fn question_ids(&self) -> Result<Vec<i64>> {
        Db::question_ids(self).await
    }

    async fn get_question(&self, question_id: i64) -> Result<Option<QuestionModel>> {
        Db::get_question(self, question_id).await
    }

    async fn create_run(&self, name: &str, order: &[i64]) -> Result<String> {
        Db::create_run(self, name, order).await
    }

    async fn get_run(&self, token: &str) -> Result<Option<RunModel>> {
        Db::get_run(self, token).await
    }

    async fn run_question_id(&self, session_id: i64, step: i64) -> Result<Option<i64>> {
        Db::run_question_id(self, session_id, step).await
    }

    async fn record_answer(
        &self,
        session_id: i64,
        step: i64,
        record: &AnswerRecord,
        finish: bool,
    ) -> Result<bool> {
        Db::record_answer(self, session_id, step, record, finish).await
    }

    async fn run_answers(&self, session_id: i64) -> Result<Vec<AnswerRecord>> {
        Db::run_answers(self, session_id).await
    }
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// Run created. Contains the run token.
    Started(String),
    EmptyName,
    /// There is nothing to ask.
    NoQuestions,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Question(StepView),
    /// No run, or the step lies outside the run's order.
    OutOfOrder,
    /// The question at this step no longer exists.
    NotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Continue with this step.
    Next(i64),
    /// The last answer was recorded and the result stored.
    Finished { total: i64 },
    OutOfOrder,
    NotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summary(RunSummary),
    /// No run, or the run has not reached its last step yet.
    NotFinished,
}

/// What a participant sees for one step. The correct answer is not part of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepView {
    pub step: i64,
    pub total: i64,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub name: String,
    pub score: i64,
    pub total: i64,
    pub history: Vec<AnswerRecord>,
}

// ---------------------------------------------------------------------------
// QuizService
// ---------------------------------------------------------------------------

/// Drives a participant from name entry through each step to the final score.
///
/// The question order is drawn once when a run starts and stored with the run,
/// together with the question count at that moment. Option order is drawn again
/// on every render.
pub struct QuizService<R: QuizRepository = Db, S: Shuffle = ThreadRngShuffle> {
    repo: R,
    shuffle: S,
}

impl<R: QuizRepository + Clone, S: Shuffle + Clone> Clone for QuizService<R, S> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            shuffle: self.shuffle.clone(),
        }
    }
}

impl<R: QuizRepository, S: Shuffle> QuizService<R, S> {
    pub fn new(repo: R, shuffle: S) -> Self {
        Self { repo, shuffle }
    }

    pub async fn start(&self, name: &str) -> Result<StartOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(StartOutcome::EmptyName);
        }

        let ids = self.repo.question_ids().await?;
        if ids.is_empty() {
            return Ok(StartOutcome::NoQuestions);
        }

        let order = shuffle::shuffled(&self.shuffle, &ids);
        let token = self.repo.create_run(name, &order).await?;

        Ok(StartOutcome::Started(token))
    }

    pub async fn step(&self, token: Option<&str>, step: i64) -> Result<StepOutcome> {
        let (run, question) = match self.locate(token, step).await? {
            Located::Question(run, question) => (run, question),
            Located::OutOfOrder => return Ok(StepOutcome::OutOfOrder),
            Located::NotFound => return Ok(StepOutcome::NotFound),
        };

        let options: Vec<String> = shuffle::shuffled(&self.shuffle, &question.options())
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(StepOutcome::Question(StepView {
            step,
            total: run.total,
            question: question.text,
            options,
        }))
    }

    pub async fn answer(
        &self,
        token: Option<&str>,
        step: i64,
        submitted: &str,
    ) -> Result<AnswerOutcome> {
        let (run, question) = match self.locate(token, step).await? {
            Located::Question(run, question) => (run, question),
            Located::OutOfOrder => return Ok(AnswerOutcome::OutOfOrder),
            Located::NotFound => return Ok(AnswerOutcome::NotFound),
        };

        if run.is_finished() || step != run.current_step() {
            tracing::warn!(
                "answer for step {step} rejected: session_id={}, expected step {}",
                run.id,
                run.current_step()
            );
            return Ok(AnswerOutcome::OutOfOrder);
        }

        let record = AnswerRecord {
            is_correct: submitted == question.answer,
            question: question.text,
            submitted: submitted.to_string(),
            correct_answer: question.answer,
        };
        let finish = step == run.total;

        // a concurrent submission for the same step got there first
        if !self.repo.record_answer(run.id, step, &record, finish).await? {
            return Ok(AnswerOutcome::OutOfOrder);
        }

        if finish {
            Ok(AnswerOutcome::Finished { total: run.total })
        } else {
            Ok(AnswerOutcome::Next(step + 1))
        }
    }

    pub async fn summary(&self, token: Option<&str>) -> Result<SummaryOutcome> {
        let Some(run) = self.run(token).await? else {
            return Ok(SummaryOutcome::NotFinished);
        };
        if !run.is_finished() {
            return Ok(SummaryOutcome::NotFinished);
        }

        let history = self.repo.run_answers(run.id).await?;

        Ok(SummaryOutcome::Summary(RunSummary {
            name: run.name,
            score: run.score,
            total: run.total,
            history,
        }))
    }

    async fn run(&self, token: Option<&str>) -> Result<Option<RunModel>> {
        match token {
            Some(token) => self.repo.get_run(token).await,
            None => Ok(None),
        }
    }

    /// Resolves `step` of the caller's run to its question.
    async fn locate(&self, token: Option<&str>, step: i64) -> Result<Located> {
        let Some(run) = self.run(token).await? else {
            return Ok(Located::OutOfOrder);
        };
        if step < 1 || step > run.total {
            return Ok(Located::OutOfOrder);
        }

        let Some(question_id) = self.repo.run_question_id(run.id, step).await? else {
            return Ok(Located::OutOfOrder);
        };

        match self.repo.get_question(question_id).await? {
            Some(question) => Ok(Located::Question(run, question)),
            None => {
                tracing::warn!("question {question_id} at step {step} no longer exists");
                Ok(Located::NotFound)
            }
        }
    }
}

enum Located {
    Question(RunModel, QuestionModel),
    OutOfOrder,
    NotFound,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
