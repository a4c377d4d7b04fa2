use axum::{
    extract::{Form, Path, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::{IsHtmx, RunToken},
    names,
    rejections::{AppError, ResultExt},
    services::quiz::{AnswerOutcome, StartOutcome, StepOutcome, SummaryOutcome},
    utils, views,
    views::quiz as quiz_views,
    AppState,
};

#[derive(Deserialize)]
struct StartBody {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct AnswerBody {
    answer: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route(names::QUIZ_START_URL, get(start_page).post(start_run))
        .route("/quiz/{step}", get(step_page).post(submit_answer))
        .route("/resultado_quiz/{total}", get(result_page))
}

async fn home() -> Redirect {
    Redirect::to(names::ADMIN_URL)
}

async fn start_page(IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(is_htmx, "Start", quiz_views::start_page())
}

async fn start_run(
    State(state): State<AppState>,
    Form(body): Form<StartBody>,
) -> Result<Response, AppError> {
    let token = match state
        .quiz
        .start(&body.name)
        .await
        .reject("could not start quiz run")?
    {
        StartOutcome::Started(token) => token,
        StartOutcome::EmptyName => return Err(AppError::Input("please enter your name")),
        StartOutcome::NoQuestions => {
            return Err(AppError::Input("the quiz has no questions yet"))
        }
    };

    let cookie = utils::cookie(
        names::QUIZ_SESSION_COOKIE_NAME,
        &token,
        state.settings.secure_cookies,
    );
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        cookie
            .parse::<HeaderValue>()
            .reject("could not build session cookie")?,
    );

    Ok((headers, Redirect::to(&names::quiz_step_url(1))).into_response())
}

async fn step_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    RunToken(token): RunToken,
    Path(step): Path<i64>,
) -> Result<Markup, AppError> {
    let outcome = state
        .quiz
        .step(token.as_deref(), step)
        .await
        .reject("could not load quiz step")?;

    match outcome {
        StepOutcome::Question(view) => Ok(views::render(
            is_htmx,
            &format!("Question {}", view.step),
            quiz_views::step(&view),
        )),
        StepOutcome::OutOfOrder => Err(AppError::Sequence("question out of order")),
        StepOutcome::NotFound => Err(AppError::NotFound("question not found")),
    }
}

async fn submit_answer(
    State(state): State<AppState>,
    RunToken(token): RunToken,
    Path(step): Path<i64>,
    Form(body): Form<AnswerBody>,
) -> Result<Redirect, AppError> {
    let answer = body.answer.ok_or(AppError::Input("no answer provided"))?;

    let outcome = state
        .quiz
        .answer(token.as_deref(), step, &answer)
        .await
        .reject("could not record answer")?;

    match outcome {
        AnswerOutcome::Next(next) => Ok(Redirect::to(&names::quiz_step_url(next))),
        AnswerOutcome::Finished { total } => Ok(Redirect::to(&names::quiz_result_url(total))),
        AnswerOutcome::OutOfOrder => Err(AppError::Sequence("question out of order")),
        AnswerOutcome::NotFound => Err(AppError::NotFound("question not found")),
    }
}

// The path segment only mirrors the question count; the run itself is the source of truth.
async fn result_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    RunToken(token): RunToken,
    Path(_total): Path<i64>,
) -> Result<Markup, AppError> {
    let outcome = state
        .quiz
        .summary(token.as_deref())
        .await
        .reject("could not load quiz result")?;

    match outcome {
        SummaryOutcome::Summary(summary) => Ok(views::render(
            is_htmx,
            "Result",
            quiz_views::summary(&summary),
        )),
        SummaryOutcome::NotFinished => Err(AppError::Sequence("the quiz is not finished yet")),
    }
}
