use axum::{
    extract::{Form, State},
    response::Redirect,
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::IsHtmx,
    models::NewQuestion,
    names,
    rejections::{AppError, ResultExt},
    services::qr,
    views,
    views::admin as admin_views,
    AppState,
};

#[derive(Default, Deserialize)]
#[serde(default)]
struct AddQuestionBody {
    text: String,
    option_1: String,
    option_2: String,
    option_3: String,
    option_4: String,
    answer: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::ADMIN_URL, get(question_list))
        .route(names::ADD_QUESTION_URL, get(add_page).post(add_question))
        .route(names::RANKING_URL, get(ranking))
        .route(names::QR_CODE_URL, get(qr_code))
}

async fn question_list(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Markup, AppError> {
    let questions = state
        .db
        .questions()
        .await
        .reject("could not get questions")?;

    Ok(views::render(
        is_htmx,
        "Questions",
        admin_views::question_list(&questions),
    ))
}

async fn add_page(IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(is_htmx, "Add a question", admin_views::add_form())
}

async fn add_question(
    State(state): State<AppState>,
    Form(body): Form<AddQuestionBody>,
) -> Result<Redirect, AppError> {
    let question = NewQuestion::from_input(
        &body.text,
        [
            body.option_1.as_str(),
            body.option_2.as_str(),
            body.option_3.as_str(),
            body.option_4.as_str(),
        ],
        &body.answer,
    );
    question.validate().map_err(|e| AppError::Input(e.message()))?;

    state
        .db
        .create_question(&question)
        .await
        .reject("could not create question")?;

    Ok(Redirect::to(names::ADMIN_URL))
}

async fn ranking(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Markup, AppError> {
    let results = state
        .db
        .leaderboard()
        .await
        .reject("could not get ranking")?;

    Ok(views::render(is_htmx, "Ranking", admin_views::ranking(&results)))
}

async fn qr_code(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Markup, AppError> {
    let link = qr::start_link(&state.settings.public_url);
    let relative = qr::regenerate(&state.settings.static_dir, &link)
        .await
        .reject("could not generate QR code")?;

    Ok(views::render(
        is_htmx,
        "QR code",
        admin_views::qr_code(&names::static_url(&relative), &link),
    ))
}
