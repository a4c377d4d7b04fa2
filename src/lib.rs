pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod shuffle;
pub mod statics;
pub mod utils;
pub mod views;

use std::path::PathBuf;

use axum::Router;

use crate::{services::quiz::QuizService, shuffle::SharedShuffle};

/// Runtime settings that handlers need besides the database.
#[derive(Clone, Debug)]
pub struct Settings {
    pub secure_cookies: bool,
    /// Externally reachable base URL, encoded into the QR code.
    pub public_url: String,
    /// Directory served under `/static`; the QR image is written here.
    pub static_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub quiz: QuizService<db::Db, SharedShuffle>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(db: db::Db, shuffle: SharedShuffle, settings: Settings) -> Self {
        Self {
            quiz: QuizService::new(db.clone(), shuffle),
            db,
            settings,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::quiz::routes())
        .merge(handlers::admin::routes())
        .nest("/static", statics::routes())
        .fallback(handlers::not_found)
        .with_state(state)
}
