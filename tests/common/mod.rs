#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicU32, AtomicUsize, Ordering},
    Arc,
};

use sqlx::SqlitePool;

use quiz_app::{
    db::Db,
    models::NewQuestion,
    shuffle::{SharedShuffle, Shuffle},
    AppState, Settings,
};

pub async fn create_test_db() -> Db {
    create_test_db_with_raw().await.0
}

/// A fresh database plus a second pool on the same file, for inspecting and
/// tampering with rows the public API does not expose.
pub async fn create_test_db_with_raw() -> (Db, SqlitePool) {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("quiz_app_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    let db = Db::new(&url).await.expect("failed to create test database");
    let raw = SqlitePool::connect(&url)
        .await
        .expect("failed to open test database");
    (db, raw)
}

/// Question ids of the run behind `token`, in step order.
pub async fn run_order(db: &Db, token: &str) -> Vec<i64> {
    let run = db.get_run(token).await.unwrap().expect("run should exist");
    let mut order = Vec::new();
    for step in 1..=run.total {
        order.push(db.run_question_id(run.id, step).await.unwrap().unwrap());
    }
    order
}

pub async fn results_count(db: &Db) -> usize {
    db.leaderboard().await.unwrap().len()
}

pub async fn count_rows(raw: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(raw)
        .await
        .unwrap()
}

pub fn test_settings() -> Settings {
    Settings {
        secure_cookies: false,
        public_url: "http://quiz.test".to_string(),
        static_dir: std::env::temp_dir().join(format!("quiz_app_static_{}", std::process::id())),
    }
}

pub fn test_state(db: Db, shuffle: SharedShuffle) -> AppState {
    AppState::new(db, shuffle, test_settings())
}

pub fn question(text: &str, options: [&str; 4], answer: &str) -> NewQuestion {
    NewQuestion::from_input(text, options, answer)
}

/// The two-question quiz used by the end-to-end scenarios.
pub fn capitals_and_numbers() -> Vec<NewQuestion> {
    vec![
        question(
            "Capital of France?",
            ["Paris", "Lyon", "Nice", "Lille"],
            "Paris",
        ),
        question("3 + 4?", ["5", "6", "7", "8"], "7"),
    ]
}

pub fn numbered_questions(n: usize) -> Vec<NewQuestion> {
    (1..=n)
        .map(|i| {
            let correct = format!("Correct {i}");
            question(
                &format!("Question {i}"),
                [correct.as_str(), "Wrong A", "Wrong B", "Wrong C"],
                &correct,
            )
        })
        .collect()
}

pub async fn insert_all(db: &Db, questions: &[NewQuestion]) -> Vec<i64> {
    let mut ids = Vec::new();
    for q in questions {
        ids.push(db.create_question(q).await.expect("insert question"));
    }
    ids
}

/// Keeps every sequence in its original order.
pub struct Identity;

impl Shuffle for Identity {
    fn permutation(&self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

pub fn identity() -> SharedShuffle {
    Arc::new(Identity)
}

/// Rotates by one more position on every call, so consecutive draws differ.
#[derive(Default)]
pub struct Rotating {
    calls: AtomicUsize,
}

impl Shuffle for Rotating {
    fn permutation(&self, len: usize) -> Vec<usize> {
        let shift = self.calls.fetch_add(1, Ordering::SeqCst);
        (0..len).map(|i| (i + shift) % len.max(1)).collect()
    }
}
