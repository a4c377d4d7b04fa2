pub const ADMIN_URL: &str = "/admin";
pub const ADD_QUESTION_URL: &str = "/admin/add";
pub const RANKING_URL: &str = "/admin/ranking";
pub const QR_CODE_URL: &str = "/admin/qrcode";
pub const QUIZ_START_URL: &str = "/quiz/start";

pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";

/// Lifetime of a quiz run, both for the cookie and the stored session.
pub const SESSION_TTL_SECS: i64 = 3600;

// QR code location, relative to the static directory
pub const QR_CODE_DIR: &str = "qrcodes";
pub const QR_CODE_FILE: &str = "quiz.svg";

pub const OPTIONS_PER_QUESTION: usize = 4;

pub fn quiz_step_url(step: i64) -> String {
    format!("/quiz/{step}")
}

pub fn quiz_result_url(total: i64) -> String {
    format!("/resultado_quiz/{total}")
}

pub fn static_url(relative: &str) -> String {
    format!("/static/{relative}")
}
