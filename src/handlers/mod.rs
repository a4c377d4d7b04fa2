pub mod admin;
pub mod quiz;

use crate::rejections::AppError;

pub async fn not_found() -> AppError {
    AppError::NotFound("page not found")
}
