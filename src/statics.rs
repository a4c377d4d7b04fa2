use std::path::{Component, Path, PathBuf};

use axum::{
    extract::{Path as UrlPath, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::{rejections::AppError, AppState};

// Generated files change in place, so clients must revalidate.
const STATIC_CACHE_CONTROL: &str = "no-cache";

pub fn routes() -> Router<AppState> {
    Router::new().route("/{*path}", get(send_file))
}

async fn send_file(
    State(state): State<AppState>,
    UrlPath(path): UrlPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let file = resolve(&state.settings.static_dir, &path)
        .ok_or(AppError::NotFound("file not found"))?;

    let contents = tokio::fs::read(&file)
        .await
        .map_err(|_| AppError::NotFound("file not found"))?;

    Ok((
        [
            (CONTENT_TYPE, content_type(&file)),
            (CACHE_CONTROL, STATIC_CACHE_CONTROL),
        ],
        contents,
    ))
}

/// Joins `relative` onto `root`, refusing anything that could escape it.
fn resolve(root: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative);
    let safe = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    safe.then(|| root.join(relative))
}

fn content_type(path: &Path) -> &'static str {
    match path.extension() {
        Some(ext) if ext == "css" => "text/css",
        Some(ext) if ext == "svg" => "image/svg+xml",
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "js" => "text/javascript",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_rejects_parent_and_absolute_paths() {
        let root = Path::new("static");
        assert_eq!(
            resolve(root, "qrcodes/quiz.svg"),
            Some(PathBuf::from("static/qrcodes/quiz.svg"))
        );
        assert_eq!(resolve(root, "../Cargo.toml"), None);
        assert_eq!(resolve(root, "/etc/passwd"), None);
    }

    #[test]
    fn svg_gets_image_content_type() {
        assert_eq!(content_type(Path::new("quiz.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }
}
