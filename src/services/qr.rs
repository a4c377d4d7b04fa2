use std::path::Path;

use color_eyre::Result;
use qrcode::{render::svg, QrCode};

use crate::names;

const MIN_DIMENSION: u32 = 240;

/// Address participants land on after scanning the code.
pub fn start_link(public_url: &str) -> String {
    format!(
        "{}{}",
        public_url.trim_end_matches('/'),
        names::QUIZ_START_URL
    )
}

/// Renders `link` as an SVG QR code.
pub fn render(link: &str) -> Result<String> {
    let code = QrCode::new(link.as_bytes())?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(image)
}

/// Writes the QR code for `link` to its well-known place under `static_dir`,
/// replacing any previous image. Returns the path relative to `static_dir`.
pub async fn regenerate(static_dir: &Path, link: &str) -> Result<String> {
    let image = render(link)?;

    let dir = static_dir.join(names::QR_CODE_DIR);
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join(names::QR_CODE_FILE), image).await?;

    tracing::info!("QR code regenerated for {link}");
    Ok(format!("{}/{}", names::QR_CODE_DIR, names::QR_CODE_FILE))
}
