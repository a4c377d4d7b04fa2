use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use quiz_app::{
    db::Db,
    models,
    shuffle::{SeededShuffle, SharedShuffle, ThreadRngShuffle},
    AppState, Settings,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL; the file is created if missing.
    #[arg(long, env, default_value = "sqlite://quiz.db")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    address: String,

    /// Public base URL encoded into the quiz QR code.
    #[arg(long, env, default_value = "http://127.0.0.1:5000")]
    public_url: String,

    /// Directory served under /static; generated QR codes are written here.
    #[arg(long, env, default_value = "static")]
    static_dir: PathBuf,

    /// Mark the quiz cookie as Secure (HTTPS deployments).
    #[arg(long, env)]
    secure_cookies: bool,

    /// Seed for reproducible question and option order.
    #[arg(long, env)]
    shuffle_seed: Option<u64>,

    /// JSON file of questions loaded into an empty question store.
    #[arg(long, env = "QUESTIONS_SEED")]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "axum=debug,quiz_app=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;

    if let Some(path) = &args.seed {
        let questions = models::load_questions(path)?;
        db.seed_questions(&questions).await?;
    }

    let shuffle: SharedShuffle = match args.shuffle_seed {
        Some(seed) => {
            tracing::warn!(seed, "using a fixed shuffle seed");
            Arc::new(SeededShuffle::new(seed))
        }
        None => Arc::new(ThreadRngShuffle),
    };

    let state = AppState::new(
        db,
        shuffle,
        Settings {
            secure_cookies: args.secure_cookies,
            public_url: args.public_url,
            static_dir: args.static_dir,
        },
    );
    let app = quiz_app::router(state);

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on http://{}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}
