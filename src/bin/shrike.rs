//! Shrike server binary.

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use env_logger::Builder;
use log::LevelFilter;

use shrike::error::Result;
use shrike::ml::{ModelSource, SentimentModel};
use shrike::sentiment::SentimentAnalyzer;
use shrike::server::create_router;

#[derive(Debug, Parser)]
#[command(name = "shrike", version, about = "Sentiment scoring HTTP service")]
struct ShrikeArgs {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5001)]
    port: u16,

    /// Path to the persisted model artifact.
    #[arg(long, default_value = "sentiment_model.bin")]
    model_path: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments using clap
    let args = ShrikeArgs::parse();

    // Set up logging based on verbosity
    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(args: ShrikeArgs) -> Result<()> {
    let (model, source) = SentimentModel::load_or_train(&args.model_path)?;
    match source {
        ModelSource::Loaded => {
            log::info!("Loaded sentiment model from {}", args.model_path.display());
        }
        ModelSource::Trained => {
            log::info!(
                "Trained new sentiment model, persisted to {}",
                args.model_path.display()
            );
        }
    }

    let analyzer = SentimentAnalyzer::new(Some(model))?;
    let app = create_router(Arc::new(analyzer));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    log::info!("Listening on 0.0.0.0:{}", args.port);
    axum::serve(listener, app).await?;

    Ok(())
}
