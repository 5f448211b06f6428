mod app;
mod messages;
mod panels;
mod states;
mod worker;

use std::path::PathBuf;

use clap::Parser;
use sentiment_core::config::ClientConfig;

#[derive(Parser, Debug)]
#[command(name = "sentiment-gui", about = "Text sentiment analysis window")]
#[command(version)]
struct Args {
    /// Client config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prediction endpoint URL (overrides environment and config file)
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match ClientConfig::resolve(args.config.as_deref(), args.endpoint.clone()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {e}");
            ClientConfig::default()
                .with_env()
                .with_endpoint_override(args.endpoint)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true)
            .with_title("Text Sentiment Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "SentimentAnalysis",
        options,
        Box::new(move |cc| Ok(Box::new(app::SentimentApp::new(&cc.egui_ctx, config)))),
    )
}
