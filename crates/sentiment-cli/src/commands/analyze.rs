use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use sentiment_core::client::analyze;
use sentiment_core::config::ClientConfig;
use sentiment_core::form::{CsvUpload, SubmissionForm};

use crate::render;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyse
    #[arg(short, long)]
    pub text: Option<String>,

    /// CSV file to upload
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Prediction endpoint URL (overrides environment and config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Client config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = ClientConfig::resolve(args.config.as_deref(), args.endpoint.clone())
        .context("Failed to load client config")?;
    let form = build_form(args)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Loading...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = analyze(&config, &form);
    spinner.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render::print_outcome(&outcome);
    }

    if outcome.is_failure() {
        bail!("analysis failed");
    }
    Ok(())
}

fn build_form(args: &AnalyzeArgs) -> Result<SubmissionForm> {
    let file = match args.file {
        Some(ref path) => Some(
            CsvUpload::open(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => None,
    };
    Ok(SubmissionForm {
        text: args.text.clone().unwrap_or_default(),
        file,
    })
}
