use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

use sentiment_core::client::SentimentClient;
use sentiment_core::config::ClientConfig;
use sentiment_core::form::{CsvUpload, SubmissionForm};
use sentiment_core::outcome::AnalysisOutcome;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    config: ClientConfig,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("sentiment-worker".into())
        .spawn(move || {
            worker_loop(config, cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

/// Read `path` on its own short-lived thread so a file picked or dropped
/// during a slow request shows up right away.
pub fn load_file_in_background(
    path: PathBuf,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let spawned = std::thread::Builder::new()
        .name("sentiment-file".into())
        .spawn({
            let tx = tx.clone();
            let ctx = ctx.clone();
            move || handle_load_file(&path, &tx, &ctx)
        });
    if let Err(e) = spawned {
        send(
            &tx,
            &ctx,
            WorkerResult::Error {
                message: format!("Failed to start file reader: {e}"),
            },
        );
    }
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    config: ClientConfig,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    // Built once; a bad endpoint is reported on every submission.
    let client = SentimentClient::new(&config).map_err(|e| e.to_string());
    if let Ok(ref c) = client {
        send(
            &tx,
            &ctx,
            WorkerResult::Log {
                message: format!("Endpoint: {}", c.endpoint()),
            },
        );
    }

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Analyze { form } => handle_analyze(&client, &form, &tx, &ctx),
        }
    }
}

fn handle_load_file(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match CsvUpload::open(path) {
        Ok(upload) => send(tx, ctx, WorkerResult::FileLoaded { upload }),
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::Error {
                message: format!("Failed to read {}: {e}", path.display()),
            },
        ),
    }
}

fn handle_analyze(
    client: &Result<SentimentClient, String>,
    form: &SubmissionForm,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let outcome = match client {
        Ok(client) => client.analyze(form),
        Err(message) => {
            tracing::error!("Error during sentiment analysis: {message}");
            AnalysisOutcome::failure(message.clone())
        }
    };
    send(
        tx,
        ctx,
        WorkerResult::AnalysisComplete {
            outcome,
            elapsed: start.elapsed(),
        },
    );
}
