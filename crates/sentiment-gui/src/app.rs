use std::sync::mpsc;

use sentiment_core::config::ClientConfig;
use sentiment_core::form::CsvUpload;
use sentiment_core::gradient::GradientAnimator;
use sentiment_core::outcome::AnalysisOutcome;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::UiState;
use crate::worker;

pub struct SentimentApp {
    pub cmd_tx: Option<mpsc::Sender<WorkerCommand>>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UiState,
    pub gradient: GradientAnimator,
    pub endpoint_label: String,
    pub show_about: bool,
}

impl SentimentApp {
    pub fn new(ctx: &egui::Context, config: ClientConfig) -> Self {
        ctx.set_visuals(egui::Visuals::light());

        let endpoint_label = config
            .endpoint
            .clone()
            .unwrap_or_else(|| "(not configured)".to_string());

        let mut ui_state = UiState::default();
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = match worker::spawn_worker(config, result_tx.clone(), ctx.clone()) {
            Ok(tx) => Some(tx),
            Err(e) => {
                tracing::error!("Failed to spawn worker thread: {e}");
                ui_state.add_log(format!("ERROR: failed to start worker: {e}"));
                None
            }
        };

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state,
            gradient: GradientAnimator::default(),
            endpoint_label,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker and file readers.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            self.ui_state.apply_result(result);
        }
    }

    /// Files dropped anywhere on the window are selected for upload.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                worker::load_file_in_background(path, self.result_tx.clone(), ctx.clone());
            } else if let Some(bytes) = file.bytes {
                self.ui_state
                    .drop_upload(CsvUpload::new(file.name, bytes.to_vec()));
            }
        }
    }

    pub fn submit(&mut self) {
        if let Some(form) = self.ui_state.begin_submit() {
            if !self.send_command(WorkerCommand::Analyze { form }) {
                self.ui_state
                    .finish_submit(AnalysisOutcome::failure("worker is not running"));
            }
        }
    }

    /// Returns `false` when the worker is gone.
    pub fn send_command(&self, cmd: WorkerCommand) -> bool {
        match self.cmd_tx {
            Some(ref tx) => tx.send(cmd).is_ok(),
            None => false,
        }
    }
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.handle_dropped_files(ctx);
        let stops = self.gradient.tick();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::page::show(ctx, self, stops);

        // About dialog
        if self.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Text Sentiment Analysis");
                        ui.label("Client for a remote sentiment endpoint");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        // Background animates every frame.
        ctx.request_repaint();
    }
}
