use crate::app::SentimentApp;
use crate::states::InputTab;
use crate::worker;

use super::palette;

pub fn show(ui: &mut egui::Ui, app: &mut SentimentApp) {
    super::card(
        ui,
        "Input",
        "Enter text or upload a CSV file for sentiment analysis",
        |ui| {
            tab_bar(ui, app);
            ui.add_space(12.0);

            match app.ui_state.input_tab {
                InputTab::Text => text_tab(ui, app),
                InputTab::File => file_tab(ui, app),
            }

            ui.add_space(16.0);
            submit_button(ui, app);
        },
    );
}

fn tab_bar(ui: &mut egui::Ui, app: &mut SentimentApp) {
    ui.columns(2, |columns| {
        for (column, tab) in columns.iter_mut().zip([InputTab::Text, InputTab::File]) {
            column.vertical_centered_justified(|ui| {
                ui.selectable_value(&mut app.ui_state.input_tab, tab, tab.to_string());
            });
        }
    });
}

fn text_tab(ui: &mut egui::Ui, app: &mut SentimentApp) {
    ui.strong("Text for Analysis");
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::multiline(&mut app.ui_state.text_input)
            .id_salt("analysis-text")
            .hint_text("Enter your text here...")
            .desired_rows(10)
            .desired_width(f32::INFINITY),
    );
}

fn file_tab(ui: &mut egui::Ui, app: &mut SentimentApp) {
    let frame = egui::Frame::NONE
        .stroke(egui::Stroke::new(2.0, palette::DASHED))
        .corner_radius(8.0)
        .inner_margin(28.0);

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("\u{2601}").size(36.0).color(palette::MUTED));
            ui.add_space(8.0);
            ui.label("Drag and drop your CSV file here");
            ui.small("or");
            ui.add_space(6.0);
            if ui.button("Browse Files").clicked() {
                browse_file(app, ui.ctx());
            }

            if let Some(ref upload) = app.ui_state.file {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{} ({} bytes)",
                        upload.file_name,
                        upload.size()
                    ))
                    .strong(),
                );
            }
        });
    });
}

fn browse_file(app: &SentimentApp, ctx: &egui::Context) {
    let tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .pick_file()
        {
            worker::load_file_in_background(path, tx, ctx);
        }
    });
}

fn submit_button(ui: &mut egui::Ui, app: &mut SentimentApp) {
    let busy = app.ui_state.is_busy();
    let label = if busy { "Loading..." } else { "Submit" };
    let button = egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
        .fill(palette::SUBMIT)
        .min_size(egui::vec2(ui.available_width(), 36.0));

    if ui.add_enabled(!busy, button).clicked() {
        app.submit();
    }
}
