use crate::app::SentimentApp;

use super::{background, input, palette, results};

const MAX_PAGE_WIDTH: f32 = 1100.0;
const COLUMN_GAP: f32 = 24.0;

pub fn show(ctx: &egui::Context, app: &mut SentimentApp, stops: [[u8; 3]; 3]) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            background::paint(ui, ui.max_rect(), stops);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let width = ui.available_width().min(MAX_PAGE_WIDTH);
                let side = (ui.available_width() - width) / 2.0;

                ui.horizontal(|ui| {
                    ui.add_space(side);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        ui.add_space(32.0);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new("Text Sentiment Analysis")
                                    .size(40.0)
                                    .strong()
                                    .color(palette::HEADING),
                            );
                        });
                        ui.add_space(28.0);

                        ui.spacing_mut().item_spacing.x = COLUMN_GAP;
                        ui.columns(2, |columns| {
                            columns[0].spacing_mut().item_spacing.x = 8.0;
                            columns[1].spacing_mut().item_spacing.x = 8.0;
                            input::show(&mut columns[0], app);
                            results::show(&mut columns[1], app);
                        });
                        ui.add_space(32.0);
                    });
                });
            });
        });
}
