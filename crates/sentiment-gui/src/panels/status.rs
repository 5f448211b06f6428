use crate::app::SentimentApp;

pub fn show(ctx: &egui::Context, app: &mut SentimentApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if app.ui_state.is_busy() {
                ui.spinner();
                ui.label("Analyzing...");
            } else {
                ui.label("Ready");
            }
            ui.separator();
            ui.label(format!("Endpoint: {}", app.endpoint_label));
        });

        ui.add_space(2.0);
    });
}
