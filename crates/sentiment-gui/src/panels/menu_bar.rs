use crate::app::SentimentApp;

pub fn show(ctx: &egui::Context, app: &mut SentimentApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let submit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Enter);
                let submit = egui::Button::new("Submit")
                    .shortcut_text(ctx.format_shortcut(&submit_shortcut));
                if ui.add_enabled(!app.ui_state.is_busy(), submit).clicked() {
                    ui.close();
                    app.submit();
                }

                if ui.button("Clear Input").clicked() {
                    ui.close();
                    app.ui_state.text_input.clear();
                    app.ui_state.file = None;
                    app.ui_state.add_log("Input cleared".into());
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Enter))) {
            app.submit();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
