pub mod background;
pub mod input;
pub mod menu_bar;
pub mod page;
pub mod results;
pub mod status;

/// Tailwind-ish palette used by the page.
pub(crate) mod palette {
    use egui::Color32;

    pub const POSITIVE: Color32 = Color32::from_rgb(34, 197, 94);
    pub const NEUTRAL: Color32 = Color32::from_rgb(59, 130, 246);
    pub const NEGATIVE: Color32 = Color32::from_rgb(239, 68, 68);
    pub const SUBMIT: Color32 = Color32::from_rgb(5, 150, 105);
    pub const TRACK: Color32 = Color32::from_rgb(229, 231, 235);
    pub const INSET: Color32 = Color32::from_rgb(249, 250, 251);
    pub const MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    pub const HEADING: Color32 = Color32::from_rgb(31, 41, 55);
    pub const DASHED: Color32 = Color32::from_rgb(209, 213, 219);
}

/// Translucent white card with a title and a one-line description.
pub(crate) fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    description: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(egui::Color32::from_white_alpha(230))
        .corner_radius(10.0)
        .inner_margin(20.0)
        .shadow(egui::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: egui::Color32::from_black_alpha(25),
        })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(title)
                    .size(24.0)
                    .strong()
                    .color(palette::HEADING),
            );
            ui.label(egui::RichText::new(description).color(palette::MUTED));
            ui.add_space(12.0);
            add_contents(ui)
        })
        .inner
}

/// Grey inset box used for result sections.
pub(crate) fn inset<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(palette::INSET)
        .corner_radius(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(18.0).strong());
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}
