use sentiment_core::distribution::Distribution;
use sentiment_core::label::Sentiment;
use sentiment_core::outcome::{NO_DISTRIBUTION_TEXT, NO_PREDICTION_TEXT};

use crate::app::SentimentApp;

use super::palette;

const BAR_HEIGHT: f32 = 10.0;

const DISCLAIMER: &str =
    "Results are based on sentiment analysis algorithms and may not always reflect the intended meaning.";

pub fn show(ui: &mut egui::Ui, app: &SentimentApp) {
    super::card(
        ui,
        "Results",
        "Sentiment analysis prediction and visualization",
        |ui| {
            super::section_header(ui, "Prediction", None);
            ui.add_space(6.0);
            super::inset(ui, |ui| {
                ui.vertical_centered(|ui| match app.ui_state.outcome {
                    Some(ref outcome) if outcome.has_prediction() => {
                        ui.label(
                            egui::RichText::new(outcome.headline())
                                .size(20.0)
                                .color(palette::HEADING),
                        );
                    }
                    _ => {
                        ui.label(egui::RichText::new(NO_PREDICTION_TEXT).color(palette::MUTED));
                    }
                });
            });

            ui.add_space(18.0);
            super::section_header(ui, "Sentiment Distribution", Some("\u{2261}"));
            ui.add_space(6.0);
            super::inset(ui, |ui| {
                match app.ui_state.outcome.as_ref().and_then(|o| o.distribution()) {
                    Some(distribution) => {
                        for sentiment in Sentiment::ALL {
                            distribution_row(ui, sentiment, distribution);
                        }
                    }
                    None => {
                        ui.label(egui::RichText::new(NO_DISTRIBUTION_TEXT).color(palette::MUTED));
                    }
                }
            });

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(DISCLAIMER)
                    .small()
                    .italics()
                    .color(palette::MUTED),
            );
        },
    );
}

fn bar_color(sentiment: Sentiment) -> egui::Color32 {
    match sentiment {
        Sentiment::Positive => palette::POSITIVE,
        Sentiment::Neutral => palette::NEUTRAL,
        Sentiment::Negative => palette::NEGATIVE,
    }
}

fn distribution_row(ui: &mut egui::Ui, sentiment: Sentiment, distribution: &Distribution) {
    ui.horizontal(|ui| {
        ui.strong(sentiment.to_string());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.strong(format!("{}%", distribution.percent(sentiment)));
        });
    });

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), BAR_HEIGHT),
        egui::Sense::hover(),
    );
    let radius = BAR_HEIGHT / 2.0;
    let painter = ui.painter();
    painter.rect_filled(rect, radius, palette::TRACK);

    let fill = distribution.bar_width(sentiment);
    if fill > 0.0 {
        let mut filled = rect;
        filled.set_width(rect.width() * fill);
        painter.rect_filled(filled, radius, bar_color(sentiment));
    }
    ui.add_space(10.0);
}
