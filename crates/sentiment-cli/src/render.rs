use console::Style;
use sentiment_core::distribution::Distribution;
use sentiment_core::label::Sentiment;
use sentiment_core::outcome::{AnalysisOutcome, NO_DISTRIBUTION_TEXT};

const BAR_WIDTH: usize = 30;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    error: Style,
    track: Style,
    disclaimer: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            error: Style::new().red().bold(),
            track: Style::new().dim(),
            disclaimer: Style::new().dim().italic(),
        }
    }
}

fn bar_style(sentiment: Sentiment) -> Style {
    match sentiment {
        Sentiment::Positive => Style::new().green(),
        Sentiment::Neutral => Style::new().blue(),
        Sentiment::Negative => Style::new().red(),
    }
}

/// Number of filled cells for a fraction on a bar of `width` cells.
pub(crate) fn filled_cells(fraction: f32, width: usize) -> usize {
    ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width)
}

pub fn print_outcome(outcome: &AnalysisOutcome) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Prediction"));
    if outcome.is_failure() {
        println!("  {}", s.error.apply_to(outcome.headline()));
    } else if !outcome.has_prediction() {
        println!("  {}", s.label.apply_to(outcome.headline()));
    } else {
        println!("  {}", s.value.apply_to(outcome.headline()));
    }
    println!();

    println!("  {}", s.header.apply_to("Sentiment Distribution"));
    match outcome.distribution() {
        Some(d) => {
            for sentiment in Sentiment::ALL {
                print_bar(&s, sentiment, d);
            }
        }
        None => println!("  {}", s.label.apply_to(NO_DISTRIBUTION_TEXT)),
    }
    println!();
    println!(
        "  {}",
        s.disclaimer.apply_to(
            "Results are based on sentiment analysis algorithms and may not always reflect the intended meaning."
        )
    );
}

fn print_bar(s: &Styles, sentiment: Sentiment, d: &Distribution) {
    let filled = filled_cells(d.bar_width(sentiment), BAR_WIDTH);
    println!(
        "    {:<10}{}{} {:>4}",
        s.label.apply_to(sentiment.to_string()),
        bar_style(sentiment).apply_to("\u{2588}".repeat(filled)),
        s.track.apply_to("\u{2591}".repeat(BAR_WIDTH - filled)),
        s.value.apply_to(format!("{}%", d.percent(sentiment))),
    );
}

pub fn print_label_row(predicted: Sentiment, d: &Distribution) {
    let s = Styles::new();
    let cells: Vec<String> = Sentiment::ALL
        .iter()
        .map(|&other| format!("{} {}%", other, d.percent(other)))
        .collect();
    println!(
        "  {:<10}{}",
        s.header.apply_to(predicted.as_str()),
        s.value.apply_to(cells.join("  "))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_cells_bounds() {
        assert_eq!(filled_cells(0.0, 30), 0);
        assert_eq!(filled_cells(1.0, 30), 30);
        assert_eq!(filled_cells(2.0, 30), 30);
        assert_eq!(filled_cells(-1.0, 30), 0);
    }

    #[test]
    fn filled_cells_rounds() {
        assert_eq!(filled_cells(0.75, 30), 23);
        assert_eq!(filled_cells(0.1, 30), 3);
    }
}
