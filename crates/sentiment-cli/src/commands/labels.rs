use anyhow::Result;
use sentiment_core::distribution::Distribution;
use sentiment_core::label::Sentiment;

use crate::render;

pub fn run() -> Result<()> {
    for predicted in Sentiment::ALL {
        render::print_label_row(predicted, &Distribution::single(predicted));
    }
    Ok(())
}
