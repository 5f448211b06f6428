use serde::{Deserialize, Serialize};

use crate::consts::{DOMINANT_SHARE, MINOR_SHARE, SECONDARY_SHARE};
use crate::label::Sentiment;
use crate::prediction::Prediction;

/// Display split over the three classes, each a fraction in `[0, 1]`.
///
/// This is a client-side heuristic: a list of labels is counted, a single
/// label is expanded to a fixed split around the predicted class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl Distribution {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        match prediction {
            Prediction::Many(labels) => Self::from_labels(labels),
            Prediction::Single(label) => Sentiment::from_label(label)
                .map(Self::single)
                .unwrap_or_default(),
        }
    }

    /// Fractions of each known label. Unknown labels still count towards the
    /// total, so the fractions may sum to less than one.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let total = labels.len();
        if total == 0 {
            return Self::default();
        }

        let (mut positive, mut neutral, mut negative) = (0usize, 0usize, 0usize);
        for label in labels {
            match Sentiment::from_label(label.as_ref()) {
                Some(Sentiment::Positive) => positive += 1,
                Some(Sentiment::Neutral) => neutral += 1,
                Some(Sentiment::Negative) => negative += 1,
                None => {}
            }
        }

        let total = total as f64;
        Self {
            positive: positive as f64 / total,
            neutral: neutral as f64 / total,
            negative: negative as f64 / total,
        }
    }

    /// Fixed split for a single predicted label.
    pub fn single(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => Self {
                positive: DOMINANT_SHARE,
                neutral: SECONDARY_SHARE,
                negative: MINOR_SHARE,
            },
            Sentiment::Negative => Self {
                positive: MINOR_SHARE,
                neutral: SECONDARY_SHARE,
                negative: DOMINANT_SHARE,
            },
            Sentiment::Neutral => Self {
                positive: SECONDARY_SHARE,
                neutral: DOMINANT_SHARE,
                negative: MINOR_SHARE,
            },
        }
    }

    pub fn fraction(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Whole percent for labels, rounded half away from zero.
    pub fn percent(&self, sentiment: Sentiment) -> u32 {
        (self.fraction(sentiment) * 100.0).round().max(0.0) as u32
    }

    /// Fill fraction for a bar, clamped to `[0, 1]`.
    pub fn bar_width(&self, sentiment: Sentiment) -> f32 {
        self.fraction(sentiment).clamp(0.0, 1.0) as f32
    }

    /// Class with the largest share. Ties resolve in display order.
    pub fn dominant(&self) -> Option<Sentiment> {
        let mut best: Option<(Sentiment, f64)> = None;
        for sentiment in Sentiment::ALL {
            let value = self.fraction(sentiment);
            if value <= 0.0 {
                continue;
            }
            match best {
                Some((_, current)) if current >= value => {}
                _ => best = Some((sentiment, value)),
            }
        }
        best.map(|(sentiment, _)| sentiment)
    }

    pub fn is_empty(&self) -> bool {
        Sentiment::ALL.iter().all(|&s| self.fraction(s) == 0.0)
    }
}
