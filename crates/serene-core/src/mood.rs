use serene_types::models::MoodLabel;
use thiserror::Error;
use tracing::debug;

use crate::sentiment::SentimentAnalyzer;

/// Scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.2;
/// Scores strictly below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

pub const POSITIVE_MESSAGE: &str = "You seem positive today! Keep it up! 😊";
pub const NEGATIVE_MESSAGE: &str = "You're feeling low. It's okay ❤️ Take it slow today.";
pub const NEUTRAL_MESSAGE: &str = "Your mood seems neutral. Stay mindful 😊";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoodError {
    #[error("Please write something.")]
    EmptyText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodReading {
    pub label: MoodLabel,
    pub polarity: f64,
    pub message: &'static str,
}

/// Three-way threshold rule over a polarity score.
pub fn label_for(polarity: f64) -> MoodLabel {
    if polarity > POSITIVE_THRESHOLD {
        MoodLabel::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        MoodLabel::Negative
    } else {
        MoodLabel::Neutral
    }
}

pub fn message_for(label: MoodLabel) -> &'static str {
    match label {
        MoodLabel::Positive => POSITIVE_MESSAGE,
        MoodLabel::Negative => NEGATIVE_MESSAGE,
        MoodLabel::Neutral => NEUTRAL_MESSAGE,
    }
}

/// Classify free text. Blank input is rejected before the analyzer runs.
pub fn classify(text: &str, analyzer: &dyn SentimentAnalyzer) -> Result<MoodReading, MoodError> {
    if text.trim().is_empty() {
        return Err(MoodError::EmptyText);
    }

    let polarity = analyzer.polarity(text);
    let label = label_for(polarity);
    debug!("Classified text as {} (polarity {:.3})", label, polarity);

    Ok(MoodReading {
        label,
        polarity,
        message: message_for(label),
    })
}
