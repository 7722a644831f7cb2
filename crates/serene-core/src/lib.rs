/// Serene core: everything the presentation adapters share.
///
/// - Sentiment facility (`SentimentAnalyzer`) and the bundled lexicon analyzer
/// - Mood classifier with fixed polarity thresholds
/// - Memory-match and color-match mini-games
/// - Breathing stepper and static self-care tips
/// - `Session`, the explicit owner of per-user mutable state and its RNG

pub mod breathing;
pub mod color;
pub mod memory;
pub mod mood;
pub mod sentiment;
pub mod session;
pub mod tips;

pub use breathing::BreathingStepper;
pub use color::{Color, ColorGame, ParseColorError};
pub use memory::{ClickOutcome, GameError, MemoryBoard};
pub use mood::{MoodError, MoodReading, classify};
pub use sentiment::{LexiconAnalyzer, SentimentAnalyzer};
pub use session::Session;
