use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

pub const CORRECT_MESSAGE: &str = "✔ Correct!";
pub const WRONG_MESSAGE: &str = "❌ Wrong! Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

pub const COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        COLORS[rng.random_range(0..COLORS.len())]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color '{0}'")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        COLORS
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// One round of "click the named color". A wrong guess keeps the target.
#[derive(Debug, Clone)]
pub struct ColorGame {
    target: Color,
    result: Option<&'static str>,
}

impl ColorGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            target: Color::random(rng),
            result: None,
        }
    }

    pub fn target(&self) -> Color {
        self.target
    }

    pub fn prompt(&self) -> String {
        format!("Click the button: {}", self.target)
    }

    /// Outcome of the last guess, if any.
    pub fn result(&self) -> Option<&'static str> {
        self.result
    }

    /// Returns true on a correct guess, which also draws the next target.
    pub fn guess<R: Rng + ?Sized>(&mut self, color: Color, rng: &mut R) -> bool {
        let correct = color == self.target;
        if correct {
            self.result = Some(CORRECT_MESSAGE);
            self.target = Color::random(rng);
        } else {
            self.result = Some(WRONG_MESSAGE);
        }
        debug!("Color guess {} -> correct={}, next target {}", color, correct, self.target);
        correct
    }

    /// Start a new round, clearing the last result.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }
}
