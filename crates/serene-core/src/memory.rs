//! Memory-match board: 16 face-down cells holding 8 pairs.
//!
//! A mismatched pair stays visible after the second pick and is only hidden
//! again when the next click arrives.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::debug;

pub const BOARD_SIZE: usize = 16;
pub const PAIR_COUNT: usize = BOARD_SIZE / 2;

pub const MATCH_MESSAGE: &str = "It's a match!";
pub const NO_MATCH_MESSAGE: &str = "Not a match. Try again.";
pub const WIN_MESSAGE: &str = "You found all the pairs! 🎉";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cell {index} is outside the 16-cell board")]
    CellOutOfRange { index: usize },
    #[error("board layout must hold each value 0..8 exactly twice")]
    InvalidLayout,
}

/// What a single click did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Cell already matched or currently face up.
    Ignored,
    FirstPick,
    Match,
    NoMatch,
    /// The click completed the last pair.
    Won,
}

impl ClickOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::FirstPick => "first_pick",
            Self::Match => "match",
            Self::NoMatch => "no_match",
            Self::Won => "won",
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Match => Some(MATCH_MESSAGE),
            Self::NoMatch => Some(NO_MATCH_MESSAGE),
            Self::Won => Some(WIN_MESSAGE),
            Self::Ignored | Self::FirstPick => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryBoard {
    values: [u8; BOARD_SIZE],
    revealed: [bool; BOARD_SIZE],
    matched: [bool; BOARD_SIZE],
    first: Option<usize>,
    second: Option<usize>,
    moves: u32,
    message: Option<&'static str>,
}

impl MemoryBoard {
    /// Deal a freshly shuffled board.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self::blank(dealt_values());
        board.reset(rng);
        board
    }

    /// Build a board from a fixed layout, e.g. to replay a known deal.
    pub fn from_values(values: [u8; BOARD_SIZE]) -> Result<Self, GameError> {
        let mut counts = [0u8; PAIR_COUNT];
        for &v in &values {
            let slot = counts.get_mut(v as usize).ok_or(GameError::InvalidLayout)?;
            *slot += 1;
        }
        if counts.iter().any(|&c| c != 2) {
            return Err(GameError::InvalidLayout);
        }
        Ok(Self::blank(values))
    }

    fn blank(values: [u8; BOARD_SIZE]) -> Self {
        Self {
            values,
            revealed: [false; BOARD_SIZE],
            matched: [false; BOARD_SIZE],
            first: None,
            second: None,
            moves: 0,
            message: None,
        }
    }

    /// Reshuffle and clear every flag and pending pick.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut values = dealt_values();
        values.shuffle(rng);
        *self = Self::blank(values);
        debug!("Memory board reshuffled");
    }

    pub fn click(&mut self, index: usize) -> Result<ClickOutcome, GameError> {
        if index >= BOARD_SIZE {
            return Err(GameError::CellOutOfRange { index });
        }

        // Settle the previously compared pair before accepting a new pick
        if let (Some(a), Some(b)) = (self.first, self.second) {
            if self.values[a] != self.values[b] {
                self.revealed[a] = false;
                self.revealed[b] = false;
            }
            self.first = None;
            self.second = None;
            self.message = None;
        }

        if self.matched[index] || self.revealed[index] {
            return Ok(ClickOutcome::Ignored);
        }

        self.revealed[index] = true;

        let outcome = match self.first {
            None => {
                self.first = Some(index);
                ClickOutcome::FirstPick
            }
            Some(first) => {
                self.second = Some(index);
                self.moves += 1;
                if self.values[first] == self.values[index] {
                    self.matched[first] = true;
                    self.matched[index] = true;
                    if self.is_won() {
                        ClickOutcome::Won
                    } else {
                        ClickOutcome::Match
                    }
                } else {
                    ClickOutcome::NoMatch
                }
            }
        };

        if let Some(message) = outcome.message() {
            self.message = Some(message);
        }
        debug!("Memory click on cell {}: {:?}", index, outcome);
        Ok(outcome)
    }

    /// True once every cell is permanently matched.
    #[inline]
    pub fn is_won(&self) -> bool {
        self.matched.iter().all(|&m| m)
    }

    /// Face value for revealed cells, `None` for hidden ones.
    pub fn visible_cells(&self) -> Vec<Option<u8>> {
        self.values
            .iter()
            .zip(self.revealed.iter())
            .map(|(&v, &shown)| shown.then_some(v))
            .collect()
    }

    #[inline]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[inline]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    pub fn matched_flags(&self) -> [bool; BOARD_SIZE] {
        self.matched
    }

    pub fn pairs_found(&self) -> usize {
        self.matched.iter().filter(|&&m| m).count() / 2
    }

    /// Completed pick pairs, matching or not.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Message from the last compared pair.
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    pub fn values(&self) -> &[u8; BOARD_SIZE] {
        &self.values
    }
}

fn dealt_values() -> [u8; BOARD_SIZE] {
    let mut values = [0u8; BOARD_SIZE];
    for (i, v) in values.iter_mut().enumerate() {
        *v = (i % PAIR_COUNT) as u8;
    }
    values
}
