use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::breathing::BreathingStepper;
use crate::color::{Color, ColorGame};
use crate::memory::{ClickOutcome, GameError, MemoryBoard};

/// Per-user mutable state: both mini-games, the breathing stepper and the
/// random source they draw from.
#[derive(Debug)]
pub struct Session {
    rng: StdRng,
    color: ColorGame,
    memory: MemoryBoard,
    breathing: BreathingStepper,
}

impl Session {
    /// A fixed `seed` makes every deal and color draw reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Session RNG seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(rng)
    }

    pub fn with_rng(mut rng: StdRng) -> Self {
        let color = ColorGame::new(&mut rng);
        let memory = MemoryBoard::new(&mut rng);
        Self {
            rng,
            color,
            memory,
            breathing: BreathingStepper::new(),
        }
    }

    // -- Color game --

    pub fn color(&self) -> &ColorGame {
        &self.color
    }

    pub fn guess_color(&mut self, color: Color) -> bool {
        self.color.guess(color, &mut self.rng)
    }

    pub fn reset_color(&mut self) {
        self.color.reset(&mut self.rng);
    }

    // -- Memory game --

    pub fn memory(&self) -> &MemoryBoard {
        &self.memory
    }

    pub fn click_memory(&mut self, index: usize) -> Result<ClickOutcome, GameError> {
        self.memory.click(index)
    }

    pub fn reset_memory(&mut self) {
        self.memory.reset(&mut self.rng);
    }

    // -- Breathing --

    pub fn breathing(&self) -> &BreathingStepper {
        &self.breathing
    }

    pub fn breathing_mut(&mut self) -> &mut BreathingStepper {
        &mut self.breathing
    }
}
