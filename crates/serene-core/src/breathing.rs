/// Fixed four-step breathing cycle.
pub const STEPS: [&str; 4] = ["Inhale... 🌬️", "Hold... 🤚", "Exhale... 💨", "Relax... 🧘"];

#[derive(Debug, Clone, Default)]
pub struct BreathingStepper {
    index: usize,
}

impl BreathingStepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        STEPS[self.index]
    }

    /// Advance one step, wrapping after the last, and return the new step.
    pub fn next(&mut self) -> &'static str {
        self.index = (self.index + 1) % STEPS.len();
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
