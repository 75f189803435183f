//! Collaborators injected into an encounter.
//!
//! Dice, narration and human input live outside the engine. The
//! [`EncounterEnv`] aggregate bundles them so actions can roll, report and
//! ask without hard coupling to a terminal or a test harness.
mod input;
mod report;
mod rng;

pub use input::{Choice, InputProvider, ScriptedInput, resolve_choice};
pub use report::{RecordingReporter, Report, Reporter, TracingReporter};
pub use rng::{Dice, PcgDice, ScriptedDice};

/// Borrowed collaborators for the lifetime of one encounter.
pub struct EncounterEnv<'e> {
    dice: &'e mut dyn Dice,
    reporter: &'e mut dyn Reporter,
    input: &'e mut dyn InputProvider,
}

impl<'e> EncounterEnv<'e> {
    pub fn new(
        dice: &'e mut dyn Dice,
        reporter: &'e mut dyn Reporter,
        input: &'e mut dyn InputProvider,
    ) -> Self {
        Self {
            dice,
            reporter,
            input,
        }
    }

    pub fn roll(&mut self, sides: u32) -> i32 {
        self.dice.roll(sides) as i32
    }

    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        self.dice.range(min, max)
    }

    pub fn pick(&mut self, len: usize) -> Option<usize> {
        self.dice.pick(len)
    }

    pub fn report(&mut self, message: impl AsRef<str>) {
        self.reporter.report(message.as_ref());
    }

    pub fn major_report(&mut self, message: impl AsRef<str>) {
        self.reporter.major_report(message.as_ref());
    }

    /// Presents a menu to the human player and returns the clamped index.
    pub fn choose(&mut self, prompt: &str, options: &[Choice]) -> Option<usize> {
        if options.is_empty() {
            return None;
        }
        let raw = self.input.choose(prompt, options);
        resolve_choice(&raw, options.len())
    }
}
