//! The opposed d20 roll behind every attack, save and summoning.

use strum::Display;

use crate::config::EncounterConfig;
use crate::env::EncounterEnv;

/// Result tier of a stat test. Ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Failure,
    Success,
    Critical,
}

impl Outcome {
    /// Classifies a total against a difficulty, critical first.
    pub const fn classify(total: i32, difficulty: i32) -> Self {
        if total >= difficulty + EncounterConfig::CRITICAL_MARGIN {
            Self::Critical
        } else if total >= difficulty + EncounterConfig::SUCCESS_MARGIN {
            Self::Success
        } else {
            Self::Failure
        }
    }

    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Success | Self::Critical)
    }
}

/// Rolls d20 + `adder` against `difficulty` and narrates the result.
pub fn stat_test(env: &mut EncounterEnv<'_>, adder: i32, difficulty: i32) -> Outcome {
    let roll = env.roll(EncounterConfig::TEST_DIE);
    let total = adder + roll;
    let outcome = Outcome::classify(total, difficulty);
    tracing::trace!(adder, difficulty, roll, total, %outcome, "stat test");
    env.report(format!(
        "{outcome} - {total} ({})",
        difficulty + EncounterConfig::SUCCESS_MARGIN
    ));
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{RecordingReporter, ScriptedDice, ScriptedInput};

    #[test]
    fn tiers_partition_every_total() {
        let difficulty = 10;
        for total in -10..60 {
            let expected = if total >= difficulty + 20 {
                Outcome::Critical
            } else if total >= difficulty + 10 {
                Outcome::Success
            } else {
                Outcome::Failure
            };
            assert_eq!(Outcome::classify(total, difficulty), expected, "total {total}");
        }
    }

    #[test]
    fn raising_the_adder_never_downgrades() {
        for difficulty in [0, 8, 10, 15, 25] {
            for roll in 1..=20 {
                let mut previous = Outcome::Failure;
                for adder in -5..40 {
                    let outcome = Outcome::classify(adder + roll, difficulty);
                    assert!(outcome >= previous);
                    previous = outcome;
                }
            }
        }
    }

    #[test]
    fn stat_test_reports_total_and_threshold() {
        let mut dice = ScriptedDice::new([12]);
        let mut reporter = RecordingReporter::new();
        let mut input = ScriptedInput::default();
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        assert_eq!(stat_test(&mut env, 10, 10), Outcome::Success);
        drop(env);
        assert_eq!(reporter.lines().collect::<Vec<_>>(), ["success - 22 (20)"]);
    }
}
