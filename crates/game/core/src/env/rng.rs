//! Dice for every random draw in an encounter.
//!
//! The engine consumes one shared, globally ordered stream of rolls. Seeded
//! play uses [`PcgDice`]; tests script the exact faces with [`ScriptedDice`].

use std::collections::VecDeque;

/// Source of uniform die rolls.
pub trait Dice {
    /// Roll a die with N sides (1-N inclusive). A zero-sided die yields 1.
    fn roll(&mut self, sides: u32) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max - min + 1) as u32;
        min + self.roll(span) as i32 - 1
    }

    /// Pick a uniformly random index into a collection of `len` items.
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.roll(len as u32) as usize - 1)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64 bits of state, 32 bits of output per step. The same seed
/// always replays the same encounter.
#[derive(Clone, Copy, Debug)]
pub struct PcgDice {
    state: u64,
}

impl PcgDice {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        // Mix the seed once so that small seeds do not start in a weak state.
        Self {
            state: Self::pcg_step(seed ^ 0x9e3779b97f4a7c15),
        }
    }

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then random rotate.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl Dice for PcgDice {
    fn roll(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        let value = (self.next_u32() % sides) + 1;
        tracing::trace!(sides, value, "die roll");
        value
    }
}

/// Dice that replay a fixed script of faces.
///
/// Every scripted face is clamped into `1..=sides` of the die being rolled.
/// Once the script runs dry the fallback face is used for every roll.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            fallback: 1,
        }
    }

    /// Dice that always land on `face` (clamped to each die).
    pub fn always(face: u32) -> Self {
        Self {
            faces: VecDeque::new(),
            fallback: face,
        }
    }

    /// Face used once the script is exhausted.
    pub fn then_always(mut self, face: u32) -> Self {
        self.fallback = face;
        self
    }

    /// Number of scripted faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        let face = self.faces.pop_front().unwrap_or(self.fallback);
        face.clamp(1, sides.max(1))
    }
}
