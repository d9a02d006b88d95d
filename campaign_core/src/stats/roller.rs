//! Ability score rolling (4d6 drop lowest)
//!
//! This is the only non-deterministic part of the stats engine. All dice
//! come through [`DieRoller`] so tests can feed a fixed sequence.

use crate::types::{Ability, AbilityScoreSet};
use rand::Rng;

/// Dice thrown per ability score
const DICE_PER_SCORE: usize = 4;

/// Sides on each die
const DIE_SIDES: u32 = 6;

/// Source of single die results
pub trait DieRoller {
    /// Roll one die, returning a value in `1..=sides`
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<D: DieRoller + ?Sized> DieRoller for &mut D {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

/// Adapts any `rand` RNG into a [`DieRoller`]
#[derive(Debug, Clone)]
pub struct RngRoller<R> {
    rng: R,
}

impl<R: Rng> RngRoller<R> {
    pub fn new(rng: R) -> Self {
        RngRoller { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngRoller<rand::rngs::ThreadRng> {
    /// Roller backed by the thread-local RNG
    pub fn thread() -> Self {
        RngRoller::new(rand::thread_rng())
    }
}

impl<R: Rng> DieRoller for RngRoller<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides.max(1))
    }
}

/// Replays a fixed sequence of die results, cycling when exhausted.
///
/// Every scripted value must be a legal face (`1..=sides`). Debug builds
/// panic on anything else so a broken fixture can't pass unnoticed.
#[derive(Debug, Clone)]
pub struct FixedRolls {
    values: Vec<u32>,
    cursor: usize,
}

impl FixedRolls {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        FixedRolls {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of dice consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DieRoller for FixedRolls {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let value = if self.values.is_empty() {
            1
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        debug_assert!(
            (1..=sides.max(1)).contains(&value),
            "scripted roll {} is not a face of a d{}",
            value,
            sides
        );
        value.clamp(1, sides.max(1))
    }
}

/// Roll one ability score: four d6, drop the lowest, sum the rest.
///
/// Always in `3..=18`.
pub fn roll_ability_score(roller: &mut impl DieRoller) -> i32 {
    let mut dice = [0u32; DICE_PER_SCORE];
    for die in dice.iter_mut() {
        *die = roller.roll_die(DIE_SIDES);
    }
    let lowest = dice.iter().copied().min().unwrap_or(0);
    let total: u32 = dice.iter().sum();
    (total - lowest) as i32
}

/// Roll all six scores in sheet order (STR, DEX, CON, INT, WIS, CHA)
pub fn roll_ability_scores(roller: &mut impl DieRoller) -> AbilityScoreSet {
    let mut scores = AbilityScoreSet::default();
    for &ability in Ability::all() {
        scores.set(ability, roll_ability_score(roller));
    }
    scores
}
