//! Battle session state.
//!
//! ## BattleSession
//!
//! Owns everything one battle needs:
//! - Both combatants and the hero's base score
//! - The charge (one-shot boost) status
//! - The lifecycle phase and, once terminal, the fixed final score
//! - The session RNG, so a seed reproduces the whole battle
//!
//! Turn resolution lives in `rules::engine`; this module holds state and
//! the transitions the engine drives.

use serde::{Deserialize, Serialize};

use super::combatant::Combatant;
use super::config::{
    age_handicap, assert_valid_age, BattleConfig, BASE_SCORE, CHARGE_MULTIPLIER,
    STARTING_HIT_POINTS,
};
use super::rng::BattleRng;

/// Battle lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Pre-battle. Names and age still configurable.
    Setup,
    /// At least one turn has been taken.
    InProgress,
    /// Terminal. Only a reset leaves this phase.
    GameOver,
}

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// One-shot damage boost armed by resting.
///
/// Re-arming overwrites the boost; it never stacks. Consuming returns the
/// charge to idle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub multiplier: f64,
    pub ready: bool,
}

impl Charge {
    fn idle() -> Self {
        Self {
            multiplier: 1.0,
            ready: false,
        }
    }

    pub(crate) fn arm(&mut self) {
        self.multiplier = CHARGE_MULTIPLIER;
        self.ready = true;
    }

    /// Multiplier for the attack being resolved, plus whether an armed
    /// boost was spent on it.
    pub(crate) fn consume(&mut self) -> (f64, bool) {
        if self.ready {
            let multiplier = self.multiplier;
            *self = Self::idle();
            (multiplier, true)
        } else {
            (1.0, false)
        }
    }
}

/// A single battle from setup to game over.
#[derive(Clone, Debug)]
pub struct BattleSession {
    pub(crate) hero: Combatant,
    pub(crate) enemy: Combatant,
    pub(crate) score: u32,
    pub(crate) age: u32,
    pub(crate) charge: Charge,
    pub(crate) phase: Phase,
    pub(crate) outcome: Option<BattleOutcome>,
    pub(crate) final_score: Option<u32>,
    pub(crate) rng: BattleRng,
}

impl BattleSession {
    /// Create a session with a fixed RNG seed.
    ///
    /// Both combatants start at full hit points and the hero's base score
    /// is granted up front.
    ///
    /// # Panics
    ///
    /// Panics if the configured age is outside 1-120.
    #[must_use]
    pub fn new(config: BattleConfig, seed: u64) -> Self {
        assert_valid_age(config.age);
        Self {
            hero: Combatant::new(config.hero_name, STARTING_HIT_POINTS),
            enemy: Combatant::new(config.enemy_name, STARTING_HIT_POINTS),
            score: BASE_SCORE,
            age: config.age,
            charge: Charge::idle(),
            phase: Phase::Setup,
            outcome: None,
            final_score: None,
            rng: BattleRng::new(seed),
        }
    }

    /// Create a session seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(config: BattleConfig) -> Self {
        let mut session = Self::new(config, 0);
        session.rng = BattleRng::from_entropy();
        session
    }

    #[must_use]
    pub fn hero(&self) -> &Combatant {
        &self.hero
    }

    #[must_use]
    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    /// Base score granted at battle start.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// The age handicap, derived from the current age.
    ///
    /// Reactive, not snapshotted: changing the age mid-battle moves the
    /// handicap. Only the final score freezes it.
    #[must_use]
    pub fn handicap(&self) -> u32 {
        age_handicap(self.age)
    }

    #[must_use]
    pub fn charge(&self) -> Charge {
        self.charge
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// Base score plus handicap, fixed at the moment the battle ended.
    ///
    /// `None` while the battle is still running.
    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Update the player's age. The handicap follows immediately; an
    /// already-fixed final score does not move.
    ///
    /// # Panics
    ///
    /// Panics if `age` is outside 1-120.
    pub fn set_age(&mut self, age: u32) {
        assert_valid_age(age);
        self.age = age;
    }

    pub fn set_hero_name(&mut self, name: impl Into<String>) {
        self.hero.rename(name);
    }

    pub fn set_enemy_name(&mut self, name: impl Into<String>) {
        self.enemy.rename(name);
    }

    /// Discard the battle and start a fresh one with the same names and
    /// age, over a forked RNG stream.
    pub fn reset(&mut self) {
        let rng = self.rng.fork();
        let config = BattleConfig {
            hero_name: self.hero.name().to_string(),
            enemy_name: self.enemy.name().to_string(),
            age: self.age,
        };
        let mut fresh = Self::new(config, 0);
        fresh.rng = rng;
        *self = fresh;
    }

    pub(crate) fn begin(&mut self) {
        if self.phase == Phase::Setup {
            self.phase = Phase::InProgress;
        }
    }

    pub(crate) fn finish(&mut self, outcome: BattleOutcome) {
        self.phase = Phase::GameOver;
        self.outcome = Some(outcome);
        self.final_score = Some(self.score + age_handicap(self.age));
    }
}
