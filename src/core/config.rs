//! Session configuration and battle tunables.
//!
//! The collaborator configures a session by providing a `BattleConfig`
//! (names plus the player's age); everything else about a battle is fixed
//! by the constants here.

use serde::{Deserialize, Serialize};

/// Starting hit points for both combatants.
pub const STARTING_HIT_POINTS: u32 = 100;

/// Score granted when a battle starts.
pub const BASE_SCORE: u32 = 50;

/// One-shot damage multiplier armed by resting.
pub const CHARGE_MULTIPLIER: f64 = 1.5;

/// The enemy switches to dark strike at or below this many hit points.
pub const DESPERATION_THRESHOLD: u32 = 30;

/// Age-derived bonus added to the base score at game end.
///
/// The boundary is strictly greater than 25: a 25-year-old still gets the
/// larger bonus.
#[must_use]
pub const fn age_handicap(age: u32) -> u32 {
    if age > 25 {
        5
    } else {
        10
    }
}

pub(crate) fn assert_valid_age(age: u32) {
    assert!((1..=120).contains(&age), "Age must be 1-120");
}

/// Session configuration supplied by the collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    pub hero_name: String,
    pub enemy_name: String,
    /// Player age, 1-120. Only affects the score handicap.
    pub age: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            hero_name: "Hero".to_string(),
            enemy_name: "Enemy".to_string(),
            age: 25,
        }
    }
}

impl BattleConfig {
    /// Create a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `age` is outside 1-120.
    #[must_use]
    pub fn new(hero_name: impl Into<String>, enemy_name: impl Into<String>, age: u32) -> Self {
        assert_valid_age(age);
        Self {
            hero_name: hero_name.into(),
            enemy_name: enemy_name.into(),
            age,
        }
    }
}
