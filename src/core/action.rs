//! Actions and damage ranges.
//!
//! Two vocabularies live here:
//! - `PlayerAction`: what the collaborator may submit for a turn
//!   (punch, holy water, rest).
//! - `ActionKind`: the attack forms a turn can resolve. The enemy never
//!   submits anything - its replies are picked by the turn driver - but its
//!   attacks still resolve through the same kinds.
//!
//! Damage ranges are inclusive on both ends. Each attack form has a
//! baseline range; the turn driver narrows it per combatant (the hero's
//! punch lands harder than the enemy's).

use serde::{Deserialize, Serialize};

/// An action the player submits for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Attack with a punch.
    Punch,
    /// Attack with holy water.
    Holy,
    /// Skip the attack and arm the power boost for the next one.
    Rest,
}

/// An attack form that can resolve against a defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Punch,
    HolyWater,
    /// The enemy's desperation attack. Unboostable.
    DarkStrike,
}

impl ActionKind {
    /// Baseline damage range for this attack form.
    ///
    /// Call sites may narrow the punch and holy water ranges per combatant;
    /// dark strike always rolls its baseline.
    #[must_use]
    pub const fn base_range(self) -> DamageRange {
        match self {
            ActionKind::Punch => DamageRange::new(5, 15),
            ActionKind::HolyWater => DamageRange::new(10, 25),
            ActionKind::DarkStrike => DamageRange::new(12, 25),
        }
    }
}

/// Inclusive damage range `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    /// Create a new damage range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        assert!(min <= max, "damage range inverted");
        Self { min, max }
    }
}

/// The hero's punch, narrowed up from the baseline.
pub const HERO_PUNCH: DamageRange = DamageRange::new(8, 15);

/// The hero's holy water, narrowed from the baseline.
pub const HERO_HOLY_WATER: DamageRange = DamageRange::new(12, 22);

/// The enemy's punch, narrowed down from the baseline.
pub const ENEMY_PUNCH: DamageRange = DamageRange::new(5, 12);
