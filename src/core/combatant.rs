//! Combatant identity and hit points.

use serde::{Deserialize, Serialize};

/// A named fighter with zero-clamped hit points.
///
/// Hit points are unsigned and every write goes through a saturating
/// subtraction, so they can never go negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    hit_points: u32,
}

impl Combatant {
    /// Create a combatant with full hit points.
    #[must_use]
    pub fn new(name: impl Into<String>, hit_points: u32) -> Self {
        Self {
            name: name.into(),
            hit_points,
        }
    }

    /// The combatant's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current hit points.
    #[must_use]
    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    /// A combatant at exactly 0 HP is out of the fight.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hit_points == 0
    }

    /// Rename the combatant. Events emitted after this use the new name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_hit_points(&mut self, hit_points: u32) {
        self.hit_points = hit_points;
    }
}
