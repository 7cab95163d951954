//! Battle events emitted by turn resolution.
//!
//! Events are the only observable output of a turn besides the HP changes.
//! Collaborators can match on the variants or render the battle log through
//! `Display`.

use serde::{Deserialize, Serialize};

use super::action::ActionKind;

/// A single observable event from turn resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// An attack resolved. Emitted on every resolution, zero-damage rolls
    /// included.
    Attack {
        attacker: String,
        defender: String,
        kind: ActionKind,
        damage: u32,
        defender_hp: u32,
    },
    /// The hero rested and armed the power boost.
    Charged,
    /// An armed boost was spent on the attack just resolved.
    BoostConsumed,
    /// The enemy fell. The battle is over.
    Victory,
    /// The hero fell. The battle is over.
    Defeat,
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::Attack {
                attacker,
                defender,
                kind,
                damage,
                defender_hp,
            } => match kind {
                ActionKind::Punch => write!(
                    f,
                    "{} punches {} for {} damage. {} HP: {}",
                    attacker, defender, damage, defender, defender_hp
                ),
                ActionKind::HolyWater => write!(
                    f,
                    "{} casts HOLY WATER on {} for {} damage. {} HP: {}",
                    attacker, defender, damage, defender, defender_hp
                ),
                ActionKind::DarkStrike => write!(
                    f,
                    "{} uses DARK STRIKE on {} for {} damage. {} HP: {}",
                    attacker, defender, damage, defender, defender_hp
                ),
            },
            BattleEvent::Charged => {
                write!(f, "You rest and charge up! Next attack will deal extra damage.")
            }
            BattleEvent::BoostConsumed => write!(f, "Power boost used!"),
            BattleEvent::Victory => write!(f, "Enemy defeated! You win!"),
            BattleEvent::Defeat => write!(f, "You were defeated!"),
        }
    }
}
