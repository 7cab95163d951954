//! Attack resolution.
//!
//! Each resolver is a pure transformation over the defender's hit points:
//! roll damage, clamp at zero, emit the battle-log event. The caller applies
//! the returned HP to the session.

use crate::core::action::{ActionKind, DamageRange};
use crate::core::event::BattleEvent;
use crate::core::rng::BattleRng;

/// Outcome of a single resolved attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Strike {
    /// Damage dealt after any multiplier and truncation.
    pub damage: u32,
    /// Defender hit points after the hit, clamped at zero.
    pub defender_hp: u32,
    /// The battle-log event for this resolution.
    pub event: BattleEvent,
}

/// Resolve a punch over `range`, scaled by `multiplier`.
pub fn punch(
    rng: &mut BattleRng,
    attacker: &str,
    defender: &str,
    defender_hp: u32,
    range: DamageRange,
    multiplier: f64,
) -> Strike {
    strike(rng, ActionKind::Punch, attacker, defender, defender_hp, range, multiplier)
}

/// Resolve holy water over `range`, scaled by `multiplier`. Only the hero
/// invokes this.
pub fn holy_water(
    rng: &mut BattleRng,
    attacker: &str,
    defender: &str,
    defender_hp: u32,
    range: DamageRange,
    multiplier: f64,
) -> Strike {
    strike(rng, ActionKind::HolyWater, attacker, defender, defender_hp, range, multiplier)
}

/// Resolve a dark strike over its fixed range.
///
/// No multiplier parameter: the enemy's desperation attack cannot be
/// boosted.
pub fn dark_strike(rng: &mut BattleRng, attacker: &str, defender: &str, defender_hp: u32) -> Strike {
    strike(
        rng,
        ActionKind::DarkStrike,
        attacker,
        defender,
        defender_hp,
        ActionKind::DarkStrike.base_range(),
        1.0,
    )
}

fn strike(
    rng: &mut BattleRng,
    kind: ActionKind,
    attacker: &str,
    defender: &str,
    defender_hp: u32,
    range: DamageRange,
    multiplier: f64,
) -> Strike {
    let damage = rng.roll_damage(range, multiplier);
    let defender_hp = defender_hp.saturating_sub(damage);
    Strike {
        damage,
        defender_hp,
        event: BattleEvent::Attack {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            kind,
            damage,
            defender_hp,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{ENEMY_PUNCH, HERO_HOLY_WATER, HERO_PUNCH};

    #[test]
    fn test_punch_within_range() {
        let mut rng = BattleRng::new(42);
        for _ in 0..200 {
            let strike = punch(&mut rng, "Hero", "Enemy", 100, HERO_PUNCH, 1.0);
            assert!((8..=15).contains(&strike.damage));
            assert_eq!(strike.defender_hp, 100 - strike.damage);
        }
    }

    #[test]
    fn test_boosted_holy_water_range() {
        // [12, 22] * 1.5 truncated = [18, 33].
        let mut rng = BattleRng::new(42);
        for _ in 0..200 {
            let strike = holy_water(&mut rng, "Hero", "Enemy", 100, HERO_HOLY_WATER, 1.5);
            assert!((18..=33).contains(&strike.damage));
        }
    }

    #[test]
    fn test_dark_strike_fixed_range() {
        let mut rng = BattleRng::new(42);
        for _ in 0..200 {
            let strike = dark_strike(&mut rng, "Enemy", "Hero", 100);
            assert!((12..=25).contains(&strike.damage));
        }
    }

    #[test]
    fn test_hp_clamped_at_zero() {
        let mut rng = BattleRng::new(42);
        let strike = punch(&mut rng, "Enemy", "Hero", 3, ENEMY_PUNCH, 1.0);
        assert_eq!(strike.defender_hp, 0);
    }

    #[test]
    fn test_zero_damage_still_emits_event() {
        let mut rng = BattleRng::new(42);
        let strike = punch(&mut rng, "Hero", "Enemy", 50, DamageRange::new(0, 0), 1.0);
        assert_eq!(strike.damage, 0);
        assert_eq!(strike.defender_hp, 50);
        assert_eq!(
            strike.event,
            BattleEvent::Attack {
                attacker: "Hero".to_string(),
                defender: "Enemy".to_string(),
                kind: ActionKind::Punch,
                damage: 0,
                defender_hp: 50,
            }
        );
    }

    #[test]
    fn test_event_names_both_combatants() {
        let mut rng = BattleRng::new(7);
        let strike = dark_strike(&mut rng, "Demon", "Knight", 80);
        let line = strike.event.to_string();
        assert!(line.contains("Demon"));
        assert!(line.contains("Knight"));
        assert!(line.contains("DARK STRIKE"));
    }
}
