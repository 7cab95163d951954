//! Turn sequencing.
//!
//! One call to [`submit_action`] resolves a complete turn:
//!
//! 1. REST arms the charge and ends the turn - no enemy reply.
//! 2. PUNCH/HOLY resolve the hero's attack, spending an armed boost.
//! 3. Win check: a defeated enemy ends the battle before it can reply.
//! 4. Enemy reply: dark strike when desperate, punch otherwise.
//! 5. Loss check: a defeated hero ends the battle.
//!
//! The final score is fixed the moment the battle ends and never moves
//! afterward.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::action::{PlayerAction, ENEMY_PUNCH, HERO_HOLY_WATER, HERO_PUNCH};
use crate::core::config::DESPERATION_THRESHOLD;
use crate::core::event::BattleEvent;
use crate::core::state::{BattleOutcome, BattleSession, Phase};

use super::resolver;

/// Events produced by one turn, in emission order.
///
/// A turn emits at most four events (attack, boost, reply, defeat), so the
/// common case never touches the heap.
pub type TurnEvents = SmallVec<[BattleEvent; 4]>;

/// Everything the collaborator needs to render one resolved turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Ordered events generated this turn.
    pub events: TurnEvents,
    pub hero_hp: u32,
    pub enemy_hp: u32,
    pub game_over: bool,
    pub outcome: Option<BattleOutcome>,
}

/// Errors surfaced by turn submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The battle already ended; reset the session to play again.
    #[error("the battle is already over")]
    BattleOver,
}

/// Execute one full turn for the submitted action.
///
/// Callable from any front end - web, CLI, or a test harness. The first
/// submitted action moves the session out of `Setup`.
pub fn submit_action(
    session: &mut BattleSession,
    action: PlayerAction,
) -> Result<TurnResult, TurnError> {
    if session.phase() == Phase::GameOver {
        return Err(TurnError::BattleOver);
    }
    session.begin();

    let mut events = TurnEvents::new();
    match action {
        PlayerAction::Rest => {
            session.charge.arm();
            events.push(BattleEvent::Charged);
        }
        PlayerAction::Punch | PlayerAction::Holy => {
            hero_attack(session, action, &mut events);

            if session.enemy.is_defeated() {
                session.finish(BattleOutcome::Victory);
                events.push(BattleEvent::Victory);
            } else {
                enemy_reply(session, &mut events);
                if session.hero.is_defeated() {
                    session.finish(BattleOutcome::Defeat);
                    events.push(BattleEvent::Defeat);
                }
            }
        }
    }

    tracing::debug!(
        ?action,
        hero_hp = session.hero.hit_points(),
        enemy_hp = session.enemy.hit_points(),
        game_over = session.is_game_over(),
        "turn resolved"
    );

    Ok(TurnResult {
        events,
        hero_hp: session.hero.hit_points(),
        enemy_hp: session.enemy.hit_points(),
        game_over: session.is_game_over(),
        outcome: session.outcome(),
    })
}

fn hero_attack(session: &mut BattleSession, action: PlayerAction, events: &mut TurnEvents) {
    let (multiplier, boosted) = session.charge.consume();
    let strike = match action {
        PlayerAction::Punch => resolver::punch(
            &mut session.rng,
            session.hero.name(),
            session.enemy.name(),
            session.enemy.hit_points(),
            HERO_PUNCH,
            multiplier,
        ),
        PlayerAction::Holy => resolver::holy_water(
            &mut session.rng,
            session.hero.name(),
            session.enemy.name(),
            session.enemy.hit_points(),
            HERO_HOLY_WATER,
            multiplier,
        ),
        PlayerAction::Rest => unreachable!("rest resolves no attack"),
    };
    session.enemy.set_hit_points(strike.defender_hp);
    events.push(strike.event);
    if boosted {
        events.push(BattleEvent::BoostConsumed);
    }
}

fn enemy_reply(session: &mut BattleSession, events: &mut TurnEvents) {
    let strike = if session.enemy.hit_points() <= DESPERATION_THRESHOLD {
        resolver::dark_strike(
            &mut session.rng,
            session.enemy.name(),
            session.hero.name(),
            session.hero.hit_points(),
        )
    } else {
        resolver::punch(
            &mut session.rng,
            session.enemy.name(),
            session.hero.name(),
            session.hero.hit_points(),
            ENEMY_PUNCH,
            1.0,
        )
    };
    session.hero.set_hit_points(strike.defender_hp);
    events.push(strike.event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::ActionKind;
    use crate::core::config::BattleConfig;

    fn session(seed: u64) -> BattleSession {
        BattleSession::new(BattleConfig::default(), seed)
    }

    fn attack_damage(result: &TurnResult, attacker: &str) -> Option<u32> {
        result.events.iter().find_map(|event| match event {
            BattleEvent::Attack {
                attacker: a,
                damage,
                ..
            } if a == attacker => Some(*damage),
            _ => None,
        })
    }

    #[test]
    fn test_first_action_enters_in_progress() {
        let mut s = session(42);
        assert_eq!(s.phase(), Phase::Setup);
        submit_action(&mut s, PlayerAction::Rest).unwrap();
        assert_eq!(s.phase(), Phase::InProgress);
    }

    #[test]
    fn test_rest_is_a_safe_turn() {
        let mut s = session(42);
        let result = submit_action(&mut s, PlayerAction::Rest).unwrap();

        assert_eq!(result.events.as_slice(), &[BattleEvent::Charged]);
        assert_eq!(result.hero_hp, 100);
        assert_eq!(result.enemy_hp, 100);
        assert!(!result.game_over);
        assert!(s.charge().ready);
        assert_eq!(s.charge().multiplier, 1.5);
    }

    #[test]
    fn test_boost_consumed_by_next_attack_only() {
        let mut s = session(42);
        submit_action(&mut s, PlayerAction::Rest).unwrap();

        let boosted = submit_action(&mut s, PlayerAction::Punch).unwrap();
        let damage = attack_damage(&boosted, "Hero").unwrap();
        assert!((12..=22).contains(&damage), "boosted punch rolled {}", damage);
        assert!(boosted.events.contains(&BattleEvent::BoostConsumed));
        assert!(!s.charge().ready);

        let unboosted = submit_action(&mut s, PlayerAction::Punch).unwrap();
        let damage = attack_damage(&unboosted, "Hero").unwrap();
        assert!((8..=15).contains(&damage), "unboosted punch rolled {}", damage);
        assert!(!unboosted.events.contains(&BattleEvent::BoostConsumed));
    }

    #[test]
    fn test_boosted_holy_water_range() {
        let mut s = session(42);
        submit_action(&mut s, PlayerAction::Rest).unwrap();
        let result = submit_action(&mut s, PlayerAction::Holy).unwrap();
        let damage = attack_damage(&result, "Hero").unwrap();
        assert!((18..=33).contains(&damage), "boosted holy water rolled {}", damage);
    }

    #[test]
    fn test_victory_skips_enemy_reply() {
        let mut s = session(42);
        s.begin();
        s.enemy.set_hit_points(1);

        let result = submit_action(&mut s, PlayerAction::Punch).unwrap();
        assert!(result.game_over);
        assert_eq!(result.outcome, Some(BattleOutcome::Victory));
        assert_eq!(result.enemy_hp, 0);
        assert_eq!(result.hero_hp, 100, "enemy must not reply after falling");
        assert_eq!(result.events.last(), Some(&BattleEvent::Victory));
        assert!(attack_damage(&result, "Enemy").is_none());
        assert_eq!(s.final_score(), Some(60));
    }

    #[test]
    fn test_desperate_enemy_replies_with_dark_strike() {
        let mut s = session(42);
        s.begin();
        s.enemy.set_hit_points(45);

        // Hero's punch leaves the enemy at 30-37 HP; force the desperate
        // side by rolling until the threshold is crossed.
        loop {
            let result = submit_action(&mut s, PlayerAction::Punch).unwrap();
            if result.game_over {
                panic!("battle ended before desperation was observed");
            }
            let kind = result.events.iter().find_map(|event| match event {
                BattleEvent::Attack {
                    attacker, kind, ..
                } if attacker == "Enemy" => Some(*kind),
                _ => None,
            });
            if result.enemy_hp <= DESPERATION_THRESHOLD {
                assert_eq!(kind, Some(ActionKind::DarkStrike));
                break;
            }
            assert_eq!(kind, Some(ActionKind::Punch));
        }
    }

    #[test]
    fn test_enemy_punch_range_while_healthy() {
        let mut s = session(42);
        let result = submit_action(&mut s, PlayerAction::Punch).unwrap();
        let damage = attack_damage(&result, "Enemy").unwrap();
        assert!((5..=12).contains(&damage), "enemy punch rolled {}", damage);
    }

    #[test]
    fn test_defeat_fixes_final_score() {
        let mut s = BattleSession::new(BattleConfig::new("Hero", "Enemy", 30), 42);
        s.begin();
        s.hero.set_hit_points(1);
        s.enemy.set_hit_points(100);

        let result = submit_action(&mut s, PlayerAction::Punch).unwrap();
        assert!(result.game_over);
        assert_eq!(result.outcome, Some(BattleOutcome::Defeat));
        assert_eq!(result.events.last(), Some(&BattleEvent::Defeat));
        // Base 50 + handicap 5 for age 30.
        assert_eq!(s.final_score(), Some(55));
    }

    #[test]
    fn test_submitting_after_game_over_errors() {
        let mut s = session(42);
        s.begin();
        s.enemy.set_hit_points(1);
        submit_action(&mut s, PlayerAction::Punch).unwrap();

        assert_eq!(
            submit_action(&mut s, PlayerAction::Punch),
            Err(TurnError::BattleOver)
        );
    }

    #[test]
    fn test_turn_result_serializes() {
        let mut s = session(42);
        let result = submit_action(&mut s, PlayerAction::Rest).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: TurnResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
