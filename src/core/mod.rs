//! Core battle types: combatants, actions, events, RNG, configuration, state.
//!
//! This module contains the building blocks the rules layer drives. Nothing
//! here sequences a turn; that lives in `rules`.

pub mod action;
pub mod combatant;
pub mod config;
pub mod event;
pub mod rng;
pub mod state;

pub use action::{ActionKind, DamageRange, PlayerAction, ENEMY_PUNCH, HERO_HOLY_WATER, HERO_PUNCH};
pub use combatant::Combatant;
pub use config::{
    age_handicap, BattleConfig, BASE_SCORE, CHARGE_MULTIPLIER, DESPERATION_THRESHOLD,
    STARTING_HIT_POINTS,
};
pub use event::BattleEvent;
pub use rng::BattleRng;
pub use state::{BattleOutcome, BattleSession, Charge, Phase};
