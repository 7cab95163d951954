//! # text-battle
//!
//! Core engine for a single-player turn-based text battle game: a hero
//! fights a scripted enemy with a small set of actions, and the final score
//! lands on a persistent top-10 leaderboard.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The front end is a collaborator, not a resident.
//!    One command - `submit_action(session, action)` - resolves a full turn
//!    and returns events and HP for whatever renders them (web, CLI, test
//!    harness).
//!
//! 2. **Deterministic**: The session owns a seedable RNG; the same seed
//!    replays the same battle. No hidden global randomness.
//!
//! 3. **Fail-Soft Persistence**: The scoreboard never blocks gameplay.
//!    Unreadable storage loads empty, unwritable storage degrades to
//!    warnings plus explicit `Persisted` flags.
//!
//! ## Modules
//!
//! - `core`: combatants, actions, events, RNG, configuration, session state
//! - `rules`: attack resolution and turn sequencing
//! - `scoreboard`: ranked, size-capped, durable leaderboard
//!
//! ## Example
//!
//! ```
//! use text_battle::{submit_action, BattleConfig, BattleSession, PlayerAction};
//!
//! let mut session = BattleSession::new(BattleConfig::default(), 42);
//! let turn = submit_action(&mut session, PlayerAction::Punch).unwrap();
//!
//! assert!(!turn.events.is_empty());
//! for event in &turn.events {
//!     println!("{}", event);
//! }
//! ```

pub mod core;
pub mod rules;
pub mod scoreboard;

// Re-export commonly used types
pub use crate::core::{
    age_handicap, ActionKind, BattleConfig, BattleEvent, BattleOutcome, BattleRng, BattleSession,
    Charge, Combatant, DamageRange, Phase, PlayerAction, BASE_SCORE, CHARGE_MULTIPLIER,
    DESPERATION_THRESHOLD, ENEMY_PUNCH, HERO_HOLY_WATER, HERO_PUNCH, STARTING_HIT_POINTS,
};

pub use crate::rules::{
    dark_strike, holy_water, punch, submit_action, Strike, TurnError, TurnEvents, TurnResult,
};

pub use crate::scoreboard::{
    Persisted, SaveOutcome, ScoreboardEntry, ScoreboardStore, StoreError, DEFAULT_PLAYER,
    MAX_ENTRIES,
};
