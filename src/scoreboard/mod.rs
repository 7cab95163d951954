//! Persistent ranked scoreboard.
//!
//! A top-10 leaderboard backed by a JSON record file with a CSV mirror.
//! Persistence is fail-soft in both directions: unreadable storage loads
//! empty, unwritable storage is reported through flags instead of errors.

pub mod entry;
pub mod store;

pub use entry::ScoreboardEntry;
pub use store::{Persisted, SaveOutcome, ScoreboardStore, StoreError, DEFAULT_PLAYER, MAX_ENTRIES};
