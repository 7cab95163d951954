//! Turn resolution: attack resolvers and the turn driver.
//!
//! `resolver` turns a single attack into damage, clamped HP, and an event;
//! `engine` sequences a whole turn and decides win/loss.

pub mod engine;
pub mod resolver;

pub use engine::{submit_action, TurnError, TurnEvents, TurnResult};
pub use resolver::{dark_strike, holy_water, punch, Strike};
