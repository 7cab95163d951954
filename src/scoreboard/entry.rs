//! Scoreboard records.

use serde::{Deserialize, Serialize};

/// One ranked scoreboard record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardEntry {
    pub player: String,
    pub score: u32,
}

impl ScoreboardEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(player: impl Into<String>, score: u32) -> Self {
        Self {
            player: player.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serialization() {
        let entry = ScoreboardEntry::new("Alice", 60);
        let json = serde_json::to_string(&entry).unwrap();
        let back: ScoreboardEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
