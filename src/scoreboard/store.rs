//! Durable top-10 scoreboard.
//!
//! ## Storage
//!
//! Two representations on disk:
//! - **Primary**: a JSON record file, the source of truth for `load`.
//! - **Mirror**: a `player,score` CSV export for external consumption.
//!
//! Writes are best-effort on both: a mirror failure never fails the primary
//! save, and no persistence failure ever reaches the caller as an error.
//! `load` degrades missing or corrupt storage to an empty list. Failures
//! are logged at `warn` and reported through [`Persisted`] flags so callers
//! and tests can observe degraded persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::entry::ScoreboardEntry;

/// Maximum entries kept after any write.
pub const MAX_ENTRIES: usize = 10;

/// Name recorded when the submitted player name is blank.
pub const DEFAULT_PLAYER: &str = "Player";

/// Which durable representations a write reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persisted {
    pub primary: bool,
    pub mirror: bool,
}

impl Persisted {
    /// True when both representations were written.
    #[must_use]
    pub fn complete(self) -> bool {
        self.primary && self.mirror
    }
}

/// Result of a save: the ranked collection plus persistence flags.
///
/// The entries are authoritative even when both writes failed; gameplay is
/// never blocked on storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub entries: Vec<ScoreboardEntry>,
    pub persisted: Persisted,
}

/// Errors raised inside the storage layer.
///
/// The public operations never propagate these; they are downgraded to
/// warnings at the store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("scoreboard io: {0}")]
    Io(#[from] io::Error),
    #[error("scoreboard records unreadable: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Ranked, size-capped, persistent scoreboard.
pub struct ScoreboardStore {
    primary: PathBuf,
    mirror: PathBuf,
    /// Guards the read-modify-truncate-write in `save` (and the deletes in
    /// `clear`) against concurrent in-process writers.
    write_lock: Mutex<()>,
}

impl ScoreboardStore {
    /// Store using `scoreboard.json` and `scoreboard.csv` under `dir`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::with_paths(dir.join("scoreboard.json"), dir.join("scoreboard.csv"))
    }

    /// Store with explicit primary and mirror paths.
    #[must_use]
    pub fn with_paths(primary: impl Into<PathBuf>, mirror: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            mirror: mirror.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Load the ranked collection.
    ///
    /// Missing, unreadable, or corrupt storage degrades to an empty list;
    /// this never errors.
    #[must_use]
    pub fn load(&self) -> Vec<ScoreboardEntry> {
        match self.read_primary() {
            Ok(entries) => entries,
            Err(StoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                warn!(path = %self.primary.display(), %err, "scoreboard unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Record a score.
    ///
    /// Appends an entry (blank names default to [`DEFAULT_PLAYER`]), ranks
    /// the collection descending by score with stable ties, truncates to
    /// [`MAX_ENTRIES`], and writes both representations best-effort. The
    /// ranked collection is returned regardless of what was persisted.
    pub fn save(&self, player: &str, score: u32) -> SaveOutcome {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let player = player.trim();
        let player = if player.is_empty() { DEFAULT_PLAYER } else { player };

        let mut entries = self.load();
        entries.push(ScoreboardEntry::new(player, score));
        rank(&mut entries);

        let primary = match self.write_primary(&entries) {
            Ok(()) => true,
            Err(err) => {
                warn!(path = %self.primary.display(), %err, "scoreboard primary write failed");
                false
            }
        };
        let mirror = match self.write_mirror(&entries) {
            Ok(()) => true,
            Err(err) => {
                warn!(path = %self.mirror.display(), %err, "scoreboard mirror write failed");
                false
            }
        };

        SaveOutcome {
            entries,
            persisted: Persisted { primary, mirror },
        }
    }

    /// Delete both representations.
    ///
    /// Missing files count as cleared; failures are warnings, never errors.
    pub fn clear(&self) -> Persisted {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        Persisted {
            primary: remove_file(&self.primary),
            mirror: remove_file(&self.mirror),
        }
    }

    fn read_primary(&self) -> Result<Vec<ScoreboardEntry>, StoreError> {
        let raw = fs::read_to_string(&self.primary)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_primary(&self, entries: &[ScoreboardEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.primary.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.primary, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }

    fn write_mirror(&self, entries: &[ScoreboardEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.mirror.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = String::from("player,score\n");
        for entry in entries {
            out.push_str(&format!("{},{}\n", entry.player, entry.score));
        }
        fs::write(&self.mirror, out)?;
        Ok(())
    }
}

/// Rank descending by score and cap the collection.
///
/// `sort_by` is stable: entries with equal scores keep their insertion
/// order.
fn rank(entries: &mut Vec<ScoreboardEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
}

fn remove_file(path: &Path) -> bool {
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(err) if err.kind() == io::ErrorKind::NotFound => true,
        Err(err) => {
            warn!(path = %path.display(), %err, "scoreboard delete failed");
            false
        }
    }
}
