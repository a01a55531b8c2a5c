use crate::consts;
use serde::{ser::Serializer, Deserialize, Serialize};
use std::cmp::Reverse;
use std::path::Path;
use thiserror::Error;

/// A single result in the high score table
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HighScoreEntry {
    /// The player's name; `None` for the placeholder entries of an empty
    /// table
    pub name: Option<String>,
    pub score: i32,
    /// Movement speed when the game ended
    pub speed: u32,
    /// Length of the snake when the game ended
    pub size: usize,
    /// Whether the game was played in chaos mode
    pub chaos: bool,
}

impl HighScoreEntry {
    /// A zero-score entry with no name, used to fill an empty table
    pub fn placeholder() -> HighScoreEntry {
        HighScoreEntry::default()
    }

    /// Set the player's name, truncated to
    /// [`MAX_NAME_LEN`][consts::MAX_NAME_LEN] characters.  A blank name is
    /// recorded as [`DEFAULT_PLAYER_NAME`][consts::DEFAULT_PLAYER_NAME].
    pub fn with_name(mut self, name: &str) -> HighScoreEntry {
        let name = name.trim();
        let name = if name.is_empty() {
            consts::DEFAULT_PLAYER_NAME
        } else {
            name
        };
        self.name = Some(name.chars().take(consts::MAX_NAME_LEN).collect());
        self
    }
}

/// A fixed-size list of the best results so far, best first.  Entries with
/// equal scores stay in the order they were achieved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
    capacity: usize,
}

impl HighScoreTable {
    /// Create a table of `capacity` placeholder entries
    pub fn new(capacity: usize) -> HighScoreTable {
        HighScoreTable {
            entries: vec![HighScoreEntry::placeholder(); capacity],
            capacity,
        }
    }

    /// Build a table from stored entries, dropping any beyond `capacity` and
    /// filling any shortfall with placeholders.
    ///
    /// The entries are put in descending order of score (keeping the given
    /// order among ties), and stored names longer than
    /// [`MAX_NAME_LEN`][consts::MAX_NAME_LEN] characters are cut short.
    pub fn from_entries(mut entries: Vec<HighScoreEntry>, capacity: usize) -> HighScoreTable {
        if entries.len() < capacity {
            entries.resize_with(capacity, HighScoreEntry::placeholder);
        }
        entries.sort_by_key(|e| Reverse(e.score));
        entries.truncate(capacity);
        for e in &mut entries {
            if let Some(name) = e.name.as_mut() {
                if let Some((i, _)) = name.char_indices().nth(consts::MAX_NAME_LEN) {
                    name.truncate(i);
                }
            }
        }
        HighScoreTable { entries, capacity }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The best entry in the table, if the table can hold any
    pub fn top(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    /// Return the index at which a result of `score` would be inserted, or
    /// `None` if it does not beat any entry in a full table
    pub fn compute_rank(&self, score: i32) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .rposition(|e| e.score >= score)
            .map_or(0, |i| i + 1);
        (rank < self.capacity).then_some(rank)
    }

    /// Insert `entry` at `rank`, shifting lower entries down by one and
    /// dropping whatever falls off the end.  Ranks past the end of the table
    /// are ignored.
    pub fn insert(&mut self, entry: HighScoreEntry, rank: usize) {
        if rank < self.capacity {
            self.entries.insert(rank.min(self.entries.len()), entry);
            self.entries.truncate(self.capacity);
        }
    }

    /// Write the table to `path` as JSON, creating parent directories as
    /// needed
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string_pretty(self).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }

    /// Read a table of `capacity` entries from `path`
    pub fn load(path: &Path, capacity: usize) -> Result<HighScoreTable, LoadError> {
        let src = fs_err::read(path).map_err(LoadError::read)?;
        let entries = serde_json::from_slice::<Vec<HighScoreEntry>>(&src)
            .map_err(LoadError::deserialize)?;
        Ok(HighScoreTable::from_entries(entries, capacity))
    }

    /// Read a table of `capacity` entries from `path`, starting over with
    /// placeholders if the file is missing or cannot be read
    pub fn load_or_default(path: &Path, capacity: usize) -> HighScoreTable {
        match HighScoreTable::load(path, capacity) {
            Ok(table) => table,
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "No high scores file; starting fresh");
                HighScoreTable::new(capacity)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = ?e, "Ignoring unreadable high scores file");
                HighScoreTable::new(capacity)
            }
        }
    }
}

impl Default for HighScoreTable {
    fn default() -> HighScoreTable {
        HighScoreTable::new(consts::HIGH_SCORE_CAPACITY)
    }
}

impl Serialize for HighScoreTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high scores to disk")]
pub struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    pub(crate) fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high scores")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high scores to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high scores from disk")]
pub struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }

    fn is_not_found(&self) -> bool {
        matches!(self.0, LoadErrorSource::Read(ref e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high scores file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high scores")]
    Deserialize(#[source] serde_json::Error),
}
