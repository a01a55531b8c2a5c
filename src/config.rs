use crate::consts;
use crate::highscores::{HighScoreTable, SaveError};
use crate::options::Options;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Gameplay options to start with
    #[serde(default)]
    pub options: Options,

    /// Settings about data files
    #[serde(default)]
    pub files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("chaosnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which high scores should be stored: the file
    /// given in the configuration or, if that is not set, the default high
    /// scores file path.  Return `None` if no path is present in the
    /// configuration and the default path could not be computed.
    pub fn high_scores_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .high_scores_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| default_high_scores_path().map(Cow::from))
    }

    /// Load the high score table.  Missing or unreadable files yield a table
    /// of placeholders, as does `self.files.save_high_scores` being `false`.
    pub fn load_high_scores(&self) -> HighScoreTable {
        if !self.files.save_high_scores {
            return HighScoreTable::default();
        }
        match self.high_scores_file() {
            Some(p) => HighScoreTable::load_or_default(&p, consts::HIGH_SCORE_CAPACITY),
            None => {
                tracing::warn!("Could not determine high scores file path; starting fresh");
                HighScoreTable::default()
            }
        }
    }

    /// Save the high score table.
    ///
    /// If `self.files.save_high_scores` is `false`, nothing is saved.
    pub fn save_high_scores(&self, table: &HighScoreTable) -> Result<(), SaveError> {
        if !self.files.save_high_scores {
            return Ok(());
        }
        let p = self.high_scores_file().ok_or_else(SaveError::no_path)?;
        table.save(&p)?;
        tracing::debug!(path = %p.display(), "Saved high scores");
        Ok(())
    }
}

/// Return the default path for the high scores file
pub fn default_high_scores_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("chaosnake").join("highscores.json"))
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FileConfig {
    /// Path at which high scores should be stored
    pub high_scores_file: Option<PathBuf>,

    /// Whether to load & save high scores in a file
    pub save_high_scores: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_scores_file: None,
            save_high_scores: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
