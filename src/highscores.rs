use crate::mode::GameMode;
use enum_map::EnumMap;
use serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Best score ever achieved in each game mode
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighScores(EnumMap<GameMode, u32>);

impl HighScores {
    pub(crate) fn get(&self, mode: GameMode) -> u32 {
        self.0[mode]
    }

    /// Record `score` for `mode` if it beats the current high score.
    /// Returns whether the table changed.
    pub(crate) fn record_if_higher(&mut self, mode: GameMode, score: u32) -> bool {
        if score > self.0[mode] {
            self.0[mode] = score;
            true
        } else {
            false
        }
    }
}

impl Serialize for HighScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(mode, &score)| (mode.key(), score)))
    }
}

impl<'de> Deserialize<'de> for HighScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawHighScores::deserialize(deserializer).map(|raw| {
            HighScores(EnumMap::from_fn(|mode| match mode {
                GameMode::Classic => raw.classic,
                GameMode::Fun => raw.fun,
            }))
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
struct RawHighScores {
    classic: u32,
    fun: u32,
}

/// Where high scores are kept between runs
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum HighScoreStore {
    /// Read & write high scores in a JSON file at the given path
    File(PathBuf),
    /// Saving is wanted, but no location for the file could be determined
    NoPath,
    /// High scores are not persisted; loading yields an empty table and
    /// saving does nothing
    Disabled,
}

impl HighScoreStore {
    /// Return the default high scores file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscores.json"))
    }

    /// Write `scores` to the store, creating parent directories as needed
    pub(crate) fn save(&self, scores: &HighScores) -> Result<(), SaveError> {
        let path = match self {
            HighScoreStore::File(path) => path,
            HighScoreStore::NoPath => return Err(SaveError::no_path()),
            HighScoreStore::Disabled => return Ok(()),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(scores).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        log::debug!("Saved high scores to {}", path.display());
        Ok(())
    }

    /// Read high scores from the store.  A missing file is not an error and
    /// yields an empty table.
    pub(crate) fn load(&self) -> Result<HighScores, LoadError> {
        match self {
            HighScoreStore::File(path) => load_file(path),
            HighScoreStore::NoPath => Err(LoadError::no_path()),
            HighScoreStore::Disabled => Ok(HighScores::default()),
        }
    }
}

fn load_file(path: &Path) -> Result<HighScores, LoadError> {
    let src = match fs_err::read(path) {
        Ok(src) => src,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HighScores::default()),
        Err(e) => return Err(LoadError::read(e)),
    };
    serde_json::from_slice(&src).map_err(LoadError::deserialize)
}

#[derive(Debug, Error)]
#[error("Failed to save high scores to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn no_path() -> Self {
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
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read high scores file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high scores")]
    Deserialize(#[source] serde_json::Error),
}
