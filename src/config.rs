use crate::consts;
use crate::game::engine::Settings;
use crate::game::grid::{Grid, GridError};
use crate::highscores::HighScoreStore;
use crate::mode::GameMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Dimensions of the board
    #[serde(default)]
    pub(crate) board: BoardConfig,

    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized or failed validation.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return where high scores should be kept: nowhere if saving is turned
    /// off, else the file given in the configuration or, failing that, the
    /// default high scores file path
    pub(crate) fn high_score_store(&self) -> HighScoreStore {
        if !self.files.save_high_scores {
            HighScoreStore::Disabled
        } else if let Some(p) = self
            .files
            .high_scores_file
            .clone()
            .or_else(HighScoreStore::default_path)
        {
            HighScoreStore::File(p)
        } else {
            HighScoreStore::NoPath
        }
    }

    pub(crate) fn engine_settings(&self) -> Settings {
        Settings {
            grid: self.board.0,
            food: self.game.food,
            mode: self.game.mode,
        }
    }

    pub(crate) fn log_file(&self) -> Option<&Path> {
        self.files.log_file.as_deref()
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawBoardConfig")]
pub(crate) struct BoardConfig(Grid);

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig(Grid::DEFAULT)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawBoardConfig {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Default for RawBoardConfig {
    fn default() -> RawBoardConfig {
        RawBoardConfig {
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
            cell_size: consts::CELL_SIZE,
        }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = GridError;

    fn try_from(value: RawBoardConfig) -> Result<BoardConfig, GridError> {
        Grid::new(value.width, value.height, value.cell_size).map(BoardConfig)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Number of food items kept on the board
    food: usize,

    /// Simulation rate
    ticks_per_second: u32,

    /// Mode selected when the menu first opens
    pub(crate) mode: GameMode,
}

impl GameConfig {
    /// Time between ticks
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            food: consts::FOOD_TARGET,
            ticks_per_second: consts::TICKS_PER_SECOND,
            mode: GameMode::default(),
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    food: usize,
    ticks_per_second: u32,
    mode: GameMode,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        let GameConfig {
            food,
            ticks_per_second,
            mode,
        } = GameConfig::default();
        RawGameConfig {
            food,
            ticks_per_second,
            mode,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameConfigError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, GameConfigError> {
        if !(1..=consts::MAX_FOOD).contains(&value.food) {
            return Err(GameConfigError::Food(value.food));
        }
        if !(1..=consts::MAX_TICKS_PER_SECOND).contains(&value.ticks_per_second) {
            return Err(GameConfigError::TicksPerSecond(value.ticks_per_second));
        }
        Ok(GameConfig {
            food: value.food,
            ticks_per_second: value.ticks_per_second,
            mode: value.mode,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GameConfigError {
    #[error("food must be between 1 and {max}, not {0}", max = consts::MAX_FOOD)]
    Food(usize),
    #[error(
        "ticks-per-second must be between 1 and {max}, not {0}",
        max = consts::MAX_TICKS_PER_SECOND
    )]
    TicksPerSecond(u32),
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which high scores should be stored
    high_scores_file: Option<PathBuf>,

    /// Whether to load & save high scores in a file
    save_high_scores: bool,

    /// File to write log messages to; nothing is logged if unset
    log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_scores_file: None,
            save_high_scores: true,
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::tempdir;

    #[test]
    fn empty_config() {
        let cfg = toml::from_str::<Config>("").expect("empty config should parse");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.engine_settings(), Settings::default());
        assert_eq!(cfg.game.tick_period(), Duration::from_millis(100));
        assert_eq!(cfg.log_file(), None);
    }

    #[test]
    fn full_config() {
        let src = concat!(
            "[board]\n",
            "width = 400\n",
            "height = 300\n",
            "cell-size = 10\n",
            "\n",
            "[game]\n",
            "food = 3\n",
            "ticks-per-second = 20\n",
            "mode = \"fun\"\n",
            "\n",
            "[files]\n",
            "high-scores-file = \"/var/games/snake.json\"\n",
            "save-high-scores = true\n",
            "log-file = \"/tmp/gridsnake.log\"\n",
        );
        let cfg = toml::from_str::<Config>(src).expect("config should parse");
        assert_eq!(
            cfg.engine_settings(),
            Settings {
                grid: Grid::new(400, 300, 10).expect("grid should be valid"),
                food: 3,
                mode: GameMode::Fun,
            }
        );
        assert_eq!(cfg.game.tick_period(), Duration::from_millis(50));
        assert_eq!(
            cfg.high_score_store(),
            HighScoreStore::File(PathBuf::from("/var/games/snake.json"))
        );
        assert_eq!(cfg.log_file(), Some(Path::new("/tmp/gridsnake.log")));
    }

    #[test]
    fn partial_board() {
        let cfg = toml::from_str::<Config>("[board]\nheight = 200\n").expect("config should parse");
        assert_eq!(
            cfg.board,
            BoardConfig(Grid::new(640, 200, 20).expect("grid should be valid"))
        );
    }

    #[rstest]
    #[case("[board]\ncell-size = 0\n", "cell size must be positive")]
    #[case("[board]\nwidth = 650\n", "not a multiple of the cell size")]
    #[case("[board]\nwidth = 60\n", "too small")]
    #[case("[board]\nheight = 20\n", "need at least 4 columns and 2 rows")]
    #[case("[board]\nheight = -20\n", "")]
    #[case("[game]\nfood = 0\n", "food must be between 1 and 64")]
    #[case("[game]\nfood = 65\n", "food must be between 1 and 64")]
    #[case("[game]\nticks-per-second = 0\n", "ticks-per-second must be between 1 and 60")]
    #[case("[game]\nticks-per-second = 61\n", "ticks-per-second must be between 1 and 60")]
    #[case("[game]\nmode = \"hard\"\n", "")]
    fn invalid_config(#[case] src: &str, #[case] msg: &str) {
        let e = toml::from_str::<Config>(src).expect_err("config should be rejected");
        assert!(e.to_string().contains(msg), "unexpected error: {e}");
    }

    #[test]
    fn saving_disabled() {
        let cfg = toml::from_str::<Config>(
            "[files]\nsave-high-scores = false\nhigh-scores-file = \"scores.json\"\n",
        )
        .expect("config should parse");
        assert_eq!(cfg.high_score_store(), HighScoreStore::Disabled);
    }

    #[test]
    fn default_high_score_store() {
        let store = Config::default().high_score_store();
        match HighScoreStore::default_path() {
            Some(p) => assert_eq!(store, HighScoreStore::File(p)),
            None => assert_eq!(store, HighScoreStore::NoPath),
        }
    }

    #[test]
    fn load_missing() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("config.toml");
        assert_eq!(
            Config::load(&path, true).expect("missing config should be allowed"),
            Config::default()
        );
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_file() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game]\nmode = \"fun\"\n").expect("writing config should succeed");
        let cfg = Config::load(&path, false).expect("config should load");
        assert_eq!(cfg.game.mode, GameMode::Fun);
    }

    #[test]
    fn load_invalid_file() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game]\nfood = 100\n").expect("writing config should succeed");
        assert!(matches!(
            Config::load(&path, true),
            Err(ConfigError::Parse(_))
        ));
    }
}
