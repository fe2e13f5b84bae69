//! Exploration settings
//!
//! An [`ExploreConfig`] picks the game, the symmetry mode and the closure
//! bound for one run. It can be built in code or loaded from a JSON file;
//! command-line flags override whatever the file says.

use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    game::SymmetryMode,
    group::DEFAULT_CLOSURE_LIMIT,
};

/// Rule set to explore.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    /// 3x3 three in a row
    #[default]
    TicTacToe,
    /// Gravity drops on a 4-column board with a 3-row field
    ConnectFour,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameKind::TicTacToe => "tic-tac-toe",
            GameKind::ConnectFour => "connect-four",
        };
        f.write_str(name)
    }
}

/// Settings for one exploration run.
///
/// # Examples
///
/// ```
/// use symsolve::config::{ExploreConfig, GameKind};
/// use symsolve::SymmetryMode;
///
/// let config = ExploreConfig::new(GameKind::ConnectFour)
///     .with_symmetry(SymmetryMode::Geometric)
///     .with_connect_run(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    pub game: GameKind,
    pub symmetry: SymmetryMode,
    /// Largest symmetry group accepted before giving up
    pub closure_limit: usize,
    /// Pieces in a row needed to win connect-four
    pub connect_run: usize,
}

impl ExploreConfig {
    pub fn new(game: GameKind) -> Self {
        Self {
            game,
            ..Self::default()
        }
    }

    pub fn with_symmetry(mut self, symmetry: SymmetryMode) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn with_closure_limit(mut self, limit: usize) -> Self {
        self.closure_limit = limit;
        self
    }

    pub fn with_connect_run(mut self, run: usize) -> Self {
        self.connect_run = run;
        self
    }

    /// Read a JSON config file; missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: ExploreConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| Error::Io {
            operation: format!("write config {}", path.display()),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.closure_limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "closure_limit must be at least 1".to_string(),
            });
        }
        if !(2..=3).contains(&self.connect_run) && self.game == GameKind::ConnectFour {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "connect_run {} does not fit the 3-row connect-four field",
                    self.connect_run
                ),
            });
        }
        Ok(())
    }
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            game: GameKind::default(),
            symmetry: SymmetryMode::default(),
            closure_limit: DEFAULT_CLOSURE_LIMIT,
            connect_run: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ExploreConfig::default();
        assert_eq!(config.game, GameKind::TicTacToe);
        assert_eq!(config.symmetry, SymmetryMode::Full);
        assert_eq!(config.closure_limit, 4096);
        config.validate().unwrap();
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ExploreConfig =
            serde_json::from_str(r#"{"game": "connect-four", "symmetry": "none"}"#).unwrap();
        assert_eq!(config.game, GameKind::ConnectFour);
        assert_eq!(config.symmetry, SymmetryMode::None);
        assert_eq!(config.connect_run, 3);
    }

    #[test]
    fn rejects_zero_limit_and_long_runs() {
        assert!(ExploreConfig::default().with_closure_limit(0).validate().is_err());
        let long = ExploreConfig::new(GameKind::ConnectFour).with_connect_run(4);
        assert!(matches!(
            long.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explore.json");
        let config = ExploreConfig::new(GameKind::ConnectFour).with_symmetry(SymmetryMode::Geometric);
        config.save(&path).unwrap();
        assert_eq!(ExploreConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExploreConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
