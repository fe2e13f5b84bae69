//! Command-line interface for exploring games
//!
//! Every subcommand shares [`ExploreArgs`]: the game, the symmetry mode, an
//! optional JSON config and an optional starting board. [`dispatch`] resolves
//! those into a concrete rule set and hands it to the command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    board::{Board, Player},
    config::{ExploreConfig, GameKind},
    game::{Game, SymmetryMode},
    games::{ConnectFour, TicTacToe},
};

pub mod commands;
pub mod output;

/// Board side used for connect-four from the command line.
pub const CONNECT_FOUR_SIZE: usize = 4;

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ExploreArgs {
    /// Game to explore (overrides the config file)
    #[arg(long, value_enum)]
    pub game: Option<GameKind>,

    /// Symmetry folded into canonical classes (overrides the config file)
    #[arg(long, value_enum)]
    pub symmetry: Option<SymmetryMode>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Starting board label, e.g. "X...O...._X" (default: empty board, X to move)
    #[arg(long)]
    pub state: Option<String>,

    /// Export results as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl ExploreArgs {
    /// Config file values with command-line overrides applied.
    pub fn resolve(&self) -> Result<ExploreConfig> {
        let mut config = match &self.config {
            Some(path) => ExploreConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ExploreConfig::default(),
        };
        if let Some(game) = self.game {
            config.game = game;
        }
        if let Some(symmetry) = self.symmetry {
            config.symmetry = symmetry;
        }
        config.validate()?;
        Ok(config)
    }

    /// The board to start from.
    pub fn root<G: Game<N>, const N: usize>(&self, game: &G) -> Result<Board<N>> {
        let Some(label) = &self.state else {
            return Ok(game.create(Player::Cross)?);
        };
        let board: Board<N> = label
            .parse()
            .with_context(|| format!("invalid --state '{label}'"))?;
        game.check_reachable(&board)
            .with_context(|| format!("invalid --state '{label}'"))?;
        Ok(board)
    }
}

/// A subcommand that works for any game and board size.
pub trait GameCommand {
    fn run<G: Game<N>, const N: usize>(
        &self,
        game: &G,
        config: &ExploreConfig,
        root: Board<N>,
    ) -> Result<()>;
}

/// Build the configured game and run `command` on it.
pub fn dispatch<C: GameCommand>(args: &ExploreArgs, command: &C) -> Result<()> {
    let config = args.resolve()?;
    tracing::debug!(game = %config.game, symmetry = %config.symmetry, "resolved configuration");

    match config.game {
        GameKind::TicTacToe => {
            let game = TicTacToe::<3>::new(config.symmetry);
            let root = args.root(&game)?;
            command.run(&game, &config, root)
        }
        GameKind::ConnectFour => {
            let game =
                ConnectFour::<CONNECT_FOUR_SIZE>::new(config.connect_run, config.symmetry)?;
            let root = args.root(&game)?;
            command.run(&game, &config, root)
        }
    }
}
