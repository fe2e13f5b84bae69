//! The capability set a rule plug-in provides to the engine
//!
//! A [`Game`] is a [`Discrete`] board domain that also names its symmetry
//! generators and decides winners. Everything else (canonicalization,
//! solving, enumeration) is derived from those two facts plus the dynamics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    dynamics::Discrete,
    error::Result,
    position::Position,
    transform::Transform,
};

/// A two-player square-grid game on an `N x N` board.
pub trait Game<const N: usize>:
    Discrete<Selector = Player, State = Board<N>, Event = Position<N>>
{
    /// Generators of the symmetry group; empty disables reduction.
    fn basis(&self) -> Vec<Transform>;

    /// The player owning a completed line, if any.
    fn winning(&self, board: &Board<N>) -> Option<Player>;

    /// Reject boards the rules could never produce, such as externally
    /// supplied starting positions. Any layout is accepted by default.
    ///
    /// # Errors
    ///
    /// [`crate::Error::UnreachableBoard`] naming the offending cell.
    fn check_reachable(&self, _board: &Board<N>) -> Result<()> {
        Ok(())
    }
}

/// How much symmetry a game folds together.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SymmetryMode {
    /// Every board is its own class
    None,
    /// Board geometry only (rotations and mirrors the rules allow)
    Geometric,
    /// Geometry plus swapping Cross and Circle
    #[default]
    Full,
}

impl fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymmetryMode::None => "none",
            SymmetryMode::Geometric => "geometric",
            SymmetryMode::Full => "full",
        };
        f.write_str(name)
    }
}

/// Owner of the first line whose cells sum to `±run`.
///
/// Cells score Cross as -1 and Circle as +1, so a line of `run` Crosses sums
/// to `-run` and a line of `run` Circles to `+run`.
pub fn line_winner<const N: usize>(
    board: &Board<N>,
    lines: &[Vec<Position<N>>],
    run: usize,
) -> Option<Player> {
    let run = run as i32;
    lines.iter().find_map(|line| {
        let sum: i32 = line.iter().map(|&p| i32::from(board.cell(p).score())).sum();
        if sum == -run {
            Some(Player::Cross)
        } else if sum == run {
            Some(Player::Circle)
        } else {
            None
        }
    })
}
