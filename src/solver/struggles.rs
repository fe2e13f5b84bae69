//! Distinct lines of play

use std::{cmp::Ordering, collections::BTreeMap, fmt};

use super::{Explorer, GameOutcome};
use crate::{
    board::Board,
    error::{DomainError, Result},
    game::Game,
    position::Position,
};

/// An ordered sequence of canonical moves from the root to a terminal board.
///
/// Shorter struggles sort first; equal lengths compare move by move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Struggle<const N: usize>(Vec<Position<N>>);

impl<const N: usize> Struggle<N> {
    pub fn moves(&self) -> &[Position<N>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> PartialOrd for Struggle<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Struggle<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl<const N: usize> fmt::Display for Struggle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves: Vec<String> = self.0.iter().map(|p| format!("({p})")).collect();
        write!(f, "{}", moves.join(" "))
    }
}

/// Every struggle with its outcome.
pub type Struggles<const N: usize> = BTreeMap<Struggle<N>, GameOutcome>;

/// Number of struggles per length.
pub fn length_histogram<const N: usize>(struggles: &Struggles<N>) -> BTreeMap<usize, usize> {
    let mut lengths = BTreeMap::new();
    for struggle in struggles.keys() {
        *lengths.entry(struggle.len()).or_insert(0) += 1;
    }
    lengths
}

pub(super) fn enumerate<G: Game<N>, const N: usize>(
    explorer: &Explorer<'_, G, N>,
    root: &Board<N>,
) -> Result<Struggles<N>> {
    let mut struggles = BTreeMap::new();
    let mut path = Vec::new();
    walk(explorer, root, false, &mut path, &mut struggles)?;
    Ok(struggles)
}

/// Depth-first walk over canonical boards.
///
/// `swapped` tracks whether the canonical board reached so far has its
/// colours exchanged relative to the root.
fn walk<G: Game<N>, const N: usize>(
    explorer: &Explorer<'_, G, N>,
    board: &Board<N>,
    swapped: bool,
    path: &mut Vec<Position<N>>,
    struggles: &mut Struggles<N>,
) -> Result<()> {
    let game = explorer.game();
    let canon = explorer.canonicalizer();
    let (board, transform) = canon.canonical(board);
    let swapped = swapped ^ transform.oppose();

    let moves = canon.canonical_moves(game, &board)?;
    if moves.is_empty() {
        let outcome = GameOutcome::from_winner(explorer.winner(&board));
        let outcome = if swapped { outcome.swapped() } else { outcome };
        let struggle = Struggle(path.clone());
        if struggles.contains_key(&struggle) {
            return Err(DomainError::DuplicateStruggle {
                moves: struggle.to_string(),
            }
            .into());
        }
        struggles.insert(struggle, outcome);
        return Ok(());
    }

    for mv in moves {
        let next = game.update(&board, &mv)?;
        path.push(mv);
        walk(explorer, &next, swapped, path, struggles)?;
        path.pop();
    }
    Ok(())
}
