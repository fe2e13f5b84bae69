//! Exact solving and exhaustive enumeration over canonical boards
//!
//! An [`Explorer`] owns the per-run caches (canonical classes, winners,
//! solved values) for one game and one symmetry basis. All traversals work on
//! canonical representatives only, so every equivalence class is expanded at
//! most once by the memoized passes.

use std::{cell::RefCell, collections::HashMap};

use tracing::{debug, trace};

use crate::{
    board::{Board, BoardKey, Player, score},
    canonical::Canonicalizer,
    error::Result,
    game::Game,
    group::DEFAULT_CLOSURE_LIMIT,
    position::Position,
};

mod graph;
mod outcomes;
mod struggles;

pub use graph::{CanonicalGraph, Edge, GraphSummary, Node};
pub use outcomes::{GameOutcome, Outcomes};
pub use struggles::{Struggle, Struggles, length_histogram};

/// A canonical move and its value for the player making it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ScoredMove<const N: usize> {
    pub position: Position<N>,
    pub value: i8,
}

/// Solver and enumerator for one game under one symmetry basis.
pub struct Explorer<'g, G, const N: usize> {
    game: &'g G,
    canon: Canonicalizer<N>,
    winners: RefCell<HashMap<BoardKey, Option<Player>>>,
    values: RefCell<HashMap<BoardKey, i8>>,
}

impl<'g, G: Game<N>, const N: usize> Explorer<'g, G, N> {
    pub fn new(game: &'g G) -> Result<Self> {
        Self::with_limit(game, DEFAULT_CLOSURE_LIMIT)
    }

    /// Explorer whose symmetry closure may hold at most `limit` elements.
    pub fn with_limit(game: &'g G, limit: usize) -> Result<Self> {
        Ok(Explorer {
            game,
            canon: Canonicalizer::with_limit(&game.basis(), limit)?,
            winners: RefCell::new(HashMap::new()),
            values: RefCell::new(HashMap::new()),
        })
    }

    pub fn game(&self) -> &'g G {
        self.game
    }

    pub fn canonicalizer(&self) -> &Canonicalizer<N> {
        &self.canon
    }

    /// Memoized [`Game::winning`].
    pub fn winner(&self, board: &Board<N>) -> Option<Player> {
        let key = board.key();
        if let Some(winner) = self.winners.borrow().get(&key) {
            return *winner;
        }
        let winner = self.game.winning(board);
        self.winners.borrow_mut().insert(key, winner);
        winner
    }

    /// Number of canonical classes solved so far.
    pub fn solved(&self) -> usize {
        self.values.borrow().len()
    }

    /// Game-theoretic value of `board` for the player to move: +1 win,
    /// 0 draw, -1 loss under perfect play.
    pub fn solve(&self, board: &Board<N>) -> Result<i8> {
        let (board, _) = self.canon.canonical(board);
        let key = board.key();
        if let Some(value) = self.values.borrow().get(&key) {
            return Ok(*value);
        }

        let moves = self.game.events(&board);
        let value = if moves.is_empty() {
            score(self.winner(&board)) * board.turn().score()
        } else {
            let mut best = i8::MIN;
            for mv in &moves {
                let child = self.game.update(&board, mv)?;
                best = best.max(-self.solve(&child)?);
            }
            best
        };

        trace!(key = %key, value, "solved class");
        self.values.borrow_mut().insert(key, value);
        Ok(value)
    }

    /// Every canonical move on `board` with its value for the mover.
    pub fn move_values(&self, board: &Board<N>) -> Result<Vec<ScoredMove<N>>> {
        self.canon
            .canonical_moves(self.game, board)?
            .into_iter()
            .map(|position| {
                let child = self.game.update(board, &position)?;
                Ok(ScoredMove {
                    position,
                    value: -self.solve(&child)?,
                })
            })
            .collect()
    }

    /// The canonical moves that achieve the solved value of `board`.
    pub fn best_moves(&self, board: &Board<N>) -> Result<Vec<ScoredMove<N>>> {
        let scored = self.move_values(board)?;
        let Some(best) = scored.iter().map(|m| m.value).max() else {
            return Ok(Vec::new());
        };
        Ok(scored.into_iter().filter(|m| m.value == best).collect())
    }

    /// Breadth-first canonical transition graph reachable from `root`.
    pub fn graph(&self, root: &Board<N>) -> Result<CanonicalGraph<N>> {
        let graph = graph::build(self, root)?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            terminals = graph.terminal_count(),
            "built canonical graph"
        );
        Ok(graph)
    }

    /// Terminal outcomes over every path of the canonical graph from `root`,
    /// reported with `root`'s colours.
    pub fn enumerate_outcomes(&self, root: &Board<N>) -> Result<Outcomes> {
        let graph = self.graph(root)?;
        Ok(self.tally(&graph))
    }

    /// [`enumerate_outcomes`](Self::enumerate_outcomes) over a graph that is
    /// already built.
    pub fn tally(&self, graph: &CanonicalGraph<N>) -> Outcomes {
        let outcomes = outcomes::tally(self, graph);
        debug!(total = outcomes.total(), "tallied outcomes");
        outcomes
    }

    /// Every distinct sequence of canonical moves from `root` to a terminal
    /// board, with the outcome reported in `root`'s colours.
    pub fn enumerate_struggles(&self, root: &Board<N>) -> Result<Struggles<N>> {
        let struggles = struggles::enumerate(self, root)?;
        debug!(count = struggles.len(), "enumerated struggles");
        Ok(struggles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dynamics::Domain, game::SymmetryMode, games::TicTacToe};

    #[test]
    fn decided_boards_score_for_the_player_to_move() {
        let game = TicTacToe::<3>::new(SymmetryMode::Full);
        let explorer = Explorer::new(&game).unwrap();

        let lost: Board<3> = "XXX/OO./..._O".parse().unwrap();
        assert_eq!(explorer.solve(&lost).unwrap(), -1);

        let drawn: Board<3> = "XOX/XOO/OXX_O".parse().unwrap();
        assert_eq!(explorer.solve(&drawn).unwrap(), 0);
    }

    #[test]
    fn immediate_win_is_found() {
        let game = TicTacToe::<3>::new(SymmetryMode::Geometric);
        let explorer = Explorer::new(&game).unwrap();
        let board: Board<3> = "XX./OO./..._X".parse().unwrap();

        assert_eq!(explorer.solve(&board).unwrap(), 1);
        let best = explorer.best_moves(&board).unwrap();
        assert!(best.iter().all(|m| m.value == 1));
        assert!(best.iter().any(|m| m.position == Position::at(2, 0)));
    }

    #[test]
    fn winner_is_memoized_by_key() {
        let game = TicTacToe::<3>::new(SymmetryMode::None);
        let explorer = Explorer::new(&game).unwrap();
        let board: Board<3> = "OOO/XX./X.._X".parse().unwrap();
        assert_eq!(explorer.winner(&board), Some(Player::Circle));
        assert_eq!(explorer.winner(&board), Some(Player::Circle));
        assert_eq!(explorer.winners.borrow().len(), 1);
    }

    #[test]
    fn opening_moves_all_draw() {
        let game = TicTacToe::<3>::new(SymmetryMode::Full);
        let explorer = Explorer::new(&game).unwrap();
        let empty = game.create(Player::Cross).unwrap();

        let values = explorer.move_values(&empty).unwrap();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|m| m.value == 0));
        assert_eq!(explorer.best_moves(&empty).unwrap().len(), 3);
    }
}
