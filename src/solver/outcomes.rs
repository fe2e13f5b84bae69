//! Terminal outcome tallies

use std::{collections::HashMap, fmt, ops::AddAssign};

use serde::{Deserialize, Serialize};

use super::{CanonicalGraph, Explorer};
use crate::{
    board::{Board, BoardKey, Player},
    game::Game,
};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn from_winner(winner: Option<Player>) -> Self {
        winner.map_or(GameOutcome::Draw, GameOutcome::Win)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }

    /// The same outcome with colours swapped.
    pub fn swapped(self) -> Self {
        match self {
            GameOutcome::Win(player) => GameOutcome::Win(player.opponent()),
            GameOutcome::Draw => GameOutcome::Draw,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Path counts per terminal outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcomes {
    pub cross: u64,
    pub draw: u64,
    pub circle: u64,
}

impl Outcomes {
    pub fn single(outcome: GameOutcome) -> Self {
        let mut outcomes = Outcomes::default();
        outcomes.record(outcome);
        outcomes
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::Cross) => self.cross += 1,
            GameOutcome::Draw => self.draw += 1,
            GameOutcome::Win(Player::Circle) => self.circle += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.cross + self.draw + self.circle
    }

    /// The same tally with Cross and Circle wins exchanged.
    pub fn swapped(self) -> Self {
        Outcomes {
            cross: self.circle,
            draw: self.draw,
            circle: self.cross,
        }
    }
}

impl AddAssign for Outcomes {
    fn add_assign(&mut self, rhs: Self) {
        self.cross += rhs.cross;
        self.draw += rhs.draw;
        self.circle += rhs.circle;
    }
}

impl fmt::Display for Outcomes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X wins {}, draws {}, O wins {} (total {})",
            self.cross,
            self.draw,
            self.circle,
            self.total()
        )
    }
}

/// Count terminal paths through `graph`, in the colours of the board the
/// graph was built from.
///
/// Each node's tally is kept in its own canonical colours. Crossing an edge
/// whose transform swaps colours swaps the child's tally.
pub(super) fn tally<G: Game<N>, const N: usize>(
    explorer: &Explorer<'_, G, N>,
    graph: &CanonicalGraph<N>,
) -> Outcomes {
    let mut memo = HashMap::new();
    let outcomes = count(explorer, graph, graph.root(), &mut memo);
    if graph.root_transform().oppose() {
        outcomes.swapped()
    } else {
        outcomes
    }
}

fn count<G: Game<N>, const N: usize>(
    explorer: &Explorer<'_, G, N>,
    graph: &CanonicalGraph<N>,
    board: &Board<N>,
    memo: &mut HashMap<BoardKey, Outcomes>,
) -> Outcomes {
    let key = board.key();
    if let Some(outcomes) = memo.get(&key) {
        return *outcomes;
    }

    let mut outcomes = Outcomes::default();
    if let Some(node) = graph.node(board) {
        if node.is_terminal() {
            outcomes.record(GameOutcome::from_winner(explorer.winner(&node.board)));
        }
        for edge in node.edges.values() {
            let child = count(explorer, graph, &edge.target, memo);
            outcomes += if edge.transform.oppose() {
                child.swapped()
            } else {
                child
            };
        }
    }

    memo.insert(key, outcomes);
    outcomes
}
