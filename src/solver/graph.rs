//! Canonical transition graph

use std::collections::{BTreeMap, HashMap, VecDeque};

use serde::Serialize;

use super::Explorer;
use crate::{
    board::{Board, BoardKey},
    error::Result,
    game::Game,
    position::Position,
    transform::Transform,
};

/// One canonical move out of a node.
#[derive(Debug, Clone, Copy)]
pub struct Edge<const N: usize> {
    /// Maps `target` back to the successor actually reached by the move
    pub transform: Transform,
    pub target: Board<N>,
}

/// A canonical board and its outgoing canonical moves.
#[derive(Debug, Clone)]
pub struct Node<const N: usize> {
    pub board: Board<N>,
    pub edges: BTreeMap<Position<N>, Edge<N>>,
}

impl<const N: usize> Node<N> {
    pub fn is_terminal(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Summary of a graph, as exported by the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub root: String,
    pub nodes: usize,
    pub edges: usize,
    pub terminals: usize,
    /// Node count per number of occupied cells
    pub depths: BTreeMap<usize, usize>,
}

/// Every canonical board reachable from a root, each with its canonical
/// moves.
#[derive(Debug, Clone)]
pub struct CanonicalGraph<const N: usize> {
    root: Board<N>,
    root_transform: Transform,
    nodes: HashMap<BoardKey, Node<N>>,
    /// Node keys in discovery order
    order: Vec<BoardKey>,
}

impl<const N: usize> CanonicalGraph<N> {
    /// Canonical form of the root.
    pub fn root(&self) -> &Board<N> {
        &self.root
    }

    /// Maps the canonical root back to the board the graph was built from.
    pub fn root_transform(&self) -> Transform {
        self.root_transform
    }

    pub fn node(&self, board: &Board<N>) -> Option<&Node<N>> {
        self.nodes.get(&board.key())
    }

    /// Nodes in breadth-first discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> {
        self.order.iter().filter_map(|key| self.nodes.get(key))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.edges.len()).sum()
    }

    pub fn terminal_count(&self) -> usize {
        self.nodes.values().filter(|n| n.is_terminal()).count()
    }

    pub fn depth_histogram(&self) -> BTreeMap<usize, usize> {
        let mut depths = BTreeMap::new();
        for node in self.nodes.values() {
            *depths.entry(node.board.occupied_count()).or_insert(0) += 1;
        }
        depths
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            root: self.root.label(),
            nodes: self.node_count(),
            edges: self.edge_count(),
            terminals: self.terminal_count(),
            depths: self.depth_histogram(),
        }
    }
}

/// Breadth-first expansion over canonical boards.
///
/// Each class of legal moves becomes one edge, keyed by its canonical move.
/// The edge follows the first legal move of the class in enumeration order.
pub(super) fn build<G: Game<N>, const N: usize>(
    explorer: &Explorer<'_, G, N>,
    root: &Board<N>,
) -> Result<CanonicalGraph<N>> {
    let game = explorer.game();
    let canon = explorer.canonicalizer();
    let (root, root_transform) = canon.canonical(root);

    let mut nodes = HashMap::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([root]);

    while let Some(board) = queue.pop_front() {
        let key = board.key();
        if nodes.contains_key(&key) {
            continue;
        }

        let mut edges = BTreeMap::new();
        for mv in game.events(&board) {
            let (canonical_move, _) = canon.canonical_move(game, &board, mv)?;
            if edges.contains_key(&canonical_move) {
                continue;
            }
            let (target, transform) = canon.canonical(&game.update(&board, &mv)?);
            edges.insert(canonical_move, Edge { transform, target });
            queue.push_back(target);
        }

        nodes.insert(key, Node { board, edges });
        order.push(key);
    }

    Ok(CanonicalGraph {
        root,
        root_transform,
        nodes,
        order,
    })
}
