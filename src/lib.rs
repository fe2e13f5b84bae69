//! Symmetry-reduced solving of small square-grid games
//!
//! This crate provides:
//! - Finite index domains, positions and an immutable packed board
//! - A generic group closure and the colour-swap x dihedral transform group
//! - Canonicalization of boards and moves under a game's symmetry group
//! - Memoized negamax, canonical transition graphs, outcome tallies and
//!   struggle enumeration
//! - Tic-tac-toe and connect-four rule plug-ins and a command-line front end

pub mod board;
pub mod canonical;
pub mod cli;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod framed;
pub mod game;
pub mod games;
pub mod group;
pub mod mixing;
pub mod position;
pub mod solver;
pub mod symmetry;
pub mod transform;

pub use board::{Board, BoardKey, Cell, Player};
pub use canonical::Canonicalizer;
pub use config::{ExploreConfig, GameKind};
pub use dynamics::{Discrete, Domain, Placement};
pub use error::{DomainError, Error, Result};
pub use framed::{Framed, FramedBoard};
pub use game::{Game, SymmetryMode};
pub use games::{ConnectFour, TicTacToe};
pub use group::{Group, check_axioms, closure};
pub use position::{Arrow, Index, Position, Step};
pub use solver::{CanonicalGraph, Explorer, GameOutcome, Outcomes, Struggle, Struggles};
pub use symmetry::{Morphism, Symmetry};
pub use transform::Transform;
