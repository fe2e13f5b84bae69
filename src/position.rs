//! Finite index domains and board positions
//!
//! A game family fixes its board side `N` at compile time; every coordinate is
//! an [`Index<N>`] and every cell address a [`Position<N>`]. Positions are
//! identified by their integer encoding `N * y + x`, which also defines their
//! order.

use std::{cmp::Ordering, fmt, hash, str::FromStr};

use serde::{Deserialize, Serialize};

/// One coordinate value from the ordered domain `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Index<const N: usize>(u8);

impl<const N: usize> Index<N> {
    /// Create an index, or `None` when `value` is outside `0..N`.
    pub fn new(value: usize) -> Option<Self> {
        (value < N).then(|| Index(value as u8))
    }

    pub(crate) fn at(value: usize) -> Self {
        debug_assert!(value < N, "index {value} out of domain 0..{N}");
        Index(value as u8)
    }

    pub fn value(self) -> usize {
        self.0 as usize
    }

    pub fn first() -> Self {
        Index(0)
    }

    pub fn last() -> Self {
        Index::at(N - 1)
    }

    /// All indices in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N).map(Index::at)
    }

    /// Reflect the index across the middle of the domain.
    pub fn flip(self) -> Self {
        Index::at((N - 1 - self.value()) % N)
    }

    /// Whether a step in the given direction stays inside the domain.
    pub fn can_step(self, step: Step) -> bool {
        match step {
            Step::Decrement => self != Self::first(),
            Step::Zero => true,
            Step::Increment => self != Self::last(),
        }
    }

    /// Move one step, or `None` when that would leave the domain.
    pub fn step(self, step: Step) -> Option<Self> {
        if !self.can_step(step) {
            return None;
        }
        Some(match step {
            Step::Decrement => Index(self.0 - 1),
            Step::Zero => self,
            Step::Increment => Index(self.0 + 1),
        })
    }
}

impl<const N: usize> fmt::Display for Index<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of travel along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Decrement,
    Zero,
    Increment,
}

/// A direction on the board, one step per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrow {
    pub x: Step,
    pub y: Step,
}

impl Arrow {
    pub const fn new(x: Step, y: Step) -> Self {
        Arrow { x, y }
    }
}

/// A cell address on an `N x N` board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position<const N: usize> {
    pub x: Index<N>,
    pub y: Index<N>,
}

impl<const N: usize> Position<N> {
    pub fn new(x: Index<N>, y: Index<N>) -> Self {
        Position { x, y }
    }

    /// Build a position from raw coordinates, checking both against the domain.
    pub fn from_coordinates(x: usize, y: usize) -> Option<Self> {
        Some(Position {
            x: Index::new(x)?,
            y: Index::new(y)?,
        })
    }

    pub(crate) fn at(x: usize, y: usize) -> Self {
        Position {
            x: Index::at(x),
            y: Index::at(y),
        }
    }

    /// Canonical integer encoding; the sole basis for equality and order.
    pub fn encode(self) -> usize {
        N * self.y.value() + self.x.value()
    }

    /// Every position, enumerated column by column (x outer, y inner).
    ///
    /// This is the fixed order used when packing boards.
    pub fn all() -> impl Iterator<Item = Self> {
        Index::<N>::all().flat_map(|x| Index::<N>::all().map(move |y| Position { x, y }))
    }

    pub fn can_step(self, arrow: Arrow) -> bool {
        self.x.can_step(arrow.x) && self.y.can_step(arrow.y)
    }

    /// The adjacent position in direction `arrow`, if it is on the board.
    pub fn neighbour(self, arrow: Arrow) -> Option<Self> {
        Some(Position {
            x: self.x.step(arrow.x)?,
            y: self.y.step(arrow.y)?,
        })
    }

    /// The ray starting at this position and walking `arrow` until the edge.
    ///
    /// A `Zero`/`Zero` arrow yields only the start position.
    pub fn line(self, arrow: Arrow) -> impl Iterator<Item = Self> {
        let stationary = arrow.x == Step::Zero && arrow.y == Step::Zero;
        let mut next = Some(self);
        std::iter::from_fn(move || {
            let current = next?;
            next = if stationary {
                None
            } else {
                current.neighbour(arrow)
            };
            Some(current)
        })
    }
}

impl<const N: usize> PartialEq for Position<N> {
    fn eq(&self, other: &Self) -> bool {
        self.encode() == other.encode()
    }
}

impl<const N: usize> Eq for Position<N> {}

impl<const N: usize> hash::Hash for Position<N> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.encode().hash(state);
    }
}

impl<const N: usize> PartialOrd for Position<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Position<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.encode().cmp(&other.encode())
    }
}

impl<const N: usize> fmt::Display for Position<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl<const N: usize> FromStr for Position<N> {
    type Err = crate::Error;

    /// Parse the `"X,Y"` form printed by [`Display`](fmt::Display).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidPosition {
            input: s.to_string(),
            size: N,
        };

        let (x, y) = s.trim().split_once(',').ok_or_else(invalid)?;
        let x: usize = x.trim().parse().map_err(|_| invalid())?;
        let y: usize = y.trim().parse().map_err(|_| invalid())?;
        Position::from_coordinates(x, y).ok_or_else(invalid)
    }
}
