//! Realization of transforms as concrete board maps
//!
//! A [`Symmetry`] is a materialized permutation of positions plus an optional
//! colour swap. It maps players, boards and positions, and composes with
//! `then` in the same order as [`Transform`] composition:
//! `a.then(&b).map_board(x) == b.map_board(&a.map_board(x))`.

use std::array;

use crate::{
    board::{Board, Player},
    position::{Index, Position},
    transform::Transform,
};

/// A position permutation together with its inverse.
///
/// `forward` sends a cell to where it ends up; `backward` undoes it.
#[derive(Debug, Clone, Copy)]
pub struct Morphism<const N: usize> {
    forward: fn(Position<N>) -> Position<N>,
    backward: fn(Position<N>) -> Position<N>,
}

impl<const N: usize> Morphism<N> {
    pub fn forward(&self, position: Position<N>) -> Position<N> {
        (self.forward)(position)
    }

    pub fn backward(&self, position: Position<N>) -> Position<N> {
        (self.backward)(position)
    }

    pub fn inverse(self) -> Self {
        Morphism {
            forward: self.backward,
            backward: self.forward,
        }
    }

    pub fn identity() -> Self {
        Morphism {
            forward: |p| p,
            backward: |p| p,
        }
    }

    /// Quarter turn clockwise: `(x, y) -> (flip(y), x)`.
    pub fn clockwise() -> Self {
        Morphism {
            forward: clockwise,
            backward: counter_clockwise,
        }
    }

    pub fn counter_clockwise() -> Self {
        Self::clockwise().inverse()
    }

    /// Half turn: `(x, y) -> (flip(x), flip(y))`.
    pub fn half_turn() -> Self {
        Morphism {
            forward: half_turn,
            backward: half_turn,
        }
    }

    /// Mirror left-right: `(x, y) -> (flip(x), y)`.
    pub fn mirror_horizontal() -> Self {
        Morphism {
            forward: mirror_horizontal,
            backward: mirror_horizontal,
        }
    }

    /// Mirror top-bottom: `(x, y) -> (x, flip(y))`.
    pub fn mirror_vertical() -> Self {
        Morphism {
            forward: mirror_vertical,
            backward: mirror_vertical,
        }
    }

    /// Mirror across the main diagonal: `(x, y) -> (y, x)`.
    pub fn mirror_diagonal() -> Self {
        Morphism {
            forward: mirror_diagonal,
            backward: mirror_diagonal,
        }
    }

    /// Mirror across the anti-diagonal: `(x, y) -> (flip(y), flip(x))`.
    pub fn mirror_anti_diagonal() -> Self {
        Morphism {
            forward: mirror_anti_diagonal,
            backward: mirror_anti_diagonal,
        }
    }
}

fn clockwise<const N: usize>(p: Position<N>) -> Position<N> {
    Position::new(p.y.flip(), p.x)
}

fn counter_clockwise<const N: usize>(p: Position<N>) -> Position<N> {
    Position::new(p.y, p.x.flip())
}

fn half_turn<const N: usize>(p: Position<N>) -> Position<N> {
    Position::new(p.x.flip(), p.y.flip())
}

fn mirror_horizontal<const N: usize>(p: Position<N>) -> Position<N> {
    Position::new(p.x.flip(), p.y)
}

fn mirror_vertical<const N: usize>(p: Position<N>) -> Position<N> {
    Position::new(p.x, p.y.flip())
}

fn mirror_diagonal<const N: usize>(p: Position<N>) -> Position<N> {
    Position::new(p.y, p.x)
}

fn mirror_anti_diagonal<const N: usize>(p: Position<N>) -> Position<N> {
    Position::new(p.y.flip(), p.x.flip())
}

/// A realized symmetry: colour swap flag plus a position lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symmetry<const N: usize> {
    oppose: bool,
    /// `images[y][x]` is where the cell at `(x, y)` is sent
    images: [[Position<N>; N]; N],
}

impl<const N: usize> Symmetry<N> {
    fn tabulate(oppose: bool, f: impl Fn(Position<N>) -> Position<N>) -> Self {
        Symmetry {
            oppose,
            images: array::from_fn(|y| array::from_fn(|x| f(Position::at(x, y)))),
        }
    }

    pub fn identity() -> Self {
        Self::tabulate(false, |p| p)
    }

    /// Swap Cross and Circle everywhere, positions unchanged.
    pub fn opposition() -> Self {
        Self::tabulate(true, |p| p)
    }

    /// Move cells along a position morphism, colours unchanged.
    pub fn positioning(morphism: Morphism<N>) -> Self {
        Self::tabulate(false, |p| morphism.forward(p))
    }

    /// Direct realization of `transform`.
    ///
    /// Colour swap, then mirror, then `rotate` clockwise quarter turns.
    pub fn reify(transform: Transform) -> Self {
        Self::tabulate(transform.oppose(), |p| {
            let mut image = if transform.mirror() {
                mirror_horizontal(p)
            } else {
                p
            };
            for _ in 0..transform.rotate() {
                image = clockwise(image);
            }
            image
        })
    }

    /// Realization of `transform` by composing its elementary generators.
    pub fn from_generators(transform: Transform) -> Self {
        Self::fragments(transform)
            .iter()
            .fold(Self::identity(), |acc, fragment| acc.then(fragment))
    }

    /// Elementary symmetries whose composition realizes `transform`, in order.
    pub fn fragments(transform: Transform) -> Vec<Self> {
        let mut fragments = Vec::new();
        if transform.oppose() {
            fragments.push(Self::opposition());
        }
        if transform.mirror() {
            fragments.push(Self::positioning(Morphism::mirror_horizontal()));
        }
        for _ in 0..transform.rotate() {
            fragments.push(Self::positioning(Morphism::clockwise()));
        }
        fragments
    }

    /// Apply `self`, then `right`.
    pub fn then(&self, right: &Self) -> Self {
        Self::tabulate(self.oppose ^ right.oppose, |p| {
            right.map_position(self.map_position(p))
        })
    }

    pub fn inverse(&self) -> Self {
        let mut images = [[Position::at(0, 0); N]; N];
        for y in Index::<N>::all() {
            for x in Index::<N>::all() {
                let source = Position::new(x, y);
                let image = self.map_position(source);
                images[image.y.value()][image.x.value()] = source;
            }
        }
        Symmetry {
            oppose: self.oppose,
            images,
        }
    }

    pub fn opposes(&self) -> bool {
        self.oppose
    }

    pub fn map_player(&self, player: Player) -> Player {
        if self.oppose {
            player.opponent()
        } else {
            player
        }
    }

    pub fn map_position(&self, position: Position<N>) -> Position<N> {
        self.images[position.y.value()][position.x.value()]
    }

    /// The board seen through this symmetry.
    ///
    /// Each cell moves to its image, recoloured if the symmetry opposes; the
    /// turn is recoloured the same way.
    pub fn map_board(&self, board: &Board<N>) -> Board<N> {
        let mut mapped = Board::empty(self.map_player(board.turn()));
        for position in Position::<N>::all() {
            let cell = board.cell(position);
            if cell.is_empty() {
                continue;
            }
            let cell = if self.oppose { cell.opposite() } else { cell };
            mapped = mapped.with_cell(self.map_position(position), cell);
        }
        mapped
    }
}
