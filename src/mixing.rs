//! A small symmetry group over observation/action spin pairs
//!
//! A [`Mixing`] may exchange the observation and action of a [`Vector`] and
//! flip either spin. The utility of a vector is the product of its spins, so
//! every mixing scales utility by a fixed [`Sign`]:
//! `utility(mix(m, v)) == factor(m) * utility(v)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::group::Group;

/// One binary degree of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Spin {
    Left = -1,
    Right = 1,
}

impl Spin {
    pub fn flip(self) -> Spin {
        match self {
            Spin::Left => Spin::Right,
            Spin::Right => Spin::Left,
        }
    }

    pub fn value(self) -> i8 {
        self as i8
    }
}

/// An observation paired with an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub observation: Spin,
    pub action: Spin,
}

impl Vector {
    pub const fn new(observation: Spin, action: Spin) -> Self {
        Vector {
            observation,
            action,
        }
    }

    /// The four vectors in index order.
    pub const ALL: [Vector; 4] = [
        Vector::new(Spin::Left, Spin::Left),
        Vector::new(Spin::Left, Spin::Right),
        Vector::new(Spin::Right, Spin::Left),
        Vector::new(Spin::Right, Spin::Right),
    ];

    /// Position in [`Vector::ALL`]: action is the low bit, observation the high.
    pub fn index(self) -> usize {
        usize::from(self.action == Spin::Right) + 2 * usize::from(self.observation == Spin::Right)
    }

    pub fn from_index(index: usize) -> Option<Vector> {
        Vector::ALL.get(index).copied()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:+}, {:+})",
            self.observation.value(),
            self.action.value()
        )
    }
}

/// Exchange and flip operations on a [`Vector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Mixing {
    pub swap: bool,
    pub flip_observation: bool,
    pub flip_action: bool,
}

impl Mixing {
    pub const fn new(swap: bool, flip_observation: bool, flip_action: bool) -> Self {
        Mixing {
            swap,
            flip_observation,
            flip_action,
        }
    }

    /// Generators: exchange, joint flip, action flip.
    pub fn basis() -> [Mixing; 3] {
        [
            Mixing::new(true, false, false),
            Mixing::new(false, true, true),
            Mixing::new(false, false, true),
        ]
    }

    /// Exchange first, then flip observation, then flip action.
    pub fn mix(self, vector: Vector) -> Vector {
        let mut vector = vector;
        if self.swap {
            vector = Vector::new(vector.action, vector.observation);
        }
        if self.flip_observation {
            vector.observation = vector.observation.flip();
        }
        if self.flip_action {
            vector.action = vector.action.flip();
        }
        vector
    }

    /// How this mixing scales [`utility`].
    pub fn factor(self) -> Sign {
        Sign::of(self.flip_observation).compose(&Sign::of(self.flip_action))
    }
}

impl Group for Mixing {
    fn identity() -> Self {
        Mixing::default()
    }

    fn inverse(&self) -> Self {
        *self
    }

    fn compose(&self, right: &Self) -> Self {
        Mixing::new(
            self.swap ^ right.swap,
            self.flip_observation ^ right.flip_observation,
            self.flip_action ^ right.flip_action,
        )
    }
}

/// The multiplicative group `{+1, -1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// `Minus` when `negate` is set.
    pub fn of(negate: bool) -> Sign {
        if negate { Sign::Minus } else { Sign::Plus }
    }

    pub fn value(self) -> i8 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }
}

impl Group for Sign {
    fn identity() -> Self {
        Sign::Plus
    }

    fn inverse(&self) -> Self {
        *self
    }

    fn compose(&self, right: &Self) -> Self {
        Sign::of(self != right)
    }
}

/// Product of the two spins.
pub fn utility(vector: Vector) -> i8 {
    vector.observation.value() * vector.action.value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{check_axioms, closure};

    #[test]
    fn basis_generates_all_eight_mixings() {
        let group = closure(&Mixing::basis()).unwrap();
        assert_eq!(group.len(), 8);
        check_axioms(&Mixing::basis()).unwrap();
    }

    #[test]
    fn sign_group_is_z2() {
        assert_eq!(closure(&[Sign::Minus]).unwrap().len(), 2);
        check_axioms(&[Sign::Minus]).unwrap();
        assert_eq!(Sign::Minus.compose(&Sign::Minus), Sign::Plus);
    }

    #[test]
    fn utility_transforms_by_factor() {
        for mixing in closure(&Mixing::basis()).unwrap() {
            for vector in Vector::ALL {
                assert_eq!(
                    utility(mixing.mix(vector)),
                    mixing.factor().value() * utility(vector),
                    "{mixing:?} on {vector}"
                );
            }
        }
    }

    #[test]
    fn factor_is_a_homomorphism() {
        let group: Vec<Mixing> = closure(&Mixing::basis()).unwrap().into_iter().collect();
        for left in &group {
            for right in &group {
                assert_eq!(
                    left.compose(right).factor(),
                    left.factor().compose(&right.factor())
                );
            }
        }
    }

    #[test]
    fn index_round_trips() {
        for (i, vector) in Vector::ALL.iter().enumerate() {
            assert_eq!(vector.index(), i);
            assert_eq!(Vector::from_index(i), Some(*vector));
        }
        assert_eq!(Vector::from_index(4), None);
    }
}
