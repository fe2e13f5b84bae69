//! Compact descriptors of board symmetries
//!
//! A [`Transform`] names one element of `D4 x Z2`: an optional colour swap,
//! an optional horizontal mirror and a number of clockwise quarter turns,
//! applied in that order. Composition and inverse are computed directly on the
//! descriptor; [`crate::symmetry::Symmetry`] realizes it on boards.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::{error::DomainError, group::Group};

/// One symmetry-group element.
///
/// Fields are private so `rotate` stays below four; deserialization rejects
/// anything else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawTransform")]
pub struct Transform {
    /// Swap Cross and Circle (pieces and turn)
    oppose: bool,
    /// Mirror left-right
    mirror: bool,
    /// Clockwise quarter turns, `0..4`
    rotate: u8,
}

#[derive(Deserialize)]
struct RawTransform {
    oppose: bool,
    mirror: bool,
    rotate: u8,
}

impl TryFrom<RawTransform> for Transform {
    type Error = DomainError;

    fn try_from(raw: RawTransform) -> Result<Self, Self::Error> {
        if raw.rotate >= 4 {
            return Err(DomainError::InvalidRotation { rotate: raw.rotate });
        }
        Ok(Transform::new(raw.oppose, raw.mirror, raw.rotate))
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform::new(false, false, 0);

    /// Colour swap generator.
    pub const OPPOSE: Transform = Transform::new(true, false, 0);

    /// Horizontal mirror generator.
    pub const MIRROR: Transform = Transform::new(false, true, 0);

    /// Quarter-turn generator.
    pub const ROTATE: Transform = Transform::new(false, false, 1);

    pub const fn new(oppose: bool, mirror: bool, rotate: u8) -> Self {
        Transform {
            oppose,
            mirror,
            rotate: rotate % 4,
        }
    }

    pub fn oppose(self) -> bool {
        self.oppose
    }

    pub fn mirror(self) -> bool {
        self.mirror
    }

    /// Clockwise quarter turns, always below four.
    pub fn rotate(self) -> u8 {
        self.rotate
    }

    /// 4-bit identity: `oppose << 3 | mirror << 2 | rotate`.
    pub fn pack(self) -> u8 {
        (u8::from(self.oppose) << 3) | (u8::from(self.mirror) << 2) | self.rotate
    }

    /// Inverse of [`pack`](Self::pack); `None` for values above 15.
    pub fn unpack(bits: u8) -> Option<Self> {
        (bits < 16).then(|| Transform::new(bits & 8 != 0, bits & 4 != 0, bits & 3))
    }

    /// All sixteen elements of `D4 x Z2` in packing order.
    pub fn all() -> impl Iterator<Item = Transform> {
        (0..16).filter_map(Transform::unpack)
    }

    /// Whether this transform moves positions (as opposed to only recolouring).
    pub fn is_geometric(self) -> bool {
        self.mirror || self.rotate != 0
    }
}

impl Group for Transform {
    fn identity() -> Self {
        Transform::IDENTITY
    }

    fn inverse(&self) -> Self {
        let rotate = if self.mirror {
            self.rotate
        } else {
            (4 - self.rotate) % 4
        };
        Transform::new(self.oppose, self.mirror, rotate)
    }

    /// Apply `self`, then `right`.
    ///
    /// A mirror in `right` reverses the direction of the rotation in `self`.
    fn compose(&self, right: &Self) -> Self {
        let carried = if right.mirror {
            (4 - self.rotate) % 4
        } else {
            self.rotate
        };
        Transform::new(
            self.oppose ^ right.oppose,
            self.mirror ^ right.mirror,
            carried + right.rotate,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.pack() == other.pack()
    }
}

impl Eq for Transform {}

impl std::hash::Hash for Transform {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.pack().hash(state);
    }
}

impl PartialOrd for Transform {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Transform {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pack().cmp(&other.pack())
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Transform::IDENTITY {
            return write!(f, "identity");
        }

        let mut parts = Vec::new();
        if self.oppose {
            parts.push("oppose".to_string());
        }
        if self.mirror {
            parts.push("mirror".to_string());
        }
        if self.rotate != 0 {
            parts.push(format!("rotate {}°", u16::from(self.rotate) * 90));
        }
        write!(f, "{}", parts.join(" + "))
    }
}
