use std::fmt;

use thiserror::Error;

/// A single die face, guaranteed to be in `1..=6`.
///
/// Used both for roll results and for the values assigned to board slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("die face must be between 1 and 6 (got {0})")]
pub struct FaceOutOfRange(pub u8);

impl Face {
    pub const ONE: Face = Face(1);
    pub const TWO: Face = Face(2);
    pub const THREE: Face = Face(3);
    pub const FOUR: Face = Face(4);
    pub const FIVE: Face = Face(5);
    pub const SIX: Face = Face(6);

    /// All faces in ascending order.
    pub const ALL: [Face; 6] = [
        Face::ONE,
        Face::TWO,
        Face::THREE,
        Face::FOUR,
        Face::FIVE,
        Face::SIX,
    ];

    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1..=6 => Some(Self(value)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position of this face in [`Face::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for Face {
    type Error = FaceOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::new(value).ok_or(FaceOutOfRange(value))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.0
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
