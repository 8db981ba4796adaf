//! Board slots and their assigned values.

use std::fmt;

use crate::Face;

/// One of the six fixed board positions, named by `(row, column)`.
///
/// The board is three rows by two columns. Slots are never created or destroyed;
/// only the value stored against them changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotId {
    R1C1,
    R1C2,
    R2C1,
    R2C2,
    R3C1,
    R3C2,
}

impl SlotId {
    /// Board order: row by row, left to right.
    pub const ALL: [SlotId; 6] = [
        SlotId::R1C1,
        SlotId::R1C2,
        SlotId::R2C1,
        SlotId::R2C2,
        SlotId::R3C1,
        SlotId::R3C2,
    ];

    /// The slot a die face lands on.
    ///
    /// Faces 1-3 walk down the first column, 4-6 down the second. This is not
    /// row-major order.
    #[must_use]
    pub const fn for_face(face: Face) -> Self {
        match face.value() {
            1 => SlotId::R1C1,
            2 => SlotId::R2C1,
            3 => SlotId::R3C1,
            4 => SlotId::R1C2,
            5 => SlotId::R2C2,
            _ => SlotId::R3C2,
        }
    }

    /// The die face that selects this slot (inverse of [`SlotId::for_face`]).
    #[must_use]
    pub const fn face(self) -> Face {
        match self {
            SlotId::R1C1 => Face::ONE,
            SlotId::R2C1 => Face::TWO,
            SlotId::R3C1 => Face::THREE,
            SlotId::R1C2 => Face::FOUR,
            SlotId::R2C2 => Face::FIVE,
            SlotId::R3C2 => Face::SIX,
        }
    }

    /// 1-based row.
    #[must_use]
    pub const fn row(self) -> u8 {
        match self {
            SlotId::R1C1 | SlotId::R1C2 => 1,
            SlotId::R2C1 | SlotId::R2C2 => 2,
            SlotId::R3C1 | SlotId::R3C2 => 3,
        }
    }

    /// 1-based column.
    #[must_use]
    pub const fn col(self) -> u8 {
        match self {
            SlotId::R1C1 | SlotId::R2C1 | SlotId::R3C1 => 1,
            SlotId::R1C2 | SlotId::R2C2 | SlotId::R3C2 => 2,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}

/// Values assigned to the six board slots.
///
/// `set` overwrites unconditionally; two slots may hold the same number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotStore {
    values: [Option<Face>; 6],
}

impl SlotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<Face> {
        self.values[id.index()]
    }

    pub fn set(&mut self, id: SlotId, value: Face) {
        self.values[id.index()] = Some(value);
    }

    pub fn clear(&mut self, id: SlotId) {
        self.values[id.index()] = None;
    }

    pub fn reset_all(&mut self) {
        self.values = [None; 6];
    }

    /// Slots with their values, in board order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, Option<Face>)> + '_ {
        SlotId::ALL.into_iter().map(|id| (id, self.get(id)))
    }

    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned_count() == 0
    }
}
