//! Core domain types for beerdice.
//!
//! Pure data with no IO and no async. The engine owns instances of these types;
//! the TUI only reads them.

mod face;
mod pips;
mod slot;
pub mod ui;

pub use face::{Face, FaceOutOfRange};
pub use pips::{Pip, pip_grid, pips};
pub use slot::{SlotId, SlotStore};
