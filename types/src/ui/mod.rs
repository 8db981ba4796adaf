//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (configuration) and tui (rendering).

mod animation;
mod options;
mod shake;

pub use animation::AnimPhase;
pub use options::UiOptions;
pub use shake::ShakeEffect;
