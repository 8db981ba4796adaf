//! Core engine for beerdice - the game controller state machine.
//!
//! This crate contains the `Game` controller without TUI dependencies. The
//! display is reached only through the [`Renderer`] trait and randomness only
//! through [`Randomness`].

mod animator;
mod config;
mod game;
mod presenter;
mod random;
mod render;
mod state;
mod timeline;

pub use animator::{
    DEFAULT_FRAME_INTERVAL, DEFAULT_ROLL_FRAMES, DEFAULT_SETTLE_DELAY, DEFAULT_SHAKE_DURATION,
    RollAnimation, RollTiming,
};
pub use config::{AppConfig, ConfigError, DiceConfig, MessagesConfig, TimingConfig, config_path};
pub use game::{Game, GameSettings};
pub use presenter::{
    DEFAULT_PENALTY_TEMPLATES, DEFAULT_SAFE_MESSAGES, IDLE_BODY, IDLE_TITLE, Presentation,
    Presenter, ROLLING_TITLE, VALUE_PLACEHOLDER, Verdict, fill_template, result_title,
};
pub use random::{Randomness, RngRandomness};
pub use render::Renderer;
pub use state::{InteractionState, Request};

pub use beerdice_types::ui::UiOptions;
pub use beerdice_types::{Face, SlotId, SlotStore};
