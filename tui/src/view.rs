//! The board as last described by the game.

use std::time::Duration;

use beerdice_engine::{IDLE_BODY, IDLE_TITLE, Renderer};
use beerdice_types::ui::{ShakeEffect, UiOptions};
use beerdice_types::{Face, SlotId, SlotStore};

/// Retained display state behind [`crate::draw`].
///
/// The game pushes every change through [`Renderer`]; drawing reads it back.
/// Nothing here feeds into game decisions.
#[derive(Debug, Clone)]
pub struct BoardView {
    options: UiOptions,
    shake_duration: Duration,
    die: Face,
    slots: SlotStore,
    title: String,
    body: String,
    roll_enabled: bool,
    keypad_enabled: bool,
    shake: Option<ShakeEffect>,
    result_visible: bool,
    keypad_prompt: Option<SlotId>,
}

impl BoardView {
    #[must_use]
    pub fn new(options: UiOptions, shake_duration: Duration) -> Self {
        Self {
            options,
            shake_duration,
            die: Face::ONE,
            slots: SlotStore::new(),
            title: IDLE_TITLE.to_string(),
            body: IDLE_BODY.to_string(),
            roll_enabled: false,
            keypad_enabled: false,
            shake: None,
            result_visible: false,
            keypad_prompt: None,
        }
    }

    /// Advance display-only animation clocks.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(shake) = self.shake.as_mut() {
            shake.advance(delta);
        }
    }

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn die(&self) -> Face {
        self.die
    }

    #[must_use]
    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn roll_enabled(&self) -> bool {
        self.roll_enabled
    }

    #[must_use]
    pub fn keypad_enabled(&self) -> bool {
        self.keypad_enabled
    }

    /// The running shake, if any. Always `None` with `reduced_motion`.
    #[must_use]
    pub fn shake(&self) -> Option<&ShakeEffect> {
        self.shake.as_ref()
    }

    #[must_use]
    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    /// The slot the keypad panel is prompting for.
    #[must_use]
    pub fn keypad_prompt(&self) -> Option<SlotId> {
        self.keypad_prompt
    }
}

impl Renderer for BoardView {
    fn render_die(&mut self, face: Face) {
        self.die = face;
    }

    fn render_slot(&mut self, id: SlotId, value: Option<Face>) {
        match value {
            Some(face) => self.slots.set(id, face),
            None => self.slots.clear(id),
        }
    }

    fn render_message(&mut self, title: &str, body: &str) {
        title.clone_into(&mut self.title);
        body.clone_into(&mut self.body);
    }

    fn set_roll_enabled(&mut self, enabled: bool) {
        self.roll_enabled = enabled;
    }

    fn set_keypad_enabled(&mut self, enabled: bool) {
        self.keypad_enabled = enabled;
    }

    fn trigger_shake(&mut self) {
        if self.options.reduced_motion {
            return;
        }
        self.shake = Some(ShakeEffect::new(self.shake_duration));
    }

    fn end_shake(&mut self) {
        self.shake = None;
    }

    fn show_result_panel(&mut self) {
        self.result_visible = true;
    }

    fn hide_panel(&mut self) {
        self.keypad_prompt = None;
    }

    fn show_keypad_panel(&mut self, slot: SlotId) {
        self.keypad_prompt = Some(slot);
    }
}
