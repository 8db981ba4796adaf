//! Display collaborator driven by the controller.

use beerdice_types::{Face, SlotId};

/// Everything the [`Game`](crate::Game) tells the display.
///
/// Implementations only project what they are told; they never call back into
/// the game. The TUI's board view is the production implementation.
pub trait Renderer {
    /// Show `face` on the main die.
    fn render_die(&mut self, face: Face);

    /// Show a slot's value, `None` meaning unassigned.
    fn render_slot(&mut self, id: SlotId, value: Option<Face>);

    fn render_message(&mut self, title: &str, body: &str);

    fn set_roll_enabled(&mut self, enabled: bool);

    fn set_keypad_enabled(&mut self, enabled: bool);

    /// Start shaking the keypad region. Stays on until [`Renderer::end_shake`].
    fn trigger_shake(&mut self);

    fn end_shake(&mut self);

    fn show_result_panel(&mut self);

    /// Hide the keypad panel opened by [`Renderer::show_keypad_panel`].
    fn hide_panel(&mut self);

    /// Open the keypad panel prompting for a value for `slot`.
    fn show_keypad_panel(&mut self, slot: SlotId);
}
