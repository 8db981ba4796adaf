//! Shake animation for the keypad region.

use std::f32::consts::TAU;

use ratatui::layout::Rect;

use beerdice_types::ui::{AnimPhase, ShakeEffect};

const OSCILLATIONS: f32 = 4.0;
const AMPLITUDE: f32 = 3.0;

/// Offset `base` horizontally for the current point of a shake, kept inside `viewport`.
#[must_use]
pub fn apply_shake(effect: &ShakeEffect, base: Rect, viewport: Rect) -> Rect {
    let t = match effect.phase() {
        AnimPhase::Running { progress } => progress.clamp(0.0, 1.0),
        AnimPhase::Completed => return base,
    };
    let decay = 1.0 - t;
    let offset =
        (f32::sin(t * TAU * OSCILLATIONS) * AMPLITUDE * decay).round() as i32;
    let viewport_left = i32::from(viewport.x);
    let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
    let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
    let base_x = i32::from(base.x);
    let x = (base_x + offset).clamp(viewport_left, max_x) as u16;
    Rect { x, ..base }
}
