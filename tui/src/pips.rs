//! Text art for die faces, built from the shared pip table.

use beerdice_types::{Face, pip_grid};

/// Rows for the main die: pips three columns apart with a blank row between.
#[must_use]
pub fn large_die(face: Face, pip: &str) -> Vec<String> {
    let mut rows = Vec::with_capacity(5);
    for (index, row) in pip_grid(face).iter().enumerate() {
        if index > 0 {
            rows.push(String::new());
        }
        rows.push(render_row(row, pip, "   "));
    }
    rows
}

/// Compact three-row art for a board slot.
#[must_use]
pub fn small_die(face: Face, pip: &str) -> Vec<String> {
    pip_grid(face)
        .iter()
        .map(|row| render_row(row, pip, " "))
        .collect()
}

fn render_row(row: &[bool; 3], pip: &str, gap: &str) -> String {
    let blank = " ".repeat(pip.chars().count());
    row.iter()
        .map(|&set| if set { pip } else { blank.as_str() })
        .collect::<Vec<_>>()
        .join(gap)
}
