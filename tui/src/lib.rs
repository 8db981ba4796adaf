//! TUI rendering for beerdice using ratatui.

mod effects;
mod input;
mod pips;
mod theme;
mod view;

pub use effects::apply_shake;
pub use input::{Command, InputPump, apply_command, handle_events, map_key};
pub use pips::{large_die, small_die};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};
pub use view::BoardView;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use beerdice_types::{SlotId, SlotStore};

/// Rows the board needs, margins included.
pub const BOARD_HEIGHT: u16 = 1 + DIE_PANEL_HEIGHT + 3 * SLOT_HEIGHT + KEYPAD_HEIGHT + 1 + 1;

const DIE_PANEL_HEIGHT: u16 = 7;
const DIE_PANEL_WIDTH: u16 = 17;
const SLOT_HEIGHT: u16 = 5;
const KEYPAD_HEIGHT: u16 = 3;

/// Main draw function
pub fn draw(frame: &mut Frame, view: &BoardView) {
    let options = view.options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(DIE_PANEL_HEIGHT), // Die + result
            Constraint::Length(3 * SLOT_HEIGHT),  // Board
            Constraint::Length(KEYPAD_HEIGHT),    // Keypad
            Constraint::Length(1),                // Status bar
            Constraint::Min(0),
        ])
        .split(frame.area());

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(DIE_PANEL_WIDTH), Constraint::Min(20)])
        .split(chunks[0]);

    draw_die(frame, view, top[0], &palette, &glyphs);
    draw_result(frame, view, top[1], &palette, &glyphs);
    draw_board(frame, view.slots(), view.keypad_prompt(), chunks[1], &palette, &glyphs);

    let keypad_area = match view.shake() {
        Some(shake) => apply_shake(shake, chunks[2], frame.area()),
        None => chunks[2],
    };
    draw_keypad(frame, view, keypad_area, &palette, &glyphs);
    draw_status_bar(frame, view, chunks[3], &palette, &glyphs);
}

fn panel(title: &str, active: bool, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(palette, active))
        .style(Style::default().bg(palette.bg_panel))
        .title(Line::from(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(Modifier::BOLD),
        )))
}

fn draw_die(frame: &mut Frame, view: &BoardView, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines: Vec<Line> = large_die(view.die(), glyphs.pip)
        .into_iter()
        .map(Line::from)
        .collect();
    let die = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(panel("Die", view.roll_enabled(), palette));
    frame.render_widget(die, area);
}

fn draw_result(
    frame: &mut Frame,
    view: &BoardView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = panel("Result", false, palette);
    if !view.result_visible() {
        frame.render_widget(block, area);
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            view.title().to_string(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.body().to_string(),
            Style::default().fg(palette.text_secondary),
        )),
    ];
    if let Some(slot) = view.keypad_prompt() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.pending), styles::key_highlight(palette)),
            Span::styled(
                format!("choose a value for {slot}"),
                Style::default().fg(palette.accent),
            ),
        ]));
    }

    let result = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(result, area);
}

fn draw_board(
    frame: &mut Frame,
    slots: &SlotStore,
    pending: Option<SlotId>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SLOT_HEIGHT); 3])
        .split(area);

    for (id, value) in slots.iter() {
        let row = rows[usize::from(id.row() - 1)];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        let cell = cols[usize::from(id.col() - 1)];

        let block = panel(&id.to_string(), pending == Some(id), palette);
        let slot = match value {
            Some(face) => {
                let lines: Vec<Line> = small_die(face, glyphs.pip)
                    .into_iter()
                    .map(Line::from)
                    .collect();
                Paragraph::new(lines)
                    .style(styles::slot_assigned(palette))
                    .block(block.style(Style::default().bg(palette.bg_highlight)))
            }
            None => Paragraph::new(vec![
                Line::from(""),
                Line::from(glyphs.empty_slot),
                Line::from(""),
            ])
            .style(Style::default().fg(palette.text_muted))
            .block(block),
        };
        frame.render_widget(slot.alignment(Alignment::Center), cell);
    }
}

fn draw_keypad(
    frame: &mut Frame,
    view: &BoardView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let enabled = view.keypad_enabled();
    let key_style = if enabled {
        styles::key_highlight(palette)
    } else {
        Style::default().fg(palette.text_disabled)
    };

    let mut spans = Vec::new();
    if let Some(slot) = view.keypad_prompt() {
        spans.push(Span::styled(
            format!("{} {slot} ", glyphs.pending),
            Style::default().fg(palette.accent),
        ));
    }
    for digit in 1..=6 {
        spans.push(Span::styled(format!("[{digit}]"), key_style));
        spans.push(Span::raw(" "));
    }

    let keypad = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(panel("Keypad", enabled, palette));
    frame.render_widget(keypad, area);
}

fn draw_status_bar(
    frame: &mut Frame,
    view: &BoardView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (badge, badge_style) = if view.keypad_enabled() {
        (" ASSIGN ", styles::badge_assign(palette))
    } else if view.roll_enabled() {
        (" READY ", styles::badge_ready(palette))
    } else {
        (" ROLLING ", styles::badge_rolling(palette))
    };

    let sep = format!(" {} ", glyphs.separator);
    let hint = styles::key_hint(palette);
    let key = styles::key_highlight(palette);
    let status = Paragraph::new(Line::from(vec![
        Span::styled(badge, badge_style),
        Span::raw(" "),
        Span::styled("space", key),
        Span::styled(" roll", hint),
        Span::styled(sep.clone(), hint),
        Span::styled("1-6", key),
        Span::styled(" assign", hint),
        Span::styled(sep.clone(), hint),
        Span::styled("c", key),
        Span::styled(" clear", hint),
        Span::styled(sep.clone(), hint),
        Span::styled("q", key),
        Span::styled(" quit", hint),
        Span::styled(sep, hint),
        Span::styled(
            format!("assigned {}/{}", view.slots().assigned_count(), SlotId::ALL.len()),
            Style::default().fg(palette.text_secondary),
        ),
    ]));
    frame.render_widget(status, area);
}
