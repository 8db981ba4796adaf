//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

mod vt100_backend;

use std::collections::VecDeque;

use ratatui::Terminal;

use beerdice_engine::{Game, GameSettings, Randomness};
use beerdice_tui::{BOARD_HEIGHT, BoardView, draw};
use beerdice_types::Face;
use beerdice_types::ui::UiOptions;

pub use vt100_backend::VT100Backend;

pub const SCREEN_WIDTH: u16 = 80;

/// Dice that land where the test says. Every tumbling frame shows the face
/// the roll will land on; message picks always take the first entry.
#[derive(Debug)]
pub struct Loaded {
    faces: VecDeque<Face>,
}

impl Loaded {
    pub fn rolls(landings: &[Face], frames: u32) -> Self {
        let mut faces = VecDeque::new();
        for &face in landings {
            // One draw per frame plus the landing draw.
            for _ in 0..=frames {
                faces.push_back(face);
            }
        }
        Self { faces }
    }
}

impl Randomness for Loaded {
    fn face(&mut self) -> Face {
        self.faces.pop_front().expect("test rolled more dice than scripted")
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

pub type TestGame = Game<BoardView, Loaded>;

pub fn new_game(options: UiOptions, landings: &[Face]) -> TestGame {
    let settings = GameSettings::default();
    let frames = settings.timing.frames;
    let view = BoardView::new(options, settings.timing.shake);
    Game::new(settings, view, Loaded::rolls(landings, frames))
}

/// Roll and let the animation run to the result.
pub fn roll_to_result(game: &mut TestGame) {
    assert!(game.request_roll().is_accepted(), "roll should be accepted");
    let duration = game.timing().roll_duration();
    game.tick(duration);
}

pub fn roll_and_assign(game: &mut TestGame, value: Face) {
    roll_to_result(game);
    assert!(game.press_digit(value).is_accepted(), "digit should be accepted");
}

/// Draw the board as the terminal would show it.
pub fn render(view: &BoardView) -> Terminal<VT100Backend> {
    let mut terminal = Terminal::new(VT100Backend::new(SCREEN_WIDTH, BOARD_HEIGHT))
        .expect("failed to create terminal");
    terminal
        .draw(|frame| draw(frame, view))
        .expect("failed to draw");
    terminal
}
