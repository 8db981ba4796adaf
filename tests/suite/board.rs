//! The board as drawn in a virtual terminal.

use std::time::Duration;

use beerdice_engine::{DEFAULT_SAFE_MESSAGES, Renderer};
use beerdice_types::ui::UiOptions;
use beerdice_types::{Face, SlotId};

use crate::common::{new_game, render, roll_and_assign, roll_to_result};

fn ascii() -> UiOptions {
    UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    }
}

#[test]
fn fresh_board_is_idle_and_empty() {
    let game = new_game(UiOptions::default(), &[]);
    let terminal = render(game.renderer());
    let screen = terminal.backend();
    let contents = screen.contents();

    assert!(contents.contains("擲骰子!"));
    assert!(contents.contains("點擊骰子開始遊戲"));
    for slot in SlotId::ALL {
        assert!(contents.contains(&slot.to_string()), "missing {slot}");
    }

    let status = screen.find_row("READY").expect("status bar");
    assert!(screen.row(status).contains("assigned 0/6"));
    assert!(screen.is_bold(1, status), "status badge is bold");

    let top = screen.find_row("(1,1)").expect("first board row");
    assert!(screen.row(top + 2).contains('-'), "empty slot marker");
}

#[test]
fn rolling_shows_progress_title() {
    let mut game = new_game(UiOptions::default(), &[Face::TWO]);
    assert!(game.request_roll().is_accepted());
    game.tick(Duration::from_millis(250));

    let terminal = render(game.renderer());
    let contents = terminal.backend().contents();
    assert!(contents.contains("擲骰中...."));
    assert!(contents.contains("ROLLING"));
}

#[test]
fn safe_result_prompts_for_slot() {
    let mut game = new_game(UiOptions::default(), &[Face::THREE]);
    roll_to_result(&mut game);

    let terminal = render(game.renderer());
    let screen = terminal.backend();
    let contents = screen.contents();

    assert!(contents.contains("骰子結果: 3"));
    assert!(contents.contains("恭喜安全了!"));
    assert!(contents.contains("choose a value for (3,1)"));
    assert!(contents.contains("ASSIGN"));
    assert_eq!(DEFAULT_SAFE_MESSAGES[0], "恭喜安全了! 🎉");

    let keypad = screen.find_row("[1]").expect("keypad row");
    assert!(screen.row(keypad).contains("(3,1)"));
    assert!(screen.row(keypad).contains("[6]"));
}

#[test]
fn assigned_slot_draws_small_die() {
    let mut game = new_game(ascii(), &[Face::FIVE]);
    roll_and_assign(&mut game, Face::FIVE);

    let terminal = render(game.renderer());
    let screen = terminal.backend();

    let middle = screen.find_row("(2,2)").expect("second board row");
    assert!(screen.row(middle + 1).contains("o   o"));
    assert!(screen.row(middle + 3).contains("o   o"));

    let status = screen.find_row("READY").expect("status bar");
    assert!(screen.row(status).contains("assigned 1/6"));
}

#[test]
fn penalty_names_the_stored_value() {
    let mut game = new_game(UiOptions::default(), &[Face::FOUR, Face::FOUR]);
    roll_and_assign(&mut game, Face::TWO);
    roll_to_result(&mut game);

    let terminal = render(game.renderer());
    let contents = terminal.backend().contents();
    assert!(contents.contains("骰子結果: 4"));
    assert!(contents.contains("中獎! 2 杯啤酒!"));
}

#[test]
fn penalty_shakes_the_keypad() {
    let mut game = new_game(UiOptions::default(), &[Face::SIX, Face::SIX]);
    roll_and_assign(&mut game, Face::ONE);
    roll_to_result(&mut game);
    assert!(game.renderer().shake().is_some());

    // A sixteenth of the shake is the first peak.
    game.renderer_mut().advance(Duration::from_millis(37));
    let shaken = render(game.renderer());
    let keypad = shaken.backend().find_row("[1]").expect("keypad row");
    let shaken_row = shaken.backend().row(keypad);

    game.tick(game.timing().shake);
    assert!(game.renderer().shake().is_none());
    let settled = render(game.renderer());
    assert_ne!(shaken_row, settled.backend().row(keypad));
}

#[test]
fn reduced_motion_skips_the_shake() {
    let options = UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    };
    let mut game = new_game(options, &[Face::SIX, Face::SIX]);
    roll_and_assign(&mut game, Face::ONE);
    roll_to_result(&mut game);

    assert!(game.is_shaking());
    assert!(game.renderer().shake().is_none());
}

#[test]
fn clear_empties_the_drawn_board() {
    let mut game = new_game(ascii(), &[Face::ONE, Face::TWO]);
    roll_and_assign(&mut game, Face::THREE);
    roll_and_assign(&mut game, Face::FOUR);
    game.request_clear();

    let terminal = render(game.renderer());
    let screen = terminal.backend();
    let status = screen.find_row("READY").expect("status bar");
    assert!(screen.row(status).contains("assigned 0/6"));
    assert!(screen.contents().contains("擲骰子!"));

    let top = screen.find_row("(1,1)").expect("first board row");
    assert!(!screen.row(top + 1).contains('o'));
}

#[test]
fn view_tracks_every_render_call() {
    let mut game = new_game(UiOptions::default(), &[Face::TWO]);
    roll_to_result(&mut game);

    let view = game.renderer();
    assert_eq!(view.die(), Face::TWO);
    assert_eq!(view.keypad_prompt(), Some(SlotId::R2C1));
    assert!(view.keypad_enabled());
    assert!(!view.roll_enabled());
    assert!(view.result_visible());

    let mut copy = view.clone();
    copy.hide_panel();
    assert_eq!(copy.keypad_prompt(), None);
}
