//! Whole games driven through the key bindings.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use beerdice_engine::{InteractionState, Verdict};
use beerdice_tui::{Command, apply_command, map_key};
use beerdice_types::ui::UiOptions;
use beerdice_types::{Face, SlotId};

use crate::common::{TestGame, new_game, roll_to_result};

fn press(game: &mut TestGame, code: KeyCode) -> bool {
    let command = map_key(KeyEvent::new(code, KeyModifiers::NONE)).expect("bound key");
    apply_command(game, command)
}

#[test]
fn filling_the_board_with_keys() {
    let mut game = new_game(UiOptions::default(), &Face::ALL);
    for (face, digit) in Face::ALL.into_iter().zip(['6', '5', '4', '3', '2', '1']) {
        assert!(!press(&mut game, KeyCode::Char(' ')));
        game.tick(game.timing().roll_duration());
        assert_eq!(game.pending(), Some(SlotId::for_face(face)));
        assert!(!press(&mut game, KeyCode::Char(digit)));
    }

    assert_eq!(game.slots().assigned_count(), 6);
    assert_eq!(game.slots().get(SlotId::R1C1), Some(Face::SIX));
    assert_eq!(game.slots().get(SlotId::R3C2), Some(Face::ONE));
    for (id, value) in game.slots().iter() {
        assert_eq!(game.renderer().slots().get(id), value);
    }
}

#[test]
fn keys_outside_their_state_do_nothing() {
    let mut game = new_game(UiOptions::default(), &[Face::TWO]);

    press(&mut game, KeyCode::Char('3'));
    assert_eq!(*game.state(), InteractionState::Idle);
    assert!(game.slots().is_empty());

    press(&mut game, KeyCode::Enter);
    press(&mut game, KeyCode::Char('r'));
    assert!(game.state().is_rolling());

    game.tick(game.timing().roll_duration());
    press(&mut game, KeyCode::Char(' '));
    assert_eq!(game.pending(), Some(SlotId::R2C1));
}

#[test]
fn second_roll_on_a_slot_is_a_penalty_and_can_overwrite() {
    let mut game = new_game(UiOptions::default(), &[Face::ONE, Face::ONE]);
    roll_to_result(&mut game);
    press(&mut game, KeyCode::Char('3'));

    roll_to_result(&mut game);
    let shown = game.last_presentation().expect("settled roll");
    assert_eq!(shown.verdict, Verdict::Penalty(Face::THREE));
    assert_eq!(game.pending(), Some(SlotId::R1C1));

    press(&mut game, KeyCode::Char('6'));
    assert_eq!(game.slots().get(SlotId::R1C1), Some(Face::SIX));
    assert_eq!(game.renderer().slots().get(SlotId::R1C1), Some(Face::SIX));
}

#[test]
fn clear_key_abandons_a_roll_in_flight() {
    let mut game = new_game(UiOptions::default(), &[Face::FIVE]);
    press(&mut game, KeyCode::Char(' '));
    game.tick(Duration::from_millis(450));

    press(&mut game, KeyCode::Backspace);
    assert_eq!(*game.state(), InteractionState::Idle);

    game.tick(Duration::from_secs(5));
    assert_eq!(*game.state(), InteractionState::Idle);
    assert!(game.last_presentation().is_none());
    assert!(game.renderer().roll_enabled());
}

#[test]
fn quit_keys_stop_the_loop() {
    let mut game = new_game(UiOptions::default(), &[]);
    assert!(press(&mut game, KeyCode::Char('q')));
    assert!(press(&mut game, KeyCode::Esc));

    let ctrl_c = map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(ctrl_c, Some(Command::Quit));
}
