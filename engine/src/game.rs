//! The game controller.
//!
//! `Game` is the only thing that mutates game state. Input arrives through
//! [`Game::request_roll`], [`Game::press_digit`] and [`Game::request_clear`];
//! time arrives through [`Game::tick`]. Every change is pushed to the
//! [`Renderer`] as it happens.

use std::time::Duration;

use tracing::{debug, info};

use beerdice_types::{Face, SlotId, SlotStore};

use crate::animator::{FrameStep, RollAnimation, RollTiming};
use crate::config::DiceConfig;
use crate::presenter::{IDLE_BODY, IDLE_TITLE, Presentation, Presenter, ROLLING_TITLE, Verdict};
use crate::random::Randomness;
use crate::render::Renderer;
use crate::state::{InteractionState, Request};
use crate::timeline::Timeline;

/// Scheduled continuations. Each carries the sequence number of the roll or
/// shake it belongs to; stale ones are dropped when they fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Frame { roll: u64 },
    Settle { roll: u64 },
    ShakeEnd { shake: u64 },
}

/// Tunables fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct GameSettings {
    pub timing: RollTiming,
    pub presenter: Presenter,
}

impl GameSettings {
    /// Settings from the user config, defaults when there is none.
    #[must_use]
    pub fn from_config(config: Option<&DiceConfig>) -> Self {
        match config {
            Some(config) => Self {
                timing: config.roll_timing(),
                presenter: config.presenter(),
            },
            None => Self::default(),
        }
    }
}

#[derive(Debug)]
pub struct Game<R, X> {
    slots: SlotStore,
    state: InteractionState,
    timeline: Timeline<Task>,
    settings: GameSettings,
    randomness: X,
    renderer: R,
    next_roll: u64,
    next_shake: u64,
    active_shake: Option<u64>,
    last_presentation: Option<Presentation>,
}

impl<R: Renderer, X: Randomness> Game<R, X> {
    /// Create a game and paint the initial board: die on 1, every slot empty,
    /// roll enabled, keypad disabled.
    pub fn new(settings: GameSettings, renderer: R, randomness: X) -> Self {
        let mut game = Self {
            slots: SlotStore::new(),
            state: InteractionState::Idle,
            timeline: Timeline::new(),
            settings,
            randomness,
            renderer,
            next_roll: 0,
            next_shake: 0,
            active_shake: None,
            last_presentation: None,
        };

        game.renderer.render_die(Face::ONE);
        game.render_all_slots();
        game.renderer.render_message(IDLE_TITLE, IDLE_BODY);
        game.renderer.show_result_panel();
        game.apply_input_gates();
        game
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[must_use]
    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    #[must_use]
    pub fn pending(&self) -> Option<SlotId> {
        self.state.pending()
    }

    #[must_use]
    pub fn timing(&self) -> RollTiming {
        self.settings.timing
    }

    /// The most recent settled roll, cleared by [`Game::request_clear`].
    #[must_use]
    pub fn last_presentation(&self) -> Option<&Presentation> {
        self.last_presentation.as_ref()
    }

    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.active_shake.is_some()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access for display-side bookkeeping (animation clocks). Game
    /// state is not reachable through the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Start a roll. Only accepted while idle.
    pub fn request_roll(&mut self) -> Request {
        if !self.state.roll_enabled() {
            debug!(state = self.state.label(), "Roll request ignored");
            return Request::Ignored;
        }

        self.next_roll = self.next_roll.wrapping_add(1);
        let roll = self.next_roll;
        self.state = InteractionState::Rolling(RollAnimation::new(roll));
        self.apply_input_gates();
        self.renderer.render_message(ROLLING_TITLE, "");
        self.renderer.show_result_panel();
        self.timeline
            .schedule(self.settings.timing.frame_interval, Task::Frame { roll });

        info!(roll, "Roll started");
        Request::Accepted
    }

    /// Assign `digit` to the pending slot. Only accepted while awaiting assignment.
    pub fn press_digit(&mut self, digit: Face) -> Request {
        let Some(slot) = self.state.pending() else {
            debug!(state = self.state.label(), %digit, "Keypad press ignored");
            return Request::Ignored;
        };

        self.slots.set(slot, digit);
        self.renderer.render_slot(slot, Some(digit));
        self.state = InteractionState::Idle;
        self.renderer.hide_panel();
        self.apply_input_gates();

        info!(%slot, %digit, "Slot assigned");
        Request::Accepted
    }

    /// Clear every slot and return to idle from any state.
    ///
    /// A roll in flight is abandoned: its remaining frames are dropped when they
    /// fire, and it never resolves.
    pub fn request_clear(&mut self) {
        let previous = self.state.label();
        self.slots.reset_all();
        self.state = InteractionState::Idle;
        self.last_presentation = None;

        self.render_all_slots();
        self.renderer.hide_panel();
        self.renderer.render_message(IDLE_TITLE, IDLE_BODY);
        self.apply_input_gates();

        info!(previous, "Board cleared");
    }

    /// Advance the game clock, firing every timer due within `delta` in order.
    pub fn tick(&mut self, delta: Duration) {
        let deadline = self.timeline.now().saturating_add(delta);
        while let Some(task) = self.timeline.pop_due(deadline) {
            self.run(task);
        }
        self.timeline.settle(deadline);
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::Frame { roll } => self.on_frame(roll),
            Task::Settle { roll } => self.on_settle(roll),
            Task::ShakeEnd { shake } => {
                if self.active_shake == Some(shake) {
                    self.active_shake = None;
                    self.renderer.end_shake();
                }
            }
        }
    }

    fn on_frame(&mut self, roll: u64) {
        let frames = self.settings.timing.frames;
        let randomness = &mut self.randomness;
        let Some(animation) = self.state.active_roll_mut(roll) else {
            debug!(roll, "Dropping frame from abandoned roll");
            return;
        };

        match animation.step(frames, || randomness.face()) {
            FrameStep::Tumble(face) => {
                self.renderer.render_die(face);
                self.timeline
                    .schedule(self.settings.timing.frame_interval, Task::Frame { roll });
            }
            FrameStep::Landed { tumble, landed } => {
                self.renderer.render_die(tumble);
                self.renderer.render_die(landed);
                self.timeline
                    .schedule(self.settings.timing.settle, Task::Settle { roll });
            }
        }
    }

    fn on_settle(&mut self, roll: u64) {
        let landed = self
            .state
            .active_roll_mut(roll)
            .and_then(|animation| animation.landed());
        match landed {
            Some(face) => self.resolve(face),
            None => debug!(roll, "Dropping settle from abandoned roll"),
        }
    }

    /// Present `face` and open the keypad for its slot.
    ///
    /// The keypad opens even when the slot already holds a value, so a later
    /// roll of the same face can overwrite it.
    fn resolve(&mut self, face: Face) {
        let slot = SlotId::for_face(face);
        let value = self.slots.get(slot);
        let shown = self
            .settings
            .presenter
            .present(face, value, &mut self.randomness);

        self.renderer.render_message(&shown.title, &shown.body);
        self.renderer.show_result_panel();

        if let Verdict::Penalty(n) = shown.verdict {
            self.start_shake();
            info!(%face, %slot, value = %n, "Roll hit a penalty");
        } else {
            info!(%face, %slot, "Roll was safe");
        }

        self.state = InteractionState::AwaitingAssignment { pending: slot };
        self.apply_input_gates();
        self.renderer.show_keypad_panel(slot);
        self.last_presentation = Some(shown);
    }

    fn start_shake(&mut self) {
        self.next_shake = self.next_shake.wrapping_add(1);
        let shake = self.next_shake;
        self.active_shake = Some(shake);
        self.renderer.trigger_shake();
        self.timeline
            .schedule(self.settings.timing.shake, Task::ShakeEnd { shake });
    }

    fn apply_input_gates(&mut self) {
        self.renderer.set_roll_enabled(self.state.roll_enabled());
        self.renderer.set_keypad_enabled(self.state.keypad_enabled());
    }

    fn render_all_slots(&mut self) {
        for (id, value) in self.slots.iter() {
            self.renderer.render_slot(id, value);
        }
    }
}
