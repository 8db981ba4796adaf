//! Interaction state machine types.

use beerdice_types::SlotId;

use crate::animator::RollAnimation;

/// Which inputs the game currently accepts.
///
/// `AwaitingAssignment` is the only state carrying a pending slot, so "pending
/// slot exists" and "keypad active" cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Roll permitted, keypad inert.
    #[default]
    Idle,
    /// Animation in flight; roll and keypad both inert.
    Rolling(RollAnimation),
    /// Keypad active for `pending`; roll inert.
    AwaitingAssignment { pending: SlotId },
}

impl InteractionState {
    #[must_use]
    pub fn roll_enabled(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    #[must_use]
    pub fn keypad_enabled(&self) -> bool {
        matches!(self, InteractionState::AwaitingAssignment { .. })
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        matches!(self, InteractionState::Rolling(_))
    }

    #[must_use]
    pub fn pending(&self) -> Option<SlotId> {
        match self {
            InteractionState::AwaitingAssignment { pending } => Some(*pending),
            _ => None,
        }
    }

    /// The in-flight roll with sequence number `id`, if that roll is still current.
    pub(crate) fn active_roll_mut(&mut self, id: u64) -> Option<&mut RollAnimation> {
        match self {
            InteractionState::Rolling(roll) if roll.id() == id => Some(roll),
            _ => None,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Rolling(_) => "rolling",
            InteractionState::AwaitingAssignment { .. } => "awaiting_assignment",
        }
    }
}

/// Whether a request changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Request {
    Accepted,
    /// The current state does not accept this input; nothing changed.
    Ignored,
}

impl Request {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Request::Accepted)
    }
}
