//! Turns a roll into the message shown to the player.

use beerdice_types::{Face, SlotId};

use crate::random::Randomness;

/// Placeholder replaced by the slot's value in penalty templates.
pub const VALUE_PLACEHOLDER: &str = "{n}";

pub const IDLE_TITLE: &str = "擲骰子!";
pub const IDLE_BODY: &str = "點擊骰子開始遊戲";
pub const ROLLING_TITLE: &str = "擲骰中....";

pub const DEFAULT_SAFE_MESSAGES: [&str; 6] = [
    "恭喜安全了! 🎉",
    "逃過一劫! 😅",
    "今天運氣不錯! ✨",
    "躲過了! 太幸運了! 🍀",
    "安全通關! 👍",
    "免喝一輪! 😎",
];

pub const DEFAULT_PENALTY_TEMPLATES: [&str; 6] = [
    "中獎! {n} 杯啤酒! 🍺",
    "天啊! {n} 杯下肚! 🤢",
    "完蛋了! {n} 杯等著你! 😵",
    "哭哭! {n} 杯啤酒! 😭",
    "倒霉! {n} 杯乾杯! 🍻",
    "命苦啊! {n} 杯走起! 🥴",
];

#[must_use]
pub fn result_title(face: Face) -> String {
    format!("骰子結果: {face}")
}

#[must_use]
pub fn fill_template(template: &str, value: Face) -> String {
    template.replace(VALUE_PLACEHOLDER, &value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The rolled slot was empty.
    Safe,
    /// The rolled slot held this value.
    Penalty(Face),
}

/// What the player sees after a roll settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub face: Face,
    pub slot: SlotId,
    pub verdict: Verdict,
    pub title: String,
    pub body: String,
}

/// Message pools for the two outcomes.
#[derive(Debug, Clone)]
pub struct Presenter {
    safe: Vec<String>,
    penalty: Vec<String>,
}

impl Default for Presenter {
    fn default() -> Self {
        Self {
            safe: DEFAULT_SAFE_MESSAGES.iter().map(ToString::to_string).collect(),
            penalty: DEFAULT_PENALTY_TEMPLATES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Presenter {
    /// Build pools from configured messages.
    ///
    /// Blank entries are dropped, as are penalty templates without `{n}`. A pool
    /// left empty falls back to the built-in messages.
    #[must_use]
    pub fn new(safe: Vec<String>, penalty: Vec<String>) -> Self {
        let defaults = Self::default();

        let safe: Vec<String> = safe
            .into_iter()
            .filter(|msg| !msg.trim().is_empty())
            .collect();
        let penalty: Vec<String> = penalty
            .into_iter()
            .filter(|template| {
                let usable = template.contains(VALUE_PLACEHOLDER);
                if !usable {
                    tracing::warn!(
                        template = %template,
                        "Ignoring penalty template without {VALUE_PLACEHOLDER}"
                    );
                }
                usable
            })
            .collect();

        Self {
            safe: if safe.is_empty() { defaults.safe } else { safe },
            penalty: if penalty.is_empty() {
                defaults.penalty
            } else {
                penalty
            },
        }
    }

    #[must_use]
    pub fn safe_messages(&self) -> &[String] {
        &self.safe
    }

    #[must_use]
    pub fn penalty_templates(&self) -> &[String] {
        &self.penalty
    }

    /// Resolve `face` against the value currently stored in its slot.
    pub fn present<X: Randomness>(
        &self,
        face: Face,
        value: Option<Face>,
        randomness: &mut X,
    ) -> Presentation {
        let slot = SlotId::for_face(face);
        let (verdict, body) = match value {
            None => {
                let msg = &self.safe[randomness.pick(self.safe.len())];
                (Verdict::Safe, msg.clone())
            }
            Some(n) => {
                let template = &self.penalty[randomness.pick(self.penalty.len())];
                (Verdict::Penalty(n), fill_template(template, n))
            }
        };

        Presentation {
            face,
            slot,
            verdict,
            title: result_title(face),
            body,
        }
    }
}
