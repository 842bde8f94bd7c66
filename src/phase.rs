/// Game phase transitions.
///
/// ```text
///   Menu ──Confirm──▶ Playing ◀──TogglePause──▶ Paused
///                        │
///                        ├──LivesExhausted──▶ GameOver
///                        └──CoinsExhausted──▶ Win
/// ```
///
/// `GameOver` and `Win` have no way out; any pair not in the table leaves the
/// phase unchanged.

use crate::entities::{Phase, Trigger};

impl Phase {
    pub fn on(self, trigger: Trigger) -> Phase {
        match (self, trigger) {
            (Phase::Menu, Trigger::Confirm) => Phase::Playing,
            (Phase::Playing, Trigger::TogglePause) => Phase::Paused,
            (Phase::Paused, Trigger::TogglePause) => Phase::Playing,
            (Phase::Playing, Trigger::LivesExhausted) => Phase::GameOver,
            (Phase::Playing, Trigger::CoinsExhausted) => Phase::Win,
            (phase, _) => phase,
        }
    }

    /// Gameplay is over; rendering continues but nothing moves any more.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::Win)
    }

    /// Entity updates only run while this is true.
    pub fn is_active(self) -> bool {
        self == Phase::Playing
    }
}
