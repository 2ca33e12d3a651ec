use crate::types::{InputEvent, Pose};

bitflags::bitflags! {
    /// Held-state snapshot of the controller buttons relevant to input.
    ///
    /// Hosts sample these once per tick; edge detection lives in
    /// [`ButtonTracker`], not in the host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        /// The grip trigger that opens and holds the board.
        const GRIP      = 0b0001;
        /// Commit the selected character.
        const COMMIT    = 0b0010;
        /// Remove the last committed character.
        const BACKSPACE = 0b0100;
        /// Apply a phonetic transform to the last character.
        const MODIFY    = 0b1000;
    }
}

/// Turns per-tick held button state into edge events.
///
/// At most one primary event fires per tick, priority
/// Commit > Backspace > Modify; grip edges are independent of the
/// primaries. Event order within a tick is fixed: grip edge, primary,
/// then `Track` while the grip is held (including the press tick).
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonTracker {
    held: Buttons,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, held: Buttons, pose: Pose) -> Vec<InputEvent> {
        let pressed = held & !self.held;
        let released = self.held & !held;
        self.held = held;

        let mut events = Vec::new();

        if pressed.contains(Buttons::GRIP) {
            events.push(InputEvent::GripStart { pose });
        } else if released.contains(Buttons::GRIP) {
            events.push(InputEvent::GripEnd);
        }

        if pressed.contains(Buttons::COMMIT) {
            events.push(InputEvent::Commit);
        } else if pressed.contains(Buttons::BACKSPACE) {
            events.push(InputEvent::Backspace);
        } else if pressed.contains(Buttons::MODIFY) {
            events.push(InputEvent::Modify);
        }

        if held.contains(Buttons::GRIP) {
            events.push(InputEvent::Track {
                position: pose.position,
            });
        }

        events
    }
}
