use log::{debug, trace};

use crate::grid::KanaGrid;
use crate::kana::KanaTransformer;
use crate::selector::GridSelector;
use crate::traits::TextBuffer;
use crate::types::{Cell, Command, Hand, InputEvent, Pose};

/// One grip-and-release input session for a single hand.
///
/// Owns the origin pose and selection state exclusively; a host driving
/// two controllers creates two sessions and nothing is shared between
/// them. The session mutates the host's text buffer through the
/// [`TextBuffer`] seam and returns the visual/haptic side effects as
/// [`Command`]s for the host to execute.
#[derive(Debug, Clone)]
pub struct InputSession {
    hand: Hand,
    grid: KanaGrid,
    transformer: KanaTransformer,
    selector: GridSelector,
    origin: Option<Pose>,
    selected: Option<Cell>,
}

/// Read-only view of a session's state, for hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    pub hand: Hand,
    pub origin: Option<Pose>,
    pub selected: Option<Cell>,
}

pub struct SessionBuilder {
    hand: Hand,
    grid: KanaGrid,
    transformer: KanaTransformer,
    selector: GridSelector,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            hand: Hand::Right,
            grid: KanaGrid::standard(),
            transformer: KanaTransformer::new(),
            selector: GridSelector::default(),
        }
    }
}

impl SessionBuilder {
    pub fn hand(mut self, hand: Hand) -> Self {
        self.hand = hand;
        self
    }

    pub fn grid(mut self, grid: KanaGrid) -> Self {
        self.grid = grid;
        self
    }

    pub fn transformer(mut self, transformer: KanaTransformer) -> Self {
        self.transformer = transformer;
        self
    }

    pub fn interval(mut self, interval: f32) -> Self {
        self.selector = GridSelector::new(interval);
        self
    }

    pub fn build(self) -> InputSession {
        InputSession {
            hand: self.hand,
            grid: self.grid,
            transformer: self.transformer,
            selector: self.selector,
            origin: None,
            selected: None,
        }
    }
}

impl Default for InputSession {
    fn default() -> Self {
        SessionBuilder::default().build()
    }
}

impl InputSession {
    pub fn new(hand: Hand) -> Self {
        SessionBuilder::default().hand(hand).build()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            hand: self.hand,
            origin: self.origin,
            selected: self.selected,
        }
    }

    /// Handles one input event, mutating `buffer` as needed and returning
    /// the commands the host should execute, in order.
    pub fn handle_event<B: TextBuffer>(
        &mut self,
        buffer: &mut B,
        event: InputEvent,
    ) -> Vec<Command> {
        match event {
            InputEvent::GripStart { pose } => {
                // A second press without a release keeps the first origin.
                let origin = *self.origin.get_or_insert(pose);
                self.selected = Some(Cell::CENTER);
                trace!("{:?} gesture start, origin yaw {}", self.hand, origin.yaw_degrees);
                vec![Command::ShowBoard { origin }]
            }
            InputEvent::GripEnd => {
                trace!("{:?} gesture end", self.hand);
                self.origin = None;
                self.selected = None;
                vec![Command::HideBoard]
            }
            InputEvent::Track { position } => {
                // Without a captured origin there is nothing to resolve.
                let Some(origin) = self.origin else {
                    return vec![];
                };
                let previous = self.selected.unwrap_or(Cell::CENTER);
                let res = self.selector.resolve(
                    &self.grid,
                    position - origin.position,
                    origin.yaw_degrees,
                    previous,
                );

                let mut commands = vec![Command::RenderCell {
                    cell: res.cell,
                    clamped_x: res.clamped_x,
                    clamped_z: res.clamped_z,
                }];
                if res.changed {
                    debug!("{:?} selection: {}", self.hand, self.grid.char_at(res.cell));
                    commands.push(Command::SelectionChanged { hand: self.hand });
                }
                // Stored selection updates only after the commands exist.
                self.selected = Some(res.cell);
                commands
            }
            InputEvent::Commit => {
                if let Some(cell) = self.selected {
                    buffer.append(self.grid.char_at(cell));
                }
                vec![]
            }
            InputEvent::Backspace => {
                buffer.remove_last();
                vec![]
            }
            InputEvent::Modify => {
                if let Some(last) = buffer.peek_last()
                    && let Some(out) = self.transformer.transform(last)
                {
                    buffer.remove_last();
                    buffer.append(out);
                }
                vec![]
            }
        }
    }
}
