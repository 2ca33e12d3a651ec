/// A three-component vector in the host's world units.
///
/// Only `x` and `z` participate in grid resolution; `y` is carried so hosts
/// can hand over raw controller positions without projecting them first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// A controller pose: world position plus yaw.
///
/// Yaw is the rotation about the vertical axis in degrees; pitch and roll
/// never influence grid resolution, so they are not represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// Rotation about the vertical axis, in degrees.
    pub yaw_degrees: f32,
}

impl Pose {
    pub const fn new(position: Vec3, yaw_degrees: f32) -> Self {
        Pose {
            position,
            yaw_degrees,
        }
    }
}

/// A coordinate into the 10×5 character grid.
///
/// `col` is 0–9, `row` is 0–4. Cells produced by the resolver are always
/// in range; hand-built cells outside it will panic at grid lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    /// The center cell (5, 0), the initial selection of every gesture.
    pub const CENTER: Cell = Cell { col: 5, row: 0 };

    pub const fn new(col: u8, row: u8) -> Self {
        Cell { col, row }
    }
}

/// Which hand a session belongs to.
///
/// Sessions never share state; the hand identity only tags outgoing
/// notifications so a host driving two controllers can route feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// The result of one grid resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// The resolved grid cell, clamped to the valid range.
    pub cell: Cell,
    /// True when the resolved character differs from the previous tick's.
    /// Compared on characters, not indices, so crossing the row fold onto
    /// the same glyph does not count as a change.
    pub changed: bool,
    /// The rotated, clamped horizontal offset, for board animation.
    pub clamped_x: f32,
    /// The rotated, clamped depth offset, for board animation.
    pub clamped_z: f32,
}

/// Input events consumed by a session.
///
/// Hosts can build these directly from their own edge detection, or poll
/// held button state through [`crate::input::ButtonTracker`] and let it
/// produce them in the canonical per-tick order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The grip gesture began; `pose` becomes the board origin.
    GripStart { pose: Pose },
    /// The grip gesture ended; the session resets.
    GripEnd,
    /// Per-tick hand position while the grip is held.
    Track { position: Vec3 },
    /// Append the currently selected character to the text buffer.
    Commit,
    /// Remove the last character from the text buffer.
    Backspace,
    /// Apply a phonetic transform to the buffer's last character.
    Modify,
}

/// Commands emitted by a session for the host to execute.
///
/// The engine performs no rendering or haptics itself; these describe the
/// side effects the host should apply after each event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Display the character board anchored at the captured origin.
    ShowBoard { origin: Pose },
    /// Tear down the character board.
    HideBoard,
    /// Highlight the selected cell; the clamped offsets let the host slide
    /// the board rows under a fixed selection frame.
    RenderCell {
        cell: Cell,
        clamped_x: f32,
        clamped_z: f32,
    },
    /// The selected character changed this tick; fire a feedback pulse.
    SelectionChanged { hand: Hand },
}
