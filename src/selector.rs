use crate::grid::KanaGrid;
use crate::types::{Cell, Resolution, Vec3};

/// Default cell spacing, in the host's length units.
pub const DEFAULT_INTERVAL: f32 = 0.045;

/// Maps a continuous hand offset to a grid cell.
///
/// Stateless apart from its spacing constant; the previous selection is
/// passed in so change detection stays with the caller's tick loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSelector {
    interval: f32,
}

impl Default for GridSelector {
    fn default() -> Self {
        GridSelector {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl GridSelector {
    pub fn new(interval: f32) -> Self {
        GridSelector { interval }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Resolves `local_offset` (hand position minus origin position, world
    /// frame) to a cell of `grid`.
    ///
    /// The offset is first rotated into the origin's frame by yaw alone,
    /// then clamped to the board extent, then quantized with ceil
    /// semantics: a value exactly on a cell boundary groups with the
    /// higher index. `changed` compares resolved characters against
    /// `previous`, not cell indices.
    pub fn resolve(
        &self,
        grid: &KanaGrid,
        local_offset: Vec3,
        origin_yaw_degrees: f32,
        previous: Cell,
    ) -> Resolution {
        let iv = self.interval;
        let yaw = origin_yaw_degrees.to_radians();

        let x = local_offset.x * yaw.cos() + local_offset.z * (-yaw).sin();
        let clamped_x = x.clamp(-4.0 * iv, 5.0 * iv);
        // Column 5 sits at the origin; increasing x' walks toward column 0.
        let col = 5 - ((clamped_x - iv / 2.0) / iv).ceil() as i32;
        let col = col.clamp(0, 9) as u8;

        let z = local_offset.x * yaw.sin() + local_offset.z * (-yaw).cos();
        let clamped_z = z.clamp(-2.0 * iv, 2.0 * iv);
        let raw = ((clamped_z - iv / 2.0) / iv).ceil() as i32 + 2;
        // Row fold: the vertical axis's own row 0 is merged into the
        // horizontal axis, so the near-zero side collapses onto the
        // shared center cell instead of a separate row-0 cell.
        let row = if raw <= 2 { 2 - raw } else { raw };
        let row = row.clamp(0, 4) as u8;

        let cell = Cell { col, row };
        let changed = grid.char_at(cell) != grid.char_at(previous);

        Resolution {
            cell,
            changed,
            clamped_x,
            clamped_z,
        }
    }
}
