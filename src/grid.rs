use crate::types::Cell;

/// Number of grid columns.
pub const COLS: usize = 10;
/// Number of grid rows.
pub const ROWS: usize = 5;

/// The standard gojūon board, `[col][row]`.
///
/// Column 5 row 0 (あ) is the center cell. Row 0 doubles as the horizontal
/// axis: the vertical axis's own row-0 cell is suppressed by the resolver's
/// row fold and by board rendering, never selected independently.
const STANDARD: [[char; ROWS]; COLS] = [
    ['わ', 'ー', 'を', '～', 'ん'],
    ['ら', 'り', 'る', 'れ', 'ろ'],
    ['や', '（', 'ゆ', '）', 'よ'],
    ['ま', 'み', 'む', 'め', 'も'],
    ['は', 'ひ', 'ふ', 'へ', 'ほ'],
    ['あ', 'い', 'う', 'え', 'お'],
    ['か', 'き', 'く', 'け', 'こ'],
    ['さ', 'し', 'す', 'せ', 'そ'],
    ['た', 'ち', 'つ', 'て', 'と'],
    ['な', 'に', 'ぬ', 'ね', 'の'],
];

/// An immutable 10×5 character table.
///
/// Built once and shared for the process lifetime; both the selector and
/// the session read it, nothing writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaGrid {
    cells: [[char; ROWS]; COLS],
}

impl Default for KanaGrid {
    fn default() -> Self {
        Self::standard()
    }
}

impl KanaGrid {
    /// The standard kana layout.
    pub const fn standard() -> Self {
        KanaGrid { cells: STANDARD }
    }

    /// A custom table, `cells[col][row]`.
    pub const fn from_cells(cells: [[char; ROWS]; COLS]) -> Self {
        KanaGrid { cells }
    }

    /// The character at `cell`.
    ///
    /// Panics if the cell is out of range. Resolver output is always
    /// clamped, so a panic here is a caller bug, not a runtime condition.
    pub fn char_at(&self, cell: Cell) -> char {
        self.cells[cell.col as usize][cell.row as usize]
    }

    /// One full column, center row first.
    pub fn column(&self, col: u8) -> &[char; ROWS] {
        &self.cells[col as usize]
    }
}
