pub mod grid;
pub mod input;
pub mod kana;
pub mod selector;
pub mod session;
pub mod traits;
pub mod types;

pub use crate::grid::KanaGrid;
pub use crate::input::{ButtonTracker, Buttons};
pub use crate::kana::{KanaTransformer, RuleKind, TransformRule};
pub use crate::selector::{DEFAULT_INTERVAL, GridSelector};
pub use crate::session::{InputSession, SessionBuilder, SessionSnapshot};
pub use crate::traits::{StringBuffer, TextBuffer};
pub use crate::types::{Cell, Command, Hand, InputEvent, Pose, Resolution, Vec3};
