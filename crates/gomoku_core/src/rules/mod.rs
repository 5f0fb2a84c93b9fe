//! Game rules for five-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the heuristic opponent can share the run-counting
//! primitive with win detection.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LENGTH, check_five_through, line_run};
