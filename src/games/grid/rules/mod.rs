//! Game rules for the grid game.
//!
//! Pure functions over a [`Board`](super::Board). The engine calls them for
//! the cell that was just played; they never mutate anything.

pub mod draw;
pub mod win;

pub use draw::{is_full, min_turns_to_win};
pub use win::{Line, completed_line, line_complete, line_positions};
