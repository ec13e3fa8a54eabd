//! Game rules for noughts-and-crosses.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the game state and the move selector can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{has_won, winning_line};
