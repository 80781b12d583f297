//! Game rules: win and draw detection.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{has_won, winning_marker, LINES};
