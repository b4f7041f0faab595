//! Game rules for 6x6 connect-five
//!
//! Any cell may be played while empty; the first line of five (or more)
//! stones of one color wins.

pub mod win;

pub use win::{has_five_at_pos, has_five_in_row, line_length_at_pos, DIRECTIONS};
