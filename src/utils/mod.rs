mod format_int;
mod parse_rle;

pub use format_int::NiceInt;
pub use parse_rle::{parse_rle, ParseRleError, Pattern};
