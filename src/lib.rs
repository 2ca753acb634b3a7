mod engine;
mod gui;
mod utils;

pub use engine::{Grid, GridError, GridStats, DEFAULT_FILL_RATE};
pub use gui::{read_pattern, App, Config, LoadError, Settings, SettingsError};
pub use utils::{parse_rle, NiceInt, ParseRleError, Pattern};
