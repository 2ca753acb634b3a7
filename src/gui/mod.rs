mod app;
mod config;
mod draw;
mod fps_limit;
mod settings;

pub use app::{read_pattern, App, LoadError};
pub use config::Config;
use fps_limit::FpsLimiter;
pub use settings::{Settings, SettingsError};
