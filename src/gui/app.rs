use super::{Config, FpsLimiter, Settings};
use crate::{parse_rle, Grid, GridError, ParseRleError, Pattern, DEFAULT_FILL_RATE};
use eframe::egui::{CentralPanel, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseRleError,
    },
}

/// Reads an RLE pattern from disk.
pub fn read_pattern(path: &str) -> Result<Pattern, LoadError> {
    let data = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_rle(&data).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}

pub struct App {
    pub(super) grid: Grid,                 // Conway's GoL field.
    pub(super) settings: Settings,         // Applied grid size and step interval.
    pub(super) is_running: bool,           // Flag indicating whether the simulation is running.
    pub(super) last_step: Instant,         // Time of the last generation update.
    pub(super) width_input: String,        // Text of the settings fields, applied on demand.
    pub(super) height_input: String,
    pub(super) step_interval_input: String,
    pub(super) filename_load: String,      // The name of the RLE file to load the field from.
    pub(super) texture: TextureHandle,     // Texture handle of Conway's GoL field.
    pub(super) fps_limiter: FpsLimiter,    // Limits the frame rate to a certain value.
}

impl App {
    pub fn new(ctx: &Context) -> Result<Self, GridError> {
        let settings = Settings::default();
        Ok(Self {
            grid: Grid::new(settings.width, settings.height)?,
            settings,
            is_running: false,
            last_step: Instant::now(),
            width_input: settings.width.to_string(),
            height_input: settings.height.to_string(),
            step_interval_input: settings.step_interval_ms().to_string(),
            filename_load: Config::PATTERN_FILE.to_string(),
            texture: ctx.load_texture(
                "Conway's GoL field",
                ColorImage::default(),
                TextureOptions::NEAREST,
            ),
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(super) fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        self.last_step = Instant::now();
    }

    pub(super) fn step(&mut self) {
        let stats = self.grid.advance();
        self.last_step = Instant::now();
        log::trace!(
            "generation {}: population {}",
            stats.generation,
            stats.population
        );
    }

    pub(super) fn clear(&mut self) {
        self.grid.clear();
        self.is_running = false;
    }

    pub(super) fn randomize(&mut self) {
        if let Err(e) = self.grid.randomize(DEFAULT_FILL_RATE, None) {
            log::error!("{}", e);
        }
    }

    /// Applies the settings fields: recreates the grid and stops the simulation.
    ///
    /// Non-numeric input leaves everything as it was.
    pub(super) fn apply_settings(&mut self) {
        let settings = match Settings::parse(
            &self.width_input,
            &self.height_input,
            &self.step_interval_input,
        ) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("settings not applied: {}", e);
                return;
            }
        };
        if let Err(e) = self.grid.resize(settings.width, settings.height) {
            log::error!("{}", e);
            return;
        }
        self.settings = settings;
        self.width_input = settings.width.to_string();
        self.height_input = settings.height.to_string();
        self.step_interval_input = settings.step_interval_ms().to_string();
        self.is_running = false;
        log::info!(
            "applied settings: {}x{} grid, {} ms per generation",
            settings.width,
            settings.height,
            settings.step_interval_ms()
        );
    }

    pub(super) fn load_pattern(&mut self) {
        match read_pattern(&self.filename_load) {
            Ok(pattern) => {
                let stats = self.grid.load_pattern(&pattern);
                self.is_running = false;
                log::info!(
                    "loaded {} ({}x{}), population {}",
                    self.filename_load,
                    pattern.width,
                    pattern.height,
                    stats.population
                );
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Only the paused field can be edited.
    pub(super) fn click_cell(&mut self, x: i64, y: i64) {
        if !self.is_running {
            self.grid.toggle_cell(x, y);
        }
    }

    fn update_engine(&mut self) {
        if self.is_running && self.last_step.elapsed() >= self.settings.step_interval {
            self.step();
        }
    }

    fn handle_shortcuts(&mut self, ctx: &Context) {
        // typing into the settings fields must not trigger shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }
        let (space, r, c, s) = ctx.input(|input| {
            (
                input.key_pressed(Key::Space),
                input.key_pressed(Key::R),
                input.key_pressed(Key::C),
                input.key_pressed(Key::S),
            )
        });
        if space {
            self.toggle_running();
        }
        if r {
            self.randomize();
        }
        if c {
            self.clear();
        }
        if s {
            self.step();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_shortcuts(ctx);

                self.draw(ui);

                self.update_engine();
            });

        self.fps_limiter.sleep();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_app() -> App {
        App::new(&Context::default()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let app = new_app();
        assert_eq!((app.grid().width(), app.grid().height()), (50, 40));
        assert_eq!(app.grid().population(), 0);
        assert!(!app.is_running);
    }

    #[test]
    fn test_apply_settings_resizes_and_stops() {
        let mut app = new_app();
        app.grid.set_cell(3, 3, true);
        app.is_running = true;
        app.width_input = "500".to_string();
        app.height_input = "12".to_string();
        app.step_interval_input = "0".to_string();
        app.apply_settings();
        assert!(!app.is_running);
        assert_eq!((app.grid().width(), app.grid().height()), (200, 12));
        assert_eq!(app.grid().population(), 0);
        assert_eq!(app.settings.step_interval_ms(), 1);
        assert_eq!(app.width_input, "200");
    }

    #[test]
    fn test_bad_settings_are_ignored() {
        let mut app = new_app();
        app.grid.set_cell(3, 3, true);
        app.width_input = String::new();
        app.apply_settings();
        assert_eq!(app.grid().width(), 50);
        assert_eq!(app.grid().population(), 1);
        assert_eq!(app.settings, Settings::default());
    }

    #[test]
    fn test_click_only_while_paused() {
        let mut app = new_app();
        app.click_cell(1, 1);
        assert!(app.grid().get(1, 1));
        app.click_cell(-5, 1);
        assert_eq!(app.grid().population(), 1);

        app.toggle_running();
        app.click_cell(2, 2);
        assert!(!app.grid().get(2, 2));
    }

    #[test]
    fn test_clear_stops() {
        let mut app = new_app();
        app.randomize();
        app.step();
        app.is_running = true;
        app.clear();
        assert!(!app.is_running);
        assert_eq!(app.grid().stats(), crate::GridStats::default());
    }

    #[test]
    fn test_missing_pattern_file() {
        let mut app = new_app();
        app.filename_load = "/nonexistent/pattern.rle".to_string();
        app.grid.set_cell(0, 0, true);
        app.load_pattern();
        assert_eq!(app.grid().population(), 1);
        assert!(matches!(
            read_pattern(&app.filename_load),
            Err(LoadError::Io { .. })
        ));
    }
}
