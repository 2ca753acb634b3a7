use super::{App, Config};
use crate::NiceInt;
use eframe::egui::{
    load::SizedTexture, pos2, vec2, Button, Color32, ColorImage, Image, RichText, Sense, Stroke,
    TextEdit, TextureOptions, Ui, Vec2,
};

/// Side of a cell in pixels so that the whole field fits into `available`.
pub(super) fn cell_size(available: Vec2, width: usize, height: usize) -> f32 {
    let fit_x = (available.x / width as f32).floor();
    let fit_y = (available.y / height as f32).floor();
    fit_x
        .min(fit_y)
        .min(Config::MAX_CELL_SIZE)
        .max(Config::MIN_CELL_SIZE)
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str, fill: Color32) -> Button {
        Button::new(Self::new_text(text))
            .fill(fill)
            .min_size(Config::BUTTON_SIZE.into())
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn number_input(ui: &mut Ui, label: &str, text: &mut String) {
        ui.label(Self::new_text(label));
        ui.add(TextEdit::singleline(text).desired_width(Config::INPUT_FIELD_WIDTH));
        text.retain(|c| c.is_ascii_digit());
    }

    fn draw_buttons(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Start", Config::START_COLOR)).clicked() && !self.is_running {
                self.toggle_running();
            }
            if ui.add(Self::new_button("Stop", Config::STOP_COLOR)).clicked() {
                self.is_running = false;
            }
            if ui.add(Self::new_button("Step", Config::STEP_COLOR)).clicked() {
                self.step();
            }
            if ui.add(Self::new_button("Clear", Config::CLEAR_COLOR)).clicked() {
                self.clear();
            }
            if ui.add(Self::new_button("Random", Config::RANDOM_COLOR)).clicked() {
                self.randomize();
            }
            if ui.add(Self::new_button("Apply Grid", Config::APPLY_COLOR)).clicked() {
                self.apply_settings();
            }
        });
    }

    fn draw_settings(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            Self::number_input(ui, "Width:", &mut self.width_input);
            Self::number_input(ui, "Height:", &mut self.height_input);
            Self::number_input(ui, "Speed (ms):", &mut self.step_interval_input);

            ui.add_space(Config::FRAME_MARGIN);

            if ui.add(Self::new_button("Load RLE", Config::CLEAR_COLOR)).clicked() {
                self.load_pattern();
            }
            ui.label(Self::new_text("from: "));
            ui.add(
                TextEdit::singleline(&mut self.filename_load)
                    .desired_width(Config::FILENAME_INPUT_FIELD_WIDTH),
            );
        });
    }

    fn draw_stats(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text(&format!(
                "Generation: {}  |  Population: {}  |  Status: {}",
                NiceInt::from(self.grid.generation()),
                NiceInt::from(self.grid.population()),
                if self.is_running { "Running" } else { "Paused" },
            )));
            ui.add_space(Config::FRAME_MARGIN);
            ui.label(
                RichText::new(format!(
                    "Space: Play/Pause  |  R: Random  |  C: Clear  |  S: Step  |  Click cells to toggle  |  FPS: {:3}",
                    self.fps_limiter.fps().round() as u32
                ))
                .color(Config::HINT_COLOR),
            );
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        eframe::egui::Frame::default()
            .fill(Config::PANEL_COLOR)
            .inner_margin(Config::FRAME_MARGIN)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical(|ui| {
                    self.draw_buttons(ui);
                    self.draw_settings(ui);
                    self.draw_stats(ui);
                });
            });
    }

    fn draw_gol_field(&mut self, ui: &mut Ui) {
        let (w, h) = (self.grid.width(), self.grid.height());
        let cell_px = cell_size(ui.available_size(), w, h);

        let pixels = self
            .grid
            .cells()
            .iter()
            .map(|&c| if c { Config::ALIVE_COLOR } else { Config::DEAD_COLOR })
            .collect();
        self.texture.set(
            ColorImage {
                size: [w, h],
                pixels,
            },
            TextureOptions::NEAREST,
        );

        let size_px = vec2(w as f32 * cell_px, h as f32 * cell_px);
        let source = SizedTexture::new(self.texture.id(), size_px);
        let response = ui.add(Image::from_texture(source).sense(Sense::click()));
        let rect = response.rect;

        if cell_px > Config::GRID_LINES_MIN_CELL {
            let painter = ui.painter_at(rect);
            let stroke = Stroke::new(1., Config::GRID_LINE_COLOR);
            for x in 0..=w {
                let px = rect.left() + x as f32 * cell_px;
                painter.line_segment([pos2(px, rect.top()), pos2(px, rect.bottom())], stroke);
            }
            for y in 0..=h {
                let py = rect.top() + y as f32 * cell_px;
                painter.line_segment([pos2(rect.left(), py), pos2(rect.right(), py)], stroke);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = (pos - rect.left_top()) / cell_px;
                self.click_cell(p.x.floor() as i64, p.y.floor() as i64);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        self.draw_controls(ui);

        ui.add_space(Config::FRAME_MARGIN);

        ui.vertical_centered(|ui| {
            self.draw_gol_field(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_fits_field() {
        assert_eq!(cell_size(vec2(1180., 660.), 50, 40), 16.);
        assert_eq!(cell_size(vec2(1180., 660.), 200, 150), 4.);
    }

    #[test]
    fn test_cell_size_limits() {
        assert_eq!(cell_size(vec2(1180., 660.), 10, 10), Config::MAX_CELL_SIZE);
        assert_eq!(cell_size(vec2(100., 100.), 200, 150), Config::MIN_CELL_SIZE);
    }
}
