#![warn(clippy::all)]

fn main() -> Result<(), eframe::Error> {
    use eframe::egui::ViewportBuilder;
    use life_grid::Config;

    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(Config::WINDOW_SIZE)
            .with_min_inner_size(Config::MIN_WINDOW_SIZE),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|cc| {
            let app = life_grid::App::new(&cc.egui_ctx)?;
            Ok(Box::new(app))
        }),
    )
}
