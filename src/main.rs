use std::{error::Error, path::PathBuf};

use eframe::egui::{self, pos2, vec2, Rect};
use rand::{rngs::StdRng, SeedableRng};

use intervaldrill::{config::Config, gui::drill::DrillWindow, pitch::PitchTable};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    log::info!(
        "starting interval drill in a {}x{} window",
        config.width,
        config.height
    );

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("intervaldrill")
        .with_inner_size([config.width, config.height])
        .with_resizable(true);
    if let Some(position) = config.position {
        viewport = viewport.with_position(position);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let table = PitchTable::standard();
    let canvas = Rect::from_min_size(pos2(0.0, 0.0), vec2(config.width, config.height));

    eframe::run_native(
        "intervaldrill",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(DrillWindow::new(
                table,
                StdRng::from_entropy(),
                canvas,
            )))
        }),
    )?;

    Ok(())
}
