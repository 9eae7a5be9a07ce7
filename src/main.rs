mod app;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use app::HarvestCompareApp;
use eframe::egui;
use state::AppState;

const DEFAULT_LEFT: &str = "data_de_Ghana.csv";
const DEFAULT_RIGHT: &str = "data_de_Coast.csv";

fn main() -> Result<()> {
    env_logger::init();

    // Optional positional overrides for the two fixed input paths.
    let mut args = std::env::args().skip(1);
    let left_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_LEFT.to_string()));
    let right_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_RIGHT.to_string()));

    // Run the pipeline up front: a missing required column is fatal and the
    // process exits non-zero before any window opens.
    let comparison = data::prepare::load_comparison(&left_path, &right_path)?;
    let state = AppState::new(left_path, right_path, comparison);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Harvest Compare – Ghana vs Ivory Coast",
        options,
        Box::new(|_cc| Ok(Box::new(HarvestCompareApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
