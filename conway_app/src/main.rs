// main.rs - Toroidal Conway's Game of Life in an egui window
// The simulator paints into a pixel canvas; the frame loop drives its timer.

use std::time::{Duration, Instant};

use eframe::egui;

mod canvas;
mod ui;

use ui::LifeApp;

const GRID_SIZE: usize = 60;                                    // Cells per side
const UPDATE_INTERVAL: Duration = Duration::from_millis(120);   // Time between generations

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let app = LifeApp::new(GRID_SIZE, UPDATE_INTERVAL, Instant::now())?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Toroidal Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}
