mod app;
mod heap;
mod layout;
mod settings;
mod util;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use settings::Settings;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON settings file; missing keys use defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Milliseconds between animation steps.
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Cap on animation steps replayed in one frame.
    #[arg(long)]
    max_ticks_per_frame: Option<u32>,
    /// Hide the FPS readout.
    #[arg(long)]
    no_fps: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?.with_overrides(
        args.tick_ms,
        args.max_ticks_per_frame,
        args.no_fps,
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Heap Visualizer")
            .with_inner_size([settings.window_width, settings.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Heap Visualizer",
        options,
        Box::new(move |cc| Ok(Box::new(app::HeapVisualizerApp::new(cc, &settings)))),
    )
    .map_err(|error| anyhow!("failed to run the native window: {error}"))
}
