use std::collections::VecDeque;

use eframe::egui::Context;

use crate::heap::HeapVisualizer;
use crate::settings::Settings;

mod graph;
mod render_utils;
mod scheduler;
mod ui;

use scheduler::TickScheduler;

pub struct HeapVisualizerApp {
    model: ViewModel,
}

struct ViewModel {
    visualizer: HeapVisualizer,
    scheduler: TickScheduler,
    tick_interval_ms: u64,
    max_ticks_per_frame: u32,
    input: String,
    focus_input: bool,
    node_radius: f32,
    show_fps_bar: bool,
    fps_current: f32,
    fps_samples: VecDeque<f32>,
}

impl HeapVisualizerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        log::info!(
            "starting with {} ms ticks, at most {} per frame",
            settings.tick_interval_ms,
            settings.max_ticks_per_frame
        );
        Self {
            model: ViewModel::new(settings),
        }
    }
}

impl eframe::App for HeapVisualizerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.model.show(ctx);
    }
}
