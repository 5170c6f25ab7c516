use std::collections::VecDeque;

use eframe::egui::{self, pos2, vec2, Align, Context, Layout, Rect};

use crate::heap::HeapVisualizer;
use crate::settings::Settings;

use super::super::ViewModel;
use super::super::scheduler::TickScheduler;

impl ViewModel {
    pub(in crate::app) fn new(settings: &Settings) -> Self {
        let canvas = Rect::from_min_size(
            pos2(0.0, 0.0),
            vec2(settings.window_width, settings.window_height),
        );

        Self {
            visualizer: HeapVisualizer::new(canvas),
            scheduler: TickScheduler::new(settings.tick_interval(), settings.max_ticks_per_frame),
            tick_interval_ms: settings.tick_interval_ms,
            max_ticks_per_frame: settings.max_ticks_per_frame,
            input: String::new(),
            focus_input: true,
            node_radius: settings.node_radius,
            show_fps_bar: settings.show_fps,
            fps_current: 0.0,
            fps_samples: VecDeque::new(),
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        self.update_fps_counter(ctx);
        self.run_due_ticks(ctx);

        egui::TopBottomPanel::top("controls")
            .resizable(false)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(self.visualizer.status_text());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(fps_text) = self.fps_display_text() {
                            ui.label(fps_text);
                            ui.separator();
                        }
                        let kind = if self.visualizer.is_max_heap() { "max" } else { "min" };
                        ui.label(format!(
                            "nodes: {}  heap size: {}  {kind}-heap  phase: {}",
                            self.visualizer.len(),
                            self.visualizer.heap_size(),
                            self.visualizer.state().label()
                        ));
                        if self.visualizer.is_busy() {
                            ui.label(format!(
                                "swap progress: {}",
                                self.visualizer.animation_progress()
                            ));
                        }
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| self.draw_heap(ui));

        if self.visualizer.is_busy() {
            ctx.request_repaint_after(self.scheduler.interval());
        }
    }

    fn run_due_ticks(&mut self, ctx: &Context) {
        if !self.visualizer.is_busy() {
            self.scheduler.reset();
            return;
        }

        let frame_delta = ctx.input(|input| input.stable_dt);
        for _ in 0..self.scheduler.due_ticks(frame_delta) {
            self.visualizer.tick();
        }
    }

    pub(in crate::app) fn set_tick_interval(&mut self, tick_interval_ms: u64) {
        self.tick_interval_ms = tick_interval_ms;
        self.scheduler = TickScheduler::new(
            std::time::Duration::from_millis(tick_interval_ms),
            self.max_ticks_per_frame,
        );
        log::debug!("tick interval set to {tick_interval_ms} ms");
    }
}
