use eframe::egui::{self, Key, Ui};

use crate::settings::TICK_INTERVAL_RANGE_MS;
use crate::util::parse_heap_value;

use super::super::ViewModel;

const INPUT_WIDTH: f32 = 80.0;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        let accepts_commands = !self.visualizer.is_busy();
        let mut insert_as = None;

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let input_response = ui
                .add(
                    egui::TextEdit::singleline(&mut self.input)
                        .desired_width(INPUT_WIDTH)
                        .hint_text("value"),
                )
                .on_hover_text("Integer to insert. Enter inserts into a max-heap.");
            if self.focus_input {
                input_response.request_focus();
                self.focus_input = false;
            }
            if input_response.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter)) {
                insert_as = Some(true);
            }

            if ui
                .add_enabled(accepts_commands, egui::Button::new("Insert Max"))
                .on_hover_text("Append the value and sift it up as a max-heap.")
                .clicked()
            {
                insert_as = Some(true);
            }

            if ui
                .add_enabled(accepts_commands, egui::Button::new("Insert Min"))
                .on_hover_text("Append the value and sift it up as a min-heap.")
                .clicked()
            {
                insert_as = Some(false);
            }

            let can_sort = accepts_commands && !self.visualizer.is_empty();
            if ui
                .add_enabled(can_sort, egui::Button::new("Heapsort"))
                .on_hover_text("Sort the heap in ascending order by repeated extraction.")
                .clicked()
            {
                self.visualizer.start_sort();
            }

            if ui
                .button("Reset")
                .on_hover_text("Clear every node, aborting any running operation.")
                .clicked()
            {
                self.visualizer.reset();
                self.scheduler.reset();
            }

            ui.separator();

            let mut tick_interval_ms = self.tick_interval_ms;
            let slider = ui
                .add(
                    egui::Slider::new(&mut tick_interval_ms, TICK_INTERVAL_RANGE_MS)
                        .logarithmic(true)
                        .text("ms / step")
                        .clamping(egui::SliderClamping::Always),
                )
                .on_hover_text("Delay between animation steps.");
            if slider.changed() {
                self.set_tick_interval(tick_interval_ms);
            }
        });
        ui.add_space(4.0);

        if let Some(as_max_heap) = insert_as {
            self.submit_input(as_max_heap);
        }
    }

    fn submit_input(&mut self, as_max_heap: bool) {
        if self.visualizer.is_busy() {
            return;
        }

        match parse_heap_value(&self.input) {
            Ok(value) => {
                self.visualizer.insert(value, as_max_heap);
                self.input.clear();
                self.focus_input = true;
            }
            Err(error) => log::debug!("input rejected: {error:#}"),
        }
    }
}
