use eframe::egui::{Align2, FontId, Painter, Pos2, Rect, Sense, Ui, Vec2};

use crate::heap::RenderSnapshot;

use super::super::ViewModel;
use super::super::render_utils::{
    draw_background, edge_stroke, label_size, node_fill, outline_stroke, LABEL_COLOR,
};

fn paint_snapshot(painter: &Painter, snapshot: &RenderSnapshot, offset: Vec2, radius: f32) {
    for &(parent, child) in &snapshot.edges {
        let (Some(from), Some(to)) = (snapshot.nodes.get(parent), snapshot.nodes.get(child))
        else {
            continue;
        };
        painter.line_segment([from.position + offset, to.position + offset], edge_stroke());
    }

    for node in &snapshot.nodes {
        let center = node.position + offset;
        painter.circle_filled(center, radius, node_fill(node.color));
        painter.circle_stroke(center, radius, outline_stroke());

        let label = node.value.to_string();
        let size = label_size(radius, &label);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(size),
            LABEL_COLOR,
        );
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_heap(&mut self, ui: &mut Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);
        draw_background(&painter, rect);

        // The core lays out in canvas-local coordinates.
        self.visualizer
            .on_resize(Rect::from_min_size(Pos2::ZERO, rect.size()));

        let snapshot = self.visualizer.render_snapshot();
        if snapshot.nodes.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Enter a value and insert it to start building a heap.",
                FontId::proportional(14.0),
                LABEL_COLOR,
            );
            return;
        }

        paint_snapshot(&painter, &snapshot, rect.min.to_vec2(), self.node_radius);
    }
}
