use eframe::egui::{Color32, Painter, Rect, Stroke};

use crate::heap::ColorClass;

pub(super) const BACKGROUND: Color32 = Color32::from_rgb(245, 245, 245);
pub(super) const EDGE_COLOR: Color32 = Color32::from_rgb(80, 80, 80);
pub(super) const OUTLINE_COLOR: Color32 = Color32::BLACK;
pub(super) const LABEL_COLOR: Color32 = Color32::BLACK;
pub(super) const EDGE_WIDTH: f32 = 2.0;
pub(super) const OUTLINE_WIDTH: f32 = 2.0;

pub(super) fn node_fill(color: ColorClass) -> Color32 {
    match color {
        ColorClass::Normal => Color32::from_rgb(135, 206, 250),
        ColorClass::Active => Color32::from_rgb(255, 160, 122),
        ColorClass::Sorted => Color32::from_rgb(144, 238, 144),
    }
}

pub(super) fn edge_stroke() -> Stroke {
    Stroke::new(EDGE_WIDTH, EDGE_COLOR)
}

pub(super) fn outline_stroke() -> Stroke {
    Stroke::new(OUTLINE_WIDTH, OUTLINE_COLOR)
}

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, BACKGROUND);
}

/// Label size that still fits inside a node of `radius`.
pub(super) fn label_size(radius: f32, label: &str) -> f32 {
    let digits = label.chars().count().max(1) as f32;
    let by_width = (radius * 2.0 * 0.9) / (digits * 0.6);
    by_width.min(radius * 0.8).max(7.0)
}
