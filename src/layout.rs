use eframe::egui::{pos2, Pos2, Rect};

pub const VERTICAL_SPACING: f32 = 60.0;
pub const TOP_MARGIN: f32 = 30.0;

/// Anchor of a heap slot when the array is drawn as a complete binary tree.
///
/// Every level splits the surface width into `2^level + 1` equal slices and
/// places its nodes on the inner slice boundaries.
pub fn position_for_index(index: usize, surface: Rect) -> Pos2 {
    let level = (index + 1).ilog2();
    let items_in_level = 1usize << level;
    let pos_in_level = index - (items_in_level - 1);

    let slice = surface.width() / (items_in_level + 1) as f32;
    let x = slice * (pos_in_level + 1) as f32;
    let y = surface.top() + TOP_MARGIN + (level as f32 * VERTICAL_SPACING);
    pos2(x, y)
}

pub fn parent_index(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

pub fn child_indices(index: usize) -> (usize, usize) {
    (2 * index + 1, 2 * index + 2)
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn surface() -> Rect {
        Rect::from_min_size(pos2(0.0, 55.0), vec2(1000.0, 600.0))
    }

    #[test]
    fn root_sits_centered_below_top_margin() {
        let root = position_for_index(0, surface());
        assert_eq!(root, pos2(500.0, 85.0));
    }

    #[test]
    fn second_level_splits_width_in_thirds() {
        let left = position_for_index(1, surface());
        let right = position_for_index(2, surface());
        assert!((left.x - 1000.0 / 3.0).abs() < 1e-3);
        assert!((right.x - 2000.0 / 3.0).abs() < 1e-3);
        assert_eq!(left.y, 145.0);
        assert_eq!(right.y, 145.0);
    }

    #[test]
    fn levels_step_down_by_vertical_spacing() {
        let rect = surface();
        assert_eq!(position_for_index(3, rect).y, 205.0);
        assert_eq!(position_for_index(6, rect).y, 205.0);
        assert_eq!(position_for_index(7, rect).y, 265.0);
        assert_eq!(position_for_index(3, rect).x, 200.0);
        assert_eq!(position_for_index(6, rect).x, 800.0);
    }

    #[test]
    fn layout_is_deterministic() {
        let rect = surface();
        for index in 0..64 {
            assert_eq!(position_for_index(index, rect), position_for_index(index, rect));
        }
    }

    #[test]
    fn parent_and_children_are_consistent() {
        assert_eq!(parent_index(0), None);
        for index in 0..100 {
            let (left, right) = child_indices(index);
            assert_eq!(parent_index(left), Some(index));
            assert_eq!(parent_index(right), Some(index));
        }
    }
}
