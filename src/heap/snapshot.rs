use eframe::egui::Pos2;

use crate::layout::parent_index;

use super::machine::HeapVisualizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorClass {
    Normal,
    /// Current or compare slot while an operation is running.
    Active,
    /// Already extracted by heapsort.
    Sorted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotNode {
    pub position: Pos2,
    pub value: i32,
    pub color: ColorClass,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderSnapshot {
    pub nodes: Vec<SnapshotNode>,
    /// `(parent, child)` slot pairs inside the live heap.
    pub edges: Vec<(usize, usize)>,
}

impl HeapVisualizer {
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let heap_size = self.heap_size();
        let animating = self.is_busy();
        let is_engaged = |index: usize| {
            animating
                && (self.current_index() == Some(index) || self.compare_index() == Some(index))
        };

        let nodes = self
            .store()
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let color = if index >= heap_size {
                    ColorClass::Sorted
                } else if is_engaged(index) {
                    ColorClass::Active
                } else {
                    ColorClass::Normal
                };

                SnapshotNode {
                    position: node.position,
                    value: node.value,
                    color,
                }
            })
            .collect();

        let edges = (1..heap_size)
            .filter_map(|child| parent_index(child).map(|parent| (parent, child)))
            .collect();

        RenderSnapshot { nodes, edges }
    }
}
