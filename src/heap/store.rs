use eframe::egui::{Pos2, Rect};

use crate::layout::{child_indices, position_for_index};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeapNode {
    pub value: i32,
    pub position: Pos2,
    pub target: Pos2,
}

impl HeapNode {
    fn at_anchor(value: i32, anchor: Pos2) -> Self {
        Self {
            value,
            position: anchor,
            target: anchor,
        }
    }
}

/// Heap array plus the length of its live prefix.
///
/// Slots `[0, heap_size)` form the active heap, slots `[heap_size, len)` hold
/// values already extracted by a running or finished sort.
#[derive(Clone, Debug, Default)]
pub struct HeapStore {
    nodes: Vec<HeapNode>,
    heap_size: usize,
}

impl HeapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn heap_size(&self) -> usize {
        self.heap_size
    }

    pub fn set_heap_size(&mut self, heap_size: usize) {
        self.heap_size = heap_size.min(self.nodes.len());
    }

    pub fn nodes(&self) -> &[HeapNode] {
        &self.nodes
    }

    pub fn value(&self, index: usize) -> Option<i32> {
        self.nodes.get(index).map(|node| node.value)
    }

    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.nodes.iter().map(|node| node.value)
    }

    /// Appends a node resting on its anchor and returns its slot.
    pub fn append(&mut self, value: i32, surface: Rect) -> usize {
        let index = self.nodes.len();
        self.nodes
            .push(HeapNode::at_anchor(value, position_for_index(index, surface)));
        index
    }

    /// Exchanges two slots; value and positions travel together.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.nodes.swap(i, j);
    }

    /// Two distinct slots paired as mutable references.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut HeapNode, &mut HeapNode)> {
        if i == j || i >= self.nodes.len() || j >= self.nodes.len() {
            return None;
        }

        if i < j {
            let (head, tail) = self.nodes.split_at_mut(j);
            Some((&mut head[i], &mut tail[0]))
        } else {
            let (head, tail) = self.nodes.split_at_mut(i);
            Some((&mut tail[0], &mut head[j]))
        }
    }

    pub fn relayout(&mut self, surface: Rect) {
        for (index, node) in self.nodes.iter_mut().enumerate() {
            let anchor = position_for_index(index, surface);
            node.position = anchor;
            node.target = anchor;
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.heap_size = 0;
    }

    pub fn is_max_heap_prefix(&self, len: usize) -> bool {
        let len = len.min(self.nodes.len());
        (0..len).all(|index| {
            let (left, right) = child_indices(index);
            let value = self.nodes[index].value;
            [left, right]
                .into_iter()
                .filter(|&child| child < len)
                .all(|child| self.nodes[child].value <= value)
        })
    }
}
