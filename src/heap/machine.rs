use eframe::egui::Rect;

use crate::layout::{child_indices, parent_index, position_for_index};

use super::animation::{advance, arrived, settle};
use super::store::HeapStore;

/// Progress units added per animation tick.
pub const ANIMATION_STEP_INCREMENT: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Idle,
    InsertCheck,
    InsertSwap,
    SortExtract,
    SortShrink,
    SortHeapifyCheck,
    SortHeapifySwap,
    SortCompleted,
}

impl AppState {
    /// Whether a new user command may start in this state.
    pub fn accepts_commands(self) -> bool {
        matches!(self, Self::Idle | Self::SortCompleted)
    }

    /// State entered once the swap animated by this state has settled.
    pub fn settle_transition(self) -> Option<Self> {
        match self {
            Self::InsertSwap => Some(Self::InsertCheck),
            Self::SortExtract => Some(Self::SortShrink),
            Self::SortHeapifySwap => Some(Self::SortHeapifyCheck),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InsertCheck => "insert: compare",
            Self::InsertSwap => "insert: swap",
            Self::SortExtract => "sort: extract",
            Self::SortShrink => "sort: shrink",
            Self::SortHeapifyCheck => "sort: heapify compare",
            Self::SortHeapifySwap => "sort: heapify swap",
            Self::SortCompleted => "sort: completed",
        }
    }
}

#[derive(Clone, Debug)]
struct OperationContext {
    state: AppState,
    current_index: Option<usize>,
    compare_index: Option<usize>,
    is_max_heap: bool,
    animation_progress: u32,
    swap_in_flight: bool,
    build_cursor: Option<usize>,
}

impl Default for OperationContext {
    fn default() -> Self {
        Self {
            state: AppState::Idle,
            current_index: None,
            compare_index: None,
            is_max_heap: true,
            animation_progress: 0,
            swap_in_flight: false,
            build_cursor: None,
        }
    }
}

/// Drives heap insertion and heapsort one observable step per tick.
pub struct HeapVisualizer {
    store: HeapStore,
    context: OperationContext,
    surface: Rect,
    status: String,
}

impl HeapVisualizer {
    pub fn new(surface: Rect) -> Self {
        Self {
            store: HeapStore::new(),
            context: OperationContext::default(),
            surface,
            status: "Ready".to_owned(),
        }
    }

    pub fn store(&self) -> &HeapStore {
        &self.store
    }

    pub fn state(&self) -> AppState {
        self.context.state
    }

    pub fn status_text(&self) -> &str {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn heap_size(&self) -> usize {
        self.store.heap_size()
    }

    pub fn values(&self) -> Vec<i32> {
        self.store.values().collect()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.context.current_index
    }

    pub fn compare_index(&self) -> Option<usize> {
        self.context.compare_index
    }

    pub fn is_max_heap(&self) -> bool {
        self.context.is_max_heap
    }

    pub fn animation_progress(&self) -> u32 {
        self.context.animation_progress
    }

    pub fn is_busy(&self) -> bool {
        !self.context.state.accepts_commands()
    }

    pub fn on_resize(&mut self, surface: Rect) {
        if surface == self.surface {
            return;
        }

        self.surface = surface;
        if self.context.state == AppState::Idle {
            self.store.relayout(surface);
        } else {
            log::trace!(
                "surface resized during {}; layout deferred",
                self.context.state.label()
            );
        }
    }

    pub fn insert(&mut self, value: i32, as_max_heap: bool) {
        if !self.context.state.accepts_commands() {
            log::debug!(
                "insert({value}) ignored while {}",
                self.context.state.label()
            );
            return;
        }

        if self.context.state == AppState::SortCompleted {
            self.store.set_heap_size(self.store.len());
            self.transition(AppState::Idle);
            self.store.relayout(self.surface);
        }

        let index = self.store.append(value, self.surface);
        self.store.set_heap_size(self.store.len());

        self.context = OperationContext {
            state: AppState::InsertCheck,
            current_index: Some(index),
            is_max_heap: as_max_heap,
            ..OperationContext::default()
        };

        let kind = if as_max_heap { "max" } else { "min" };
        log::info!("insert {value} into {kind}-heap at slot {index}");
        self.set_status(format!("Inserted {value}. Analyzing..."));
    }

    pub fn start_sort(&mut self) {
        if self.store.is_empty() {
            log::debug!("heapsort ignored: heap is empty");
            return;
        }

        if !self.context.state.accepts_commands() {
            log::debug!("heapsort ignored while {}", self.context.state.label());
            return;
        }

        self.store.set_heap_size(self.store.len());
        self.context = OperationContext {
            state: AppState::SortExtract,
            is_max_heap: true,
            ..OperationContext::default()
        };

        let heap_size = self.store.heap_size();
        if self.store.is_max_heap_prefix(heap_size) {
            log::info!("heapsort of {heap_size} values");
            self.set_status("Starting Heapsort...");
            return;
        }

        // Bottom-up build; a single node is trivially a max-heap.
        let first_parent = heap_size / 2 - 1;
        self.context.state = AppState::SortHeapifyCheck;
        self.context.current_index = Some(first_parent);
        self.context.build_cursor = Some(first_parent);
        log::info!("heapsort of {heap_size} values; building max-heap first");
        self.set_status("Building max-heap...");
    }

    pub fn reset(&mut self) {
        self.store.clear();
        self.context = OperationContext::default();
        log::info!("reset");
        self.set_status("Ready");
    }

    pub fn tick(&mut self) {
        if self.context.swap_in_flight {
            self.animate_pending_swap();
            return;
        }

        match self.context.state {
            AppState::Idle | AppState::SortCompleted => {}
            AppState::InsertCheck => self.insert_check(),
            AppState::SortExtract => self.sort_extract(),
            AppState::SortShrink => self.sort_shrink(),
            AppState::SortHeapifyCheck => self.sort_heapify_check(),
            AppState::InsertSwap | AppState::SortHeapifySwap => {
                // Only reachable when the swap could not be armed.
                if let Some(next) = self.context.state.settle_transition() {
                    self.transition(next);
                }
            }
        }
    }

    fn insert_check(&mut self) {
        let Some(current) = self.context.current_index else {
            self.enter_idle("Insertion Complete.");
            return;
        };

        let Some(parent) = parent_index(current) else {
            self.enter_idle("Insertion Complete.");
            return;
        };

        let (Some(value), Some(parent_value)) =
            (self.store.value(current), self.store.value(parent))
        else {
            self.enter_idle("Insertion Complete.");
            return;
        };

        let swap_needed = if self.context.is_max_heap {
            value > parent_value
        } else {
            value < parent_value
        };

        if swap_needed {
            self.context.compare_index = Some(parent);
            self.prepare_swap(current, parent);
            self.transition(AppState::InsertSwap);
            self.set_status("Swapping with parent...");
        } else {
            self.enter_idle("Insertion Complete.");
        }
    }

    fn sort_extract(&mut self) {
        let heap_size = self.store.heap_size();
        if heap_size <= 1 {
            self.transition(AppState::SortCompleted);
            self.set_status("Sort Complete.");
            log::info!("heapsort complete: {:?}", self.values());
            return;
        }

        let last = heap_size - 1;
        self.context.current_index = Some(0);
        self.context.compare_index = Some(last);
        self.prepare_swap(0, last);
        self.set_status("Extracting Root...");
    }

    fn sort_shrink(&mut self) {
        let heap_size = self.store.heap_size().saturating_sub(1);
        self.store.set_heap_size(heap_size);
        self.context.current_index = Some(0);
        self.transition(AppState::SortHeapifyCheck);
    }

    fn sort_heapify_check(&mut self) {
        let heap_size = self.store.heap_size();
        let Some(current) = self.context.current_index.filter(|&index| index < heap_size) else {
            self.transition(AppState::SortExtract);
            return;
        };

        let (left, right) = child_indices(current);
        let mut largest = current;
        for child in [left, right] {
            if child >= heap_size {
                continue;
            }
            if self.store.value(child) > self.store.value(largest) {
                largest = child;
            }
        }

        if largest != current {
            self.context.compare_index = Some(largest);
            self.prepare_swap(current, largest);
            self.transition(AppState::SortHeapifySwap);
            if self.context.build_cursor.is_none() {
                self.set_status("Heapifying Down...");
            }
            return;
        }

        match self.context.build_cursor {
            Some(0) => {
                self.context.build_cursor = None;
                self.transition(AppState::SortExtract);
                self.set_status("Starting Heapsort...");
            }
            Some(cursor) => {
                let next = cursor - 1;
                self.context.build_cursor = Some(next);
                self.context.current_index = Some(next);
                self.context.compare_index = None;
            }
            None => self.transition(AppState::SortExtract),
        }
    }

    /// Points both slots at each other's anchor and arms the swap animation.
    fn prepare_swap(&mut self, i: usize, j: usize) {
        let anchor_i = position_for_index(i, self.surface);
        let anchor_j = position_for_index(j, self.surface);

        let Some((node_i, node_j)) = self.store.pair_mut(i, j) else {
            return;
        };
        node_i.target = anchor_j;
        node_j.target = anchor_i;

        self.context.animation_progress = 0;
        self.context.swap_in_flight = true;
    }

    /// Shared by every swap-bearing state; the settle transition comes from
    /// the state the swap was prepared in.
    fn animate_pending_swap(&mut self) {
        let (Some(current), Some(compare)) =
            (self.context.current_index, self.context.compare_index)
        else {
            self.context.swap_in_flight = false;
            return;
        };

        let Some((node_a, node_b)) = self.store.pair_mut(current, compare) else {
            self.context.swap_in_flight = false;
            return;
        };

        self.context.animation_progress += ANIMATION_STEP_INCREMENT;
        advance(node_a);
        advance(node_b);
        if !(arrived(node_a) && arrived(node_b)) {
            return;
        }
        settle(node_a);
        settle(node_b);

        // Payloads first, then the tracking indices follow the moved values.
        self.store.swap(current, compare);
        self.context.current_index = Some(compare);
        self.context.compare_index = Some(current);
        self.context.swap_in_flight = false;

        log::trace!(
            "swap {current} <-> {compare} settled after {} progress units",
            self.context.animation_progress
        );

        if let Some(next) = self.context.state.settle_transition() {
            self.transition(next);
        }
    }

    fn enter_idle(&mut self, status: &str) {
        self.transition(AppState::Idle);
        self.store.relayout(self.surface);
        self.set_status(status);
    }

    fn transition(&mut self, next: AppState) {
        log::trace!("{} -> {}", self.context.state.label(), next.label());
        self.context.state = next;
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};
    use proptest::prelude::*;

    use super::*;

    const TICK_LIMIT: usize = 100_000;

    fn surface() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(1024.0, 600.0))
    }

    fn visualizer() -> HeapVisualizer {
        HeapVisualizer::new(surface())
    }

    fn run_until_settled(visualizer: &mut HeapVisualizer) -> Vec<AppState> {
        let mut visited = vec![visualizer.state()];
        for _ in 0..TICK_LIMIT {
            if !visualizer.is_busy() {
                return visited;
            }
            visualizer.tick();
            if visited.last() != Some(&visualizer.state()) {
                visited.push(visualizer.state());
            }
        }
        panic!("operation did not settle within {TICK_LIMIT} ticks");
    }

    fn insert_all(visualizer: &mut HeapVisualizer, values: &[i32], as_max_heap: bool) {
        for &value in values {
            visualizer.insert(value, as_max_heap);
            run_until_settled(visualizer);
        }
    }

    fn satisfies_heap_property(values: &[i32], as_max_heap: bool) -> bool {
        (1..values.len()).all(|index| {
            let parent = values[(index - 1) / 2];
            if as_max_heap {
                parent >= values[index]
            } else {
                parent <= values[index]
            }
        })
    }

    #[test]
    fn starts_idle_and_empty() {
        let visualizer = visualizer();
        assert_eq!(visualizer.state(), AppState::Idle);
        assert_eq!(visualizer.status_text(), "Ready");
        assert!(visualizer.is_empty());
        assert_eq!(visualizer.current_index(), None);
        assert_eq!(visualizer.compare_index(), None);
    }

    #[test]
    fn insert_sifts_new_maximum_to_root() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[5, 3, 8], true);
        assert_eq!(visualizer.values(), vec![8, 3, 5]);
        assert_eq!(visualizer.state(), AppState::Idle);
        assert_eq!(visualizer.status_text(), "Insertion Complete.");

        visualizer.insert(1, true);
        assert_eq!(visualizer.status_text(), "Inserted 1. Analyzing...");
        visualizer.tick();
        assert_eq!(visualizer.state(), AppState::Idle);
        assert_eq!(visualizer.values(), vec![8, 3, 5, 1]);
        assert_eq!(visualizer.heap_size(), 4);
    }

    #[test]
    fn insert_walks_through_check_and_swap_states() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[5], true);

        visualizer.insert(8, true);
        assert_eq!(visualizer.state(), AppState::InsertCheck);
        visualizer.tick();
        assert_eq!(visualizer.state(), AppState::InsertSwap);
        assert_eq!(visualizer.status_text(), "Swapping with parent...");
        assert_eq!(visualizer.current_index(), Some(1));
        assert_eq!(visualizer.compare_index(), Some(0));

        let visited = run_until_settled(&mut visualizer);
        assert_eq!(
            visited,
            vec![
                AppState::InsertSwap,
                AppState::InsertCheck,
                AppState::Idle
            ]
        );
        assert_eq!(visualizer.values(), vec![8, 5]);
    }

    #[test]
    fn swap_targets_cross_anchors() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[1], true);
        visualizer.insert(2, true);
        visualizer.tick();

        let surface = surface();
        let nodes = visualizer.store().nodes();
        assert_eq!(nodes[1].target, position_for_index(0, surface));
        assert_eq!(nodes[0].target, position_for_index(1, surface));
        assert_eq!(visualizer.animation_progress(), 0);

        visualizer.tick();
        assert_eq!(visualizer.animation_progress(), ANIMATION_STEP_INCREMENT);
    }

    #[test]
    fn tracking_index_follows_moved_value() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[10, 5, 4, 1], true);
        visualizer.insert(20, true);
        visualizer.tick();
        while visualizer.state() == AppState::InsertSwap {
            visualizer.tick();
        }

        assert_eq!(visualizer.state(), AppState::InsertCheck);
        let current = visualizer.current_index().expect("tracking index");
        assert_eq!(current, 1);
        assert_eq!(visualizer.store().value(current), Some(20));
    }

    #[test]
    fn min_heap_inserts_keep_smallest_at_root() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[7, 9, 2, 8, 1], false);
        let values = visualizer.values();
        assert_eq!(values[0], 1);
        assert!(satisfies_heap_property(&values, false));
    }

    #[test]
    fn heapsort_of_max_heap_visits_expected_states() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[8, 5, 3], true);
        assert_eq!(visualizer.values(), vec![8, 5, 3]);

        visualizer.start_sort();
        assert_eq!(visualizer.state(), AppState::SortExtract);
        assert_eq!(visualizer.status_text(), "Starting Heapsort...");

        visualizer.tick();
        assert_eq!(visualizer.state(), AppState::SortExtract);
        assert_eq!(visualizer.status_text(), "Extracting Root...");

        let mut visited = vec![AppState::SortExtract];
        let mut saw_heapify_status = false;
        for _ in 0..TICK_LIMIT {
            if !visualizer.is_busy() {
                break;
            }
            let before = visualizer.state();
            visualizer.tick();
            let after = visualizer.state();
            if after != before {
                visited.push(after);
            }
            if before != AppState::SortHeapifySwap && after == AppState::SortHeapifySwap {
                assert_eq!(visualizer.status_text(), "Heapifying Down...");
                saw_heapify_status = true;
            }
        }
        assert!(saw_heapify_status);
        assert_eq!(
            &visited[..4],
            &[
                AppState::SortExtract,
                AppState::SortShrink,
                AppState::SortHeapifyCheck,
                AppState::SortHeapifySwap,
            ]
        );
        assert_eq!(visited.last(), Some(&AppState::SortCompleted));
        assert_eq!(visualizer.values(), vec![3, 5, 8]);
        assert_eq!(visualizer.heap_size(), 1);
        assert_eq!(visualizer.status_text(), "Sort Complete.");
    }

    #[test]
    fn heap_size_shrinks_by_one_per_shrink_step() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[9, 4, 7, 1, 3, 6, 2], true);
        visualizer.start_sort();

        let mut sizes = vec![visualizer.heap_size()];
        for _ in 0..TICK_LIMIT {
            let before = visualizer.state();
            visualizer.tick();
            if before == AppState::SortShrink {
                sizes.push(visualizer.heap_size());
            }
            if visualizer.state() == AppState::SortCompleted {
                break;
            }
        }

        assert_eq!(sizes, vec![7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(visualizer.values(), vec![1, 2, 3, 4, 6, 7, 9]);
    }

    #[test]
    fn heapsort_of_min_heap_builds_max_heap_first() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[1, 5, 3], false);
        assert_eq!(visualizer.values(), vec![1, 5, 3]);

        visualizer.start_sort();
        assert_eq!(visualizer.state(), AppState::SortHeapifyCheck);
        assert_eq!(visualizer.status_text(), "Building max-heap...");
        assert!(visualizer.is_max_heap());

        run_until_settled(&mut visualizer);
        assert_eq!(visualizer.values(), vec![1, 3, 5]);
    }

    #[test]
    fn sorted_nodes_are_not_part_of_live_heap() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[4, 2, 6], true);
        visualizer.start_sort();
        while visualizer.state() != AppState::SortHeapifyCheck {
            visualizer.tick();
        }
        assert_eq!(visualizer.heap_size(), 2);
        assert_eq!(visualizer.store().value(2), Some(6));
    }

    #[test]
    fn insert_after_sort_reabsorbs_sorted_values() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[3, 1, 2], true);
        visualizer.start_sort();
        run_until_settled(&mut visualizer);
        assert_eq!(visualizer.state(), AppState::SortCompleted);
        assert_eq!(visualizer.heap_size(), 1);

        visualizer.insert(0, false);
        assert_eq!(visualizer.heap_size(), 4);
        run_until_settled(&mut visualizer);
        assert_eq!(visualizer.state(), AppState::Idle);
        assert_eq!(visualizer.values(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn commands_are_ignored_mid_operation() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[1], true);
        visualizer.insert(9, true);
        visualizer.tick();
        assert_eq!(visualizer.state(), AppState::InsertSwap);

        let values = visualizer.values();
        let nodes = visualizer.store().nodes().to_vec();
        visualizer.start_sort();
        visualizer.insert(4, true);

        assert_eq!(visualizer.state(), AppState::InsertSwap);
        assert_eq!(visualizer.values(), values);
        assert_eq!(visualizer.store().nodes(), nodes.as_slice());
        assert_eq!(visualizer.heap_size(), 2);
    }

    #[test]
    fn sort_on_empty_heap_is_ignored() {
        let mut visualizer = visualizer();
        visualizer.start_sort();
        assert_eq!(visualizer.state(), AppState::Idle);
        assert_eq!(visualizer.status_text(), "Ready");
    }

    #[test]
    fn single_value_sort_completes_immediately() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[42], true);
        visualizer.start_sort();
        visualizer.tick();
        assert_eq!(visualizer.state(), AppState::SortCompleted);
        assert_eq!(visualizer.values(), vec![42]);
    }

    #[test]
    fn reset_clears_from_any_state() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[6, 2, 9, 4], true);
        visualizer.start_sort();
        for _ in 0..7 {
            visualizer.tick();
        }
        assert!(visualizer.is_busy());

        visualizer.reset();
        assert!(visualizer.is_empty());
        assert_eq!(visualizer.state(), AppState::Idle);
        assert_eq!(visualizer.heap_size(), 0);
        assert_eq!(visualizer.status_text(), "Ready");

        visualizer.reset();
        assert!(visualizer.is_empty());
        assert_eq!(visualizer.state(), AppState::Idle);
    }

    #[test]
    fn resize_relayouts_only_when_idle() {
        let mut visualizer = visualizer();
        insert_all(&mut visualizer, &[1, 2], true);

        let wider = Rect::from_min_size(pos2(0.0, 0.0), vec2(1600.0, 600.0));
        visualizer.on_resize(wider);
        assert_eq!(
            visualizer.store().nodes()[0].position,
            position_for_index(0, wider)
        );

        visualizer.insert(3, true);
        visualizer.tick();
        assert_eq!(visualizer.state(), AppState::InsertSwap);
        let narrow = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 600.0));
        visualizer.on_resize(narrow);
        assert_eq!(
            visualizer.store().nodes()[1].position,
            position_for_index(1, wider)
        );

        run_until_settled(&mut visualizer);
        for (index, node) in visualizer.store().nodes().iter().enumerate() {
            assert_eq!(node.position, position_for_index(index, narrow));
        }
    }

    #[test]
    fn insert_after_completed_sort_uses_current_surface() {
        let wide = Rect::from_min_size(pos2(0.0, 0.0), vec2(1600.0, 600.0));
        let mut visualizer = HeapVisualizer::new(wide);
        insert_all(&mut visualizer, &[3, 1, 2], true);
        visualizer.start_sort();
        run_until_settled(&mut visualizer);
        assert_eq!(visualizer.state(), AppState::SortCompleted);

        let narrow = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 600.0));
        visualizer.on_resize(narrow);
        visualizer.insert(0, false);
        assert_eq!(visualizer.state(), AppState::InsertCheck);

        for (index, node) in visualizer.store().nodes().iter().enumerate() {
            assert_eq!(node.position, position_for_index(index, narrow));
            assert_eq!(node.target, position_for_index(index, narrow));
        }
    }

    proptest! {
        #[test]
        fn inserts_preserve_heap_property(
            values in proptest::collection::vec(-500i32..500, 1..24),
            as_max_heap in any::<bool>(),
        ) {
            let mut visualizer = visualizer();
            insert_all(&mut visualizer, &values, as_max_heap);
            prop_assert_eq!(visualizer.state(), AppState::Idle);
            prop_assert_eq!(visualizer.heap_size(), values.len());
            prop_assert!(satisfies_heap_property(&visualizer.values(), as_max_heap));
        }

        #[test]
        fn heapsort_yields_ascending_order(
            values in proptest::collection::vec(-500i32..500, 1..20),
            as_max_heap in any::<bool>(),
        ) {
            let mut visualizer = visualizer();
            insert_all(&mut visualizer, &values, as_max_heap);
            visualizer.start_sort();
            run_until_settled(&mut visualizer);

            let mut expected = values.clone();
            expected.sort_unstable();
            prop_assert_eq!(visualizer.state(), AppState::SortCompleted);
            prop_assert_eq!(visualizer.values(), expected);
            prop_assert_eq!(visualizer.heap_size(), 1);
        }

        #[test]
        fn second_sort_after_completion_stays_sorted(
            values in proptest::collection::vec(-100i32..100, 1..12),
        ) {
            let mut visualizer = visualizer();
            insert_all(&mut visualizer, &values, true);
            visualizer.start_sort();
            run_until_settled(&mut visualizer);
            visualizer.start_sort();
            run_until_settled(&mut visualizer);

            let mut expected = values.clone();
            expected.sort_unstable();
            prop_assert_eq!(visualizer.values(), expected);
        }
    }
}
