use super::store::HeapNode;

/// Fraction of the remaining distance covered per tick.
pub const EASE_FACTOR: f32 = 0.2;
pub const SNAP_DISTANCE: f32 = 2.0;
pub const ARRIVAL_TOLERANCE: f32 = 1.0;

fn move_towards(current: &mut f32, target: f32) {
    let diff = target - *current;
    if diff.abs() < SNAP_DISTANCE {
        *current = target;
    } else {
        *current += diff * EASE_FACTOR;
    }
}

/// One ease-out step of `node` towards its target, each axis independently.
pub fn advance(node: &mut HeapNode) {
    move_towards(&mut node.position.x, node.target.x);
    move_towards(&mut node.position.y, node.target.y);
}

pub fn arrived(node: &HeapNode) -> bool {
    (node.position.x - node.target.x).abs() < ARRIVAL_TOLERANCE
        && (node.position.y - node.target.y).abs() < ARRIVAL_TOLERANCE
}

/// Snaps a node that is within tolerance exactly onto its target.
pub fn settle(node: &mut HeapNode) {
    node.position = node.target;
}
