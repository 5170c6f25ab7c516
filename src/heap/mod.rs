mod animation;
mod machine;
mod snapshot;
mod store;

pub use machine::{AppState, HeapVisualizer};
pub use snapshot::{ColorClass, RenderSnapshot};
