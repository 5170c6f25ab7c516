use anyhow::{bail, Context, Result};

pub fn parse_heap_value(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("no value entered");
    }

    trimmed
        .parse::<i32>()
        .with_context(|| format!("{trimmed:?} is not a 32-bit integer"))
}

pub fn format_fps(fps: f32) -> String {
    if fps <= f32::EPSILON {
        "FPS --".to_owned()
    } else {
        format!("FPS {fps:.0} | {:.1} ms", 1000.0 / fps)
    }
}
