use std::env;

use terminal_size::{Width, terminal_size};

pub const FALLBACK_WIDTH: usize = 80;

/// Width of the controlling terminal, else `$COLUMNS`, else 80.
pub fn width() -> usize {
    if let Some((Width(columns), _)) = terminal_size() {
        if columns > 0 {
            return usize::from(columns);
        }
    }
    columns_from_env(env::var("COLUMNS").ok().as_deref())
}

fn columns_from_env(value: Option<&str>) -> usize {
    value
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|columns| *columns > 0)
        .unwrap_or(FALLBACK_WIDTH)
}
