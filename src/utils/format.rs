// src/utils/format.rs
use std::time::Duration;

// Cut a string to `max_chars` characters and mark the cut with "..."
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

// Duration as fractional milliseconds
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
