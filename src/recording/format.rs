//! Clock text formatting

/// Elapsed recording time as `H:MM:SS`. Hours are not wrapped.
pub fn format_elapsed(elapsed_ms: i64) -> String {
    let total_secs = elapsed_ms.max(0) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// Remaining game time as `M:SS`, truncated to the second.
pub fn format_remaining(remaining_ms: i64) -> String {
    let remaining_ms = remaining_ms.max(0);
    let minutes = remaining_ms / 60_000;
    let seconds = (remaining_ms % 60_000) / 1000;
    format!("{}:{:02}", minutes, seconds)
}

/// Wall-clock time of day for an epoch-millisecond instant, in local time.
pub fn format_wall_clock(epoch_ms: i64) -> String {
    use chrono::{Local, TimeZone};

    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|t| t.format("%-I:%M:%S %p").to_string())
        .unwrap_or_default()
}
