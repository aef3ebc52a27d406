//! Playback time labels

/// Format whole seconds as `MM:SS`
///
/// Fractions are dropped, minutes are not wrapped into hours, and negative
/// or non-finite input shows as `00:00`.
///
/// ```
/// use playbar_ui::format_time;
///
/// assert_eq!(format_time(125.0), "02:05");
/// assert_eq!(format_time(3599.9), "59:59");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `"current / duration"` label shown under the title
pub fn time_label(current_time: f64, duration: f64) -> String {
    format!("{} / {}", format_time(current_time), format_time(duration))
}
