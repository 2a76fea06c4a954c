//! Time label formatting

/// Format a whole-second duration for display
///
/// Renders `mm:ss`, or `hh:mm:ss` from one hour up. Zero renders as
/// `"00:00"`.
pub fn format_duration(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
