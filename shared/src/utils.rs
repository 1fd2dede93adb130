//! # Shared Display Helpers
//!
//! Formatting functions used by the client screens: media durations, watch
//! time totals, and resolution labels.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_duration;
//!
//! assert_eq!(format_duration(754.0), "12:34");
//! assert_eq!(format_duration(3754.0), "1:02:34");
//! ```

/// Format a duration in seconds as `m:ss`, or `h:mm:ss` once it reaches an
/// hour. Fractional seconds are truncated; negative input clamps to `0:00`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let secs = total % 60;
    let mins = (total / 60) % 60;
    let hours = total / 3600;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

/// Format a cumulative watch time in seconds as whole minutes (`"42 min"`).
pub fn format_play_time(seconds: f64) -> String {
    format!("{} min", (seconds.max(0.0) / 60.0) as u64)
}

/// Human label for a video resolution, with the raw dimensions appended when
/// both are known.
pub fn resolution_label(width: Option<i64>, height: Option<i64>) -> String {
    let w = width.unwrap_or(0);
    let h = height.unwrap_or(0);
    let label = match (w, h) {
        (0, _) | (_, 0) => return "Unknown".to_string(),
        _ if w >= 3840 || h >= 2160 => "4K",
        _ if w >= 2560 || h >= 1440 => "QHD",
        _ if w >= 1920 || h >= 1080 => "Full HD",
        _ if w >= 1280 || h >= 720 => "HD",
        _ => "SD",
    };
    format!("{} ({}\u{00d7}{})", label, w, h)
}

/// Truncate a title for card display, appending an ellipsis.
///
/// Operates on character boundaries, so multi-byte titles are safe.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let prefix: String = title.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}\u{2026}", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(59.9), "0:59");
        assert_eq!(format_duration(754.0), "12:34");
        assert_eq!(format_duration(3754.0), "1:02:34");
    }

    #[test]
    fn test_format_duration_negative_clamps() {
        assert_eq!(format_duration(-5.0), "0:00");
    }

    #[test]
    fn test_format_play_time() {
        assert_eq!(format_play_time(0.0), "0 min");
        assert_eq!(format_play_time(59.0), "0 min");
        assert_eq!(format_play_time(3600.0), "60 min");
    }

    #[test]
    fn test_resolution_label() {
        assert_eq!(resolution_label(Some(3840), Some(2160)), "4K (3840\u{00d7}2160)");
        assert_eq!(resolution_label(Some(1920), Some(1080)), "Full HD (1920\u{00d7}1080)");
        assert_eq!(resolution_label(Some(640), Some(480)), "SD (640\u{00d7}480)");
        assert_eq!(resolution_label(None, Some(1080)), "Unknown");
        assert_eq!(resolution_label(Some(1920), None), "Unknown");
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("short", 10), "short");
        assert_eq!(truncate_title("a very long scene title", 10), "a very lo\u{2026}");
    }
}
