/// Returned whenever a duration cannot be formatted.
pub const UNKNOWN_DURATION_TEXT: &str = "00:00";

/// Maps a pointer x-offset on the track bar to a playback position.
///
/// The offset is clamped to `[0, width_pixels]` and the result truncated to
/// whole milliseconds. Returns 0 when the bar has no usable width.
pub fn pointer_to_position(local_x: f32, width_pixels: f32, duration_millis: f64) -> u64 {
    if !(width_pixels > 0.0) || !duration_millis.is_finite() {
        return 0;
    }
    let ratio = clamp_offset(local_x, width_pixels) as f64 / width_pixels as f64;
    (ratio * duration_millis.max(0.0)).trunc() as u64
}

/// Maps a pointer x-offset on the volume slider to a volume in `[0, 1]`.
pub fn pointer_to_volume(local_x: f32, width_pixels: f32) -> f64 {
    if !(width_pixels > 0.0) {
        return 0.0;
    }
    clamp_offset(local_x, width_pixels) as f64 / width_pixels as f64
}

fn clamp_offset(local_x: f32, width_pixels: f32) -> f32 {
    if local_x.is_nan() {
        0.0
    } else {
        local_x.clamp(0.0, width_pixels)
    }
}

/// Formats milliseconds as `M:SS`.
///
/// Minutes wrap at 60, so an hour-long position formats like a short one:
/// 3,700,000 ms is `"1:40"`. Negative input formats as zero and non-finite
/// input as `"00:00"`.
pub fn format_duration(millis: f64) -> String {
    if !millis.is_finite() {
        return UNKNOWN_DURATION_TEXT.to_string();
    }
    let millis = millis.max(0.0);
    let seconds = (millis / 1000.0).floor() as u64 % 60;
    let minutes = (millis / 60_000.0).floor() as u64 % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Like [`format_duration`] for raw notification text.
pub fn format_duration_str(raw: &str) -> String {
    match parse_millis(raw) {
        Some(millis) => format_duration(millis),
        None => UNKNOWN_DURATION_TEXT.to_string(),
    }
}

pub fn parse_millis(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|millis| millis.is_finite())
}

/// Duration from a backend notification; unknown or non-positive becomes 1.
pub fn sanitize_duration(millis: Option<f64>) -> f64 {
    match millis {
        Some(d) if d.is_finite() && d > 0.0 => d.max(1.0),
        _ => 1.0,
    }
}

/// Position from a backend notification; unknown becomes 0.
pub fn sanitize_position(millis: Option<f64>) -> f64 {
    match millis {
        Some(p) if p.is_finite() => p.max(0.0),
        _ => 0.0,
    }
}

/// The `"pos / dur"` label text.
pub fn position_text(position_millis: f64, duration_millis: f64) -> String {
    format!(
        "{} / {}",
        format_duration(position_millis),
        format_duration(duration_millis)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_display_format(text: &str) -> bool {
        let Some((minutes, seconds)) = text.split_once(':') else {
            return false;
        };
        !minutes.is_empty()
            && minutes.chars().all(|c| c.is_ascii_digit())
            && seconds.len() == 2
            && seconds.chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_format_duration_examples() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(65_000.0), "1:05");
        assert_eq!(format_duration(180_000.0), "3:00");
        assert_eq!(format_duration(59_999.0), "0:59");
    }

    #[test]
    fn test_format_duration_wraps_minutes_at_sixty() {
        assert_eq!(format_duration(3_600_000.0), "0:00");
        assert_eq!(format_duration(3_700_000.0), "1:40");
    }

    #[test]
    fn test_format_duration_negative_is_zero() {
        assert_eq!(format_duration(-1.0), "0:00");
        assert_eq!(format_duration(-65_000.0), "0:00");
    }

    #[test]
    fn test_format_duration_non_finite() {
        assert_eq!(format_duration(f64::NAN), "00:00");
        assert_eq!(format_duration(f64::INFINITY), "00:00");
        assert_eq!(format_duration(f64::NEG_INFINITY), "00:00");
    }

    #[test]
    fn test_format_duration_is_total() {
        let inputs = [
            0.0,
            1.0,
            999.0,
            61_000.5,
            3_599_999.0,
            1e12,
            f64::MAX,
            -42.0,
            f64::NAN,
            f64::MIN_POSITIVE,
        ];
        for millis in inputs {
            let text = format_duration(millis);
            assert!(is_display_format(&text), "{millis} -> {text}");
        }
    }

    #[test]
    fn test_format_duration_str() {
        assert_eq!(format_duration_str("65000"), "1:05");
        assert_eq!(format_duration_str(" 90000.7 "), "1:30");
        assert_eq!(format_duration_str("not a number"), "00:00");
        assert_eq!(format_duration_str(""), "00:00");
        assert_eq!(format_duration_str("NaN"), "00:00");
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("1500"), Some(1500.0));
        assert_eq!(parse_millis("inf"), None);
        assert_eq!(parse_millis("abc"), None);
    }

    #[test]
    fn test_pointer_to_position_scrub_halfway() {
        assert_eq!(pointer_to_position(50.0, 100.0, 180_000.0), 90_000);
    }

    #[test]
    fn test_pointer_to_position_clamps_offset() {
        assert_eq!(pointer_to_position(-20.0, 100.0, 180_000.0), 0);
        assert_eq!(pointer_to_position(250.0, 100.0, 180_000.0), 180_000);
        assert_eq!(pointer_to_position(f32::NAN, 100.0, 180_000.0), 0);
    }

    #[test]
    fn test_pointer_to_position_truncates() {
        // 1/3 of 1000 ms
        assert_eq!(pointer_to_position(1.0, 3.0, 1000.0), 333);
    }

    #[test]
    fn test_pointer_to_position_zero_width() {
        assert_eq!(pointer_to_position(10.0, 0.0, 180_000.0), 0);
        assert_eq!(pointer_to_position(10.0, -5.0, 180_000.0), 0);
        assert_eq!(pointer_to_position(10.0, f32::NAN, 180_000.0), 0);
    }

    #[test]
    fn test_pointer_to_position_bounded_by_duration() {
        for width in [1.0_f32, 7.0, 100.0, 333.3] {
            for duration in [1.0_f64, 999.0, 180_000.0] {
                for x in [-10.0_f32, 0.0, 0.5, 3.0, 99.9, 1000.0] {
                    let position = pointer_to_position(x, width, duration) as f64;
                    assert!(position >= 0.0 && position <= duration);
                }
            }
        }
    }

    #[test]
    fn test_pointer_to_volume() {
        assert_eq!(pointer_to_volume(25.0, 100.0), 0.25);
        assert_eq!(pointer_to_volume(150.0, 100.0), 1.0);
        assert_eq!(pointer_to_volume(-1.0, 100.0), 0.0);
        assert_eq!(pointer_to_volume(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_pointer_to_volume_monotonic_and_bounded() {
        let mut last = 0.0;
        let mut x = -50.0_f32;
        while x <= 150.0 {
            let volume = pointer_to_volume(x, 100.0);
            assert!((0.0..=1.0).contains(&volume));
            assert!(volume >= last);
            last = volume;
            x += 2.5;
        }
    }

    #[test]
    fn test_sanitize_notifications() {
        assert_eq!(sanitize_duration(None), 1.0);
        assert_eq!(sanitize_duration(Some(0.0)), 1.0);
        assert_eq!(sanitize_duration(Some(-3.0)), 1.0);
        assert_eq!(sanitize_duration(Some(0.4)), 1.0);
        assert_eq!(sanitize_duration(Some(180_000.0)), 180_000.0);

        assert_eq!(sanitize_position(None), 0.0);
        assert_eq!(sanitize_position(Some(f64::NAN)), 0.0);
        assert_eq!(sanitize_position(Some(-8.0)), 0.0);
        assert_eq!(sanitize_position(Some(1234.0)), 1234.0);
    }

    #[test]
    fn test_position_text() {
        assert_eq!(position_text(90_000.0, 180_000.0), "1:30 / 3:00");
    }
}
