//! 展示用格式化

use couchtube_provider::DurationValue;

/// Video length as `m:ss` or `h:mm:ss`.
///
/// Pre-formatted labels (e.g. `LIVE`) are returned as is. Missing, zero,
/// negative or non-finite durations render as an empty string. Fractional
/// seconds are floored.
pub fn format_time(duration: Option<&DurationValue>) -> String {
    let seconds = match duration {
        Some(DurationValue::Label(label)) => return label.clone(),
        Some(DurationValue::Seconds(seconds)) => *seconds,
        None => return String::new(),
    };
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::new();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// View count with `,` thousands separators; `0` when unknown.
pub fn format_views(views: Option<i64>) -> String {
    let Some(views) = views else {
        return "0".to_string();
    };
    let digits = views.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if views < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(v: f64) -> Option<DurationValue> {
        Some(DurationValue::Seconds(v))
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_time(secs(125.0).as_ref()), "2:05");
        assert_eq!(format_time(secs(59.0).as_ref()), "0:59");
    }

    #[test]
    fn hours_pad_minutes_and_seconds() {
        assert_eq!(format_time(secs(3725.0).as_ref()), "1:02:05");
        assert_eq!(format_time(secs(36000.0).as_ref()), "10:00:00");
    }

    #[test]
    fn labels_pass_through() {
        let live = Some(DurationValue::Label("LIVE".to_string()));
        assert_eq!(format_time(live.as_ref()), "LIVE");
    }

    #[test]
    fn zero_missing_and_negative_are_empty() {
        assert_eq!(format_time(secs(0.0).as_ref()), "");
        assert_eq!(format_time(None), "");
        assert_eq!(format_time(secs(-1.0).as_ref()), "");
        assert_eq!(format_time(secs(f64::NAN).as_ref()), "");
    }

    #[test]
    fn fractional_seconds_are_floored() {
        assert_eq!(format_time(secs(125.9).as_ref()), "2:05");
    }

    #[test]
    fn views_get_thousands_separators() {
        assert_eq!(format_views(Some(1_234_567)), "1,234,567");
        assert_eq!(format_views(Some(999)), "999");
        assert_eq!(format_views(Some(1000)), "1,000");
        assert_eq!(format_views(Some(-1200)), "-1,200");
        assert_eq!(format_views(Some(0)), "0");
        assert_eq!(format_views(None), "0");
    }
}
