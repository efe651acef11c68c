use super::*;

#[test]
fn history_timestamp_formats_iso_with_fraction() {
    assert_eq!(format_history_timestamp("2024-05-01T14:03:22.123456"), "May 1, 14:03");
}

#[test]
fn history_timestamp_accepts_space_separator_and_offset() {
    assert_eq!(format_history_timestamp("2023-12-24 09:30:00+00:00"), "Dec 24, 09:30");
}

#[test]
fn history_timestamp_falls_back_to_raw_text() {
    assert_eq!(format_history_timestamp("yesterday"), "yesterday");
    assert_eq!(format_history_timestamp("2024-13-01T10:00:00"), "2024-13-01T10:00:00");
    assert_eq!(format_history_timestamp(""), "");
}

#[test]
fn impossible_calendar_dates_stay_raw() {
    assert_eq!(format_history_timestamp("2024-02-31T10:00:00"), "2024-02-31T10:00:00");
    assert_eq!(format_history_timestamp("2023-02-29T10:00:00"), "2023-02-29T10:00:00");
    assert_eq!(format_detail_timestamp("2024-04-31 08:00:00"), "2024-04-31 08:00:00");
}

#[test]
fn leap_day_is_accepted() {
    assert_eq!(format_history_timestamp("2024-02-29T10:00:00"), "Feb 29, 10:00");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn offset_timestamps_are_converted_before_display() {
    assert_eq!(format_history_timestamp("2024-05-01T23:30:00-05:00"), "May 2, 04:30");
    assert_eq!(format_detail_timestamp("2024-01-01T01:15:00+02:00"), "Dec 31, 2023 23:15");
    assert_eq!(format_history_timestamp("2024-05-01T14:03:00Z"), "May 1, 14:03");
}

#[test]
fn minute_precision_timestamp_is_accepted() {
    assert_eq!(format_history_timestamp("2024-05-01T14:03"), "May 1, 14:03");
}

#[test]
fn detail_timestamp_includes_year() {
    assert_eq!(format_detail_timestamp("2024-01-09T07:05:00"), "Jan 9, 2024 07:05");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn clock_formats_utc_hours_and_minutes() {
    // 1970-01-01T13:07:00Z
    let ms = f64::from((13 * 3600 + 7 * 60) * 1000);
    assert_eq!(format_clock(ms), "13:07");
}

#[test]
fn now_is_after_epoch() {
    assert!(now_ms() > 0.0);
}
