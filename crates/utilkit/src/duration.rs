//! Compact, human-readable duration formatting
//!
//! Output follows the familiar `1h2m3.5s` style and extends it with day and
//! year units for long durations (`1y12d3h0m0s`). A year is 365 days.

use std::fmt::Write as _;
use std::time::Duration;

const MICROSECOND: u128 = 1_000;
const MILLISECOND: u128 = 1_000_000;
const SECOND: u128 = 1_000_000_000;
const DAY: u128 = 24 * 60 * 60 * SECOND;
const YEAR: u128 = 365 * DAY;

/// Format `duration` for humans.
///
/// The value is first rounded (halves away from zero) to the nearest second
/// when above one second, millisecond when above one millisecond, or
/// microsecond when above one microsecond. Durations under a day then render
/// as `h`/`m`/`s` with fractional sub-second units (`1.5µs`, `300ms`,
/// `1m30s`). Longer ones get a `{years}y` prefix when at least a year, then
/// `{days}d` and the remainder.
///
/// # Examples
///
/// ```
/// use utilkit::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(1_499)), "1s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
/// assert_eq!(format_duration(Duration::from_secs(26 * 3600)), "1d2h0m0s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let mut nanos = duration.as_nanos();
    nanos = if nanos > SECOND {
        round(nanos, SECOND)
    } else if nanos > MILLISECOND {
        round(nanos, MILLISECOND)
    } else if nanos > MICROSECOND {
        round(nanos, MICROSECOND)
    } else {
        nanos
    };

    if nanos < DAY {
        return clock(nanos);
    }

    let mut out = String::new();
    if nanos >= YEAR {
        let _ = write!(out, "{}y", nanos / YEAR);
        nanos %= YEAR;
    }
    let _ = write!(out, "{}d{}", nanos / DAY, clock(nanos % DAY));
    out
}

fn round(nanos: u128, multiple: u128) -> u128 {
    let rest = nanos % multiple;
    if rest + rest < multiple {
        nanos - rest
    } else {
        nanos - rest + multiple
    }
}

/// Renders `nanos` (under a day) in `h`/`m`/`s` units.
fn clock(nanos: u128) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < MICROSECOND {
        return format!("{nanos}ns");
    }
    if nanos < MILLISECOND {
        return format!("{}µs", decimal(nanos, 3));
    }
    if nanos < SECOND {
        return format!("{}ms", decimal(nanos, 6));
    }

    let total_secs = nanos / SECOND;
    let seconds = decimal(nanos % (60 * SECOND), 9);
    let minutes = total_secs / 60;
    let hours = minutes / 60;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if minutes > 0 {
        let _ = write!(out, "{}m", minutes % 60);
    }
    let _ = write!(out, "{seconds}s");
    out
}

/// `value / 10^scale` with trailing fractional zeros trimmed.
fn decimal(value: u128, scale: u32) -> String {
    let unit = 10u128.pow(scale);
    let (whole, fraction) = (value / unit, value % unit);
    if fraction == 0 {
        return whole.to_string();
    }

    let digits = format!("{fraction:0width$}", width = scale as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Duration::ZERO, "0s")]
    #[case(Duration::from_nanos(1), "1ns")]
    #[case(Duration::from_nanos(999), "999ns")]
    #[case(Duration::from_nanos(1_000), "1µs")]
    #[case(Duration::from_nanos(1_500), "2µs")]
    #[case(Duration::from_micros(1_500), "2ms")]
    #[case(Duration::from_millis(300), "300ms")]
    #[case(Duration::from_millis(1_000), "1s")]
    #[case(Duration::from_millis(1_499), "1s")]
    #[case(Duration::from_millis(1_500), "2s")]
    #[case(Duration::from_secs(90), "1m30s")]
    #[case(Duration::from_secs(3_600), "1h0m0s")]
    #[case(Duration::from_secs(2 * 3_600 + 61), "2h1m1s")]
    #[case(Duration::from_secs(86_399), "23h59m59s")]
    fn test_under_a_day(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format_duration(duration), expected);
    }

    #[rstest]
    #[case(Duration::from_secs(86_400), "1d0s")]
    #[case(Duration::from_secs(90_061), "1d1h1m1s")]
    #[case(Duration::from_secs(26 * 3_600), "1d2h0m0s")]
    #[case(Duration::from_secs(365 * 86_400), "1y0d0s")]
    #[case(Duration::from_secs(2 * 365 * 86_400 + 3 * 86_400 + 30), "2y3d30s")]
    #[case(Duration::from_millis(86_399_600), "1d0s")]
    fn test_days_and_years(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format_duration(duration), expected);
    }

    #[test]
    fn test_decimal_trims_zeros() {
        assert_eq!(decimal(1_500, 3), "1.5");
        assert_eq!(decimal(1_050, 3), "1.05");
        assert_eq!(decimal(2_000, 3), "2");
        assert_eq!(decimal(1_234_567, 6), "1.234567");
    }

    #[test]
    fn test_sub_second_fractions_before_rounding_threshold() {
        // 1µs exactly is not above the threshold, so nothing is rounded
        assert_eq!(format_duration(Duration::from_nanos(1_000)), "1µs");
        assert_eq!(clock(1_500), "1.5µs");
        assert_eq!(clock(2_500_000), "2.5ms");
        assert_eq!(clock(61 * SECOND + 250 * MILLISECOND), "1m1.25s");
    }
}
