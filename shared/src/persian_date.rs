//! Solar Hijri (Jalali) calendar dates, written the way `fa-IR` locales show
//! them: `۱۷ مهر ۱۴۰۳`.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, Offset, SecondsFormat, Utc};

const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// A day in the Solar Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    /// Solar Hijri year, e.g. 1403.
    pub year: i32,
    /// 1-based.
    pub month: u32,
    /// 1-based.
    pub day: u32,
}

impl JalaliDate {
    /// Converts a proleptic Gregorian date.
    pub fn from_gregorian(gy: i32, gm: u32, gd: u32) -> Self {
        const CUMULATIVE_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

        let gy = i64::from(gy);
        let gy2 = if gm > 2 { gy + 1 } else { gy };
        let month_index = (gm.clamp(1, 12) - 1) as usize;
        let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100
            + (gy2 + 399) / 400
            + i64::from(gd)
            + CUMULATIVE_DAYS[month_index];

        let mut year = -1595 + 33 * (days / 12_053);
        days %= 12_053;
        year += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            year += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        JalaliDate {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Calendar day of `at` in its own offset.
    pub fn from_datetime(at: &DateTime<FixedOffset>) -> Self {
        Self::from_gregorian(at.year(), at.month(), at.day())
    }

    /// Persian month name; out-of-range months clamp.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// Short numeric form, year first and unpadded: `۱۴۰۳/۷/۱۷`.
    pub fn numeric(&self) -> String {
        to_persian_digits(&format!("{}/{}/{}", self.year, self.month, self.day))
    }
}

impl fmt::Display for JalaliDate {
    /// Long form with Persian digits, day first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            to_persian_digits(&self.day.to_string()),
            self.month_name(),
            to_persian_digits(&self.year.to_string())
        )
    }
}

/// Replaces ASCII digits, leaves everything else alone.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Builds a local timestamp from epoch milliseconds and the browser's
/// offset east of UTC, in minutes. Out-of-range inputs clamp to the epoch
/// in UTC rather than failing.
pub fn local_datetime(epoch_ms: i64, utc_offset_minutes: i32) -> DateTime<FixedOffset> {
    let offset =
        FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix());
    DateTime::from_timestamp_millis(epoch_ms)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&offset)
}

/// ISO-8601 in UTC with millisecond precision, like `Date.toISOString()`.
pub fn iso_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_nowruz() {
        assert_eq!(
            JalaliDate::from_gregorian(2024, 3, 20),
            JalaliDate { year: 1403, month: 1, day: 1 }
        );
        assert_eq!(
            JalaliDate::from_gregorian(2024, 3, 19),
            JalaliDate { year: 1402, month: 12, day: 29 }
        );
    }

    #[test]
    fn formats_long_date_with_persian_digits() {
        let date = JalaliDate::from_gregorian(2024, 10, 8);
        assert_eq!(date.to_string(), "۱۷ مهر ۱۴۰۳");
    }

    #[test]
    fn formats_numeric_date_year_first() {
        assert_eq!(JalaliDate::from_gregorian(2024, 10, 8).numeric(), "۱۴۰۳/۷/۱۷");
        assert_eq!(JalaliDate::from_gregorian(2024, 3, 20).numeric(), "۱۴۰۳/۱/۱");
    }

    #[test]
    fn local_offset_moves_the_calendar_day() {
        // 2024-03-19T22:00:00Z is already Nowruz in Tehran (+03:30).
        let ms = 1_710_885_600_000;
        let utc = local_datetime(ms, 0);
        let tehran = local_datetime(ms, 210);
        assert_eq!(JalaliDate::from_datetime(&utc).day, 29);
        assert_eq!(JalaliDate::from_datetime(&tehran), JalaliDate { year: 1403, month: 1, day: 1 });
        assert_eq!(iso_timestamp(&tehran), "2024-03-19T22:00:00.000Z");
    }

    #[test]
    fn digit_conversion_keeps_other_text() {
        assert_eq!(to_persian_digits("v2 of 10"), "v۲ of ۱۰");
    }
}
