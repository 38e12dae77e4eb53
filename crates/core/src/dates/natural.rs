//! Natural-language date parser.
//!
//! Resolves free text relative to a reference day. Supports:
//! - `today`, `now`, `tonight`, `tomorrow`, `tmr`, `yesterday`
//! - `day after tomorrow`, `day before yesterday`
//! - `3 days ago`, `a week ago`, `in 2 weeks`, `two months from now`
//! - `next friday`, `last monday`, `this sat`, `friday`
//! - `next week`, `last month`, `next year`
//! - `2024-03-05`, `2024/3/5`
//! - day-first numeric dates: `05/03/2024`, `5.3.2024`, `5/3`
//! - `5 March 2024`, `5th of march`, `March 5th, 2024`, `mar 5`
//!
//! Numeric dates are read day-first (British ordering).

use std::sync::LazyLock;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use regex::Regex;

static RELATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+) (day|week|fortnight|month|year)s? (ago|from now|later|hence)$")
        .expect("valid regex")
});

static IN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^in (\w+) (day|week|fortnight|month|year)s?$").expect("valid regex")
});

static MODIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(next|last|previous|this|coming) (\w+)$").expect("valid regex")
});

static ISO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})$").expect("valid regex")
});

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})([/.-])(\d{1,2})(?:[/.-](\d{4}|\d{2}))?$").expect("valid regex")
});

static DAY_MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)?(?: of)? ([a-z]+)\.?(?:,? (\d{4}))?$")
        .expect("valid regex")
});

static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)\.? (\d{1,2})(?:st|nd|rd|th)?(?:,? (\d{4}))?$")
        .expect("valid regex")
});

/// Units accepted in relative expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Days,
    Weeks,
    Fortnights,
    Months,
    Years,
}

/// Parse `input` as a calendar day relative to `today`.
///
/// Returns `None` when the text is not a recognisable date.
pub fn parse_natural_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let normalized = normalize(input);
    let text = normalized.strip_prefix("on ").unwrap_or(&normalized);
    if text.is_empty() {
        return None;
    }

    parse_keyword(text, today)
        .or_else(|| parse_relative(text, today))
        .or_else(|| parse_modifier(text, today))
        .or_else(|| parse_weekday(text).map(|wd| on_or_after(today, wd)))
        .or_else(|| parse_iso(text))
        .or_else(|| parse_numeric(text, today))
        .or_else(|| parse_named_month(text, today))
}

fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .trim_end_matches(['.', '!', '?'])
        .to_string()
}

fn parse_keyword(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let offset = match text {
        "today" | "now" | "tonight" | "this morning" | "this evening" => 0,
        "tomorrow" | "tmr" | "tmrw" => 1,
        "yesterday" => -1,
        "day after tomorrow" | "the day after tomorrow" => 2,
        "day before yesterday" | "the day before yesterday" => -2,
        _ => return None,
    };
    Some(today + Duration::days(offset))
}

fn parse_relative(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(caps) = RELATIVE_RE.captures(text) {
        let amount = parse_amount(&caps[1])?;
        let unit = parse_unit(&caps[2])?;
        let amount = if &caps[3] == "ago" { -amount } else { amount };
        return shift(today, amount, unit);
    }

    if let Some(caps) = IN_RE.captures(text) {
        let amount = parse_amount(&caps[1])?;
        let unit = parse_unit(&caps[2])?;
        return shift(today, amount, unit);
    }

    None
}

fn parse_modifier(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = MODIFIER_RE.captures(text)?;
    let modifier = &caps[1];
    let operand = &caps[2];

    if let Some(weekday) = parse_weekday(operand) {
        return Some(match modifier {
            "next" | "coming" => after(today, weekday),
            "last" | "previous" => before(today, weekday),
            _ => on_or_after(today, weekday),
        });
    }

    let unit = parse_unit(operand)?;
    match modifier {
        "next" | "coming" => shift(today, 1, unit),
        "last" | "previous" => shift(today, -1, unit),
        _ => None,
    }
}

fn parse_iso(text: &str) -> Option<NaiveDate> {
    let caps = ISO_RE.captures(text)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_numeric(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = NUMERIC_RE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[3].parse().ok()?;

    match caps.get(4) {
        Some(year) => {
            let year = expand_year(year.as_str())?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
        // "5-3" reads as arithmetic more than a date; only / and . stand alone.
        None if &caps[2] == "-" => None,
        None => closest_year(today, month, day),
    }
}

fn parse_named_month(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (day, month, year) = if let Some(caps) = DAY_MONTH_RE.captures(text) {
        (caps[1].parse::<u32>().ok()?, parse_month(&caps[2])?, caps.get(3))
    } else if let Some(caps) = MONTH_DAY_RE.captures(text) {
        (caps[2].parse::<u32>().ok()?, parse_month(&caps[1])?, caps.get(3))
    } else {
        return None;
    };

    match year {
        Some(year) => NaiveDate::from_ymd_opt(year.as_str().parse().ok()?, month, day),
        None => closest_year(today, month, day),
    }
}

/// Pick the year (previous, current or next) that puts `month`/`day` closest to
/// `today`.
fn closest_year(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    [today.year(), today.year() - 1, today.year() + 1]
        .into_iter()
        .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
        .min_by_key(|date| (*date - today).num_days().abs())
}

fn expand_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    Some(if s.len() == 2 { 2000 + year } else { year })
}

fn parse_amount(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    let n = match s {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        _ => return None,
    };
    Some(n)
}

fn parse_unit(s: &str) -> Option<Unit> {
    match s.trim_end_matches('s') {
        "day" => Some(Unit::Days),
        "week" => Some(Unit::Weeks),
        "fortnight" => Some(Unit::Fortnights),
        "month" => Some(Unit::Months),
        "year" => Some(Unit::Years),
        _ => None,
    }
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

fn parse_month(s: &str) -> Option<u32> {
    let month = match s {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn shift(date: NaiveDate, amount: i64, unit: Unit) -> Option<NaiveDate> {
    match unit {
        Unit::Days => date.checked_add_signed(Duration::try_days(amount)?),
        Unit::Weeks => date.checked_add_signed(Duration::try_weeks(amount)?),
        Unit::Fortnights => date.checked_add_signed(Duration::try_weeks(amount.checked_mul(2)?)?),
        Unit::Months => add_months(date, amount),
        Unit::Years => add_months(date, amount.checked_mul(12)?),
    }
}

/// Month arithmetic clamping the day (Jan 31 + 1 month = Feb 28/29).
fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

fn days_between(from: Weekday, to: Weekday) -> i64 {
    (to.num_days_from_monday() as i64 - from.num_days_from_monday() as i64 + 7) % 7
}

/// Next occurrence of `target`, today included.
fn on_or_after(date: NaiveDate, target: Weekday) -> NaiveDate {
    date + Duration::days(days_between(date.weekday(), target))
}

/// Next occurrence of `target` strictly after `date`.
fn after(date: NaiveDate, target: Weekday) -> NaiveDate {
    let diff = days_between(date.weekday(), target);
    date + Duration::days(if diff == 0 { 7 } else { diff })
}

/// Previous occurrence of `target` strictly before `date`.
fn before(date: NaiveDate, target: Weekday) -> NaiveDate {
    let diff = days_between(target, date.weekday());
    date - Duration::days(if diff == 0 { 7 } else { diff })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Thursday
    fn reference() -> NaiveDate {
        ymd(2024, 3, 14)
    }

    #[rstest]
    #[case("today", ymd(2024, 3, 14))]
    #[case("Tomorrow", ymd(2024, 3, 15))]
    #[case("  yesterday  ", ymd(2024, 3, 13))]
    #[case("the day after tomorrow", ymd(2024, 3, 16))]
    #[case("day before yesterday", ymd(2024, 3, 12))]
    #[case("on tomorrow", ymd(2024, 3, 15))]
    #[case("tomorrow.", ymd(2024, 3, 15))]
    fn test_keywords(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_natural_date(input, reference()), Some(expected));
    }

    #[rstest]
    #[case("3 days ago", ymd(2024, 3, 11))]
    #[case("a week ago", ymd(2024, 3, 7))]
    #[case("in 2 weeks", ymd(2024, 3, 28))]
    #[case("in a fortnight", ymd(2024, 3, 28))]
    #[case("two months from now", ymd(2024, 5, 14))]
    #[case("1 year later", ymd(2025, 3, 14))]
    #[case("in 1 day", ymd(2024, 3, 15))]
    fn test_relative(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_natural_date(input, reference()), Some(expected));
    }

    #[rstest]
    #[case("next friday", ymd(2024, 3, 15))]
    #[case("next thursday", ymd(2024, 3, 21))]
    #[case("last monday", ymd(2024, 3, 11))]
    #[case("last thursday", ymd(2024, 3, 7))]
    #[case("this thursday", ymd(2024, 3, 14))]
    #[case("this sat", ymd(2024, 3, 16))]
    #[case("friday", ymd(2024, 3, 15))]
    #[case("thursday", ymd(2024, 3, 14))]
    #[case("wed", ymd(2024, 3, 20))]
    #[case("next week", ymd(2024, 3, 21))]
    #[case("last month", ymd(2024, 2, 14))]
    #[case("next year", ymd(2025, 3, 14))]
    fn test_weekdays_and_modifiers(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_natural_date(input, reference()), Some(expected));
    }

    #[rstest]
    #[case("2024-03-05", ymd(2024, 3, 5))]
    #[case("2023/12/1", ymd(2023, 12, 1))]
    #[case("05/03/2024", ymd(2024, 3, 5))]
    #[case("5.3.24", ymd(2024, 3, 5))]
    #[case("25/12", ymd(2023, 12, 25))]
    #[case("5 March 2024", ymd(2024, 3, 5))]
    #[case("5th of march", ymd(2024, 3, 5))]
    #[case("March 5th, 2023", ymd(2023, 3, 5))]
    #[case("mar 20", ymd(2024, 3, 20))]
    #[case("2 jan", ymd(2024, 1, 2))]
    fn test_absolute(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_natural_date(input, reference()), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("not a date at all")]
    #[case("john")]
    #[case("31/02/2024")]
    #[case("2024-13-01")]
    #[case("5-3")]
    #[case("next lunch")]
    #[case("this month")]
    #[case("march")]
    fn test_rejects(#[case] input: &str) {
        assert_eq!(parse_natural_date(input, reference()), None);
    }

    #[test]
    fn test_month_overflow_clamps() {
        let jan31 = ymd(2024, 1, 31);
        assert_eq!(parse_natural_date("in 1 month", jan31), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_natural_date("next month", ymd(2023, 1, 31)), Some(ymd(2023, 2, 28)));
    }

    #[test]
    fn test_huge_offsets_do_not_panic() {
        assert_eq!(parse_natural_date("in 999999999999 days", reference()), None);
        assert_eq!(parse_natural_date("99999999999 years ago", reference()), None);
    }

    #[test]
    fn test_closest_year_wraps_backwards() {
        // Early January looking back at late December.
        let jan3 = ymd(2025, 1, 3);
        assert_eq!(parse_natural_date("28 december", jan3), Some(ymd(2024, 12, 28)));
    }
}
