//! ISO date parsing, display formatting and age arithmetic.
//!
//! The API speaks `YYYY-MM-DD`; the UI shows `DD/MM/YYYY`. Anything that
//! fails to parse is displayed verbatim rather than hidden.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::Date;
use time::macros::format_description;

/// Parse an ISO `YYYY-MM-DD` date.
#[must_use]
pub fn parse_iso(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

#[must_use]
pub fn to_iso(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// `2024-03-07` → `07/03/2024`; unparseable input is returned unchanged.
#[must_use]
pub fn format_display(raw: &str) -> String {
    parse_iso(raw)
        .and_then(|d| d.format(format_description!("[day]/[month]/[year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Human age between `birth` and `today`: whole years, else whole months,
/// else days. `None` when `birth` is in the future.
#[must_use]
pub fn age_label(birth: Date, today: Date) -> Option<String> {
    if birth > today {
        return None;
    }
    let before_anniversary = (u8::from(today.month()), today.day()) < (u8::from(birth.month()), birth.day());
    let years = today.year() - birth.year() - i32::from(before_anniversary);
    if years >= 1 {
        return Some(plural(i64::from(years), "year"));
    }

    let months = (today.year() - birth.year()) * 12 + i32::from(u8::from(today.month()))
        - i32::from(u8::from(birth.month()))
        - i32::from(today.day() < birth.day());
    if months >= 1 {
        return Some(plural(i64::from(months), "month"));
    }

    Some(plural((today - birth).whole_days(), "day"))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit}") } else { format!("{n} {unit}s") }
}

/// Today's date in the browser's local calendar (UTC on the server).
#[must_use]
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok())
            .unwrap_or(time::Month::January);
        let day = u8::try_from(now.get_date()).unwrap_or(1);
        #[allow(clippy::cast_possible_wrap)]
        let year = now.get_full_year() as i32;
        Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
