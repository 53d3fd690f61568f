use super::*;
use time::macros::date;

#[test]
fn parse_iso_accepts_padded_dates() {
    assert_eq!(parse_iso("2024-03-07"), Some(date!(2024 - 03 - 07)));
    assert_eq!(parse_iso(" 2024-03-07 "), Some(date!(2024 - 03 - 07)));
}

#[test]
fn parse_iso_rejects_other_shapes() {
    assert_eq!(parse_iso("07/03/2024"), None);
    assert_eq!(parse_iso("2024-02-30"), None);
    assert_eq!(parse_iso(""), None);
}

#[test]
fn to_iso_round_trips_through_parse() {
    assert_eq!(to_iso(date!(2021 - 11 - 02)), "2021-11-02");
}

#[test]
fn format_display_uses_day_month_year() {
    assert_eq!(format_display("2024-03-07"), "07/03/2024");
}

#[test]
fn format_display_passes_through_garbage() {
    assert_eq!(format_display("soon"), "soon");
}

#[test]
fn age_label_whole_years() {
    assert_eq!(age_label(date!(2019 - 04 - 02), date!(2024 - 04 - 02)), Some("5 years".to_owned()));
    assert_eq!(age_label(date!(2019 - 04 - 02), date!(2024 - 04 - 01)), Some("4 years".to_owned()));
    assert_eq!(age_label(date!(2023 - 01 - 15), date!(2024 - 02 - 01)), Some("1 year".to_owned()));
}

#[test]
fn age_label_months_under_a_year() {
    assert_eq!(age_label(date!(2023 - 11 - 20), date!(2024 - 04 - 19)), Some("4 months".to_owned()));
    assert_eq!(age_label(date!(2024 - 03 - 10), date!(2024 - 04 - 10)), Some("1 month".to_owned()));
}

#[test]
fn age_label_days_for_newborns() {
    assert_eq!(age_label(date!(2024 - 04 - 01), date!(2024 - 04 - 13)), Some("12 days".to_owned()));
    assert_eq!(age_label(date!(2024 - 04 - 13), date!(2024 - 04 - 13)), Some("0 days".to_owned()));
}

#[test]
fn age_label_rejects_future_birth() {
    assert_eq!(age_label(date!(2025 - 01 - 01), date!(2024 - 01 - 01)), None);
}
