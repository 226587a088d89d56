use campo::utils::datetime;
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_and_format_round_trip() {
    let parsed = datetime::parse_date("2024-05-01").unwrap();
    assert_eq!(parsed, ymd(2024, 5, 1));
    assert_eq!(datetime::format_ymd(parsed), "2024-05-01");
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert!(datetime::parse_date("01/05/2024").is_err());
    assert!(datetime::parse_date("2024-13-01").is_err());
    assert!(datetime::parse_date("").is_err());
}

#[test]
fn test_fecha_minima_is_the_1900_floor() {
    assert_eq!(datetime::fecha_minima(), ymd(1900, 1, 1));
}

#[test]
fn test_accepted_range_is_inclusive_on_both_ends() {
    let today = ymd(2024, 5, 1);

    assert!(datetime::within_accepted_range(today, today));
    assert!(datetime::within_accepted_range(datetime::fecha_minima(), today));

    assert!(!datetime::within_accepted_range(ymd(2024, 5, 2), today));
    assert!(!datetime::within_accepted_range(ymd(1899, 12, 31), today));
}
