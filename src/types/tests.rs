use super::date::{format_date, format_timestamp, parse_date, parse_timestamp};
use super::{Monetary, MonetaryError};
use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_monetary_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.00"),
        ("1.1234", "1.1234"),
        ("0.0001", "0.0001"),
        ("-1.5", "-1.50"),
        ("  1.0  ", "1.00"),
        ("-0.01", "-0.01"),
        ("-0.0001", "-0.0001"),
        ("100", "100.00"),
        ("115.125", "115.125"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_fails_to_parse_invalid_strings() {
    assert!(matches!(Monetary::from_str("1.12345"), Err(MonetaryError::InvalidFormat(_))));
    assert!(Monetary::from_str("abc").is_err());
    assert!(Monetary::from_str("1.2.3").is_err());
    assert!(Monetary::from_str("").is_err());
    assert!(Monetary::from_str("1.-5").is_err());
}

#[test]
fn test_monetary_rejects_values_beyond_decimal_range() {
    assert!(Monetary::from_str("79228162514264337593543950336").is_err());
    assert!(Monetary::from_str("-79228162514264337593543950336").is_err());
}

#[test]
fn test_monetary_parses_large_amounts_within_decimal_range() -> Result<()> {
    let from_string: Monetary = serde_json::from_str("\"1000000000000000.0000\"")?;
    let from_number: Monetary = serde_json::from_str("1000000000000000.0")?;

    assert_eq!(from_string.to_string(), "1000000000000000.0000");
    assert_eq!(from_string, from_number);
    assert_eq!(Monetary::from_str("9223372036854775807.5")?.to_string(), "9223372036854775807.50");

    Ok(())
}

#[test]
fn test_monetary_rejects_decimals_with_excess_precision() -> Result<()> {
    assert!(Monetary::new(Decimal::from_str("1.23456")?).is_err());
    assert_eq!(Monetary::new(Decimal::from_str("1.2345")?)?.value(), Decimal::from_str("1.2345")?);

    Ok(())
}

#[test]
fn test_monetary_json_number_and_string_share_precision_rule() -> Result<()> {
    let from_number = serde_json::from_str::<Monetary>("1.23456");
    let from_string = serde_json::from_str::<Monetary>("\"1.23456\"");

    assert!(from_number.is_err());
    assert!(from_string.is_err());
    assert_eq!(serde_json::from_str::<Monetary>("1.2345")?, Monetary::from_str("1.2345")?);

    Ok(())
}

#[test]
fn test_monetary_reads_json_numbers_and_strings() -> Result<()> {
    let from_float: Monetary = serde_json::from_str("115.25")?;
    let from_integer: Monetary = serde_json::from_str("40")?;
    let from_string: Monetary = serde_json::from_str("\"15.75\"")?;

    assert_eq!(from_float, Monetary::from_str("115.25")?);
    assert_eq!(from_integer, Monetary::from_str("40")?);
    assert_eq!(from_string, Monetary::from_str("15.75")?);
    assert!(serde_json::from_str::<Monetary>("\"fifteen\"").is_err());
    assert!(serde_json::from_str::<Monetary>("true").is_err());

    Ok(())
}

#[test]
fn test_monetary_writes_json_numbers() -> Result<()> {
    let amount = Monetary::from_str("115.25")?;

    assert_eq!(serde_json::to_string(&amount)?, "115.25");

    Ok(())
}

#[test]
fn test_parse_timestamp_reads_platform_form() -> Result<()> {
    let timestamp = parse_timestamp("/Date(1573755038314+0000)/")?;

    assert_eq!(timestamp.timestamp_millis(), 1573755038314);

    Ok(())
}

#[test]
fn test_parse_timestamp_ignores_informational_offset() -> Result<()> {
    let with_offset = parse_timestamp("/Date(1573755038314+1300)/")?;
    let without_offset = parse_timestamp("/Date(1573755038314)/")?;

    assert_eq!(with_offset, without_offset);

    Ok(())
}

#[test]
fn test_parse_timestamp_accepts_pre_epoch_values() -> Result<()> {
    let timestamp = parse_timestamp("/Date(-86400000+0000)/")?;

    assert_eq!(timestamp, Utc.with_ymd_and_hms(1969, 12, 31, 0, 0, 0).unwrap());

    Ok(())
}

#[test]
fn test_parse_timestamp_reads_iso_forms() -> Result<()> {
    let expected = Utc.with_ymd_and_hms(2019, 11, 14, 10, 30, 0).unwrap();

    assert_eq!(parse_timestamp("2019-11-14T10:30:00")?, expected);
    assert_eq!(parse_timestamp("2019-11-14T10:30:00Z")?, expected);
    assert_eq!(parse_timestamp("2019-11-14T23:30:00+13:00")?, expected);
    assert_eq!(parse_timestamp("2019-11-14")?, Utc.with_ymd_and_hms(2019, 11, 14, 0, 0, 0).unwrap());

    Ok(())
}

#[test]
fn test_parse_timestamp_rejects_malformed_values() {
    assert!(parse_timestamp("/Date(abc+0000)/").is_err());
    assert!(parse_timestamp("/Date(1573755038314+00)/").is_err());
    assert!(parse_timestamp("/Date()/").is_err());
    assert!(parse_timestamp("14/11/2019").is_err());
}

#[test]
fn test_parse_date_reads_all_supported_forms() -> Result<()> {
    let expected = NaiveDate::from_ymd_opt(2019, 11, 14).unwrap();

    assert_eq!(parse_date("2019-11-14")?, expected);
    assert_eq!(parse_date("2019-11-14T00:00:00")?, expected);
    assert_eq!(parse_date("/Date(1573689600000+0000)/")?, expected);

    Ok(())
}

#[test]
fn test_date_formatting_matches_wire_forms() -> Result<()> {
    let date = NaiveDate::from_ymd_opt(2019, 11, 14).unwrap();
    let timestamp = parse_timestamp("/Date(1573755038314+0000)/")?;

    assert_eq!(format_date(date), "2019-11-14");
    assert_eq!(format_timestamp(timestamp), "/Date(1573755038314+0000)/");

    Ok(())
}
