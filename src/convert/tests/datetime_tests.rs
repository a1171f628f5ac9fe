//! Tests for exact-format and free-form date/time parsing.

use chrono::{NaiveDate, NaiveDateTime};

use super::spec;
use crate::column::{DateTimeStyle, TargetKind};
use crate::convert::Converter;
use crate::locale::Locale;
use crate::value::Value;

fn at_midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_exact_format_match() {
    let converter = Converter::new();
    let spec = spec(TargetKind::DateTime).with_exact_date_format("%d/%m/%Y");

    let outcome = converter.try_convert(&spec, "25/12/2023");
    assert!(outcome.converted);
    assert_eq!(outcome.value, Value::DateTime(at_midnight(2023, 12, 25)));
}

#[test]
fn test_exact_format_rejects_other_valid_shapes() {
    let converter = Converter::new();
    let spec = spec(TargetKind::DateTime).with_exact_date_format("%d/%m/%Y");

    // A perfectly valid date, just not in the configured shape
    assert!(!converter.try_convert(&spec, "2023-12-25").converted);
}

#[test]
fn test_exact_format_with_time_component() {
    let converter = Converter::new();
    let spec = spec(TargetKind::DateTime).with_exact_date_format("%Y-%m-%d %H:%M:%S");

    let outcome = converter.try_convert(&spec, "2023-06-01 14:30:15");
    assert!(outcome.converted);
    assert_eq!(
        outcome.value,
        Value::DateTime(
            NaiveDate::from_ymd_opt(2023, 6, 1)
                .unwrap()
                .and_hms_opt(14, 30, 15)
                .unwrap()
        )
    );
}

#[test]
fn test_whitespace_leniency_flag() {
    let converter = Converter::new();
    let strict = spec(TargetKind::DateTime).with_exact_date_format("%Y-%m-%d");
    let lenient = strict.clone().with_datetime_style(DateTimeStyle {
        allow_whitespace: true,
    });

    assert!(!converter.try_convert(&strict, " 2023-06-01 ").converted);
    assert!(converter.try_convert(&lenient, " 2023-06-01 ").converted);
}

#[test]
fn test_free_form_follows_locale_date_order() {
    let converter = Converter::new();

    let us = spec(TargetKind::DateTime).with_locale(Locale::en_us());
    assert_eq!(
        converter.try_convert(&us, "01/15/2023").value,
        Value::DateTime(at_midnight(2023, 1, 15))
    );

    let gb = spec(TargetKind::DateTime).with_locale(Locale::en_gb());
    assert_eq!(
        converter.try_convert(&gb, "15/01/2023").value,
        Value::DateTime(at_midnight(2023, 1, 15))
    );

    let de = spec(TargetKind::DateTime).with_locale(Locale::de_de());
    assert_eq!(
        converter.try_convert(&de, "15.01.2023").value,
        Value::DateTime(at_midnight(2023, 1, 15))
    );
}

#[test]
fn test_free_form_datetime_shapes() {
    let converter = Converter::new();
    let spec = spec(TargetKind::DateTime);

    let expected = NaiveDate::from_ymd_opt(2023, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    assert_eq!(
        converter.try_convert(&spec, "2023-01-15 09:30:00").value,
        Value::DateTime(expected)
    );
    assert_eq!(
        converter.try_convert(&spec, "2023-01-15T09:30:00").value,
        Value::DateTime(expected)
    );
}

#[test]
fn test_malformed_datetime_fails() {
    let converter = Converter::new();
    let spec = spec(TargetKind::DateTime);

    assert!(!converter.try_convert(&spec, "not a date").converted);
    assert!(!converter.try_convert(&spec, "").converted);
    assert!(!converter.try_convert(&spec, "2023-13-45").converted);
}
