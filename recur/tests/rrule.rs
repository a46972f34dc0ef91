// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for recurrence rule parsing, generation and checks.

use aimcal_recur::rrule::{self, Representability, StructuralViolation, UnsupportedExtension};
use aimcal_recur::{EndType, Frequency, RecurrenceConfig, Weekday, datetime};

#[test]
fn test_generate_weekly_scenario() {
    let config = RecurrenceConfig::new(Frequency::Weekly)
        .with_interval(2)
        .with_by_day([Weekday::Monday, Weekday::Wednesday, Weekday::Friday])
        .with_count(10);
    assert_eq!(
        rrule::generate(&config),
        "FREQ=WEEKLY;INTERVAL=2;COUNT=10;BYDAY=MO,WE,FR"
    );
}

#[test]
fn test_monthly_rule_regenerates_identically() {
    let src = "FREQ=MONTHLY;BYMONTHDAY=31";
    let config = rrule::parse(src).unwrap();
    assert_eq!(config.frequency, Some(Frequency::Monthly));
    assert_eq!(config.by_month_day, Some(31));
    assert_eq!(rrule::generate(&config), src);
}

#[test]
fn test_generate_parse_round_trip() {
    let until = datetime::decode("20261231T235959Z").unwrap();
    let configs = [
        RecurrenceConfig::default(),
        RecurrenceConfig::new(Frequency::Daily),
        RecurrenceConfig::new(Frequency::Daily).with_interval(7).with_until(until),
        RecurrenceConfig::new(Frequency::Weekly).with_by_day([Weekday::Sunday, Weekday::Saturday]),
        RecurrenceConfig::new(Frequency::Monthly).with_by_month_day(Some(1)).with_count(12),
        RecurrenceConfig::new(Frequency::Yearly).with_by_month([2, 8]),
        // BY* parts of other frequencies are not emitted
        RecurrenceConfig::new(Frequency::Daily)
            .with_by_day([Weekday::Monday])
            .with_by_month_day(Some(5))
            .with_by_month([1]),
    ];

    for config in configs {
        let text = rrule::generate(&config);
        let regenerated = rrule::parse(&text).map(|c| rrule::generate(&c)).unwrap_or_default();
        assert_eq!(regenerated, text, "Failed for {config:?}");
    }
}

#[test]
fn test_parse_is_lenient() {
    let src = "FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-1";
    let config = rrule::parse(src).unwrap();
    assert_eq!(config.frequency, Some(Frequency::Monthly));
    assert_eq!(config.end_type(), EndType::Never);

    // valid RFC 5545, yet nothing the editor can show
    let config = rrule::parse("FREQ=HOURLY;INTERVAL=6").unwrap();
    assert!(!config.is_recurring());
    assert_eq!(rrule::validate("FREQ=HOURLY;INTERVAL=6"), Ok(()));
    assert_eq!(
        rrule::classify("FREQ=HOURLY;INTERVAL=6"),
        Representability::HasUnsupportedExtensions
    );
}

#[test]
fn test_validate() {
    assert_eq!(rrule::validate(""), Ok(()));
    assert_eq!(rrule::validate("COUNT=5"), Err(StructuralViolation::MissingFreq));
    assert_eq!(
        rrule::validate("FREQ=DAILY;COUNT=5;UNTIL=20250101T000000Z"),
        Err(StructuralViolation::CountWithUntil)
    );
    assert_eq!(
        rrule::validate("FREQ=WEEKLY;BYDAY=MO,WE;BYSETPOS=1;WKST=MO"),
        Ok(())
    );
}

#[test]
fn test_validate_is_idempotent() {
    for src in [
        "",
        "FREQ=DAILY",
        "FREQ=DAILY;COUNT=0",
        "INTERVAL=2",
        "FREQ=YEARLY;UNTIL=never",
    ] {
        let first = rrule::validate(src);
        assert_eq!(first, rrule::validate(src), "Failed for {src}");
    }
}

#[test]
fn test_classify() {
    assert_eq!(
        rrule::classify("FREQ=WEEKLY;BYDAY=MO,WE"),
        Representability::FullyRepresentable
    );
    assert_eq!(
        rrule::classify("FREQ=WEEKLY;BYSETPOS=-1"),
        Representability::HasUnsupportedExtensions
    );
    assert_eq!(
        rrule::check_representable("FREQ=MONTHLY;BYDAY=MO,TU;BYSETPOS=-1"),
        Err(UnsupportedExtension::Parts(vec!["BYSETPOS".into()]))
    );
}

#[test]
fn test_classify_flags_by_parts_of_other_frequencies() {
    let src = "FREQ=DAILY;BYDAY=MO";
    assert_eq!(rrule::validate(src), Ok(()));
    assert_eq!(rrule::classify(src), Representability::HasUnsupportedExtensions);
    assert_eq!(
        rrule::check_representable(src),
        Err(UnsupportedExtension::MismatchedPart {
            part: "BYDAY".into(),
            expected: Frequency::Weekly,
        })
    );
    // the editor drops it on the way back
    assert_eq!(rrule::generate(&rrule::parse(src).unwrap()), "FREQ=DAILY");
}

#[test]
fn test_validate_and_classify_agree_on_until() {
    let src = "FREQ=DAILY;UNTIL=2025-01-01T00:00:00Z";
    assert!(rrule::validate(src).is_err());
    assert_eq!(rrule::classify(src), Representability::HasUnsupportedExtensions);
}

#[test]
fn test_until_before_year_zero_is_not_written() {
    let until: jiff::Timestamp = "-000005-06-01T00:00:00Z".parse().unwrap();
    let config = RecurrenceConfig::new(Frequency::Daily).with_until(until);
    assert!(!datetime::is_encodable(until));
    assert_eq!(rrule::generate(&config), "FREQ=DAILY");
}

#[test]
fn test_generated_rules_are_valid_and_representable() {
    let configs = [
        RecurrenceConfig::new(Frequency::Daily).with_count(3),
        RecurrenceConfig::new(Frequency::Weekly)
            .with_interval(2)
            .with_by_day([Weekday::Tuesday]),
        RecurrenceConfig::new(Frequency::Monthly).with_by_month_day(Some(15)),
        RecurrenceConfig::new(Frequency::Yearly)
            .with_by_month([6])
            .with_until(datetime::decode("20300101T000000Z").unwrap()),
    ];
    for config in configs {
        let text = config.to_string();
        assert_eq!(rrule::validate(&text), Ok(()), "Failed for {text}");
        assert_eq!(
            rrule::classify(&text),
            Representability::FullyRepresentable,
            "Failed for {text}"
        );
    }
}
