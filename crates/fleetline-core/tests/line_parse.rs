//! Line parser vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use fleetline_core::protocol::{parse_line, Labels};
use fleetline_core::FleetlineError;

#[test]
fn parse_minimal_line() {
    let sample = parse_line("put system.healthy 1700000000 1").unwrap();
    assert_eq!(sample.name, "system.healthy");
    assert_eq!(sample.value, 1.0);
    assert_eq!(sample.labels, Labels::default());
}

#[test]
fn parse_full_tag_set() {
    let sample = parse_line(
        "put system.cpu.sys 1700000000 0.5 deployment=my-dep job=my-job index=0 id=abc",
    )
    .unwrap();
    assert_eq!(sample.name, "system.cpu.sys");
    assert_eq!(sample.value, 0.5);
    assert_eq!(sample.labels.deployment, "my-dep");
    assert_eq!(sample.labels.job, "my-job");
    assert_eq!(sample.labels.index, "0");
    assert_eq!(sample.labels.id, "abc");
}

#[test]
fn fewer_than_four_tokens_is_malformed() {
    let err = parse_line("put invalid.tsdb.message 1700000000").expect_err("must fail");
    assert!(matches!(err, FleetlineError::MalformedMessage(_)));
    assert!(err.is_invalid_message());
}

#[test]
fn empty_line_is_malformed() {
    let err = parse_line("").expect_err("must fail");
    assert!(matches!(err, FleetlineError::MalformedMessage(_)));
}

#[test]
fn non_numeric_value_is_invalid() {
    let err = parse_line("put system.healthy 1700000000 a").expect_err("must fail");
    assert!(matches!(err, FleetlineError::InvalidValue(_)));
    assert!(err.is_invalid_message());
}

#[test]
fn timestamp_token_is_not_validated() {
    // The timestamp is structurally required but never parsed.
    let sample = parse_line("put system.healthy not-a-timestamp 1").unwrap();
    assert_eq!(sample.value, 1.0);
}

#[test]
fn command_token_is_ignored() {
    let sample = parse_line("anything system.healthy 1700000000 1").unwrap();
    assert_eq!(sample.name, "system.healthy");
}

#[test]
fn unknown_tags_are_ignored() {
    let sample =
        parse_line("put system.healthy 1700000000 1 color=blue job=j noequals").unwrap();
    assert_eq!(sample.labels.job, "j");
    assert_eq!(sample.labels.deployment, "");
    assert_eq!(sample.labels.id, "");
}

#[test]
fn duplicate_tag_last_occurrence_wins() {
    let sample = parse_line("put system.healthy 1700000000 1 job=first job=second").unwrap();
    assert_eq!(sample.labels.job, "second");
}

#[test]
fn tag_value_splits_on_first_equals_only() {
    let sample = parse_line("put system.healthy 1700000000 1 id=a=b").unwrap();
    assert_eq!(sample.labels.id, "a=b");
}

#[test]
fn negative_and_fractional_values_parse() {
    assert_eq!(parse_line("put system.load.1m 0 -0.25").unwrap().value, -0.25);
    assert_eq!(parse_line("put system.mem.kb 0 1000").unwrap().value, 1000.0);
}
