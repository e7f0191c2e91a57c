//! Series catalog tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use fleetline_core::protocol::Series;

#[test]
fn every_protocol_name_resolves() {
    for series in Series::ALL {
        assert_eq!(Series::from_name(series.protocol_name()), Some(series));
    }
}

#[test]
fn catalog_has_fifteen_distinct_entries() {
    assert_eq!(Series::ALL.len(), Series::COUNT);
    let mut names: Vec<&str> = Series::ALL.iter().map(|s| s.protocol_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Series::COUNT);
}

#[test]
fn unknown_names_do_not_resolve() {
    assert_eq!(Series::from_name("bogus.metric"), None);
    assert_eq!(Series::from_name(""), None);
    assert_eq!(Series::from_name("system.healthy "), None);
}

#[test]
fn export_names_are_flattened() {
    for series in Series::ALL {
        let export = series.export_name();
        assert!(!export.contains('.'), "{export} must not contain dots");
        assert_eq!(export, series.protocol_name().replace('.', "_"));
    }
}

#[test]
fn index_is_aligned_with_all() {
    for (i, series) in Series::ALL.iter().enumerate() {
        assert_eq!(series.index(), i);
    }
}
