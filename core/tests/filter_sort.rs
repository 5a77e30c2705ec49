//! Filter and sort engine tests.

use kpidesk_core::{
    filter::{filter, Criterion, FilterSpec},
    record::Record,
    seed::{generate_customers, sample_customers},
    sort::{sort, SortDirection, SortSpec},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.text("customer").unwrap_or_default().to_string())
        .collect()
}

fn margin_rows(margins: &[f64]) -> Vec<Record> {
    margins
        .iter()
        .enumerate()
        .map(|(i, m)| Record::new().with("customer", format!("C{i}")).with("margin", *m))
        .collect()
}

// ── Filter ───────────────────────────────────────────────────────────────────

/// Margins [40, 33.3, 30, 25, 20] with min 30 keep the first three in order.
#[test]
fn min_margin_keeps_first_three_in_order() {
    let rows = margin_rows(&[40.0, 33.3, 30.0, 25.0, 20.0]);
    let kept = filter(&rows, &FilterSpec::new().at_least("margin", 30.0));
    assert_eq!(names(&kept), vec!["C0", "C1", "C2"]);
}

/// An empty spec, or one holding only sentinels, is the identity.
#[test]
fn inactive_spec_returns_everything_in_order() {
    let customers = sample_customers();

    assert_eq!(filter(&customers, &FilterSpec::new()), customers);

    let sentinels = FilterSpec::new()
        .equals("region", "All Regions")
        .equals("industry", "All Industries")
        .equals("segments", "All Segments");
    assert!(sentinels.is_empty());
    assert_eq!(filter(&customers, &sentinels), customers);
}

/// Threshold partition: kept rows meet the minimum, dropped rows do not.
#[test]
fn threshold_partitions_records() {
    let customers = generate_customers(99, 60);
    for min in [0.0, 15.0, 22.5, 30.0, 45.0] {
        let kept = filter(&customers, &FilterSpec::new().at_least("margin", min));
        for r in &kept {
            assert!(r.number("margin").unwrap() >= min);
        }
        let dropped: Vec<&Record> = customers.iter().filter(|r| !kept.contains(r)).collect();
        for r in &dropped {
            assert!(r.number("margin").unwrap() < min);
        }
        assert_eq!(kept.len() + dropped.len(), customers.len());
    }
}

/// Categorical criteria AND together; sets match by containment.
#[test]
fn categorical_and_set_criteria_combine() {
    let customers = sample_customers();

    let west = filter(&customers, &FilterSpec::new().equals("region", "North America"));
    assert_eq!(names(&west), vec!["Acme Corp", "Initech"]);

    let strategic = filter(&customers, &FilterSpec::new().equals("segments", "Strategic"));
    assert_eq!(names(&strategic), vec!["Acme Corp", "Initech"]);

    let combined = FilterSpec::new()
        .equals("region", "North America")
        .equals("segments", "Mid-Market")
        .at_least("revenue", 500_000.0);
    assert_eq!(names(&filter(&customers, &combined)), vec!["Initech"]);

    let none = FilterSpec::new().equals("region", "Antarctica");
    assert!(filter(&customers, &none).is_empty());
}

/// Filtering leaves the source untouched.
#[test]
fn filter_does_not_mutate_input() {
    let customers = sample_customers();
    let before = customers.clone();
    let _ = filter(&customers, &FilterSpec::new().at_least("margin", 35.0));
    assert_eq!(customers, before);
}

/// Replacing a criterion keeps only the latest one.
#[test]
fn set_replaces_previous_criterion() {
    let mut spec = FilterSpec::new().equals("region", "Europe");
    spec.set("region", Criterion::Equals("All Regions".into()));
    assert!(spec.is_empty());

    spec.set("margin", Criterion::AtLeast(25.0));
    spec.clear("margin");
    assert!(spec.is_empty());
}

// ── Sort ─────────────────────────────────────────────────────────────────────

/// Numeric keys sort by value; text keys lexicographically.
#[test]
fn sorts_numbers_and_text() {
    let customers = sample_customers();

    let by_revenue = sort(&customers, &SortSpec::asc("revenue"));
    assert_eq!(
        names(&by_revenue),
        vec!["Stark Retail", "Umbrella Ltd", "Initech", "Globex Inc", "Acme Corp"]
    );

    let by_name_desc = sort(&customers, &SortSpec::desc("customer"));
    assert_eq!(
        names(&by_name_desc),
        vec!["Umbrella Ltd", "Stark Retail", "Initech", "Globex Inc", "Acme Corp"]
    );
}

/// With distinct keys, desc is the exact reverse of asc.
#[test]
fn reversed_direction_reverses_sequence() {
    let rows = margin_rows(&[12.0, 40.0, 5.5, 33.3, 20.0, 25.0, 30.0]);
    let spec = SortSpec::asc("margin");

    let asc = sort(&rows, &spec);
    let mut desc = sort(&asc, &spec.reversed());
    desc.reverse();
    assert_eq!(asc, desc);
}

/// Equal keys keep their input order in both directions.
#[test]
fn sort_is_stable() {
    let rows = vec![
        Record::new().with("customer", "a").with("region", "Europe"),
        Record::new().with("customer", "b").with("region", "Asia"),
        Record::new().with("customer", "c").with("region", "Europe"),
        Record::new().with("customer", "d").with("region", "Asia"),
    ];
    assert_eq!(names(&sort(&rows, &SortSpec::asc("region"))), vec!["b", "d", "a", "c"]);
    assert_eq!(names(&sort(&rows, &SortSpec::desc("region"))), vec!["a", "c", "b", "d"]);
}

/// Rows missing the key sort after rows that have it, in input order.
#[test]
fn missing_keys_sort_last_ascending() {
    let rows = vec![
        Record::new().with("customer", "x"),
        Record::new().with("customer", "y").with("revenue", 2.0),
        Record::new().with("customer", "z"),
        Record::new().with("customer", "w").with("revenue", 1.0),
    ];
    assert_eq!(names(&sort(&rows, &SortSpec::asc("revenue"))), vec!["w", "y", "x", "z"]);
}

/// Same key flips direction; a new key starts ascending.
#[test]
fn toggle_flips_or_resets() {
    let mut spec = SortSpec::asc("revenue");
    spec.toggle("revenue");
    assert_eq!(spec.direction, SortDirection::Desc);
    spec.toggle("revenue");
    assert_eq!(spec.direction, SortDirection::Asc);
    spec.toggle("revenue");
    spec.toggle("margin");
    assert_eq!(spec, SortSpec::asc("margin"));
}

/// `updated` returns a changed copy; the source row and the filter input
/// both keep their old values.
#[test]
fn updated_record_leaves_source_untouched() {
    let rows = margin_rows(&[40.0, 20.0]);
    let bumped = rows[1].updated("margin", 35.0);

    assert_eq!(rows[1].number("margin"), Some(20.0));
    assert_eq!(bumped.number("margin"), Some(35.0));
    assert_eq!(bumped.text("customer"), rows[1].text("customer"));

    let edited = vec![rows[0].clone(), bumped];
    let spec = FilterSpec::new().at_least("margin", 30.0);
    assert_eq!(filter(&rows, &spec).len(), 1);
    assert_eq!(filter(&edited, &spec).len(), 2);
}
