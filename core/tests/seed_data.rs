//! Seed data tests — samples, JSON files, and synthetic generation.

use kpidesk_core::{
    aggregator::compute_totals,
    config::DeskConfig,
    seed::{
        generate_customers, generate_employees, load_customers, load_employees, sample_customers,
        sample_employees, BASELINE, BEST_CASE, WORST_CASE,
    },
};

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data");

/// The shipped data/ directory loads and matches the hard-coded samples.
#[test]
fn data_dir_matches_samples() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = DeskConfig::load(DATA_DIR).expect("desk.json");

    assert_eq!(config.scenarios, vec![BASELINE, BEST_CASE, WORST_CASE]);
    assert_eq!(config.default_scenario, BASELINE);

    let employees = load_employees(DATA_DIR, &config.seed_files.employees).expect("employees");
    assert_eq!(employees, sample_employees());

    let customers = load_customers(DATA_DIR, &config.seed_files.customers).expect("customers");
    assert_eq!(customers, sample_customers());
}

/// Missing data directory is reported with the path.
#[test]
fn missing_config_reports_path() {
    let err = DeskConfig::load("/definitely/not/here").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here/desk.json"), "{err}");
}

/// Sample customer margins are the documented ladder.
#[test]
fn sample_margins() {
    let margins: Vec<f64> = sample_customers()
        .iter()
        .map(|r| r.number("margin").unwrap())
        .collect();
    assert_eq!(margins, vec![40.0, 33.3, 30.0, 25.0, 20.0]);
}

/// Same seed, same rows; different seed, different rows.
#[test]
fn generation_is_deterministic() {
    let scenarios = [BASELINE, BEST_CASE, WORST_CASE];
    assert_eq!(generate_employees(42, 25, &scenarios), generate_employees(42, 25, &scenarios));
    assert_ne!(generate_employees(42, 25, &scenarios), generate_employees(43, 25, &scenarios));
    assert_eq!(generate_customers(42, 25), generate_customers(42, 25));
}

/// Generated employees carry every scenario, with best ≥ baseline ≥ worst.
#[test]
fn generated_employees_cover_scenarios() {
    let scenarios = [BASELINE, BEST_CASE, WORST_CASE];
    let employees = generate_employees(7, 40, &scenarios);

    assert_eq!(employees.len(), 40);
    for e in &employees {
        assert_eq!(e.scenarios.len(), 3, "{} lacks scenarios", e.id);
        assert!(e.current_salary >= 60_000.0 && e.current_salary <= 180_000.0);
    }
    assert_eq!(employees[0].id, "EMP001");

    let best = compute_totals(&employees, Some(BEST_CASE)).ai.total;
    let base = compute_totals(&employees, Some(BASELINE)).ai.total;
    let worst = compute_totals(&employees, Some(WORST_CASE)).ai.total;
    assert!(best > base && base > worst, "best={best:.0} base={base:.0} worst={worst:.0}");
}

/// Generated customers have consistent profit and margin fields.
#[test]
fn generated_customers_are_consistent() {
    for c in generate_customers(11, 50) {
        let revenue = c.number("revenue").unwrap();
        let cost = c.number("cost").unwrap();
        let profit = c.number("profit").unwrap();
        assert!((revenue - cost - profit).abs() < 1e-6);
        assert!(c.number("margin").unwrap() > 0.0);
        assert!(!c.set("segments").unwrap().is_empty());
    }
}
