//! Seed data for the dashboards.
//!
//! Three sources, all producing plain in-memory rows:
//!   1. `sample_*`   — the hard-coded mock rows the screens ship with
//!   2. `load_*`     — the same shapes read from JSON files in data/
//!   3. `generate_*` — deterministic synthetic rows for larger runs

use crate::{
    compensation::{EmployeeRecord, ScenarioInputs, TrackPair},
    name_generator::NameGenerator,
    record::Record,
    rng::{RngBank, SeedRng, SeedSlot},
};
use serde::Deserialize;

pub const BASELINE: &str = "Baseline";
pub const BEST_CASE: &str = "Best Case";
pub const WORST_CASE: &str = "Worst Case";

// ── Hard-coded samples ───────────────────────────────────────────────────────

fn inputs(raise: (f64, f64), bonus: (f64, f64), benefits: (f64, f64)) -> ScenarioInputs {
    ScenarioInputs {
        raise_percentage: TrackPair::new(raise.0, raise.1),
        bonus:            TrackPair::new(bonus.0, bonus.1),
        monthly_benefits: TrackPair::new(benefits.0, benefits.1),
    }
}

fn employee(id: &str, name: &str, department: &str, role: &str, salary: f64) -> EmployeeRecord {
    let mut e = EmployeeRecord::new(id, name, salary);
    e.department = Some(department.into());
    e.role = Some(role.into());
    e
}

/// Compensation screen sample: five employees, three scenarios each.
pub fn sample_employees() -> Vec<EmployeeRecord> {
    vec![
        employee("EMP001", "Sarah Johnson", "Engineering", "Senior Engineer", 120_000.0)
            .with_scenario(BASELINE, inputs((3.5, 3.0), (9_000.0, 10_000.0), (1_200.0, 1_200.0)))
            .with_scenario(BEST_CASE, inputs((5.0, 5.0), (12_000.0, 12_000.0), (1_300.0, 1_300.0)))
            .with_scenario(WORST_CASE, inputs((1.5, 1.5), (5_000.0, 5_000.0), (1_100.0, 1_100.0))),
        employee("EMP002", "Michael Chen", "Product", "Product Manager", 110_000.0)
            .with_scenario(BASELINE, inputs((3.0, 3.0), (8_000.0, 8_000.0), (1_150.0, 1_150.0)))
            .with_scenario(BEST_CASE, inputs((4.5, 4.5), (10_000.0, 10_000.0), (1_250.0, 1_250.0)))
            .with_scenario(WORST_CASE, inputs((1.0, 1.0), (4_000.0, 4_000.0), (1_050.0, 1_050.0))),
        employee("EMP003", "Emily Rodriguez", "Design", "UX Designer", 95_000.0)
            .with_scenario(BASELINE, inputs((3.2, 3.5), (6_000.0, 6_500.0), (1_000.0, 1_000.0)))
            .with_scenario(BEST_CASE, inputs((4.8, 4.8), (8_000.0, 8_000.0), (1_100.0, 1_100.0)))
            .with_scenario(WORST_CASE, inputs((1.2, 1.2), (3_000.0, 3_000.0), (950.0, 950.0))),
        employee("EMP004", "David Patel", "Sales", "Account Executive", 85_000.0)
            .with_scenario(BASELINE, inputs((2.8, 2.8), (12_000.0, 11_000.0), (950.0, 950.0)))
            .with_scenario(BEST_CASE, inputs((4.0, 4.0), (15_000.0, 15_000.0), (1_000.0, 1_000.0)))
            .with_scenario(WORST_CASE, inputs((1.0, 1.0), (6_000.0, 6_000.0), (900.0, 900.0))),
        employee("EMP005", "Jessica Williams", "Finance", "Financial Analyst", 78_000.0)
            .with_scenario(BASELINE, inputs((3.0, 3.0), (5_000.0, 5_000.0), (900.0, 900.0)))
            .with_scenario(BEST_CASE, inputs((4.2, 4.2), (6_500.0, 6_500.0), (950.0, 950.0)))
            .with_scenario(WORST_CASE, inputs((1.0, 1.0), (2_500.0, 2_500.0), (850.0, 850.0))),
    ]
}

fn customer(
    name: &str,
    revenue: f64,
    cost: f64,
    region: &str,
    industry: &str,
    segments: Vec<&str>,
) -> Record {
    let profit = revenue - cost;
    let margin = (profit / revenue * 1000.0).round() / 10.0;
    Record::new()
        .with("customer", name)
        .with("revenue", revenue)
        .with("cost", cost)
        .with("profit", profit)
        .with("margin", margin)
        .with("region", region)
        .with("industry", industry)
        .with("segments", segments)
}

/// Customer profitability screen sample, highest margin first.
/// Margins: 40.0, 33.3, 30.0, 25.0, 20.0.
pub fn sample_customers() -> Vec<Record> {
    vec![
        customer("Acme Corp", 1_250_000.0, 750_000.0, "North America", "Technology", vec!["Enterprise", "Strategic"]),
        customer("Globex Inc", 900_000.0, 600_300.0, "Europe", "Manufacturing", vec!["Enterprise"]),
        customer("Initech", 600_000.0, 420_000.0, "North America", "Financial Services", vec!["Mid-Market", "Strategic"]),
        customer("Umbrella Ltd", 480_000.0, 360_000.0, "Asia Pacific", "Healthcare", vec!["Mid-Market"]),
        customer("Stark Retail", 350_000.0, 280_000.0, "Europe", "Retail", vec!["SMB"]),
    ]
}

// ── JSON files ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct EmployeesFile {
    employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Deserialize)]
struct CustomersFile {
    customers: Vec<Record>,
}

fn read_file(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))
}

pub fn load_employees(data_dir: &str, file_name: &str) -> anyhow::Result<Vec<EmployeeRecord>> {
    let path = format!("{data_dir}/{file_name}");
    let file: EmployeesFile = serde_json::from_str(&read_file(&path)?)?;
    log::debug!("loaded {} employees from {path}", file.employees.len());
    Ok(file.employees)
}

pub fn load_customers(data_dir: &str, file_name: &str) -> anyhow::Result<Vec<Record>> {
    let path = format!("{data_dir}/{file_name}");
    let file: CustomersFile = serde_json::from_str(&read_file(&path)?)?;
    log::debug!("loaded {} customers from {path}", file.customers.len());
    Ok(file.customers)
}

// ── Synthetic generation ─────────────────────────────────────────────────────

const DEPARTMENTS: &[&str] = &["Engineering", "Product", "Design", "Sales", "Finance", "Operations"];
const REGIONS: &[&str] = &["North America", "Europe", "Asia Pacific", "Latin America"];
const INDUSTRIES: &[&str] = &["Technology", "Manufacturing", "Financial Services", "Healthcare", "Retail"];
const SEGMENTS: &[&str] = &["Enterprise", "Mid-Market", "SMB", "Strategic"];

/// Scenario multipliers applied to the suggested baseline inputs:
/// (raise delta in points, bonus factor, benefits factor).
fn scenario_shift(scenario: &str) -> (f64, f64, f64) {
    match scenario {
        BEST_CASE  => (1.5, 1.25, 1.08),
        WORST_CASE => (-1.5, 0.5, 0.92),
        _          => (0.0, 1.0, 1.0),
    }
}

/// Suggested baseline draws for one employee, before any scenario shift.
struct BaseDraw {
    raise:     f64,
    bonus_pct: f64,
    benefits:  f64,
}

fn synthetic_inputs(base: &BaseDraw, salary: f64, scenario: &str) -> ScenarioInputs {
    let (raise_shift, bonus_factor, benefits_factor) = scenario_shift(scenario);
    let raise = (base.raise + raise_shift).max(0.0);
    let bonus = (salary * base.bonus_pct * bonus_factor / 100.0).round() * 100.0;
    let benefits = (base.benefits * benefits_factor / 10.0).round() * 10.0;
    ScenarioInputs {
        raise_percentage: TrackPair::same(raise),
        bonus:            TrackPair::same(bonus),
        monthly_benefits: TrackPair::same(benefits),
    }
}

/// `count` synthetic employees with inputs for every scenario.
/// Both tracks start equal; planners diverge them by editing.
pub fn generate_employees<S: AsRef<str>>(seed: u64, count: usize, scenarios: &[S]) -> Vec<EmployeeRecord> {
    let mut rng = RngBank::new(seed).for_slot(SeedSlot::Employees);
    (0..count)
        .map(|i| {
            let name = NameGenerator::employee_name(&mut rng);
            let salary = (rng.range_f64(60_000.0, 180_000.0) / 1_000.0).round() * 1_000.0;
            let mut e = employee(
                &format!("EMP{:03}", i + 1),
                &name,
                *rng.pick(DEPARTMENTS),
                "Staff",
                salary,
            );
            let base = draw_base(&mut rng);
            for scenario in scenarios {
                let inputs = synthetic_inputs(&base, salary, scenario.as_ref());
                e.scenarios.insert(scenario.as_ref().to_string(), inputs);
            }
            e
        })
        .collect()
}

fn draw_base(rng: &mut SeedRng) -> BaseDraw {
    BaseDraw {
        raise:     rng.stepped(2.0, 4.5, 0.5),
        bonus_pct: rng.range_f64(0.03, 0.10),
        benefits:  rng.range_f64(800.0, 1_400.0),
    }
}

/// `count` synthetic customer-profitability rows.
pub fn generate_customers(seed: u64, count: usize) -> Vec<Record> {
    let mut rng = RngBank::new(seed).for_slot(SeedSlot::Customers);
    (0..count)
        .map(|_| {
            let industry = *rng.pick(INDUSTRIES);
            let name = NameGenerator::company_name(&mut rng, industry);
            let revenue = (rng.range_f64(100_000.0, 2_000_000.0) / 1_000.0).round() * 1_000.0;
            let cost = (revenue * rng.range_f64(0.55, 0.95) / 1_000.0).round() * 1_000.0;
            let mut segments = vec![*rng.pick(SEGMENTS)];
            if rng.chance(0.25) && !segments.contains(&"Strategic") {
                segments.push("Strategic");
            }
            customer(&name, revenue, cost, *rng.pick(REGIONS), industry, segments)
        })
        .collect()
}
