//! desk-runner: headless driver for the KPI Desk metrics library.
//!
//! Usage:
//!   desk-runner --data-dir ./data
//!   desk-runner --seed 12345 --rows 40
//!   desk-runner --ipc-mode < commands.jsonl

use anyhow::Result;
use kpidesk_core::{
    aggregator::{Totals, Variance},
    command::DeskCommand,
    config::DeskConfig,
    dashboard::{DashboardView, ProfitabilityKpis},
    event::DeskEvent,
    record::Record,
    scenario::{ResolverState, ScenarioResolver},
    seed,
    snapshot::VersionSummary,
    sort::SortSpec,
};
use std::collections::BTreeMap;
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Serialize)]
struct UiState {
    scenario_state:  ResolverState,
    pending_switch:  Option<String>,
    totals:          Totals,
    all_totals:      BTreeMap<String, Totals>,
    variance:        Variance,
    history:         Vec<VersionSummary>,
    customers:       Vec<Record>,
    sort:            Option<SortSpec>,
    kpis:            ProfitabilityKpis,
    events:          Vec<DeskEvent>,
}

struct Session {
    resolver:  ScenarioResolver,
    customers: DashboardView,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let rows = parse_arg(&args, "--rows", 0usize);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    let config = DeskConfig::load(data_dir)?;

    if !ipc_mode {
        println!("KPI Desk — desk-runner");
        println!("  data_dir:  {data_dir}");
        println!("  scenarios: {}", config.scenarios.join(", "));
        if rows > 0 {
            println!("  synthetic: {rows} rows, seed {seed}");
        }
        println!();
    }

    let (employees, customers) = if rows > 0 {
        (
            seed::generate_employees(seed, rows, &config.scenarios),
            seed::generate_customers(seed, rows),
        )
    } else {
        (
            seed::load_employees(data_dir, &config.seed_files.employees)?,
            seed::load_customers(data_dir, &config.seed_files.customers)?,
        )
    };

    let mut session = Session {
        resolver: ScenarioResolver::from_config(&config, employees)?,
        customers: DashboardView::new(customers).with_sentinel(&config.filter_sentinel_prefix),
    };

    if ipc_mode {
        run_ipc_loop(&mut session)?;
    } else {
        print_summary(&session);
    }

    Ok(())
}

fn run_ipc_loop(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: DeskCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("unparseable command: {e}");
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        if cmd == DeskCommand::Quit {
            break;
        }

        match handle_command(session, cmd) {
            Ok(()) => {
                let state = build_ui_state(session);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            Err(e) => {
                log::warn!("command rejected: {e}");
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{}", err_json)?;
    out.flush()?;
    Ok(())
}

fn handle_command(session: &mut Session, cmd: DeskCommand) -> Result<()> {
    let resolver = &mut session.resolver;
    match cmd {
        DeskCommand::GetState => {}
        DeskCommand::SetFilter { field, criterion } => session.customers.set_filter(&field, criterion),
        DeskCommand::ClearFilters => session.customers.clear_filters(),
        DeskCommand::Sort { key } => session.customers.toggle_sort(&key),
        DeskCommand::Edit { record_id, field, value } => resolver.edit_text(&record_id, field, &value)?,
        DeskCommand::SwitchScenario { scenario } => {
            let outcome = resolver.request_switch(&scenario)?;
            log::debug!("switch to '{scenario}': {outcome:?}");
        }
        DeskCommand::ConfirmSwitch => {
            resolver.confirm_switch()?;
        }
        DeskCommand::CancelSwitch => resolver.cancel_switch(),
        DeskCommand::DiscardEdits => resolver.discard_edits(),
        DeskCommand::Save { label } => {
            resolver.save(label.as_deref());
        }
        DeskCommand::RestoreVersion { version } => resolver.restore_version(version)?,
        DeskCommand::Import { rows } => {
            resolver.merge_import(&rows);
        }
        DeskCommand::Quit => {}
    }
    Ok(())
}

fn build_ui_state(session: &mut Session) -> UiState {
    let resolver = &mut session.resolver;
    let events = resolver.take_events();
    for event in &events {
        log::debug!("event: {}", event.type_name());
    }

    UiState {
        scenario_state: resolver.state(),
        pending_switch: resolver.pending_switch().map(String::from),
        totals:         resolver.totals(),
        all_totals:     resolver.all_totals(),
        variance:       resolver.variance(),
        history:        resolver.history_summary(),
        customers:      session.customers.visible(),
        sort:           session.customers.sort.clone(),
        kpis:           session.customers.kpis(),
        events,
    }
}

fn print_summary(session: &Session) {
    let resolver = &session.resolver;

    println!("=== COMPENSATION (Quarterly) ===");
    println!("  employees:       {}", resolver.records().len());
    println!("  active scenario: {}", resolver.active_scenario());
    for (scenario, totals) in resolver.all_totals() {
        println!(
            "  {:<12} | AI: ${:>12.0} | Plan: ${:>12.0} | M1: ${:.0} M2: ${:.0} M3: ${:.0}",
            scenario, totals.ai.total, totals.user.total, totals.user.m1, totals.user.m2, totals.user.m3
        );
    }
    let variance = resolver.variance();
    println!("  variance (plan - ai): ${:.0} ({:?})", variance.amount, variance.sign);

    println!();
    println!("=== CUSTOMER PROFITABILITY ===");
    let kpis = session.customers.kpis();
    println!("  customers:      {}", kpis.customer_count);
    println!("  revenue:        ${:.0}", kpis.total_revenue);
    println!("  profit:         ${:.0}", kpis.total_profit);
    println!("  avg margin:     {:.1}%", kpis.avg_margin);
    println!("  overall margin: {:.1}%", kpis.overall_margin);
    for (region, group) in session.customers.breakdown("region", "profit") {
        println!("  {:<16} {:>3} customers | profit ${:.0}", region, group.count, group.sum);
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
