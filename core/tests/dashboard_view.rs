//! Dashboard view tests — filter + sort pipeline and KPI cards.

use kpidesk_core::{
    dashboard::DashboardView,
    filter::Criterion,
    seed::sample_customers,
    sort::{SortDirection, SortSpec},
};

fn visible_names(view: &DashboardView) -> Vec<String> {
    view.visible()
        .iter()
        .map(|r| r.text("customer").unwrap_or_default().to_string())
        .collect()
}

/// No filter, no sort: rows come back as loaded.
#[test]
fn untouched_view_shows_all_rows() {
    let view = DashboardView::new(sample_customers());
    assert_eq!(view.visible(), sample_customers());
}

/// Filters apply before sorting; the source rows stay intact.
#[test]
fn filter_then_sort() {
    let mut view = DashboardView::new(sample_customers());
    view.set_filter("margin", Criterion::AtLeast(30.0));
    view.toggle_sort("revenue");

    assert_eq!(visible_names(&view), vec!["Initech", "Globex Inc", "Acme Corp"]);
    assert_eq!(view.records().len(), 5);

    view.toggle_sort("revenue");
    assert_eq!(view.sort, Some(SortSpec::desc("revenue")));
    assert_eq!(visible_names(&view), vec!["Acme Corp", "Globex Inc", "Initech"]);

    view.toggle_sort("customer");
    assert_eq!(view.sort.as_ref().map(|s| s.direction), Some(SortDirection::Asc));
}

/// Sentinel dropdown values clear a filter.
#[test]
fn sentinel_clears_filter() {
    let mut view = DashboardView::new(sample_customers());
    view.set_filter("region", Criterion::Equals("Europe".into()));
    assert_eq!(view.visible().len(), 2);

    view.set_filter("region", Criterion::Equals("All Regions".into()));
    assert_eq!(view.visible().len(), 5);

    view.set_filter("industry", Criterion::Equals("Retail".into()));
    view.clear_filters();
    assert_eq!(view.visible().len(), 5);
}

/// KPI cards reflect only the visible rows.
#[test]
fn kpis_follow_filters() {
    let mut view = DashboardView::new(sample_customers());
    let all = view.kpis();
    assert_eq!(all.customer_count, 5);
    assert!((all.total_profit - 1_169_700.0).abs() < 1e-6);
    assert!((all.profit_share - 100.0).abs() < 1e-9);

    view.set_filter("region", Criterion::Equals("North America".into()));
    let na = view.kpis();
    assert_eq!(na.customer_count, 2);
    assert!((na.total_revenue - 1_850_000.0).abs() < 1e-6);
    assert!((na.total_cost - 1_170_000.0).abs() < 1e-6);
    assert!((na.avg_margin - 35.0).abs() < 1e-9);
    assert!((na.overall_margin - 680_000.0 / 1_850_000.0 * 100.0).abs() < 1e-9);
    assert!((na.profit_share - 680_000.0 / 1_169_700.0 * 100.0).abs() < 1e-9);

    view.set_filter("region", Criterion::Equals("Antarctica".into()));
    let empty = view.kpis();
    assert_eq!(empty.customer_count, 0);
    assert_eq!(empty.avg_margin, 0.0);
    assert_eq!(empty.overall_margin, 0.0);
}

/// Group breakdown over the visible rows.
#[test]
fn breakdown_by_industry() {
    let mut view = DashboardView::new(sample_customers());
    view.set_filter("segments", Criterion::Equals("Strategic".into()));
    let groups = view.breakdown("industry", "revenue");
    assert_eq!(groups.len(), 2);
    assert!((groups["Technology"].sum - 1_250_000.0).abs() < 1e-6);
    assert!((groups["Financial Services"].sum - 600_000.0).abs() < 1e-6);
}
