//! Per-screen view state for the table-style dashboards.
//!
//! Each screen owns one `DashboardView`: its rows, the current filter and
//! sort selection, and nothing else. There is no shared dashboard state.
//! The visible rows and KPI cards are recomputed from scratch on every call.

use crate::{
    aggregator::{group_totals, mean_field, share_pct, sum_field, GroupTotal},
    filter::{filter, Criterion, FilterSpec},
    record::Record,
    sort::{sort, SortSpec},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Figures behind the KPI cards of the customer-profitability screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityKpis {
    pub customer_count: usize,
    pub total_revenue:  f64,
    pub total_cost:     f64,
    pub total_profit:   f64,
    /// Unweighted mean of the per-customer margin column.
    pub avg_margin:     f64,
    /// Profit over revenue across the visible rows, in percent.
    pub overall_margin: f64,
    /// Visible profit as a share of the unfiltered total, in percent.
    pub profit_share:   f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    records: Vec<Record>,
    pub filter: FilterSpec,
    pub sort:   Option<SortSpec>,
}

impl DashboardView {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            filter: FilterSpec::new(),
            sort: None,
        }
    }

    pub fn with_sentinel(mut self, prefix: &str) -> Self {
        self.filter = self.filter.with_sentinel(prefix);
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn set_filter(&mut self, field: &str, criterion: Criterion) {
        self.filter.set(field, criterion);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear_all();
    }

    /// Header click on `key`.
    pub fn toggle_sort(&mut self, key: &str) {
        match self.sort.as_mut() {
            Some(spec) => spec.toggle(key),
            None => self.sort = Some(SortSpec::asc(key)),
        }
    }

    /// Rows after filtering, then sorting.
    pub fn visible(&self) -> Vec<Record> {
        let kept = filter(&self.records, &self.filter);
        match &self.sort {
            Some(spec) => sort(&kept, spec),
            None => kept,
        }
    }

    pub fn kpis(&self) -> ProfitabilityKpis {
        let rows = self.visible();
        let total_revenue = sum_field(&rows, "revenue");
        let total_profit = sum_field(&rows, "profit");
        ProfitabilityKpis {
            customer_count: rows.len(),
            total_revenue,
            total_cost: sum_field(&rows, "cost"),
            total_profit,
            avg_margin: mean_field(&rows, "margin"),
            overall_margin: share_pct(total_profit, total_revenue),
            profit_share: share_pct(total_profit, sum_field(&self.records, "profit")),
        }
    }

    /// Visible rows grouped by `group_field`, totalling `value_field`.
    pub fn breakdown(&self, group_field: &str, value_field: &str) -> BTreeMap<String, GroupTotal> {
        group_totals(&self.visible(), group_field, value_field)
    }
}
