//! Client-side filter engine for one team's loaded dataset.
//!
//! A record passes when it satisfies *every* active predicate: the
//! year/month range on the active date column, the free-text company
//! search, and each per-column selection set. Candidate option lists
//! are always derived from the full unfiltered dataset so that picking
//! a value in one dropdown does not shrink its siblings.

use std::collections::{BTreeMap, BTreeSet};

use crate::record::{Record, field_str, parse_date};
use crate::schema::{
    self, ColumnSpec, FieldKind, FREE_TEXT_COLUMN, Team, industry_label_for,
};

/// Industry label to the set of company identifiers carrying it.
/// Computed from the loaded dataset and threaded through [`FilterState`]
/// explicitly; there is no module-global copy.
pub type CompanyLabelMap = BTreeMap<String, BTreeSet<String>>;

/// All transient filter state for one table instance. Created on team
/// mount, destroyed on team switch, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub team: Team,
    pub selections: BTreeMap<String, BTreeSet<String>>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub query: String,
    pub active_date_column: Option<&'static str>,
    pub company_labels: CompanyLabelMap,
}

impl FilterState {
    pub fn new(team: Team) -> Self {
        FilterState {
            team,
            selections: BTreeMap::new(),
            year: None,
            month: None,
            query: String::new(),
            active_date_column: schema::date_columns_for(team).first().map(|c| c.key),
            company_labels: CompanyLabelMap::new(),
        }
    }

    /// Clearing or changing the year always drops the month with it.
    pub fn set_year(&mut self, year: Option<String>) {
        self.year = year;
        self.month = None;
    }

    /// A month filter is only reachable once a year is chosen.
    /// Returns whether anything changed.
    pub fn set_month(&mut self, month: Option<String>) -> bool {
        if self.year.is_none() {
            return false;
        }
        self.month = month;
        true
    }

    /// Advances the active date column round-robin and clears the
    /// year/month range. No-op with fewer than two date columns.
    pub fn cycle_date_column(&mut self) -> bool {
        let date_columns = schema::date_columns_for(self.team);
        if date_columns.len() < 2 {
            return false;
        }
        let current = self
            .active_date_column
            .and_then(|key| date_columns.iter().position(|c| c.key == key))
            .unwrap_or(0);
        self.active_date_column = Some(date_columns[(current + 1) % date_columns.len()].key);
        self.year = None;
        self.month = None;
        true
    }

    pub fn toggle_value(&mut self, column: &str, value: &str) {
        let set = self.selections.entry(column.to_string()).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.selections.remove(column);
        }
    }

    pub fn clear_column(&mut self, column: &str) {
        self.selections.remove(column);
    }

    pub fn is_selected(&self, column: &str, value: &str) -> bool {
        self.selections.get(column).is_some_and(|s| s.contains(value))
    }

    /// Whether the reset button has anything to undo.
    pub fn has_active_filters(&self) -> bool {
        self.year.is_some()
            || self.month.is_some()
            || !self.query.is_empty()
            || self.selections.values().any(|s| !s.is_empty())
    }

    pub fn reset(&mut self) {
        self.selections.clear();
        self.year = None;
        self.month = None;
        self.query.clear();
    }
}

/// Columns offered as filter dropdowns: the schema minus the per-team
/// denylist, the date columns, and the free-text search column.
pub fn filterable_columns(team: Team) -> Vec<&'static ColumnSpec> {
    let excluded = schema::excluded_filter_columns(team);
    schema::columns_for(team)
        .iter()
        .filter(|c| {
            !excluded.contains(&c.key)
                && c.kind != FieldKind::Date
                && c.key != FREE_TEXT_COLUMN
        })
        .collect()
}

/// Builds the industry-label map from the full dataset. Returned to the
/// caller to store in [`FilterState::company_labels`].
pub fn company_label_map(data: &[Record]) -> CompanyLabelMap {
    let mut map = CompanyLabelMap::new();
    for record in data {
        if let Some(id) = field_str(record, "company_id") {
            if let Some(label) = industry_label_for(&id) {
                map.entry(label.to_string()).or_default().insert(id);
            }
        }
    }
    map
}

/// Distinct option values for one filter dropdown, derived from the
/// unfiltered dataset. Numeric-looking sets sort numerically.
///
/// Two columns deviate from the plain distinct-value rule:
/// `company_id` offers the industry labels present in the data, and
/// `os_version` offers only the versions valid for the selected OS.
pub fn candidate_values(data: &[Record], state: &FilterState, column: &str) -> Vec<String> {
    if column == "company_id" {
        return state.company_labels.keys().cloned().collect();
    }
    if schema::column(state.team, column)
        .is_some_and(|c| matches!(c.kind, FieldKind::DependentSelect { parent: "os" }))
    {
        let Some(os) = state.selections.get("os").and_then(|s| s.iter().next()) else {
            return Vec::new();
        };
        return schema::os_version_options_for(os)
            .iter()
            .map(|v| v.to_string())
            .collect();
    }

    let mut values: Vec<String> = data
        .iter()
        .filter_map(|record| field_str(record, column))
        .collect();
    values.sort();
    values.dedup();
    if !values.is_empty() && values.iter().all(|v| v.parse::<f64>().is_ok()) {
        values.sort_by(|a, b| {
            a.parse::<f64>()
                .unwrap()
                .partial_cmp(&b.parse::<f64>().unwrap())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    values
}

/// Years present in the active date column, newest first.
pub fn unique_years(data: &[Record], state: &FilterState) -> Vec<String> {
    let Some(column) = state.active_date_column else {
        return Vec::new();
    };
    let mut years: Vec<String> = dates_in(data, column)
        .map(|d| d.format("%Y").to_string())
        .collect();
    years.sort();
    years.dedup();
    years.reverse();
    years
}

/// Two-digit months present in the active date column, ascending.
pub fn unique_months(data: &[Record], state: &FilterState) -> Vec<String> {
    let Some(column) = state.active_date_column else {
        return Vec::new();
    };
    let mut months: Vec<String> = dates_in(data, column)
        .map(|d| d.format("%m").to_string())
        .collect();
    months.sort();
    months.dedup();
    months
}

fn dates_in<'a>(
    data: &'a [Record],
    column: &'a str,
) -> impl Iterator<Item = chrono::NaiveDate> + 'a {
    data.iter()
        .filter_map(move |record| field_str(record, column))
        .filter_map(|raw| parse_date(&raw))
}

/// Applies the full conjunction, returning indices into `data`.
///
/// A record missing a parseable date at the active date column is
/// excluded outright, so cycling the date column can change the visible
/// set even with no other filter active.
pub fn apply_filters(data: &[Record], state: &FilterState) -> Vec<usize> {
    data.iter()
        .enumerate()
        .filter(|(_, record)| passes(record, state))
        .map(|(index, _)| index)
        .collect()
}

fn passes(record: &Record, state: &FilterState) -> bool {
    if let Some(column) = state.active_date_column {
        let Some(date) = field_str(record, column).and_then(|raw| parse_date(&raw)) else {
            return false;
        };
        if let Some(year) = &state.year {
            if date.format("%Y").to_string() != *year {
                return false;
            }
        }
        if let Some(month) = &state.month {
            if date.format("%m").to_string() != *month {
                return false;
            }
        }
    }

    if !state.query.is_empty() {
        let Some(name) = field_str(record, FREE_TEXT_COLUMN) else {
            return false;
        };
        if !name.to_lowercase().contains(&state.query.to_lowercase()) {
            return false;
        }
    }

    state.selections.iter().all(|(column, selected)| {
        if selected.is_empty() {
            return true;
        }
        let Some(value) = field_str(record, column) else {
            return false;
        };
        if column == "company_id" {
            return selected.iter().any(|label| {
                state
                    .company_labels
                    .get(label)
                    .is_some_and(|ids| ids.contains(&value))
            });
        }
        selected.contains(&value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn records(value: Value) -> Vec<Record> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => map,
                    _ => panic!("expected object"),
                })
                .collect(),
            _ => panic!("expected array"),
        }
    }

    fn security_rows() -> Vec<Record> {
        records(json!([
            { "company_id": "F001", "company_name": "한빛은행", "incident_date": "2025-01-10",
              "handled_date": "2025-01-12", "risk_level": "HIGH", "status": "처리완료" },
            { "company_id": "F002", "company_name": "누리금융", "incident_date": "2025-02-03",
              "risk_level": "LOW", "status": "처리중" },
            { "company_id": "M010", "company_name": "대한정밀", "incident_date": "2024-11-20",
              "handled_date": "2024-11-25", "risk_level": "HIGH", "status": "미처리" },
            { "company_id": "I003", "company_name": "코어소프트", "incident_date": "not a date",
              "risk_level": "MEDIUM", "status": "처리중" }
        ]))
    }

    fn state_with_labels(data: &[Record]) -> FilterState {
        let mut state = FilterState::new(Team::Security);
        state.company_labels = company_label_map(data);
        state
    }

    #[test]
    fn result_is_a_subset_satisfying_every_predicate() {
        let data = security_rows();
        let mut state = state_with_labels(&data);
        state.set_year(Some("2025".into()));
        state.toggle_value("risk_level", "HIGH");

        let kept = apply_filters(&data, &state);
        // only F001 is 2025 *and* HIGH; F002 fails the selection, M010
        // fails the year, I003 fails the date parse
        assert_eq!(kept, vec![0]);
        for index in &kept {
            assert!(*index < data.len());
        }
    }

    #[test]
    fn unparseable_date_at_active_column_excludes_the_record() {
        let data = security_rows();
        let state = state_with_labels(&data);
        // no year/month/selection active, but I003 still drops out
        assert_eq!(apply_filters(&data, &state), vec![0, 1, 2]);
    }

    #[test]
    fn cycling_the_date_column_clears_the_range_and_changes_the_view() {
        let data = security_rows();
        let mut state = state_with_labels(&data);
        state.set_year(Some("2025".into()));
        state.set_month(Some("01".into()));

        assert!(state.cycle_date_column());
        assert_eq!(state.active_date_column, Some("handled_date"));
        assert_eq!(state.year, None);
        assert_eq!(state.month, None);
        // records without a handled_date disappear
        assert_eq!(apply_filters(&data, &state), vec![0, 2]);
    }

    #[test]
    fn month_requires_year() {
        let mut state = FilterState::new(Team::Security);
        assert!(!state.set_month(Some("03".into())));
        assert_eq!(state.month, None);
        state.set_year(Some("2025".into()));
        assert!(state.set_month(Some("03".into())));
        state.set_year(None);
        assert_eq!(state.month, None);
    }

    #[test]
    fn company_code_filter_works_on_industry_labels() {
        let data = security_rows();
        let mut state = state_with_labels(&data);
        let labels = candidate_values(&data, &state, "company_id");
        assert_eq!(labels, vec!["IT", "금융", "제조"]);

        state.toggle_value("company_id", "금융");
        assert_eq!(apply_filters(&data, &state), vec![0, 1]);
    }

    #[test]
    fn free_text_query_is_case_insensitive_substring() {
        let data = records(json!([
            { "company_name": "Acme Korea", "incident_date": "2025-01-01" },
            { "company_name": "다른회사", "incident_date": "2025-01-02" }
        ]));
        let mut state = FilterState::new(Team::Security);
        state.query = "acme".into();
        assert_eq!(apply_filters(&data, &state), vec![0]);
    }

    #[test]
    fn numeric_candidates_sort_numerically() {
        let data = records(json!([
            { "handler_count": 10, "incident_date": "2025-01-01" },
            { "handler_count": 2, "incident_date": "2025-01-01" },
            { "handler_count": "7", "incident_date": "2025-01-01" },
            { "handler_count": 2, "incident_date": "2025-01-01" }
        ]));
        let state = FilterState::new(Team::Security);
        assert_eq!(candidate_values(&data, &state, "handler_count"), vec!["2", "7", "10"]);
    }

    #[test]
    fn os_version_candidates_follow_the_selected_os() {
        let data = records(json!([
            { "os": "Windows", "os_version": "10", "dev_start_date": "2025-01-01" }
        ]));
        let mut state = FilterState::new(Team::Dev);
        assert!(candidate_values(&data, &state, "os_version").is_empty());
        state.toggle_value("os", "iOS");
        assert_eq!(candidate_values(&data, &state, "os_version"), vec!["15", "16", "17"]);
    }

    #[test]
    fn years_descend_and_months_ascend() {
        let data = security_rows();
        let state = state_with_labels(&data);
        assert_eq!(unique_years(&data, &state), vec!["2025", "2024"]);
        assert_eq!(unique_months(&data, &state), vec!["01", "02", "11"]);
    }

    #[test]
    fn filterable_columns_omit_denylist_dates_and_search_column() {
        let keys: Vec<_> = filterable_columns(Team::Security).iter().map(|c| c.key).collect();
        assert!(!keys.contains(&"incident_no"));
        assert!(!keys.contains(&"incident_date"));
        assert!(!keys.contains(&"company_name"));
        assert!(keys.contains(&"risk_level"));

        let biz: Vec<_> = filterable_columns(Team::Business).iter().map(|c| c.key).collect();
        assert!(!biz.contains(&"manager_phone"));
        assert!(!biz.contains(&"industry"));
    }

    #[test]
    fn reset_covers_every_kind_of_active_filter() {
        let mut state = FilterState::new(Team::Security);
        assert!(!state.has_active_filters());

        state.query = "한빛".into();
        assert!(state.has_active_filters());
        state.reset();
        assert!(!state.has_active_filters());
        assert!(state.query.is_empty());

        state.set_year(Some("2025".into()));
        state.toggle_value("risk_level", "HIGH");
        assert!(state.has_active_filters());
        state.reset();
        assert!(!state.has_active_filters());
    }

    #[test]
    fn empty_value_at_a_filtered_column_is_excluded() {
        let data = records(json!([
            { "status": "", "incident_date": "2025-01-01" },
            { "status": "처리중", "incident_date": "2025-01-01" }
        ]));
        let mut state = FilterState::new(Team::Security);
        state.toggle_value("status", "처리중");
        assert_eq!(apply_filters(&data, &state), vec![1]);
    }
}
