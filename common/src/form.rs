//! Dynamic form model for the register/edit modal.
//!
//! The model owns the editable field map for one team's record and all
//! the cross-field behavior: dependent-select resets, contract-period
//! derivation, phone reformatting, and the atomic company/manager pair
//! assignments. The frontend component is a thin renderer over this.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde_json::{Map, Value};

use crate::record::{Record, field_str, parse_date};
use crate::schema::{self, FieldKind, Team};

/// Fixed at mount: a form seeded from an existing record stays an
/// update form for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    pub team: Team,
    pub mode: FormMode,
    fields: BTreeMap<String, String>,
    period_days: Option<i64>,
}

impl FormModel {
    /// Fresh form with the team's create-mode defaults. `today` is
    /// injected by the caller so the model stays deterministic.
    pub fn create(team: Team, today: NaiveDate) -> Self {
        let mut fields = BTreeMap::new();
        for column in schema::columns_for(team) {
            fields.insert(column.key.to_string(), String::new());
        }
        let today = today.format("%Y-%m-%d").to_string();
        match team {
            Team::Business => {
                fields.insert("contract_start".into(), today);
                fields.insert("status".into(), first_status(team));
            }
            Team::Dev => {
                fields.insert("dev_start_date".into(), today);
            }
            Team::Security => {
                fields.insert("incident_date".into(), today);
                fields.insert("status".into(), first_status(team));
            }
        }
        FormModel { team, mode: FormMode::Create, fields, period_days: None }
    }

    /// Update form seeded from an existing record. Date cells are
    /// normalized to `YYYY-MM-DD` so they fit a date input.
    pub fn edit(team: Team, record: &Record) -> Self {
        let mut fields = BTreeMap::new();
        for column in schema::columns_for(team) {
            let mut value = field_str(record, column.key).unwrap_or_default();
            if column.kind == FieldKind::Date {
                if let Some(date) = parse_date(&value) {
                    value = date.format("%Y-%m-%d").to_string();
                }
            }
            fields.insert(column.key.to_string(), value);
        }
        let period_days: Option<i64> =
            field_str(record, "contract_period").and_then(|v| v.parse().ok());
        if let Some(days) = period_days {
            fields.insert("contract_period".into(), days.to_string());
        }
        FormModel { team, mode: FormMode::Update, fields, period_days }
    }

    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn period_days(&self) -> Option<i64> {
        self.period_days
    }

    /// Sets one field, applying the schema-driven side effects: phone
    /// fields are reformatted, children of a changed parent select are
    /// cleared, and a changed contract start recomputes the end date.
    pub fn set(&mut self, key: &str, value: &str) {
        let kind = schema::column(self.team, key).map(|c| c.kind);
        let value = match kind {
            Some(FieldKind::Phone) => format_phone(value),
            _ => value.to_string(),
        };
        self.fields.insert(key.to_string(), value);

        for column in schema::columns_for(self.team) {
            if let FieldKind::DependentSelect { parent } = column.kind {
                if parent == key {
                    self.fields.insert(column.key.to_string(), String::new());
                }
            }
        }

        if key == "contract_start" {
            self.recompute_contract_end();
        }
    }

    /// Picks a contract duration; derives the end date immediately when
    /// a start date is set, otherwise keeps the duration for later.
    pub fn choose_period(&mut self, days: i64) {
        self.period_days = Some(days);
        self.fields.insert("contract_period".into(), days.to_string());
        self.recompute_contract_end();
    }

    fn recompute_contract_end(&mut self) {
        let Some(days) = self.period_days else { return };
        let Some(start) = parse_date(self.get("contract_start")) else {
            return;
        };
        let end = start + Duration::days(days);
        self.fields.insert("contract_end".into(), end.format("%Y-%m-%d").to_string());
    }

    /// Sets the company id/name pair atomically (create mode only; the
    /// relationship is immutable after creation).
    pub fn choose_company(&mut self, id: &str, name: &str) {
        if self.mode == FormMode::Update {
            return;
        }
        self.fields.insert("company_id".into(), id.to_string());
        self.fields.insert("company_name".into(), name.to_string());
    }

    /// Manager pick fills name and phone together; an empty pick clears
    /// both.
    pub fn choose_manager(&mut self, name: &str, phone: &str) {
        self.fields.insert("manager_name".into(), name.to_string());
        self.fields.insert("manager_phone".into(), format_phone(phone));
    }

    /// The auto-assignment result; ignored if an id arrived in the
    /// meantime (the lookup is fire-and-forget).
    pub fn assign_company_id(&mut self, id: &str) {
        if self.get("company_id").is_empty() {
            self.fields.insert("company_id".into(), id.to_string());
        }
    }

    /// Industry to look a fresh company id up for, when the derived id
    /// field is still unset on a create form.
    pub fn pending_company_id_lookup(&self) -> Option<&str> {
        if self.mode != FormMode::Create || self.team != Team::Business {
            return None;
        }
        if !self.get("company_id").is_empty() {
            return None;
        }
        let industry = self.get("industry");
        (!industry.is_empty()).then_some(industry)
    }

    /// Request body for create/update: empty strings become JSON nulls,
    /// except empty date fields which are omitted entirely, and the
    /// contract period which goes out as a number.
    pub fn submit_body(&self) -> Value {
        let mut body = Map::new();
        for (key, value) in &self.fields {
            let kind = schema::column(self.team, key).map(|c| c.kind);
            if value.is_empty() {
                if kind != Some(FieldKind::Date) {
                    body.insert(key.clone(), Value::Null);
                }
                continue;
            }
            if key == "contract_period" {
                if let Ok(days) = value.parse::<i64>() {
                    body.insert(key.clone(), Value::from(days));
                    continue;
                }
            }
            body.insert(key.clone(), Value::String(value.clone()));
        }
        Value::Object(body)
    }
}

fn first_status(team: Team) -> String {
    schema::status_options_for(team)
        .first()
        .copied()
        .unwrap_or_default()
        .to_string()
}

/// Reformats a phone number as the user types: non-digits are stripped,
/// then the digits are regrouped as area (2 digits for Seoul's `02`,
/// 3 otherwise), middle (3–4), and a 4-digit tail.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let area_len = if digits.starts_with("02") { 2 } else { 3 };
    if digits.len() <= area_len {
        return digits;
    }
    let (area, rest) = digits.split_at(area_len);
    if rest.len() <= 4 {
        return format!("{area}-{rest}");
    }
    let (middle, tail) = rest.split_at(rest.len() - 4);
    format!("{area}-{middle}-{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn create_mode_seeds_team_defaults() {
        let form = FormModel::create(Team::Business, date("2025-06-18"));
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.get("contract_start"), "2025-06-18");
        assert_eq!(form.get("status"), "진행중");
        assert_eq!(form.get("company_id"), "");

        let security = FormModel::create(Team::Security, date("2025-06-18"));
        assert_eq!(security.get("incident_date"), "2025-06-18");
        assert_eq!(security.get("status"), "처리중");
    }

    #[test]
    fn choosing_an_os_clears_the_version() {
        let mut form = FormModel::create(Team::Dev, date("2025-06-18"));
        form.set("os", "Windows");
        form.set("os_version", "10");
        assert_eq!(form.get("os_version"), "10");
        form.set("os", "Linux");
        assert_eq!(form.get("os_version"), "");
    }

    #[test]
    fn contract_period_derives_and_tracks_the_start_date() {
        let mut form = FormModel::create(Team::Business, date("2025-01-10"));
        form.choose_period(90);
        assert_eq!(form.get("contract_end"), "2025-04-10");
        // moving the start recomputes the end with the same duration
        form.set("contract_start", "2025-02-01");
        assert_eq!(form.get("contract_end"), "2025-05-02");
    }

    #[test]
    fn period_without_a_start_waits_for_one() {
        let mut form = FormModel::create(Team::Business, date("2025-01-10"));
        form.set("contract_start", "");
        form.choose_period(30);
        assert_eq!(form.get("contract_end"), "");
        form.set("contract_start", "2025-03-01");
        assert_eq!(form.get("contract_end"), "2025-03-31");
    }

    #[test]
    fn phone_numbers_regroup_as_typed() {
        assert_eq!(format_phone("01012345678"), "010-1234-5678");
        assert_eq!(format_phone("0212345678"), "02-1234-5678");
        assert_eq!(format_phone("021234567"), "02-123-4567");
        assert_eq!(format_phone("0101"), "010-1");
        assert_eq!(format_phone("010"), "010");
        // non-digits are stripped before regrouping
        assert_eq!(format_phone("010-1234-5678"), "010-1234-5678");
        assert_eq!(format_phone("(010) 1234 5678"), "010-1234-5678");
    }

    #[test]
    fn company_pair_is_atomic_and_frozen_after_creation() {
        let mut form = FormModel::create(Team::Dev, date("2025-06-18"));
        form.choose_company("F001", "한빛은행");
        assert_eq!(form.get("company_id"), "F001");
        assert_eq!(form.get("company_name"), "한빛은행");

        let record: Record = json!({ "company_id": "F001", "company_name": "한빛은행" })
            .as_object()
            .cloned()
            .unwrap();
        let mut editing = FormModel::edit(Team::Dev, &record);
        editing.choose_company("M002", "대한정밀");
        assert_eq!(editing.get("company_id"), "F001");
    }

    #[test]
    fn company_id_lookup_fires_once_per_assignment() {
        let mut form = FormModel::create(Team::Business, date("2025-06-18"));
        assert_eq!(form.pending_company_id_lookup(), None);
        form.set("industry", "금융");
        assert_eq!(form.pending_company_id_lookup(), Some("금융"));
        form.assign_company_id("F00201");
        assert_eq!(form.pending_company_id_lookup(), None);
        // a late duplicate response must not overwrite
        form.assign_company_id("F00999");
        assert_eq!(form.get("company_id"), "F00201");
    }

    #[test]
    fn submit_body_nulls_blanks_and_omits_blank_dates() {
        let mut form = FormModel::create(Team::Business, date("2025-01-10"));
        form.set("company_name", "한빛은행");
        form.set("contract_start", "");
        form.choose_period(30);
        let body = form.submit_body();
        assert_eq!(body["company_name"], json!("한빛은행"));
        assert_eq!(body["plan"], json!(null));
        assert_eq!(body["contract_period"], json!(30));
        assert!(body.get("contract_start").is_none());
        assert!(body.get("contract_end").is_none());
    }

    #[test]
    fn editing_keeps_the_stored_contract_period() {
        let record: Record = json!({
            "_id": "x",
            "company_id": "F001",
            "contract_start": "2025-01-10",
            "contract_end": "2025-04-10",
            "contract_period": 90
        })
        .as_object()
        .cloned()
        .unwrap();
        let mut form = FormModel::edit(Team::Business, &record);
        assert_eq!(form.period_days(), Some(90));
        // an untouched update must not drop the period from the body
        assert_eq!(form.submit_body()["contract_period"], json!(90));
        // and the period still drives the end date on a new start
        form.set("contract_start", "2025-02-01");
        assert_eq!(form.get("contract_end"), "2025-05-02");
    }

    #[test]
    fn edit_mode_normalizes_datetime_cells() {
        let record: Record =
            json!({ "_id": "x", "incident_date": "2025-02-03T09:30:00", "status": "처리중" })
                .as_object()
                .cloned()
                .unwrap();
        let form = FormModel::edit(Team::Security, &record);
        assert_eq!(form.mode, FormMode::Update);
        assert_eq!(form.get("incident_date"), "2025-02-03");
        assert_eq!(form.get("status"), "처리중");
    }
}
