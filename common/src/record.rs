//! Record handling: identifier normalization, cell stringification, and
//! listing payload parsing.
//!
//! Records are owned by the backend and arrive as loose JSON objects.
//! The `_id` field in particular may be a bare string or the
//! `{ "$oid": ... }` wrapper the persistence layer leaks; every outbound
//! use of an identifier goes through [`normalize_id`] first.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::schema::{ColumnSpec, FieldKind, Team};

/// One row of a team's dataset, keyed by column key.
pub type Record = Map<String, Value>;

/// Normalizes an identifier value to its bare string form.
///
/// Idempotent: a bare string comes back unchanged, `{ "$oid": s }`
/// unwraps to `s`, numbers are stringified, everything else is `None`.
pub fn normalize_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => match map.get("$oid") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        },
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Stable row identifier for selection sets: `_id`, then `id`, then
/// `company_id`, then the row index as a last resort.
pub fn record_id(record: &Record, index: usize) -> String {
    record
        .get("_id")
        .and_then(normalize_id)
        .or_else(|| record.get("id").and_then(normalize_id))
        .or_else(|| record.get("company_id").and_then(normalize_id))
        .unwrap_or_else(|| index.to_string())
}

/// The record's value at `key`, stringified. Empty strings and nulls
/// count as absent, so filters treat them uniformly.
pub fn field_str(record: &Record, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parses a calendar date from a cell value. Accepts `YYYY-MM-DD`
/// directly and ISO datetime strings by their date prefix.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    // cell values are arbitrary; byte 10 may not be a char boundary
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Cell text for the table: date columns are reformatted to
/// `YYYY-MM-DD` when the value parses, otherwise shown verbatim.
pub fn display_value(record: &Record, column: &ColumnSpec) -> String {
    let Some(raw) = field_str(record, column.key) else {
        return String::new();
    };
    if column.kind == FieldKind::Date {
        if let Some(date) = parse_date(&raw) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    raw
}

/// Extracts the record array from a list response, which is either a
/// bare JSON array or wrapped in `{ <envelope_key>: [...] }`.
pub fn parse_listing(team: Team, body: Value) -> Vec<Record> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(team.envelope_key()) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(record) => Some(record),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn normalize_is_idempotent_across_encodings() {
        let bare = normalize_id(&json!("abc")).unwrap();
        let wrapped = normalize_id(&json!({ "$oid": "abc" })).unwrap();
        assert_eq!(bare, "abc");
        assert_eq!(wrapped, "abc");
        // both forms are interchangeable as set members after normalization
        assert_eq!(normalize_id(&json!(bare.clone())).unwrap(), wrapped);
        assert_eq!(normalize_id(&json!(null)), None);
        assert_eq!(normalize_id(&json!({ "oid": "abc" })), None);
    }

    #[test]
    fn record_id_falls_back_in_order() {
        let full = record(json!({ "_id": { "$oid": "x1" }, "id": "y", "company_id": "F001" }));
        assert_eq!(record_id(&full, 7), "x1");
        let by_id = record(json!({ "id": "y", "company_id": "F001" }));
        assert_eq!(record_id(&by_id, 7), "y");
        let by_company = record(json!({ "company_id": "F001" }));
        assert_eq!(record_id(&by_company, 7), "F001");
        let bare = record(json!({ "name": "n" }));
        assert_eq!(record_id(&bare, 7), "7");
    }

    #[test]
    fn listing_accepts_envelope_and_bare_array() {
        let enveloped = json!({ "incidents": [ { "incident_no": 1 } ] });
        assert_eq!(parse_listing(Team::Security, enveloped).len(), 1);
        let bare = json!([ { "incident_no": 1 }, { "incident_no": 2 } ]);
        assert_eq!(parse_listing(Team::Security, bare).len(), 2);
        let wrong_key = json!({ "companies": [ { "incident_no": 1 } ] });
        assert!(parse_listing(Team::Security, wrong_key).is_empty());
    }

    #[test]
    fn parse_date_tolerates_arbitrary_cell_text() {
        assert_eq!(parse_date("2025-01-10"), NaiveDate::from_ymd_opt(2025, 1, 10));
        assert_eq!(parse_date("2025-01-10T09:30:00"), NaiveDate::from_ymd_opt(2025, 1, 10));
        // multibyte junk longer than ten bytes must not panic
        assert_eq!(parse_date("계약일미정보류중"), None);
        assert_eq!(parse_date("미정"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn date_cells_render_as_plain_dates() {
        let spec = crate::schema::column(Team::Business, "contract_start").unwrap();
        let row = record(json!({ "contract_start": "2025-01-10T00:00:00" }));
        assert_eq!(display_value(&row, spec), "2025-01-10");
        let junk = record(json!({ "contract_start": "soon" }));
        assert_eq!(display_value(&junk, spec), "soon");
        let missing = record(json!({}));
        assert_eq!(display_value(&missing, spec), "");
    }
}
