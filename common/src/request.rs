//! Wire payloads shared between the board and the REST backend.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Body of the bulk delete: one request for the whole selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteRequest {
    pub ids: Vec<String>,
}

impl DeleteRequest {
    pub fn new(selection: &BTreeSet<String>) -> Self {
        DeleteRequest { ids: selection.iter().cloned().collect() }
    }
}

/// Response of the next-company-id auto-assignment lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct NextCompanyId {
    pub next_company_id: String,
}

/// One entry of the company picker on the dev/security forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyOption {
    pub company_id: String,
    pub company_name: String,
}

/// One admin account, used for the manager auto-fill select.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminContact {
    pub nickname: String,
    pub phone: String,
    #[serde(default)]
    pub team: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_body_carries_every_selected_id_once() {
        let selection: BTreeSet<String> = ["b", "a", "b"].iter().map(|s| s.to_string()).collect();
        let request = DeleteRequest::new(&selection);
        assert_eq!(request.ids, vec!["a", "b"]);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({ "ids": ["a", "b"] }));
    }
}
