//! REST calls against the backend.
//!
//! Every function converts transport and HTTP failures into an
//! `Err(String)` so no network error ever crosses a component boundary
//! unhandled; the callers turn them into toasts or inline banners.

use gloo_net::http::Request;
use serde_json::Value;

use common::record::{parse_listing, Record};
use common::request::{AdminContact, CompanyOption, DeleteRequest, NextCompanyId};
use common::schema::Team;

/// Fetches the team's full collection. Tolerates both the bare-array
/// and the enveloped response shape.
pub async fn fetch_records(team: Team) -> Result<Vec<Record>, String> {
    let response = Request::get(team.endpoint())
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let body: Value = response.json().await.map_err(|err| err.to_string())?;
    Ok(parse_listing(team, body))
}

pub async fn create_record(team: Team, body: &Value) -> Result<(), String> {
    let response = Request::post(team.endpoint())
        .json(body)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

pub async fn update_record(team: Team, id: &str, body: &Value) -> Result<(), String> {
    let response = Request::put(&format!("{}/{}", team.endpoint(), id))
        .json(body)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// One DELETE for the whole selection, ids in the body.
pub async fn delete_records(team: Team, request: &DeleteRequest) -> Result<(), String> {
    let response = Request::delete(team.endpoint())
        .json(request)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// Companies for the picker on dev/security create forms.
pub async fn fetch_companies() -> Result<Vec<CompanyOption>, String> {
    let records = fetch_records(Team::Business).await?;
    Ok(records
        .iter()
        .filter_map(|record| {
            Some(CompanyOption {
                company_id: common::record::field_str(record, "company_id")?,
                company_name: common::record::field_str(record, "company_name")?,
            })
        })
        .collect())
}

/// Auto-assignment lookup for the business form's derived company id.
pub async fn fetch_next_company_id(industry: &str) -> Result<String, String> {
    let response = Request::get(&format!(
        "{}/next-company-id?industry={}",
        Team::Business.endpoint(),
        industry
    ))
    .send()
    .await
    .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let body: NextCompanyId = response.json().await.map_err(|err| err.to_string())?;
    Ok(body.next_company_id)
}

/// Admin contacts for the manager select, filtered to one team.
pub async fn fetch_admins(team: Team) -> Result<Vec<AdminContact>, String> {
    let response = Request::get("/api/admin/list")
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let admins: Vec<AdminContact> = response.json().await.map_err(|err| err.to_string())?;
    Ok(admins
        .into_iter()
        .filter(|admin| admin.team == team.label())
        .collect())
}
