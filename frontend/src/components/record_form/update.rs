//! Update logic for the dynamic record form.
//!
//! Cross-field behavior (dependent resets, contract-period derivation,
//! phone formatting, atomic pair assignment) lives in
//! `common::form::FormModel`; this function routes messages into it and
//! reports every mutation upward through `on_change`.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::RecordFormComponent;

pub fn update(
    component: &mut RecordFormComponent,
    ctx: &Context<RecordFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetField(key, value) => {
            component.model.set(&key, &value);
            // industry drives the derived company id; the lookup is
            // fire-and-forget and its failures stay invisible — the
            // user retries by reselecting the industry
            if key == "industry" {
                if let Some(industry) = component.model.pending_company_id_lookup() {
                    let industry = industry.to_string();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        if let Ok(id) = api::fetch_next_company_id(&industry).await {
                            link.send_message(Msg::CompanyIdAssigned(id));
                        }
                    });
                }
            }
            emit(component, ctx);
            true
        }
        Msg::ChoosePeriod(days) => {
            component.model.choose_period(days);
            emit(component, ctx);
            true
        }
        Msg::SetCompanySearch(query) => {
            component.company_search = query;
            true
        }
        Msg::ChooseCompany(id) => {
            match component.companies.iter().find(|c| c.company_id == id) {
                Some(company) => {
                    component.company_search = company.company_name.clone();
                    let (id, name) = (company.company_id.clone(), company.company_name.clone());
                    component.model.choose_company(&id, &name);
                }
                None => component.model.choose_company("", ""),
            }
            emit(component, ctx);
            true
        }
        Msg::ChooseManager(name) => {
            match component.admins.iter().find(|a| a.nickname == name) {
                Some(admin) => {
                    let (name, phone) = (admin.nickname.clone(), admin.phone.clone());
                    component.model.choose_manager(&name, &phone);
                }
                None => component.model.choose_manager("", ""),
            }
            emit(component, ctx);
            true
        }
        Msg::CompaniesLoaded(companies) => {
            component.companies = companies;
            true
        }
        Msg::AdminsLoaded(admins) => {
            component.admins = admins;
            true
        }
        Msg::CompanyIdAssigned(id) => {
            component.model.assign_company_id(&id);
            emit(component, ctx);
            true
        }
    }
}

fn emit(component: &RecordFormComponent, ctx: &Context<RecordFormComponent>) {
    ctx.props().on_change.emit(component.model.clone());
}
