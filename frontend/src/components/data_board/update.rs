//! Update logic for the data board: filter/page/selection mutations and
//! the register/edit/delete workflow.
//!
//! Elm-style: receives the state, the context, and a message, mutates,
//! and returns whether to re-render. Every network completion comes
//! back as a message; no error escapes past a toast or banner.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::filter::{apply_filters, company_label_map};
use common::form::FormModel;
use common::page::Pager;
use common::record::{normalize_id, record_id};
use common::request::DeleteRequest;
use common::schema::Team;

use crate::api;
use crate::helpers::{confirm, show_toast};

use super::messages::Msg;
use super::state::{DataBoardComponent, Dropdown};

pub fn update(
    component: &mut DataBoardComponent,
    ctx: &Context<DataBoardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded { team, result } => {
            // A response for another team is stale by definition.
            if team != component.filters.team {
                return false;
            }
            component.loading = false;
            match result {
                Ok(records) => {
                    component.filters.company_labels = company_label_map(&records);
                    component.records = records;
                    component.load_error = None;
                }
                Err(message) => {
                    error!("list failed:", &message);
                    component.records = Vec::new();
                    component.load_error = Some(message);
                }
            }
            true
        }
        Msg::Reload => {
            component.loading = true;
            spawn_reload(ctx, component.filters.team);
            true
        }

        Msg::CycleDateColumn => {
            if component.filters.cycle_date_column() {
                component.pager.reset();
                return true;
            }
            false
        }
        Msg::SetYear(year) => {
            component.filters.set_year(year);
            component.active_dropdown = None;
            component.pager.reset();
            true
        }
        Msg::SetMonth(month) => {
            if component.filters.set_month(month) {
                component.active_dropdown = None;
                component.pager.reset();
                return true;
            }
            false
        }
        Msg::SetQuery(query) => {
            component.filters.query = query;
            component.pager.reset();
            true
        }
        Msg::ToggleFilterValue(column, value) => {
            component.filters.toggle_value(&column, &value);
            component.pager.reset();
            true
        }
        Msg::ClearFilterColumn(column) => {
            component.filters.clear_column(&column);
            component.active_dropdown = None;
            component.pager.reset();
            true
        }
        Msg::ResetFilters => {
            component.filters.reset();
            component.active_dropdown = None;
            component.pager.reset();
            true
        }
        Msg::ToggleDropdown(dropdown) => {
            // the month list is unreachable until a year is chosen
            if dropdown == Dropdown::Month && component.filters.year.is_none() {
                return false;
            }
            component.active_dropdown = if component.active_dropdown.as_ref() == Some(&dropdown) {
                None
            } else {
                Some(dropdown)
            };
            true
        }

        Msg::GoToPage(page) => {
            let filtered = apply_filters(&component.records, &component.filters);
            component.pager.goto(page, Pager::total_pages(filtered.len()));
            true
        }

        Msg::ToggleRow(id, checked) => {
            if checked {
                component.selected.insert(id);
            } else {
                component.selected.remove(&id);
            }
            true
        }
        Msg::ToggleAll(checked) => {
            if checked {
                component.selected = apply_filters(&component.records, &component.filters)
                    .into_iter()
                    .map(|index| record_id(&component.records[index], index))
                    .collect();
            } else {
                component.selected.clear();
            }
            true
        }

        Msg::OpenRegister => {
            component.modal_initial = None;
            component.form = None;
            component.modal_open = true;
            true
        }
        Msg::OpenEdit => {
            if component.selected.len() > 1 {
                show_toast("하나의 행만 선택해주세요.");
                return false;
            }
            let Some(selected_id) = component.selected.iter().next().cloned() else {
                show_toast("행을 선택해주세요.");
                return false;
            };
            let found = apply_filters(&component.records, &component.filters)
                .into_iter()
                .find(|index| record_id(&component.records[*index], *index) == selected_id);
            let Some(index) = found else {
                show_toast("선택한 데이터를 찾을 수 없습니다.");
                return false;
            };
            component.modal_initial = Some(component.records[index].clone());
            component.form = None;
            component.modal_open = true;
            true
        }
        Msg::CancelModal => {
            component.modal_open = false;
            component.modal_initial = None;
            component.form = None;
            true
        }
        Msg::FormChanged(model) => {
            component.form = Some(model);
            false
        }
        Msg::Submit => {
            if component.busy {
                return false;
            }
            let Some(form) = component.form.clone() else {
                return false;
            };
            let team = component.filters.team;
            if let Some(initial) = &component.modal_initial {
                let Some(id) = initial.get("_id").and_then(normalize_id) else {
                    show_toast("수정할 데이터 ID가 없습니다.");
                    return false;
                };
                component.busy = true;
                submit(ctx, team, form, Some(id));
            } else {
                component.busy = true;
                submit(ctx, team, form, None);
            }
            true
        }
        Msg::SubmitDone(result) => {
            component.busy = false;
            match result {
                Ok(()) => {
                    show_toast("저장되었습니다.");
                    component.modal_open = false;
                    component.modal_initial = None;
                    component.form = None;
                    component.selected.clear();
                    ctx.link().send_message(Msg::Reload);
                }
                Err(message) => {
                    error!("save failed:", &message);
                    show_toast("저장 중 오류가 발생했습니다.");
                }
            }
            true
        }
        Msg::Delete => {
            if component.busy {
                return false;
            }
            if component.selected.is_empty() {
                show_toast("삭제할 항목을 선택해주세요.");
                return false;
            }
            if !confirm("정말 삭제하시겠습니까?") {
                return false;
            }
            component.busy = true;
            let team = component.filters.team;
            let request = DeleteRequest::new(&component.selected);
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::DeleteDone(api::delete_records(team, &request).await));
            });
            true
        }
        Msg::DeleteDone(result) => {
            component.busy = false;
            match result {
                Ok(()) => {
                    show_toast("삭제되었습니다.");
                    component.selected.clear();
                    ctx.link().send_message(Msg::Reload);
                }
                Err(message) => {
                    error!("delete failed:", &message);
                    show_toast("삭제 중 오류가 발생했습니다.");
                }
            }
            true
        }
    }
}

pub fn spawn_reload(ctx: &Context<DataBoardComponent>, team: Team) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::fetch_records(team).await;
        link.send_message(Msg::Loaded { team, result });
    });
}

fn submit(ctx: &Context<DataBoardComponent>, team: Team, form: FormModel, id: Option<String>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let body = form.submit_body();
        let result = match id {
            Some(id) => api::update_record(team, &id, &body).await,
            None => api::create_record(team, &body).await,
        };
        link.send_message(Msg::SubmitDone(result));
    });
}
