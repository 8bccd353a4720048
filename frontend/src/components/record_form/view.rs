//! View rendering for the dynamic record form.
//!
//! Fields are rendered in schema order, dispatched on the column's
//! `FieldKind`; the company id/name pair renders as one picker block
//! and the business form gets the contract-period shortcut buttons
//! between the start and end dates.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::form::{FormMode, FormModel};
use common::schema::{self, ColumnSpec, FieldKind, Team, CONTRACT_PERIODS};

use super::messages::Msg;
use super::state::RecordFormComponent;

pub fn view(component: &RecordFormComponent, ctx: &Context<RecordFormComponent>) -> Html {
    let link = ctx.link();
    let team = component.model.team;
    html! {
        <div class="record-form-grid">
            {
                for schema::columns_for(team).iter().map(|column| {
                    build_field(component, link, column)
                })
            }
        </div>
    }
}

fn build_field(
    component: &RecordFormComponent,
    link: &Scope<RecordFormComponent>,
    column: &'static ColumnSpec,
) -> Html {
    let model = &component.model;
    match column.kind {
        // the pair renders once, at the id column
        FieldKind::CompanyRef if column.key == "company_name" => html! {},
        FieldKind::CompanyRef => build_company_picker(component, link),
        FieldKind::Derived => html! {
            <div class="record-form-field">
                <label>{ column.label }</label>
                <input
                    type="text"
                    value={model.get(column.key).to_string()}
                    placeholder="업종을 선택하면 자동 입력"
                    readonly=true
                />
            </div>
        },
        FieldKind::Select(vocab) => build_select(
            link,
            column,
            model.get(column.key),
            schema::select_options_for(vocab).iter().map(|v| v.to_string()).collect(),
            false,
        ),
        FieldKind::DependentSelect { parent } => {
            let chosen = model.get(parent);
            build_select(
                link,
                column,
                model.get(column.key),
                schema::os_version_options_for(chosen)
                    .iter()
                    .map(|v| v.to_string())
                    .collect(),
                chosen.is_empty(),
            )
        }
        FieldKind::ManagerRef => build_manager_select(component, link, column),
        FieldKind::Phone => build_input(link, column, model, "text"),
        FieldKind::Date => {
            // the business end date is derived from the period buttons
            let derived_end = model.team == Team::Business && column.key == "contract_end";
            if derived_end {
                html! {
                    <>
                        { build_period_buttons(component, link) }
                        <div class="record-form-field">
                            <label>
                                { column.label }
                                <span class="record-form-hint">{" (기간 선택시 자동 입력)"}</span>
                            </label>
                            <input type="date" value={model.get(column.key).to_string()} readonly=true />
                        </div>
                    </>
                }
            } else {
                build_input(link, column, model, "date")
            }
        }
        FieldKind::Text => build_input(link, column, model, "text"),
    }
}

fn build_input(
    link: &Scope<RecordFormComponent>,
    column: &'static ColumnSpec,
    model: &FormModel,
    input_type: &'static str,
) -> Html {
    let key = column.key;
    html! {
        <div class="record-form-field">
            <label>{ column.label }</label>
            <input
                type={input_type}
                value={model.get(key).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::SetField(key.to_string(), value)
                })}
            />
        </div>
    }
}

fn build_select(
    link: &Scope<RecordFormComponent>,
    column: &'static ColumnSpec,
    current: &str,
    options: Vec<String>,
    disabled: bool,
) -> Html {
    let key = column.key;
    html! {
        <div class="record-form-field">
            <label>{ column.label }</label>
            <select
                value={current.to_string()}
                disabled={disabled}
                onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    Msg::SetField(key.to_string(), value)
                })}
            >
                <option value="" selected={current.is_empty()}>{"선택"}</option>
                {
                    for options.into_iter().map(|option| {
                        let selected = option == current;
                        html! { <option value={option.clone()} selected={selected}>{ option }</option> }
                    })
                }
            </select>
        </div>
    }
}

/// Company id/name pair: a substring search plus picker in create mode,
/// read-only display in update mode (the reference is frozen).
fn build_company_picker(
    component: &RecordFormComponent,
    link: &Scope<RecordFormComponent>,
) -> Html {
    let model = &component.model;
    if model.mode == FormMode::Update {
        return html! {
            <>
                <div class="record-form-field">
                    <label>{"회사코드"}</label>
                    <input type="text" value={model.get("company_id").to_string()} readonly=true />
                </div>
                <div class="record-form-field">
                    <label>{"회사명"}</label>
                    <input type="text" value={model.get("company_name").to_string()} readonly=true />
                </div>
            </>
        };
    }

    let query = component.company_search.clone();
    let current = model.get("company_id");
    html! {
        <>
            <div class="record-form-field">
                <label>{"회사명 검색"}</label>
                <input
                    type="text"
                    placeholder="회사명 검색"
                    value={query.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetCompanySearch(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <div class="record-form-field">
                <label>{"회사 선택"}</label>
                <select
                    value={current.to_string()}
                    onchange={link.callback(|e: Event| {
                        Msg::ChooseCompany(e.target_unchecked_into::<HtmlSelectElement>().value())
                    })}
                >
                    <option value="" selected={current.is_empty()}>{"선택"}</option>
                    {
                        for component
                            .companies
                            .iter()
                            .filter(|c| c.company_name.contains(&query))
                            .map(|c| {
                                let selected = c.company_id == current;
                                html! {
                                    <option value={c.company_id.clone()} selected={selected}>
                                        { c.company_name.clone() }
                                    </option>
                                }
                            })
                    }
                </select>
            </div>
        </>
    }
}

fn build_manager_select(
    component: &RecordFormComponent,
    link: &Scope<RecordFormComponent>,
    column: &'static ColumnSpec,
) -> Html {
    let current = component.model.get(column.key);
    html! {
        <div class="record-form-field">
            <label>{ column.label }</label>
            <select
                value={current.to_string()}
                onchange={link.callback(|e: Event| {
                    Msg::ChooseManager(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value="" selected={current.is_empty()}>{"선택"}</option>
                {
                    for component.admins.iter().map(|admin| {
                        let selected = admin.nickname == current;
                        html! {
                            <option value={admin.nickname.clone()} selected={selected}>
                                { admin.nickname.clone() }
                            </option>
                        }
                    })
                }
            </select>
        </div>
    }
}

fn build_period_buttons(
    component: &RecordFormComponent,
    link: &Scope<RecordFormComponent>,
) -> Html {
    let chosen = component.model.period_days();
    html! {
        <div class="record-form-field">
            <label>{"계약 기간"}</label>
            <div class="record-form-period-row">
                {
                    for CONTRACT_PERIODS.iter().map(|(days, label)| {
                        let days = *days;
                        let class = if chosen == Some(days) {
                            "record-form-period-btn selected"
                        } else {
                            "record-form-period-btn"
                        };
                        html! {
                            <button
                                type="button"
                                class={class}
                                onclick={link.callback(move |_| Msg::ChoosePeriod(days))}
                            >
                                { *label }
                            </button>
                        }
                    })
                }
            </div>
        </div>
    }
}
