//! View rendering for the data board: date/column filter dropdowns,
//! the record table with row selection, pagination, the fixed action
//! buttons, and the register/edit modal.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::filter::{
    apply_filters, candidate_values, filterable_columns, unique_months, unique_years,
};
use common::page::Pager;
use common::record::{display_value, record_id};
use common::schema;

use crate::components::record_form::RecordFormComponent;

use super::messages::Msg;
use super::state::{DataBoardComponent, Dropdown};

pub fn view(component: &DataBoardComponent, ctx: &Context<DataBoardComponent>) -> Html {
    if component.loading {
        return html! { <div class="data-board-loading">{"로딩 중..."}</div> };
    }
    let link = ctx.link();
    let team = component.filters.team;
    let filtered = apply_filters(&component.records, &component.filters);

    html! {
        <div class="data-board">
            <h2 class="data-board-title">{ format!("{} 데이터", team.label()) }</h2>
            {
                if let Some(message) = &component.load_error {
                    html! {
                        <div class="data-board-error">
                            { format!("데이터를 불러오지 못했습니다: {message}") }
                            <button onclick={link.callback(|_| Msg::Reload)}>{"다시 시도"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            { build_date_filters(component, link) }
            { build_filter_row(component, link, filtered.len()) }
            { build_table(component, link, &filtered) }
            { build_pagination(component, link, filtered.len()) }
            { build_action_buttons(component, link) }
            { build_modal(component, link) }
        </div>
    }
}

/// Active-date-column cycle button plus the year and month dropdowns.
fn build_date_filters(component: &DataBoardComponent, link: &Scope<DataBoardComponent>) -> Html {
    let filters = &component.filters;
    let date_label = filters
        .active_date_column
        .and_then(|key| schema::column(filters.team, key))
        .map(|c| c.label)
        .unwrap_or("날짜 컬럼");

    let year_open = component.active_dropdown == Some(Dropdown::Year);
    let month_open = component.active_dropdown == Some(Dropdown::Month);

    html! {
        <div class="data-board-date-filters">
            <button class="data-board-btn selected" onclick={link.callback(|_| Msg::CycleDateColumn)}>
                { date_label }
            </button>

            <div class="data-board-dropdown">
                <button
                    class={classes!("data-board-btn", filters.year.is_some().then_some("selected"))}
                    onclick={link.callback(|_| Msg::ToggleDropdown(Dropdown::Year))}
                >
                    { format!("{} ▼", filters.year.clone().unwrap_or_else(|| "연도 선택".into())) }
                </button>
                {
                    if year_open {
                        let years = unique_years(&component.records, filters);
                        html! {
                            <div class="data-board-dropdown-list">
                                <button onclick={link.callback(|_| Msg::SetYear(None))}>{"모두 보기"}</button>
                                {
                                    for years.into_iter().map(|year| {
                                        let value = year.clone();
                                        html! {
                                            <button onclick={link.callback(move |_| Msg::SetYear(Some(value.clone())))}>
                                                { year }
                                            </button>
                                        }
                                    })
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="data-board-dropdown">
                <button
                    class={classes!("data-board-btn", filters.month.is_some().then_some("selected"))}
                    disabled={filters.year.is_none()}
                    onclick={link.callback(|_| Msg::ToggleDropdown(Dropdown::Month))}
                >
                    {
                        match &filters.month {
                            Some(month) => format!("{month}월 ▼"),
                            None => "월 선택 ▼".to_string(),
                        }
                    }
                </button>
                {
                    if month_open {
                        let months = unique_months(&component.records, filters);
                        html! {
                            <div class="data-board-dropdown-list">
                                <button onclick={link.callback(|_| Msg::SetMonth(None))}>{"모두 보기"}</button>
                                {
                                    for months.into_iter().map(|month| {
                                        let value = month.clone();
                                        html! {
                                            <button onclick={link.callback(move |_| Msg::SetMonth(Some(value.clone())))}>
                                                { format!("{month}월") }
                                            </button>
                                        }
                                    })
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

/// Per-column filter dropdowns, the reset button, the free-text search
/// box, and the filtered total.
fn build_filter_row(
    component: &DataBoardComponent,
    link: &Scope<DataBoardComponent>,
    total: usize,
) -> Html {
    let filters = &component.filters;
    html! {
        <div class="data-board-filter-row">
            <div class="data-board-filter-group">
                {
                    for filterable_columns(filters.team).iter().map(|column| {
                        let key = column.key.to_string();
                        let open = component.active_dropdown == Some(Dropdown::Column(key.clone()));
                        let active = filters.selections.get(column.key).is_some_and(|s| !s.is_empty());
                        let toggle_key = key.clone();
                        html! {
                            <div class="data-board-dropdown">
                                <button
                                    class={classes!("data-board-btn", active.then_some("selected"))}
                                    onclick={link.callback(move |_| Msg::ToggleDropdown(Dropdown::Column(toggle_key.clone())))}
                                >
                                    { format!("{} ▼", column.label) }
                                </button>
                                { if open { build_checkbox_list(component, link, column.key) } else { html! {} } }
                            </div>
                        }
                    })
                }
                {
                    if filters.has_active_filters() {
                        html! {
                            <button class="data-board-reset-btn" onclick={link.callback(|_| Msg::ResetFilters)}>
                                {"초기화"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="data-board-search-area">
                <span class="data-board-total">{ format!("총 개수 : {total}개") }</span>
                <input
                    type="text"
                    placeholder="회사명 검색"
                    value={filters.query.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetQuery(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
        </div>
    }
}

fn build_checkbox_list(
    component: &DataBoardComponent,
    link: &Scope<DataBoardComponent>,
    column: &str,
) -> Html {
    let values = candidate_values(&component.records, &component.filters, column);
    let column_owned = column.to_string();
    html! {
        <div class="data-board-dropdown-list">
            <button onclick={link.callback(move |_| Msg::ClearFilterColumn(column_owned.clone()))}>
                {"모두 보기"}
            </button>
            {
                for values.into_iter().map(|value| {
                    let checked = component.filters.is_selected(column, &value);
                    let column = column.to_string();
                    let toggled = value.clone();
                    html! {
                        <label class="data-board-checkbox">
                            <input
                                type="checkbox"
                                checked={checked}
                                onchange={link.callback(move |_| {
                                    Msg::ToggleFilterValue(column.clone(), toggled.clone())
                                })}
                            />
                            { if value.is_empty() { "(비어있음)".to_string() } else { value } }
                        </label>
                    }
                })
            }
        </div>
    }
}

fn build_table(
    component: &DataBoardComponent,
    link: &Scope<DataBoardComponent>,
    filtered: &[usize],
) -> Html {
    let team = component.filters.team;
    let columns = schema::columns_for(team);
    let all_selected = !filtered.is_empty()
        && filtered
            .iter()
            .all(|index| component.selected.contains(&record_id(&component.records[*index], *index)));

    html! {
        <table class="data-board-table">
            <thead>
                <tr>
                    <th>
                        <input
                            type="checkbox"
                            checked={all_selected}
                            onchange={link.callback(|e: Event| {
                                Msg::ToggleAll(e.target_unchecked_into::<HtmlInputElement>().checked())
                            })}
                        />
                    </th>
                    { for columns.iter().map(|column| html! { <th>{ column.label }</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for component.pager.slice(filtered).iter().map(|index| {
                        let record = &component.records[*index];
                        let row_id = record_id(record, *index);
                        let checked = component.selected.contains(&row_id);
                        let toggle_id = row_id.clone();
                        html! {
                            <tr key={row_id.clone()}>
                                <td>
                                    <input
                                        type="checkbox"
                                        checked={checked}
                                        onchange={link.callback(move |e: Event| {
                                            let on = e.target_unchecked_into::<HtmlInputElement>().checked();
                                            Msg::ToggleRow(toggle_id.clone(), on)
                                        })}
                                    />
                                </td>
                                {
                                    for columns.iter().map(|column| html! {
                                        <td>{ display_value(record, column) }</td>
                                    })
                                }
                            </tr>
                        }
                    })
                }
            </tbody>
        </table>
    }
}

fn build_pagination(
    component: &DataBoardComponent,
    link: &Scope<DataBoardComponent>,
    filtered_count: usize,
) -> Html {
    let total = Pager::total_pages(filtered_count);
    let (start, end) = component.pager.window(total);
    html! {
        <div class="data-board-pagination">
            {
                if start > 1 {
                    let target = start - 1;
                    html! {
                        <button onclick={link.callback(move |_| Msg::GoToPage(target))}>{"<"}</button>
                    }
                } else {
                    html! {}
                }
            }
            {
                for (start..=end).map(|page| {
                    let class = if page == component.pager.current() {
                        "data-board-page-btn active"
                    } else {
                        "data-board-page-btn"
                    };
                    html! {
                        <button class={class} onclick={link.callback(move |_| Msg::GoToPage(page))}>
                            { page }
                        </button>
                    }
                })
            }
            {
                if end < total {
                    let target = end + 1;
                    html! {
                        <button onclick={link.callback(move |_| Msg::GoToPage(target))}>{">"}</button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_action_buttons(component: &DataBoardComponent, link: &Scope<DataBoardComponent>) -> Html {
    html! {
        <div class="data-board-fixed-buttons">
            <button onclick={link.callback(|_| Msg::OpenRegister)}>{"등록"}</button>
            <button onclick={link.callback(|_| Msg::OpenEdit)}>{"수정"}</button>
            <button
                disabled={component.selected.is_empty() || component.busy}
                onclick={link.callback(|_| Msg::Delete)}
            >
                {"삭제"}
            </button>
        </div>
    }
}

fn build_modal(component: &DataBoardComponent, link: &Scope<DataBoardComponent>) -> Html {
    if !component.modal_open {
        return html! {};
    }
    let team = component.filters.team;
    let title = if component.modal_initial.is_some() { "수정" } else { "등록" };
    html! {
        <div class="data-board-modal-overlay">
            <div class="data-board-modal">
                <div class="data-board-modal-title">
                    { format!("{title} - {}", team.label()) }
                </div>
                <RecordFormComponent
                    team={team}
                    initial={component.modal_initial.clone()}
                    on_change={link.callback(Msg::FormChanged)}
                />
                <div class="data-board-modal-buttons">
                    <button disabled={component.busy} onclick={link.callback(|_| Msg::Submit)}>
                        { title }
                    </button>
                    <button onclick={link.callback(|_| Msg::CancelModal)}>{"취소"}</button>
                </div>
            </div>
        </div>
    }
}
