use common::form::FormModel;
use common::record::Record;
use common::schema::Team;

use super::state::Dropdown;

pub enum Msg {
    /// List response, tagged with the team it was issued for so a stale
    /// response arriving after a team switch is discarded.
    Loaded { team: Team, result: Result<Vec<Record>, String> },
    Reload,

    CycleDateColumn,
    SetYear(Option<String>),
    SetMonth(Option<String>),
    SetQuery(String),
    ToggleFilterValue(String, String),
    ClearFilterColumn(String),
    ResetFilters,
    ToggleDropdown(Dropdown),

    GoToPage(usize),

    ToggleRow(String, bool),
    ToggleAll(bool),

    OpenRegister,
    OpenEdit,
    CancelModal,
    FormChanged(FormModel),
    Submit,
    SubmitDone(Result<(), String>),
    Delete,
    DeleteDone(Result<(), String>),
}
