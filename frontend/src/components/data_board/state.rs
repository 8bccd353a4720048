//! Component state for the data board.

use std::collections::BTreeSet;

use common::filter::FilterState;
use common::form::FormModel;
use common::page::Pager;
use common::record::Record;
use common::schema::Team;

/// Which dropdown is currently open; at most one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropdown {
    Year,
    Month,
    Column(String),
}

pub struct DataBoardComponent {
    /// Loaded dataset for this team, replaced wholesale on every
    /// refresh; never patched incrementally.
    pub records: Vec<Record>,
    pub loading: bool,
    pub load_error: Option<String>,

    pub filters: FilterState,
    pub pager: Pager,

    /// Checked row ids, pending a bulk edit or delete. Survives filter
    /// and page changes; cleared on successful mutations.
    pub selected: BTreeSet<String>,

    pub active_dropdown: Option<Dropdown>,

    /// Register/edit modal: `None` while idle. The seeded record is
    /// kept for the update PUT's identifier.
    pub modal_initial: Option<Record>,
    pub modal_open: bool,
    /// Latest form snapshot reported by the form component.
    pub form: Option<FormModel>,

    /// In-flight mutation guard: submit/delete controls are disabled
    /// while a request is pending.
    pub busy: bool,

    /// One-time first-render load guard.
    pub loaded: bool,
}

impl DataBoardComponent {
    pub fn new(team: Team) -> Self {
        DataBoardComponent {
            records: Vec::new(),
            loading: true,
            load_error: None,
            filters: FilterState::new(team),
            pager: Pager::new(),
            selected: BTreeSet::new(),
            active_dropdown: None,
            modal_initial: None,
            modal_open: false,
            form: None,
            busy: false,
            loaded: false,
        }
    }
}
