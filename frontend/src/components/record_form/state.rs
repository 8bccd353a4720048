//! Component state for the dynamic record form.

use common::form::FormModel;
use common::request::{AdminContact, CompanyOption};

pub struct RecordFormComponent {
    pub model: FormModel,
    /// Companies offered by the picker on dev/security create forms.
    pub companies: Vec<CompanyOption>,
    /// Substring typed into the company search box.
    pub company_search: String,
    /// Admin contacts behind the manager select (business form).
    pub admins: Vec<AdminContact>,
    /// Guard for the one-time first-render fetches.
    pub loaded: bool,
}
