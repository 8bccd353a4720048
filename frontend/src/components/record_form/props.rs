//! Properties of the dynamic record form.

use yew::prelude::*;

use common::form::FormModel;
use common::record::Record;
use common::schema::Team;

/// A non-empty `initial` puts the form in update mode for its whole
/// lifetime; switching modes requires a remount. Every field mutation
/// reports the full form snapshot through `on_change`.
#[derive(Properties, PartialEq, Clone)]
pub struct RecordFormProps {
    pub team: Team,
    #[prop_or_default]
    pub initial: Option<Record>,
    pub on_change: Callback<FormModel>,
}
