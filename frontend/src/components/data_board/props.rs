//! Properties of the data board.

use yew::prelude::*;

use common::schema::Team;

/// The board is mounted per team; the parent remounts it (new `key`)
/// on team switch, so `team` never changes within one instance.
#[derive(Properties, PartialEq, Clone)]
pub struct DataBoardProps {
    pub team: Team,
}
