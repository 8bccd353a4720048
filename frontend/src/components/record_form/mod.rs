//! Dynamic record form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, and view
//! rendering.
//!
//! The form is stateless toward the server; it only assembles a
//! `FormModel` and reports it upward. Submission belongs to the board
//! that mounts it.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::form::{FormMode, FormModel};
use common::schema::Team;

use crate::api;
use crate::helpers;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RecordFormProps;
pub use state::RecordFormComponent;

impl Component for RecordFormComponent {
    type Message = Msg;
    type Properties = RecordFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let model = match &props.initial {
            Some(record) if !record.is_empty() => FormModel::edit(props.team, record),
            _ => FormModel::create(props.team, helpers::today()),
        };
        RecordFormComponent {
            model,
            companies: Vec::new(),
            company_search: String::new(),
            admins: Vec::new(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.loaded {
            return;
        }
        self.loaded = true;

        // the parent needs a snapshot even if the user never types
        ctx.props().on_change.emit(self.model.clone());

        match self.model.team {
            Team::Business => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    if let Ok(admins) = api::fetch_admins(Team::Business).await {
                        link.send_message(Msg::AdminsLoaded(admins));
                    }
                });
            }
            Team::Dev | Team::Security => {
                if self.model.mode == FormMode::Create {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        if let Ok(companies) = api::fetch_companies().await {
                            link.send_message(Msg::CompaniesLoaded(companies));
                        }
                    });
                }
            }
        }
    }
}
