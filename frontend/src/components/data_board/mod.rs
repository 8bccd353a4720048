//! Data board: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, and view rendering.
//!
//! On first render the board fetches its team's collection; everything
//! after that is driven by messages (filter mutations, selection,
//! pagination, and the register/edit/delete workflow).

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DataBoardProps;
pub use state::DataBoardComponent;

impl Component for DataBoardComponent {
    type Message = Msg;
    type Properties = DataBoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        DataBoardComponent::new(ctx.props().team)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            update::spawn_reload(ctx, self.filters.team);
        }
    }
}
