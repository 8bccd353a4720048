//! Application shell: team navigation over the data board.
//!
//! Switching teams swaps the board's `key`, so Yew remounts the
//! component and every piece of filter/selection/page state starts
//! fresh — the reset-on-team-switch rule falls out of the remount.

use yew::prelude::*;

use common::schema::Team;

use crate::components::data_board::DataBoardComponent;

pub struct App {
    team: Team,
}

pub enum Msg {
    SelectTeam(Team),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App { team: Team::Security }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectTeam(team) => {
                if self.team == team {
                    return false;
                }
                self.team = team;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-root">
                <h1>{"데이터 관리"}</h1>
                <nav class="team-nav">
                    {
                        for Team::ALL.into_iter().map(|team| {
                            let class = if team == self.team { "team-tab active" } else { "team-tab" };
                            html! {
                                <button
                                    class={class}
                                    onclick={link.callback(move |_| Msg::SelectTeam(team))}
                                >
                                    { team.label() }
                                </button>
                            }
                        })
                    }
                </nav>
                <DataBoardComponent key={self.team.key()} team={self.team} />
            </div>
        }
    }
}
