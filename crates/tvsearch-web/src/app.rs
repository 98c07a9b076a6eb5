use std::rc::Rc;

use dominator::{clone, events, html, with_node, Dom};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;
use tvsearch_lib::prelude::{SearchApp, Selection};
use tvsearch_tvmaze::{ApiConfig, TvMaze};
use web_sys::HtmlInputElement;

use crate::{
    common::{favorite_list, modal, spinner, PersonCard, ShowCard},
    storage::LocalStorage,
    utils::{api_host, AsyncLoader},
};

pub struct App {
    pub state: SearchApp<TvMaze, LocalStorage>,
    loader: AsyncLoader,
}

impl App {
    pub fn new() -> Rc<Self> {
        let api = TvMaze::new(ApiConfig::new(&api_host()));

        Rc::new(App {
            state: SearchApp::new(api, LocalStorage::new()),
            loader: AsyncLoader::new(),
        })
    }

    pub fn search(app: Rc<Self>) {
        app.loader.load(clone!(app => async move {
            app.state.search().await;
        }));
    }

    fn render_search_bar(app: Rc<Self>) -> Dom {
        html!("div", {
            .class("search-container")
            .children(&mut [
                html!("input" => HtmlInputElement, {
                    .class("input-field")
                    .attr("type", "text")
                    .attr("placeholder", "Enter a TV show / People search")
                    .prop_signal("value", app.state.query.signal_cloned())
                    .with_node!(input => {
                        .event(clone!(app => move |_: events::Input| {
                            app.state.query.set_neq(input.value());
                        }))
                        .event(clone!(app => move |e: events::KeyDown| {
                            if e.key() == "Enter" {
                                Self::search(app.clone());
                            }
                        }))
                    })
                }),
                html!("button", {
                    .class("search-button")
                    .text("Search")
                    .event(clone!(app => move |_: events::Click| {
                        Self::search(app.clone());
                    }))
                }),
            ])
        })
    }

    fn render_results(app: Rc<Self>) -> Dom {
        html!("div", {
            .children(&mut [
                spinner::render(app.loader.is_loading()),
                html!("div", {
                    .class("card-grid")
                    .children_signal_vec(app.state.shows.signal_vec_cloned().map(clone!(app => move |show| {
                        ShowCard::new(show).render(app.clone())
                    })))
                }),
                html!("h2", {
                    .text("People")
                    .visible_signal(app.state.people.signal_vec_cloned().is_empty().map(|empty| !empty))
                }),
                html!("div", {
                    .class("card-grid")
                    .children_signal_vec(app.state.people.signal_vec_cloned().map(clone!(app => move |person| {
                        PersonCard::new(person).render(app.clone())
                    })))
                }),
            ])
        })
    }

    fn render_modal(app: Rc<Self>) -> Dom {
        html!("div", {
            .child_signal(app.state.selection.signal_cloned().map(clone!(app => move |selection| {
                match selection {
                    Selection::Closed => None,
                    Selection::Show(show) => Some(modal::render(app.clone(), ShowCard::new(show).render_detail())),
                    Selection::Person(person) => Some(modal::render(app.clone(), PersonCard::new(person).render_detail())),
                }
            })))
        })
    }

    pub fn render(app: Rc<Self>) -> Dom {
        html!("div", {
            .children(&mut [
                html!("div", {
                    .class("app")
                    .children(&mut [
                        html!("h1", {
                            .text("TV Show Search")
                        }),
                        Self::render_search_bar(app.clone()),
                        Self::render_results(app.clone()),
                        favorite_list::render(app.clone()),
                        Self::render_modal(app.clone()),
                    ])
                }),
                html!("footer", {
                    .children(&mut [
                        html!("p", {
                            .text("Data provided by TVmaze")
                        })
                    ])
                }),
            ])
        })
    }
}
