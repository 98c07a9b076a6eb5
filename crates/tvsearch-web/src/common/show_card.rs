use std::rc::Rc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::SignalExt;
use tvsearch_lib::models::Show;

use crate::app::App;

pub struct ShowCard {
    show: Show,
}

impl ShowCard {
    pub fn new(show: Show) -> Self {
        Self { show }
    }

    pub fn render(self, app: Rc<App>) -> Dom {
        let show = self.show;

        html!("div", {
            .class("card")
            .children(show.medium_image().map(|src| html!("img", {
                .attr("src", src)
                .attr("alt", &show.name)
                .attr("loading", "lazy")
                .event(clone!(app, show => move |_: events::Click| {
                    app.state.open_show(show.clone());
                }))
            })))
            .children(&mut [
                html!("h3", {
                    .class("card-title")
                    .text(&show.name)
                }),
                html!("p", {
                    .class("card-rating")
                    .text(&format!("Rating: {}", show.rating_label()))
                }),
                html!("p", {
                    .class("card-genres")
                    .text(&format!("Genres: {}", show.genres_label(", ")))
                }),
                html!("p", {
                    .class("card-description")
                    .text(&show.summary)
                }),
                html!("button", {
                    .class("card-button")
                    .text_signal(app.state.favorites.contains_signal(show.id).map(|added| {
                        if added { "In Favorites" } else { "Add to Favorites" }
                    }))
                    .attr_signal("disabled", app.state.favorites.contains_signal(show.id).map(|added| {
                        added.then_some("")
                    }))
                    .event(clone!(app, show => move |_: events::Click| {
                        app.state.add_favorite(&show);
                    }))
                }),
            ])
        })
    }

    pub fn render_detail(self) -> Dom {
        let show = self.show;

        html!("div", {
            .children(show.original_image().map(|src| html!("img", {
                .attr("src", src)
                .attr("alt", &show.name)
            })))
            .children(&mut [
                html!("h3", {
                    .class("modal-title")
                    .text(&show.name)
                }),
                html!("p", {
                    .class("modal-rating")
                    .text(&format!("Rating: {}", show.rating_label()))
                }),
                html!("p", {
                    .class("modal-genres")
                    .text(&format!("Genres: {}", show.genres_label(" , ")))
                }),
                html!("p", {
                    .class("modal-description")
                    .text(&show.summary)
                }),
            ])
        })
    }
}
