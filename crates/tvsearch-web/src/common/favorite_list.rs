use std::rc::Rc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal_vec::SignalVecExt;
use tvsearch_lib::models::FavoriteEntry;

use crate::app::App;

fn render_entry(app: Rc<App>, entry: FavoriteEntry) -> Dom {
    html!("li", {
        .class("favorite")
        .children(&mut [
            html!("span", {
                .class("favorite-name")
                .text(&entry.name)
                .event(clone!(app, entry => move |_: events::Click| {
                    app.state.open_favorite(&entry);
                }))
            }),
            html!("button", {
                .class("favorite-button")
                .text("Remove")
                .event(clone!(app, entry => move |_: events::Click| {
                    app.state.remove_favorite(&entry);
                }))
            }),
        ])
    })
}

pub fn render(app: Rc<App>) -> Dom {
    html!("div", {
        .class("favorites-section")
        .children(&mut [
            html!("h2", {
                .text("Favorite Shows")
            }),
            html!("ul", {
                .class("favorite-list")
                .children_signal_vec(app.state.favorites.signal_vec().map(clone!(app => move |entry| {
                    render_entry(app.clone(), entry)
                })))
            }),
        ])
    })
}
