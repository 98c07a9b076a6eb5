use std::rc::Rc;

use dominator::{clone, events, html, Dom};

use crate::app::App;

/// Overlay around `content`. Clicking the backdrop or the close control
/// clears the selection.
pub fn render(app: Rc<App>, content: Dom) -> Dom {
    html!("div", {
        .class("modal")
        .event(clone!(app => move |_: events::Click| {
            app.state.close();
        }))
        .children(&mut [
            html!("div", {
                .class("modal-content")
                .event(|e: events::Click| {
                    e.stop_propagation();
                })
                .children(&mut [
                    html!("span", {
                        .class("close")
                        .text("\u{00d7}")
                        .event(clone!(app => move |_: events::Click| {
                            app.state.close();
                        }))
                    }),
                    content,
                ])
            })
        ])
    })
}
