use dominator::{html, Dom};
use futures_signals::signal::Signal;

pub fn render<S>(active: S) -> Dom
where
    S: Signal<Item = bool> + 'static,
{
    html!("div", {
        .class("spinner")
        .visible_signal(active)
        .children(&mut [
            html!("div", {
                .class("loader")
            })
        ])
    })
}
