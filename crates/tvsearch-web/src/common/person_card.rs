use std::rc::Rc;

use dominator::{clone, events, html, Dom};
use tvsearch_lib::models::Person;

use crate::app::App;

pub struct PersonCard {
    person: Person,
}

impl PersonCard {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn render(self, app: Rc<App>) -> Dom {
        let person = self.person;

        html!("div", {
            .class("card")
            .class("person")
            .event(clone!(app, person => move |_: events::Click| {
                app.state.open_person(person.clone());
            }))
            .children(person.medium_image().map(|src| html!("img", {
                .attr("src", src)
                .attr("alt", &person.name)
                .attr("loading", "lazy")
            })))
            .children(&mut [
                html!("h3", {
                    .class("card-title")
                    .text(&person.name)
                }),
                html!("p", {
                    .text(&format!("Country: {}", person.country_label()))
                }),
                html!("p", {
                    .text(&format!("Birthday: {}", person.birthday_label()))
                }),
                html!("p", {
                    .text(&format!("Gender: {}", person.gender_label()))
                }),
            ])
        })
    }

    pub fn render_detail(self) -> Dom {
        let person = self.person;

        html!("div", {
            .children(person.original_image().map(|src| html!("img", {
                .attr("src", src)
                .attr("alt", &person.name)
            })))
            .children(&mut [
                html!("h3", {
                    .class("modal-title")
                    .text(&person.name)
                }),
                html!("p", {
                    .text(&format!("Country: {}", person.country_label()))
                }),
                html!("p", {
                    .text(&format!("Birthday: {}", person.birthday_label()))
                }),
                html!("p", {
                    .text(&format!("Deathday: {}", person.deathday_label()))
                }),
                html!("p", {
                    .text(&format!("Gender: {}", person.gender_label()))
                }),
                html!("p", {
                    .text(&format!("Updated: {}", person.updated_label()))
                }),
            ])
            .children(person.link.as_deref().map(|href| html!("a", {
                .attr("href", href)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text("TVmaze profile")
            })))
        })
    }
}
