mod show_card;
pub use show_card::ShowCard;

mod person_card;
pub use person_card::PersonCard;

pub mod favorite_list;

pub mod modal;

pub mod spinner;
