use crate::models::{Person, Show};

/// Record shown in the detail modal. `Closed` hides the modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Closed,
    Show(Show),
    Person(Person),
}
