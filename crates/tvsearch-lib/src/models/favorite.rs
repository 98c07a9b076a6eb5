use serde::{Deserialize, Serialize};

use super::Show;

/// Saved reference to a show, persisted across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: i64,
    pub name: String,
}

impl From<&Show> for FavoriteEntry {
    fn from(show: &Show) -> Self {
        Self {
            id: show.id,
            name: show.name.clone(),
        }
    }
}
