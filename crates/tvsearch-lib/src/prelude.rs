pub use crate::app::SearchApp;
pub use crate::contracts::{PersonSearchItem, SearchApi, ShowSearchItem};
pub use crate::error::Error;
pub use crate::favorites::Favorites;
pub use crate::models::{FavoriteEntry, ImageRefs, Person, Show};
pub use crate::selection::Selection;
pub use crate::storage::{MemoryStorage, Storage};
