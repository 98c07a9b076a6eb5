pub mod show;
pub use show::*;

pub mod person;
pub use person::*;

pub mod favorite;
pub use favorite::*;

use serde::{Deserialize, Serialize};

/// Placeholder displayed for a field missing from the source record
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRefs {
    pub medium: String,
    pub original: String,
}
