#[macro_use]
extern crate log;

pub mod app;
pub mod contracts;
pub mod error;
pub mod favorites;
pub mod markup;
pub mod models;
pub mod prelude;
pub mod selection;
pub mod storage;

pub use error::Error;

/// Key under which the favorites collection is persisted
pub static FAVORITES_KEY: &str = "favorites";
