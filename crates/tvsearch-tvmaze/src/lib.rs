#[macro_use]
extern crate log;

pub mod client;
pub use client::TvMaze;

pub mod config;
pub use config::ApiConfig;
