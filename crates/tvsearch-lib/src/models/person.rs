use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::{ImageRefs, NOT_AVAILABLE};

/// A person search result, normalized from the remote record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub gender: Option<String>,
    pub image: Option<ImageRefs>,
    /// Unix timestamp, seconds
    pub updated: i64,
    pub link: Option<String>,
}

fn label(value: &Option<String>) -> String {
    value
        .clone()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl Person {
    pub fn country_label(&self) -> String {
        label(&self.country)
    }

    pub fn birthday_label(&self) -> String {
        label(&self.birthday)
    }

    pub fn deathday_label(&self) -> String {
        label(&self.deathday)
    }

    pub fn gender_label(&self) -> String {
        label(&self.gender)
    }

    pub fn updated_label(&self) -> String {
        DateTime::from_timestamp(self.updated, 0)
            .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn medium_image(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.medium.as_str())
    }

    pub fn original_image(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.original.as_str())
    }
}
