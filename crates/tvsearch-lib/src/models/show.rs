use serde::{Deserialize, Serialize};

use super::{ImageRefs, NOT_AVAILABLE};

/// A show search result, normalized from the remote record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub name: String,
    pub rating: Option<f64>,
    pub genres: Vec<String>,
    /// Plain text, markup already stripped
    pub summary: String,
    pub image: Option<ImageRefs>,
}

impl Show {
    /// An average of zero is treated as unrated.
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(average) if average != 0.0 => format!("{}", average),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn genres_label(&self, separator: &str) -> String {
        self.genres.join(separator)
    }

    pub fn medium_image(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.medium.as_str())
    }

    pub fn original_image(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.original.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn show(rating: Option<f64>) -> Show {
        Show {
            id: 1,
            name: "Under the Dome".to_string(),
            rating,
            genres: vec!["Drama".to_string(), "Science-Fiction".to_string()],
            summary: String::new(),
            image: None,
        }
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(show(Some(6.5)).rating_label(), "6.5");
        assert_eq!(show(Some(8.0)).rating_label(), "8");
        assert_eq!(show(None).rating_label(), "N/A");
        assert_eq!(show(Some(0.0)).rating_label(), "N/A");
    }

    #[test]
    fn test_genres_label_keeps_api_order() {
        assert_eq!(show(None).genres_label(", "), "Drama, Science-Fiction");
        assert_eq!(show(None).genres_label(" , "), "Drama , Science-Fiction");
    }
}
