//! Response schemas of the remote search endpoints and the port the
//! application searches through.
//!
//! Both endpoints answer with a JSON array of wrapper objects, each holding
//! a relevance score and one nested record. Only the record is kept.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{
    error::Error,
    markup::strip_markup,
    models::{ImageRefs, Person, Show},
};

#[async_trait(?Send)]
pub trait SearchApi {
    async fn search_shows(&self, query: &str) -> Result<Vec<ShowSearchItem>, Error>;

    async fn search_people(&self, query: &str) -> Result<Vec<PersonSearchItem>, Error>;
}

#[async_trait(?Send)]
impl<T: SearchApi + ?Sized> SearchApi for std::rc::Rc<T> {
    async fn search_shows(&self, query: &str) -> Result<Vec<ShowSearchItem>, Error> {
        (**self).search_shows(query).await
    }

    async fn search_people(&self, query: &str) -> Result<Vec<PersonSearchItem>, Error> {
        (**self).search_people(query).await
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowSearchItem {
    pub show: ShowRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonSearchItem {
    pub person: PersonRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowRecord {
    pub id: i64,
    pub name: String,
    pub rating: Option<RatingRecord>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub summary: Option<String>,
    pub image: Option<ImageRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingRecord {
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    pub medium: String,
    pub original: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkRecord {
    pub href: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonLinks {
    #[serde(rename = "self")]
    pub this: Option<LinkRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub id: i64,
    pub name: String,
    pub country: Option<CountryRecord>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub gender: Option<String>,
    pub image: Option<ImageRecord>,
    #[serde(default)]
    pub updated: i64,
    #[serde(rename = "_links", default)]
    pub links: PersonLinks,
}

impl From<ImageRecord> for ImageRefs {
    fn from(image: ImageRecord) -> Self {
        Self {
            medium: image.medium,
            original: image.original,
        }
    }
}

impl From<ShowRecord> for Show {
    fn from(record: ShowRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            rating: record.rating.and_then(|rating| rating.average),
            genres: record.genres,
            summary: record
                .summary
                .as_deref()
                .map(strip_markup)
                .unwrap_or_default(),
            image: record.image.map(Into::into),
        }
    }
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            country: record.country.map(|country| country.name),
            birthday: record.birthday,
            deathday: record.deathday,
            gender: record.gender,
            image: record.image.map(Into::into),
            updated: record.updated,
            link: record.links.this.map(|link| link.href),
        }
    }
}

/// Decode a search response body. The body must be a JSON array; elements
/// that do not match `T` are logged and skipped.
pub fn decode_items<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, Error> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        return Err(Error::Malformed("expected a JSON array".to_string()));
    };

    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("skipping malformed search result #{}: {}", i, e);
                None
            }
        })
        .collect();

    if decoded.len() < total {
        warn!("{} of {} search results were malformed", total - decoded.len(), total);
    }

    Ok(decoded)
}

#[cfg(test)]
mod test {
    use super::*;

    const SHOWS: &str = r#"[
        {
            "score": 0.9,
            "show": {
                "id": 1,
                "url": "https://www.tvmaze.com/shows/1/under-the-dome",
                "name": "Under the Dome",
                "genres": ["Drama", "Science-Fiction", "Thriller"],
                "rating": {"average": 6.5},
                "image": {
                    "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/81/202627.jpg",
                    "original": "https://static.tvmaze.com/uploads/images/original_untouched/81/202627.jpg"
                },
                "summary": "<p><b>Under the Dome</b> is the story of a small town.</p>"
            }
        },
        {
            "score": 0.5,
            "show": {
                "id": 2,
                "name": "Unrated",
                "genres": [],
                "rating": {"average": null},
                "image": null,
                "summary": null
            }
        }
    ]"#;

    const PEOPLE: &str = r#"[
        {
            "score": 0.7,
            "person": {
                "id": 15,
                "url": "https://www.tvmaze.com/people/15/mike-vogel",
                "name": "Mike Vogel",
                "country": {"name": "United States", "code": "US", "timezone": "America/New_York"},
                "birthday": "1979-07-17",
                "deathday": null,
                "gender": "Male",
                "image": {"medium": "m.jpg", "original": "o.jpg"},
                "updated": 1700000000,
                "_links": {"self": {"href": "https://api.tvmaze.com/people/15"}}
            }
        }
    ]"#;

    #[test]
    fn test_decode_shows() {
        let shows: Vec<Show> = decode_items::<ShowSearchItem>(SHOWS)
            .unwrap()
            .into_iter()
            .map(|item| item.show.into())
            .collect();

        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].name, "Under the Dome");
        assert_eq!(shows[0].rating, Some(6.5));
        assert_eq!(shows[0].genres, vec!["Drama", "Science-Fiction", "Thriller"]);
        assert_eq!(shows[0].summary, "Under the Dome is the story of a small town.");
        assert!(shows[0].medium_image().unwrap().contains("medium_portrait"));

        assert_eq!(shows[1].rating, None);
        assert_eq!(shows[1].rating_label(), "N/A");
        assert_eq!(shows[1].summary, "");
        assert!(shows[1].image.is_none());
    }

    #[test]
    fn test_decode_people() {
        let people: Vec<Person> = decode_items::<PersonSearchItem>(PEOPLE)
            .unwrap()
            .into_iter()
            .map(|item| item.person.into())
            .collect();

        assert_eq!(people.len(), 1);
        let person = &people[0];
        assert_eq!(person.name, "Mike Vogel");
        assert_eq!(person.country.as_deref(), Some("United States"));
        assert_eq!(person.deathday_label(), "N/A");
        assert_eq!(person.link.as_deref(), Some("https://api.tvmaze.com/people/15"));
    }

    #[test]
    fn test_malformed_elements_are_skipped() {
        let body = r#"[{"score": 1, "show": {"id": 3, "name": "Ok"}}, {"score": 1}, {"show": {"name": "no id"}}]"#;
        let items = decode_items::<ShowSearchItem>(body).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].show.id, 3);
    }

    #[test]
    fn test_non_array_payload_is_rejected() {
        let result = decode_items::<ShowSearchItem>(r#"{"name": "Not Found", "status": 404}"#);
        assert!(matches!(result, Err(Error::Malformed(_))));

        let result = decode_items::<ShowSearchItem>("<html>");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
