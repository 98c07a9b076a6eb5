use async_trait::async_trait;
use reqwest::Client;
use tvsearch_lib::{
    contracts::{decode_items, PersonSearchItem, SearchApi, ShowSearchItem},
    Error,
};

use crate::config::ApiConfig;

#[derive(Clone)]
pub struct TvMaze {
    client: Client,
    config: ApiConfig,
}

impl Default for TvMaze {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl TvMaze {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn search_url(&self, endpoint: &str, query: &str) -> String {
        format!(
            "{}/search/{}?q={}",
            self.config.base_url,
            endpoint,
            urlencoding::encode(query)
        )
    }

    async fn get(&self, url: &str) -> Result<String, Error> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| Error::Request(e.to_string()))
    }
}

#[async_trait(?Send)]
impl SearchApi for TvMaze {
    async fn search_shows(&self, query: &str) -> Result<Vec<ShowSearchItem>, Error> {
        let body = self.get(&self.search_url("shows", query)).await?;
        decode_items(&body)
    }

    async fn search_people(&self, query: &str) -> Result<Vec<PersonSearchItem>, Error> {
        let body = self.get(&self.search_url("people", query)).await?;
        decode_items(&body)
    }
}
