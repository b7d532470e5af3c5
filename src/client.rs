use std::time::Duration;

use reqwest::Client;
use scraper::Html;
use tracing::debug;

use crate::config::Endpoints;
use crate::domain::error::UrbanError;
use crate::domain::model::{Definition, DefinitionResponse};
use crate::scrape;

/// Client for the Urban Dictionary API and its scraped pages.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct UrbanClient {
    http: Client,
    endpoints: Endpoints,
}

impl UrbanClient {
    /// Client against the production endpoints.
    pub fn new() -> Result<Self, UrbanError> {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self, UrbanError> {
        let http = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("urbandict/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, endpoints })
    }

    /// The top definition for a search term.
    pub async fn define(&self, term: &str) -> Result<Definition, UrbanError> {
        self.define_raw(term)
            .await?
            .into_top()
            .ok_or_else(|| UrbanError::NoDefinitions(term.to_string()))
    }

    /// The full response for a search term.
    pub async fn define_raw(&self, term: &str) -> Result<DefinitionResponse, UrbanError> {
        debug!(term, "querying define endpoint");
        self.get_response(&self.endpoints.define, &[("term", term)])
            .await
    }

    /// A random definition.
    pub async fn random(&self) -> Result<Definition, UrbanError> {
        self.random_raw()
            .await?
            .into_top()
            .ok_or(UrbanError::NoRandomDefinitions)
    }

    /// The full response of a random-definition call.
    pub async fn random_raw(&self) -> Result<DefinitionResponse, UrbanError> {
        self.get_response(&self.endpoints.random, &[]).await
    }

    /// The definition for the service's word of the day.
    ///
    /// Scrapes the word from the homepage title, then looks it up like
    /// any other term.
    pub async fn word_of_the_day(&self) -> Result<Definition, UrbanError> {
        let body = self.get_page(&self.endpoints.homepage).await?;

        // Html is not Send; parse and extract before the next await.
        let wotd = {
            let doc = Html::parse_document(&body);
            scrape::find_word_of_the_day(&doc)?
        };

        match wotd {
            Some(word) => self.define(&word).await,
            None => Err(UrbanError::NotFound("word of the day")),
        }
    }

    /// The currently trending search terms, most popular first.
    pub async fn trending(&self) -> Result<Vec<String>, UrbanError> {
        let body = self.get_page(&self.endpoints.random_page).await?;

        let terms = {
            let doc = Html::parse_document(&body);
            scrape::find_trending(&doc)
        };

        if terms.is_empty() {
            return Err(UrbanError::NotFound("trending terms"));
        }
        Ok(terms)
    }

    async fn get_response(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<DefinitionResponse, UrbanError> {
        let body = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .text()
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_page(&self, url: &str) -> Result<String, UrbanError> {
        debug!(url, "fetching page");
        Ok(self.http.get(url).send().await?.text().await?)
    }
}
