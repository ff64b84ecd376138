use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{Elixir, Ingredient};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Blocking client for the Wizard World catalog API.
///
/// The base URL is injected so tests can point the client at a mock
/// server. Both connection setup and the whole request are bounded by
/// timeouts; a hung remote call surfaces as a network error.
pub struct WizardWorldClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl WizardWorldClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch the full ingredient catalog
    pub fn all_ingredients(&self) -> Result<Vec<Ingredient>> {
        self.get_json("/ingredients", None)
    }

    /// Fetch the full elixir catalog
    pub fn all_elixirs(&self) -> Result<Vec<Elixir>> {
        self.get_json("/elixirs", None)
    }

    /// Search ingredients by name. The API returns a possibly-empty array.
    pub fn ingredients_by_name(&self, name: &str) -> Result<Vec<Ingredient>> {
        self.get_json("/ingredients", Some(("name", name)))
    }

    /// Fetch the elixirs whose recipe requires the given ingredient
    pub fn elixirs_by_ingredient(&self, name: &str) -> Result<Vec<Elixir>> {
        self.get_json("/elixirs", Some(("ingredient", name)))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: Option<(&str, &str)>) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::info!("Fetching from catalog API: {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }

        let response = request.send()?;

        if !response.status().is_success() {
            log::error!("Catalog API returned status {} for {}", response.status(), url);
            return Err(Error::HttpStatus(response.status()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
