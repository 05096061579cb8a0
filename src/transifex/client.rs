//! Blocking client for the Transifex v3 REST API.
//!
//! Only the two read endpoints the tool needs are wrapped: the resource
//! list and per-resource language stats. Both are JSON:API collections
//! paginated with a `links.next` cursor URL; the client follows the cursor
//! until it is absent. Non-2xx responses become errors immediately, there
//! are no retries.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::Error;

const BASE_URL: &str = "https://rest.api.transifex.com";

/// Project filter applied to every request.
pub const PROJECT_ID: &str = "o:django:p:django";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A translation resource as tracked on Transifex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Stable API identifier, e.g. `o:django:p:django:r:django-core`.
    pub id: String,
    /// Human-facing resource name, e.g. `django.contrib-admin`.
    pub name: String,
}

/// Per-language translation status of one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStat {
    /// Language code, the last segment of the stat id.
    pub language: String,
    /// Raw `last_translation_update` timestamp; `None` if never translated.
    pub last_update: Option<String>,
}

pub struct TransifexClient {
    http: reqwest::blocking::Client,
    token: String,
    base_url: String,
}

impl TransifexClient {
    /// Build a client authenticating with the given bearer token.
    pub fn new(token: String) -> Result<Self, Error> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Build a client against a non-default API root (test seam).
    pub fn with_base_url(token: String, base_url: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(TransifexClient {
            http,
            token,
            base_url: base_url.into(),
        })
    }

    /// List all resources of the project.
    pub fn resources(&self) -> Result<Vec<Resource>, Error> {
        let url = format!("{}/resources", self.base_url);
        let items: Vec<ResourceData> = self.get_paged(&url, &[("filter[project]", PROJECT_ID)])?;
        Ok(items
            .into_iter()
            .filter(|item| item.kind == "resources")
            .map(|item| Resource {
                id: item.id,
                name: item.attributes.name,
            })
            .collect())
    }

    /// Fetch per-language stats for one resource.
    pub fn language_stats(&self, resource_id: &str) -> Result<Vec<LanguageStat>, Error> {
        let url = format!("{}/resource_language_stats", self.base_url);
        let items: Vec<StatData> = self.get_paged(
            &url,
            &[
                ("filter[project]", PROJECT_ID),
                ("filter[resource]", resource_id),
            ],
        )?;
        Ok(items.into_iter().map(LanguageStat::from).collect())
    }

    /// GET a paginated collection, following `links.next` until exhausted.
    ///
    /// The cursor in `links.next` is a complete URL carrying all query
    /// parameters, so only the first request applies `params`.
    fn get_paged<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, Error> {
        let mut items = Vec::new();
        let mut response = self
            .http
            .get(url)
            .query(params)
            .bearer_auth(&self.token)
            .send()?
            .error_for_status()?;

        loop {
            let page: Page<T> = response.json()?;
            items.extend(page.data);
            match page.links.next {
                Some(next) => {
                    debug!("following pagination cursor {next}");
                    response = self
                        .http
                        .get(&next)
                        .bearer_auth(&self.token)
                        .send()?
                        .error_for_status()?;
                }
                None => break,
            }
        }
        Ok(items)
    }
}

/// One page of a JSON:API collection.
#[derive(Debug, Deserialize)]
struct Page<T> {
    data: Vec<T>,
    #[serde(default)]
    links: Links,
}

#[derive(Debug, Default, Deserialize)]
struct Links {
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResourceData {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    attributes: ResourceAttributes,
}

#[derive(Debug, Deserialize)]
struct ResourceAttributes {
    name: String,
}

#[derive(Debug, Deserialize)]
struct StatData {
    id: String,
    attributes: StatAttributes,
}

#[derive(Debug, Deserialize)]
struct StatAttributes {
    last_translation_update: Option<String>,
}

impl From<StatData> for LanguageStat {
    fn from(data: StatData) -> Self {
        // Stat ids look like `o:django:p:django:r:django-core:l:es`; the
        // language code is the last `:`-separated segment.
        let language = data
            .id
            .rsplit(':')
            .next()
            .unwrap_or(data.id.as_str())
            .to_string();
        LanguageStat {
            language,
            last_update: data.attributes.last_translation_update,
        }
    }
}
