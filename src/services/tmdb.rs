//! TMDB API client.

use crate::models::config::TmdbConfig;
use crate::services::catalog::Catalog;
use crate::{Error, Result};
use serde::Deserialize;

/// TMDB API client.
pub struct TmdbClient {
    /// API key or Bearer token (JWT)
    api_key: String,
    base_url: String,
    /// Whether to use Bearer token authentication (API v4 style)
    use_bearer: bool,
    client: reqwest::blocking::Client,
}

/// Search result page for shows or movies.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub total_results: u64,
    #[serde(default)]
    pub results: Vec<SearchItem>,
}

/// Search item; only the id matters here.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: u64,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let api_key = api_key.into();
        // Bearer tokens start with "eyJ" (base64 encoded JWT header)
        let use_bearer = api_key.starts_with("eyJ");

        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            use_bearer,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a client from the `[tmdb]` config section.
    pub fn from_config(config: &TmdbConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(Error::ApiKeyMissing)?;
        Ok(Self::new(api_key, config.base_url.clone()))
    }

    /// Build a GET request with proper authentication.
    fn build_request(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        let request = self.client.get(url).header("Accept", "application/json");
        if self.use_bearer {
            request.header("Authorization", format!("Bearer {}", self.api_key))
        } else {
            request
        }
    }

    /// Build URL with optional api_key parameter (only for v3 style).
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        let mut params = Vec::new();
        if !self.use_bearer {
            params.push(format!("api_key={}", urlencoding::encode(&self.api_key)));
        }
        if let Some(query) = query {
            params.push(format!("query={}", urlencoding::encode(query)));
        }

        if params.is_empty() {
            format!("{}/{}", self.base_url, path)
        } else {
            format!("{}/{}?{}", self.base_url, path, params.join("&"))
        }
    }

    /// Verify API key is valid. A rejected key is `false`, transport
    /// failures propagate.
    pub fn verify_api_key(&self) -> Result<bool> {
        let url = self.build_url("authentication", None);
        let resp = self.build_request(&url).send()?;
        Ok(resp.status().is_success())
    }

    /// Run a search and resolve it to a single id.
    fn search_id(&self, kind: &str, name: &str) -> Result<u64> {
        let query = fix_name(name);
        let url = self.build_url(&format!("search/{}", kind), Some(&query));
        tracing::debug!("Searching TMDB {} for '{}'", kind, query);

        let body = self.build_request(&url).send()?.error_for_status()?.text()?;
        resolve_single_id(&query, parse_search(&body)?)
    }

    /// Whether a GET on `path` succeeds. Error statuses are `false`,
    /// transport failures propagate.
    fn resource_exists(&self, path: &str) -> Result<bool> {
        let url = self.build_url(path, None);
        let resp = self.build_request(&url).send()?;
        tracing::debug!("TMDB {} -> {}", path, resp.status());
        Ok(resp.status().is_success())
    }
}

impl Catalog for TmdbClient {
    fn get_show_id(&self, name: &str) -> Result<u64> {
        self.search_id("tv", name)
    }

    fn validate_show(&self, name: &str) -> Result<bool> {
        not_found_as_false(self.get_show_id(name))
    }

    fn validate_show_season(&self, name: &str, season: &str) -> Result<bool> {
        let show_id = self.get_show_id(name)?;
        let Some(season) = parse_number(season) else {
            return Ok(false);
        };
        self.resource_exists(&format!("tv/{}/season/{}", show_id, season))
    }

    fn validate_show_episode(&self, name: &str, season: &str, episode: &str) -> Result<bool> {
        let show_id = self.get_show_id(name)?;
        let (Some(season), Some(episode)) = (parse_number(season), parse_number(episode)) else {
            return Ok(false);
        };
        self.resource_exists(&format!(
            "tv/{}/season/{}/episode/{}",
            show_id, season, episode
        ))
    }

    fn get_movie_id(&self, name: &str) -> Result<u64> {
        self.search_id("movie", name)
    }

    fn validate_movie(&self, name: &str) -> Result<bool> {
        not_found_as_false(self.get_movie_id(name))
    }
}

/// Release names use dots as word separators; the search wants spaces.
pub fn fix_name(name: &str) -> String {
    name.replace('.', " ")
}

/// Decode a search response body.
pub fn parse_search(body: &str) -> Result<SearchResult> {
    Ok(serde_json::from_str(body)?)
}

/// Exactly one result yields its id; none is `NotFound`, several `Ambiguous`.
pub fn resolve_single_id(query: &str, resp: SearchResult) -> Result<u64> {
    match resp.total_results {
        0 => Err(Error::NotFound(query.to_string())),
        1 => resp
            .results
            .first()
            .map(|item| item.id)
            .ok_or_else(|| Error::NotFound(query.to_string())),
        count => Err(Error::Ambiguous {
            query: query.to_string(),
            count,
        }),
    }
}

fn not_found_as_false(lookup: Result<u64>) -> Result<bool> {
    match lookup {
        Ok(_) => Ok(true),
        Err(Error::NotFound(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

fn parse_number(value: &str) -> Option<u16> {
    value.trim().parse().ok()
}
