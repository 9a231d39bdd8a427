//! Typed consumer of the catalog API.
//!
//! This is the data layer of the film-detail page: it fetches a film and its
//! showtimes and folds the outcome into a [`FilmDetail`] the page can render
//! without inspecting HTTP details.
//!
//! Consumer rules: any non-200 answer is a failure, and a 200 answer whose
//! `data` is absent or empty (`null`, `{}`, `[]`, `""`, `0`, `false`) means
//! the film does not exist.

use std::time::Duration;

use cinematic_core::types::DbId;
use cinematic_core::validation::parse_film_id;
use cinematic_db::models::film::Film;
use cinematic_db::models::showtime::Showtime;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// HTTP request timeout for a single API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network, DNS, timeout or body decoding failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with something other than 200.
    #[error("API returned HTTP {0}")]
    HttpStatus(u16),

    /// `data` was present but did not have the expected shape.
    #[error("unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Everything the film-detail page needs to pick what to show.
#[derive(Debug, Clone, PartialEq)]
pub enum FilmDetail {
    /// No usable film id was supplied; nothing was requested.
    MissingId,
    /// The API could not be reached or did not answer 200.
    Unavailable,
    /// The API answered but has no such film.
    NotFound,
    Found {
        film: Film,
        /// Empty when the film has no screenings or they could not be loaded.
        showtimes: Vec<Showtime>,
    },
}

/// Success envelope as seen by a consumer: only `data` matters.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Value,
}

/// Values a consumer reads as "nothing there".
fn is_empty_data(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

// ---------------------------------------------------------------------------
// CatalogClient
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the API rooted at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET /api/films/{id}. `Ok(None)` when the answer carries no film.
    pub async fn film(&self, id: DbId) -> Result<Option<Film>, ClientError> {
        self.fetch(&format!("/api/films/{id}")).await
    }

    /// GET /api/films/{id}/seances.
    pub async fn showtimes(&self, film_id: DbId) -> Result<Vec<Showtime>, ClientError> {
        let showtimes = self
            .fetch::<Vec<Showtime>>(&format!("/api/films/{film_id}/seances"))
            .await?;
        Ok(showtimes.unwrap_or_default())
    }

    /// Load the film-detail view for a raw `id` query parameter.
    ///
    /// Both requests are issued concurrently. A failed showtime request
    /// leaves the list empty instead of failing the page.
    pub async fn film_detail(&self, raw_id: Option<&str>) -> FilmDetail {
        let Ok(id) = parse_film_id(raw_id) else {
            return FilmDetail::MissingId;
        };

        let (film, showtimes) = tokio::join!(self.film(id), self.showtimes(id));

        let film = match film {
            Ok(Some(film)) => film,
            Ok(None) => return FilmDetail::NotFound,
            Err(e) => {
                tracing::warn!(film_id = id, error = %e, "Film request failed");
                return FilmDetail::Unavailable;
            }
        };

        let showtimes = showtimes.unwrap_or_else(|e| {
            tracing::warn!(film_id = id, error = %e, "Showtime request failed");
            Vec::new()
        });

        FilmDetail::Found { film, showtimes }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ClientError::HttpStatus(response.status().as_u16()));
        }
        let envelope: Envelope = response.json().await?;
        if is_empty_data(&envelope.data) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(envelope.data)?))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
