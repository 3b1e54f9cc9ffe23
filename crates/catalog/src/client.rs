//! HTTP client for the movie catalog.

use cinelog_core::types::DbId;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Descriptive movie fields as returned by the catalog, with image paths
/// already resolved to absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMovie {
    pub id: DbId,
    pub title: String,
    /// Absolute poster URL.
    pub thumbnail: String,
    /// Absolute logo URL, when the catalog has logo art.
    pub logo: Option<String>,
}

/// Raw movie detail payload. Logos ride along via `append_to_response` so a
/// single request covers everything the cache stores.
#[derive(Debug, Deserialize)]
struct ApiMovieDetails {
    title: String,
    poster_path: Option<String>,
    images: Option<ApiImages>,
}

#[derive(Debug, Deserialize)]
struct ApiImages {
    #[serde(default)]
    logos: Vec<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    file_path: String,
}

/// Client for the external movie catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http_client: HttpClient,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http_client: HttpClient::new(),
            config,
        }
    }

    /// The image base URL configured for this catalog. Stored thumbnails
    /// that do not start with this prefix are considered drifted.
    pub fn image_base(&self) -> &str {
        &self.config.image_base_url
    }

    /// Fetch a movie's descriptive fields by catalog id.
    ///
    /// One request per movie: logo art is appended to the detail response
    /// rather than fetched separately.
    pub async fn fetch_movie(&self, id: DbId) -> Result<CatalogMovie, CatalogError> {
        let url = format!("{}/movie/{}", self.config.base_url, id);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("append_to_response", "images"),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Upstream { status, body });
        }

        let details: ApiMovieDetails = response.json().await?;
        let movie = self.convert(id, details)?;

        tracing::debug!(movie_id = id, title = %movie.title, "Fetched movie from catalog");
        Ok(movie)
    }

    /// Turn a raw detail payload into a [`CatalogMovie`] with absolute URLs.
    fn convert(&self, id: DbId, details: ApiMovieDetails) -> Result<CatalogMovie, CatalogError> {
        let poster_path = details.poster_path.ok_or(CatalogError::MissingPoster(id))?;
        let thumbnail = self.image_url(&poster_path);

        let logo = details
            .images
            .and_then(|images| images.logos.into_iter().next())
            .map(|logo| self.image_url(&logo.file_path));

        Ok(CatalogMovie {
            id,
            title: details.title,
            thumbnail,
            logo,
        })
    }

    /// Absolute image URL: the configured image base plus the catalog's
    /// relative path (which carries its own leading slash).
    fn image_url(&self, path: &str) -> String {
        format!("{}{}", self.config.image_base_url, path)
    }
}
