/// Catalog connection settings.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API key sent as the `api_key` query parameter.
    pub api_key: String,
    /// Catalog API base URL (default: TMDB v3).
    pub base_url: String,
    /// Base URL prepended to relative poster/logo paths.
    pub image_base_url: String,
}

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

impl CatalogConfig {
    /// Load catalog configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default                           |
    /// |--------------------------|----------|-----------------------------------|
    /// | `CATALOG_API_KEY`        | **yes**  | --                                |
    /// | `CATALOG_BASE_URL`       | no       | `https://api.themoviedb.org/3`    |
    /// | `CATALOG_IMAGE_BASE_URL` | no       | `https://image.tmdb.org/t/p/w500` |
    ///
    /// # Panics
    ///
    /// Panics if `CATALOG_API_KEY` is not set or is empty.
    pub fn from_env() -> Self {
        let api_key = std::env::var("CATALOG_API_KEY")
            .expect("CATALOG_API_KEY must be set in the environment");
        assert!(!api_key.is_empty(), "CATALOG_API_KEY must not be empty");

        let base_url =
            std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let image_base_url = std::env::var("CATALOG_IMAGE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_IMAGE_BASE_URL.into());

        Self {
            api_key,
            base_url,
            image_base_url,
        }
    }
}
