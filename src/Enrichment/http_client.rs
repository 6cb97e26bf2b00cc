use crate::settings::SimulatorConfig;
use reqwest::blocking::Client;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },
}

impl HttpError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, HttpError::Status { status: 404, .. })
    }
}

/// error types of the enrichment lookups
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("Compound '{0}' not found")]
    NotFound(String),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("URL error: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for EnrichmentError {
    fn from(e: url::ParseError) -> Self {
        EnrichmentError::InvalidUrl(e.to_string())
    }
}

/// HTTP client trait for dependency injection
pub trait HttpClient {
    fn get_text(&self, url: &str) -> Result<String, HttpError>;
}

// Implementation for the real reqwest client
impl HttpClient for Client {
    fn get_text(&self, url: &str) -> Result<String, HttpError> {
        let response = self.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

/// blocking client with the configured timeout
pub fn build_client(config: &SimulatorConfig) -> Result<Client, HttpError> {
    let client = Client::builder()
        .timeout(config.request_timeout())
        .user_agent(concat!("ReactSim/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// appends path segments to the base url, percent-encoding each of them
pub fn join_segments(base: &str, segments: &[&str]) -> Result<Url, EnrichmentError> {
    let mut url = Url::parse(base.trim_end_matches('/'))?;
    url.path_segments_mut()
        .map_err(|_| EnrichmentError::InvalidUrl(format!("{} cannot be a base url", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
