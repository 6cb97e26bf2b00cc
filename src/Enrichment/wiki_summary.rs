use crate::Enrichment::http_client::{EnrichmentError, HttpClient, join_segments};
use crate::settings::SimulatorConfig;
use log::{info, warn};
use serde::Deserialize;
use url::Url;

/// shown whenever a summary cannot be obtained
pub const SUMMARY_FALLBACK: &str = "No summary available.";

/// resolve product name to a short summary text. Never fails: errors give the fallback text
pub trait SummaryLookup {
    fn summary(&self, name: &str) -> String;
}

/// the part of the page/summary response we use
#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: Option<String>,
}

pub struct WikiSummaryClient<C: HttpClient> {
    client: C,
    base_url: String,
    sentences: usize,
}

impl<C: HttpClient> WikiSummaryClient<C> {
    pub fn with_client(client: C, config: &SimulatorConfig) -> Self {
        Self {
            client,
            base_url: config.wikipedia_base_url.clone(),
            sentences: config.summary_sentences,
        }
    }

    /// page titles use underscores instead of spaces
    pub fn summary_url(&self, name: &str) -> Result<Url, EnrichmentError> {
        let title = name.trim().replace(' ', "_");
        join_segments(&self.base_url, &[title.as_str()])
    }

    pub fn fetch_summary(&self, name: &str) -> Result<String, EnrichmentError> {
        let url = self.summary_url(name)?;
        info!("Wikipedia summary for {}: {}", name, url);
        let text = self.client.get_text(url.as_str()).map_err(|e| {
            if e.is_not_found() {
                EnrichmentError::NotFound(name.to_string())
            } else {
                EnrichmentError::Http(e)
            }
        })?;
        let page: PageSummary = serde_json::from_str(&text)
            .map_err(|e| EnrichmentError::InvalidResponse(e.to_string()))?;
        let extract = page.extract.unwrap_or_default();
        let summary = first_sentences(&extract, self.sentences);
        if summary.is_empty() {
            return Err(EnrichmentError::InvalidResponse(format!(
                "empty summary for {}",
                name
            )));
        }
        Ok(summary)
    }
}

impl<C: HttpClient> SummaryLookup for WikiSummaryClient<C> {
    fn summary(&self, name: &str) -> String {
        self.fetch_summary(name).unwrap_or_else(|e| {
            warn!("summary lookup failed: {}", e);
            SUMMARY_FALLBACK.to_string()
        })
    }
}

/// Keeps the first `n` sentences. A sentence ends with '.', '!' or '?' followed by
/// whitespace or the end of text. `n == 0` keeps the whole text.
pub fn first_sentences(text: &str, n: usize) -> String {
    let text = text.trim();
    if n == 0 {
        return text.to_string();
    }
    let mut count = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = match chars.peek() {
                None => true,
                Some((_, next)) => next.is_whitespace(),
            };
            if at_boundary {
                count += 1;
                if count == n {
                    return text[..i + c.len_utf8()].to_string();
                }
            }
        }
    }
    text.to_string()
}
