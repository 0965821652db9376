// scraper.rs
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::ScraperConfig;
use crate::domain::{ListingRecord, PageOffset};
use crate::scraper::models::{ListingsResponse, RawListingItem};
use crate::scraper::request::SearchRequest;
use crate::scraper::ScraperError;

/// Outcome of one successful page request.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Listings(Vec<ListingRecord>),
    /// No listings at this offset; the normal end of a run.
    Empty,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page starting at `offset`. Failures are logged here and
    /// returned, never retried.
    async fn fetch(&self, offset: PageOffset) -> Result<Page, ScraperError>;
}

/// Client for the daft.ie listings gateway. Holds the one HTTP session used
/// for a whole run.
pub struct DaftClient {
    client: Client,
    endpoint: Url,
    site_origin: String,
    section: String,
    page_size: u32,
}

impl DaftClient {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            ScraperError::Config(format!("invalid endpoint '{}': {e}", config.endpoint))
        })?;

        if config.page_size == 0 {
            return Err(ScraperError::Config("page size must be positive".into()));
        }

        let client = Client::builder()
            .default_headers(config.header_map()?)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            site_origin: config.site_origin.clone(),
            section: config.section.clone(),
            page_size: config.page_size,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn try_fetch(&self, offset: PageOffset) -> Result<Page, ScraperError> {
        let body = SearchRequest::published(&self.section, offset, self.page_size);

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let text = resp.text().await?;
        parse_listings_page(&text, &self.site_origin, offset)
    }
}

#[async_trait]
impl PageFetcher for DaftClient {
    async fn fetch(&self, offset: PageOffset) -> Result<Page, ScraperError> {
        let page = offset.page_number(self.page_size);

        match self.try_fetch(offset).await {
            Ok(Page::Listings(records)) => {
                tracing::info!(page, %offset, count = records.len(), "Fetched page");
                Ok(Page::Listings(records))
            }
            Ok(Page::Empty) => {
                tracing::debug!(page, %offset, "Page has no listings");
                Ok(Page::Empty)
            }
            Err(ScraperError::Status { status, url }) => {
                tracing::error!(page, status, %url, "Error fetching page");
                Err(ScraperError::Status { status, url })
            }
            Err(e) => {
                tracing::error!(page, %offset, error = %e, "Error fetching or processing page");
                Err(e)
            }
        }
    }
}

/// Turns a listings response body into a page.
///
/// A missing, null or empty `listings` array is `Page::Empty`. One bad
/// element fails the whole page; partial pages are never returned.
pub fn parse_listings_page(
    body: &str,
    site_origin: &str,
    offset: PageOffset,
) -> Result<Page, ScraperError> {
    let data: ListingsResponse =
        serde_json::from_str(body).map_err(|e| ScraperError::JsonParse(e.to_string()))?;

    if offset == PageOffset::START {
        if let Some(total) = data.paging.as_ref().and_then(|p| p.total_results) {
            tracing::debug!(total, "Upstream reports total results");
        }
    }

    let items = match data.listings {
        Some(items) if !items.is_empty() => items,
        _ => return Ok(Page::Empty),
    };

    let records: Result<Vec<_>, _> = items
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let raw: RawListingItem =
                serde_json::from_value(value).map_err(|e| ScraperError::Deserialize {
                    index,
                    message: e.to_string(),
                })?;
            ListingRecord::from_raw(raw, site_origin)
                .map_err(|source| ScraperError::Extract { index, source })
        })
        .collect();

    records.map(Page::Listings)
}
