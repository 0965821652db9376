use crate::domain::{PageOffset, ResultSet};
use crate::scraper::{Page, PageFetcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// Walks the listing pages one at a time until a page is empty or fails.
///
/// The driver owns its fetcher, and with it the HTTP session, so the session
/// is released when the driver is dropped.
pub struct PaginationDriver<F> {
    fetcher: F,
    page_size: u32,
    state: DriverState,
    pages_fetched: usize,
}

impl<F: PageFetcher> PaginationDriver<F> {
    pub fn new(fetcher: F, page_size: u32) -> Self {
        Self {
            fetcher,
            page_size,
            state: DriverState::Stopped,
            pages_fetched: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Pages that yielded listings during the last run.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    #[cfg(test)]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Runs a full scrape from offset 0.
    ///
    /// An empty page and a failed page both end the run, and the caller gets
    /// whatever was accumulated either way.
    pub async fn run(&mut self) -> ResultSet {
        let mut results = ResultSet::new();
        let mut offset = PageOffset::START;
        self.state = DriverState::Running;
        self.pages_fetched = 0;

        while self.state == DriverState::Running {
            tracing::info!(
                page = offset.page_number(self.page_size),
                %offset,
                "Currently scraping page"
            );

            match self.fetcher.fetch(offset).await {
                Ok(Page::Listings(records)) => {
                    self.pages_fetched += 1;
                    results.extend(records);
                    tracing::debug!(total = results.len(), "Accumulated listings");
                    match offset.advance(self.page_size) {
                        Some(next) => offset = next,
                        None => {
                            tracing::warn!(%offset, "Offset range exhausted, stopping");
                            self.state = DriverState::Stopped;
                        }
                    }
                }
                Ok(Page::Empty) => {
                    tracing::warn!(%offset, "No listings found, stopping");
                    self.state = DriverState::Stopped;
                }
                Err(e) => {
                    tracing::error!(%offset, error = %e, "Fetch failed, stopping");
                    self.state = DriverState::Stopped;
                }
            }
        }

        tracing::info!(
            pages = self.pages_fetched,
            listings = results.len(),
            "Scrape finished"
        );
        results
    }
}
