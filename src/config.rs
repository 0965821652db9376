use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::path::PathBuf;
use std::time::Duration;

use crate::scraper::ScraperError;

pub const DAFT_ENDPOINT: &str = "https://gateway.daft.ie/old/v1/listings";
pub const DAFT_ORIGIN: &str = "https://www.daft.ie";
pub const DEFAULT_SECTION: &str = "residential-for-sale";
pub const PAGE_SIZE: u32 = 20;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// Everything the fetcher needs to talk to the listings gateway.
///
/// The browser-identity headers go stale as the upstream updates what it
/// accepts, so they live here rather than in the client.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub endpoint: String,
    /// Prefixed to each listing's relative path to build `detail_url`.
    pub site_origin: String,
    pub headers: Vec<(String, String)>,
    pub page_size: u32,
    pub section: String,
    pub request_timeout: Duration,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportFormat {
    Delimited { delimiter: char },
    Xlsx,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub path: PathBuf,
    pub format: ExportFormat,
}

impl ExportConfig {
    /// Picks the format from the file extension: `.xlsx` writes a workbook,
    /// `.tsv` tab-separated text, anything else comma-separated text.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let format = match extension.as_deref() {
            Some("xlsx") => ExportFormat::Xlsx,
            Some("tsv") => ExportFormat::Delimited { delimiter: '\t' },
            _ => ExportFormat::Delimited { delimiter: ',' },
        };
        Self { path, format }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            endpoint: DAFT_ENDPOINT.to_string(),
            site_origin: DAFT_ORIGIN.to_string(),
            headers: default_headers(),
            page_size: PAGE_SIZE,
            section: DEFAULT_SECTION.to_string(),
            request_timeout: Duration::from_secs(60),
            export: None,
        }
    }
}

impl ScraperConfig {
    /// Same settings, pointed at another endpoint.
    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replaces the value of `name` if present, otherwise appends it.
    #[cfg(test)]
    pub fn set_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    pub fn header_map(&self) -> Result<HeaderMap, ScraperError> {
        let mut map = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ScraperError::Config(format!("invalid header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ScraperError::Config(format!("invalid value for '{name}': {e}")))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

fn default_headers() -> Vec<(String, String)> {
    [
        ("accept", "application/json"),
        ("accept-language", "en-IE,en;q=0.9,en-US;q=0.8,en-GB;q=0.7"),
        ("brand", "daft"),
        ("cache-control", "no-cache, no-store"),
        ("content-type", "application/json"),
        ("expires", "0"),
        ("origin", DAFT_ORIGIN),
        ("platform", "web"),
        ("pragma", "no-cache"),
        ("referer", "https://www.daft.ie/"),
        (
            "sec-ch-ua",
            r#""Google Chrome";v="123", "Not:A-Brand";v="8", "Chromium";v="123""#,
        ),
        ("sec-ch-ua-mobile", "?0"),
        ("sec-ch-ua-platform", r#""Windows""#),
        ("sec-fetch-dest", "empty"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-site", "same-site"),
        ("user-agent", USER_AGENT),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
