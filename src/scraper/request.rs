use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::PageOffset;

/// Search body accepted by the listings gateway.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub section: String,
    pub filters: Vec<SearchFilter>,
    pub and_filters: Vec<SearchFilter>,
    pub ranges: Vec<Value>,
    pub paging: Paging,
    pub geo_filter: Map<String, Value>,
    pub terms: String,
}

#[derive(Debug, Serialize)]
pub struct SearchFilter {
    pub name: String,
    pub values: Vec<String>,
}

/// The gateway expects both numbers as strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub from: String,
    pub page_size: String,
}

impl SearchRequest {
    /// Published listings of `section`, one page starting at `offset`.
    pub fn published(section: &str, offset: PageOffset, page_size: u32) -> Self {
        Self {
            section: section.to_string(),
            filters: vec![SearchFilter {
                name: "adState".to_string(),
                values: vec!["published".to_string()],
            }],
            and_filters: Vec::new(),
            ranges: Vec::new(),
            paging: Paging {
                from: offset.get().to_string(),
                page_size: page_size.to_string(),
            },
            geo_filter: Map::new(),
            terms: String::new(),
        }
    }
}
