use std::fmt;
use thiserror::Error;

use crate::scraper::models::{RawFloorArea, RawListingItem};

/// Flattened view of one upstream listing, one row of the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    pub id: String,
    pub title: Option<String>,
    pub price: Option<String>,
    pub floor_area: Option<FloorArea>,
    pub num_bathrooms: Option<String>,
    pub num_bedrooms: Option<String>,
    pub detail_url: Option<String>,
    pub sale_type: Option<String>,
    pub property_type: Option<String>,
    pub property_size: Option<String>,
    pub category: Option<String>,

    // Seller
    pub seller_id: Option<String>,
    pub seller_name: Option<String>,
    pub seller_phone: Option<String>,
    pub alternative_phone: Option<String>,
    pub branch_name: Option<String>,
    pub seller_type: Option<String>,
}

/// Records in discovery order: page order, then position within the page.
/// Duplicates across pages are kept.
pub type ResultSet = Vec<ListingRecord>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorArea {
    pub value: Option<String>,
    pub unit: Option<String>,
}

impl fmt::Display for FloorArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, &self.unit) {
            (Some(value), Some(unit)) => write!(f, "{value} {unit}"),
            (Some(value), None) => write!(f, "{value}"),
            (None, Some(unit)) => write!(f, "{unit}"),
            (None, None) => Ok(()),
        }
    }
}

impl From<RawFloorArea> for FloorArea {
    fn from(raw: RawFloorArea) -> Self {
        Self {
            value: raw.value,
            unit: raw.unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

impl ListingRecord {
    /// Column headers, in the order `cells` yields values.
    pub const COLUMNS: [&'static str; 17] = [
        "id",
        "title",
        "price",
        "floor_area",
        "num_bathrooms",
        "num_bedrooms",
        "detail_url",
        "sale_type",
        "property_type",
        "property_size",
        "category",
        "seller_id",
        "seller_name",
        "seller_phone",
        "alternative_phone",
        "branch_name",
        "seller_type",
    ];

    /// Flattens a raw listing element.
    ///
    /// `listing`, `listing.id` and `listing.seller` are structural and must be
    /// present. Every other field may be absent and comes through as `None`.
    pub fn from_raw(item: RawListingItem, site_origin: &str) -> Result<Self, ExtractError> {
        let listing = item.listing.ok_or(ExtractError::MissingField("listing"))?;
        let id = listing.id.ok_or(ExtractError::MissingField("listing.id"))?;
        let seller = listing
            .seller
            .ok_or(ExtractError::MissingField("listing.seller"))?;

        Ok(ListingRecord {
            id,
            title: listing.title,
            price: listing.price,
            floor_area: listing.floor_area.map(FloorArea::from),
            num_bathrooms: listing.num_bathrooms,
            num_bedrooms: listing.num_bedrooms,
            detail_url: listing
                .seo_friendly_path
                .map(|path| format!("{site_origin}{path}")),
            sale_type: listing.sale_type,
            property_type: listing.property_type,
            property_size: listing.property_size,
            category: listing.category,
            seller_id: seller.seller_id,
            seller_name: seller.name,
            seller_phone: seller.phone,
            alternative_phone: seller.alternative_phone,
            branch_name: seller.branch,
            seller_type: seller.seller_type,
        })
    }

    /// One value per column, `None` where the upstream had nothing.
    pub fn cells(&self) -> [Option<String>; 17] {
        [
            Some(self.id.clone()),
            self.title.clone(),
            self.price.clone(),
            self.floor_area.as_ref().map(|area| area.to_string()),
            self.num_bathrooms.clone(),
            self.num_bedrooms.clone(),
            self.detail_url.clone(),
            self.sale_type.clone(),
            self.property_type.clone(),
            self.property_size.clone(),
            self.category.clone(),
            self.seller_id.clone(),
            self.seller_name.clone(),
            self.seller_phone.clone(),
            self.alternative_phone.clone(),
            self.branch_name.clone(),
            self.seller_type.clone(),
        ]
    }
}
