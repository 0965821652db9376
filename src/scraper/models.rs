use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// response
//  ├── paging
//  │    └── totalResults
//  └── listings[]
//       └── listing
//            ├── id
//            ├── title, price, category
//            ├── floorArea
//            │    ├── value
//            │    └── unit
//            ├── numBathrooms, numBedrooms
//            ├── seoFriendlyPath
//            ├── saleType[]
//            ├── propertyType, propertySize
//            └── seller
//                 ├── sellerId
//                 ├── name, branch, sellerType
//                 └── phone, alternativePhone
//
// Every member is optional here. Which ones are actually required is decided
// when the raw listing is flattened into a `ListingRecord`.

/// Top-level body of a listings response. Elements stay as raw JSON so a bad
/// element can be reported by index.
#[derive(Debug, Deserialize)]
pub struct ListingsResponse {
    #[serde(default)]
    pub listings: Option<Vec<Value>>,
    #[serde(default)]
    pub paging: Option<ResponsePaging>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePaging {
    #[serde(default)]
    pub total_results: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct RawListingItem {
    #[serde(default)]
    pub listing: Option<RawListing>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: Option<String>,
    #[serde(default)]
    pub floor_area: Option<RawFloorArea>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub num_bathrooms: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub num_bedrooms: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub seo_friendly_path: Option<String>,
    /// First entry of the upstream `saleType` list.
    #[serde(default, deserialize_with = "first_lenient_string")]
    pub sale_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub property_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default)]
    pub seller: Option<RawSeller>,
}

#[derive(Debug, Deserialize)]
pub struct RawFloorArea {
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSeller {
    #[serde(default, deserialize_with = "lenient_string")]
    pub seller_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub alternative_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub seller_type: Option<String>,
}

/// Reads any JSON scalar as text. Null becomes `None`; objects and arrays are
/// rejected.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    value.map_or(Ok(None), scalar_text).map_err(D::Error::custom)
}

/// First element of a list, read like `lenient_string`. A bare scalar counts
/// as a one-element list; an empty list is `None`.
fn first_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let first = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().next(),
        other => other,
    };
    first.map_or(Ok(None), scalar_text).map_err(D::Error::custom)
}

fn scalar_text(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(format!("expected a scalar value, found {other}")),
    }
}
