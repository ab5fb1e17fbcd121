use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Page size used when `limit` is absent or unparseable.
pub const DEFAULT_LIMIT: usize = 20;
/// Largest page the listener will serve.
pub const MAX_LIMIT: usize = 100;

/// Catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned identifier, unique for the process lifetime
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Price with two decimal places
    pub price: f64,
    /// Image URL
    pub image: String,
    /// Alternative text for the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    /// Ordered descriptive tags for the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_tags: Option<Vec<String>>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub image: String,
    /// May be omitted, but not sent as `null`
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_alt: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_tags: Option<Vec<String>>,
}

/// Optional field that, when present, must hold a value of type `T`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl Item {
    /// Builds an item from a creation request, rounding the price to cents.
    pub fn from_create(id: String, input: CreateItem) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: round_cents(input.price),
            image: input.image,
            image_alt: input.image_alt,
            image_tags: input.image_tags,
        }
    }
}

/// Rounds to two decimal places, halves away from zero. Negative zero
/// comes back as `0.0`.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Price ordering applied to a filtered listing
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Keep catalog order (newest first)
    #[default]
    None,
    /// Cheapest first
    Asc,
    /// Most expensive first
    Desc,
}

impl SortOrder {
    /// Interprets the raw `sort` query value; anything other than `asc` or
    /// `desc` means no sorting.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::None,
        }
    }

    /// Value to put in the `sort` query parameter, if any.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            SortOrder::None => None,
            SortOrder::Asc => Some("asc"),
            SortOrder::Desc => Some("desc"),
        }
    }
}

/// Raw query string of `GET /items`.
///
/// Values stay strings so that malformed numbers fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Free-text search across name, description, alt text, tags and price
    pub q: Option<String>,
    /// Number of matching items to skip (default 0)
    pub offset: Option<String>,
    /// Page size, clamped to 1..=100 (default 20)
    pub limit: Option<String>,
    /// `asc` or `desc` to order by price
    pub sort: Option<String>,
}

/// Normalized listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub q: String,
    pub offset: usize,
    pub limit: usize,
    pub sort: SortOrder,
}

impl ListQuery {
    pub fn new(q: impl Into<String>, offset: usize, limit: usize, sort: SortOrder) -> Self {
        Self {
            q: q.into(),
            offset,
            limit: limit.clamp(1, MAX_LIMIT),
            sort,
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new("", 0, DEFAULT_LIMIT, SortOrder::None)
    }
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        let offset = parse_int(params.offset.as_deref()).map_or(0, |n| n.max(0) as usize);
        let limit = parse_int(params.limit.as_deref())
            .map_or(DEFAULT_LIMIT, |n| n.clamp(1, MAX_LIMIT as i64) as usize);

        Self {
            q: params.q.unwrap_or_default(),
            offset,
            limit,
            sort: SortOrder::from_param(params.sort.as_deref()),
        }
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

/// One page of a filtered, sorted listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Items in the requested window
    pub items: Vec<Item>,
    /// Number of items matching the query, independent of paging
    pub total: usize,
    /// Offset of the following page, `null` on the last page
    pub next_offset: Option<usize>,
    /// Whether another page exists
    pub has_more: bool,
}

impl PageResult {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            next_offset: None,
            has_more: false,
        }
    }
}
