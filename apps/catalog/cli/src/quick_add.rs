//! Demo item factory behind `add --quick` and `/add`

use domain_catalog::{models::round_cents, CreateItem};

pub const QUICK_DESCRIPTION: &str = "Created from the UI for demo purposes.";
pub const QUICK_IMAGE: &str = "https://picsum.photos/seed/ui-created/400/250";

/// Builds the demo item for a timestamp and a unit sample in `[0, 1)`.
/// The price lands in `[10, 100)` with two decimals.
pub fn quick_item(timestamp_millis: i64, unit: f64) -> CreateItem {
    CreateItem {
        name: format!("New Item {timestamp_millis}"),
        description: QUICK_DESCRIPTION.to_string(),
        price: round_cents(unit * 90.0 + 10.0),
        image: QUICK_IMAGE.to_string(),
        image_alt: None,
        image_tags: None,
    }
}

pub fn random_quick_item() -> CreateItem {
    quick_item(
        chrono::Utc::now().timestamp_millis(),
        rand::random::<f64>(),
    )
}
