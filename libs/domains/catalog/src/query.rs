//! Substring search and price ordering over catalog items.

use std::cmp::Ordering;

use crate::models::{Item, SortOrder};

/// Returns true when `item` matches the free-text query `q`.
///
/// The query is trimmed and lowercased; blank queries match everything.
/// Text fields (name, description, alt text, tags) match on case-insensitive
/// substring. A numeric query additionally matches when the price's plain
/// decimal rendering contains it, so `10` matches both `10.5` and `210`.
pub fn matches_query(item: &Item, q: &str) -> bool {
    let query = q.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    matches_normalized(item, &query)
}

fn matches_normalized(item: &Item, query: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(query);

    let in_text = contains(item.name.as_str())
        || contains(item.description.as_str())
        || item.image_alt.as_deref().is_some_and(contains)
        || item
            .image_tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| contains(t.as_str())));

    in_text || (is_numeric(query) && item.price.to_string().contains(query))
}

fn is_numeric(query: &str) -> bool {
    query.parse::<f64>().is_ok_and(|n| !n.is_nan())
}

/// Keeps the items matching `q`, preserving their relative order.
pub fn filter_items<'a, I>(items: I, q: &str) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let query = q.trim().to_lowercase();
    if query.is_empty() {
        return items.into_iter().collect();
    }
    items
        .into_iter()
        .filter(|item| matches_normalized(item, &query))
        .collect()
}

/// Stable sort by price; `SortOrder::None` leaves the order untouched.
pub fn sort_by_price(items: &mut [&Item], sort: SortOrder) {
    match sort {
        SortOrder::None => {}
        SortOrder::Asc => items.sort_by(|a, b| cmp_price(a, b)),
        SortOrder::Desc => items.sort_by(|a, b| cmp_price(b, a)),
    }
}

fn cmp_price(a: &Item, b: &Item) -> Ordering {
    a.price.total_cmp(&b.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{Lcg, generate};

    fn item(id: &str, name: &str, price: f64) -> Item {
        Item {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: format!("https://img.example/{id}"),
            image_alt: None,
            image_tags: None,
        }
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let it = item("1", "Lamp", 12.0);
        assert!(matches_query(&it, ""));
        assert!(matches_query(&it, "   "));
    }

    #[test]
    fn test_text_match_is_case_insensitive_and_trimmed() {
        let mut it = item("1", "Desk Lamp", 12.0);
        it.description = "Warm LIGHT".into();
        it.image_alt = Some("A lamp on a desk".into());
        it.image_tags = Some(vec!["Office".into()]);

        assert!(matches_query(&it, "  desk "));
        assert!(matches_query(&it, "light"));
        assert!(matches_query(&it, "ON A"));
        assert!(matches_query(&it, "offi"));
        assert!(!matches_query(&it, "chair"));
    }

    #[test]
    fn test_id_and_image_are_not_searched() {
        let it = item("777", "Lamp", 12.0);
        assert!(!matches_query(&it, "777"));
        assert!(!matches_query(&it, "img.example"));
    }

    #[test]
    fn test_numeric_query_matches_price_substring() {
        assert!(matches_query(&item("1", "a", 10.5), "10"));
        assert!(matches_query(&item("2", "b", 210.0), "10"));
        assert!(matches_query(&item("3", "c", 61.42), "61.4"));
        assert!(!matches_query(&item("4", "d", 33.11), "10"));
    }

    #[test]
    fn test_whole_prices_render_without_decimals() {
        // 12.0 renders as "12"
        assert!(matches_query(&item("1", "a", 12.0), "12"));
        assert!(!matches_query(&item("1", "a", 12.0), "12.0"));
    }

    #[test]
    fn test_non_numeric_query_skips_price() {
        assert!(!matches_query(&item("1", "a", 10.5), "10a"));
        assert!(!matches_query(&item("1", "a", 10.5), "nan"));
    }

    #[test]
    fn test_filter_is_order_preserving_subsequence() {
        let catalog = generate(600, &mut Lcg::default());
        for q in ["", "item 1", "nature", "5", "99", "zzz"] {
            let filtered = filter_items(&catalog, q);
            let mut cursor = catalog.iter();
            for f in &filtered {
                assert!(cursor.any(|c| c.id == f.id), "query {q:?} broke ordering");
            }
        }
    }

    #[test]
    fn test_filter_by_tag() {
        let catalog = generate(600, &mut Lcg::default());
        assert_eq!(filter_items(&catalog, "nature").len(), 120);
        assert_eq!(filter_items(&catalog, "NATURE").len(), 120);
    }

    #[test]
    fn test_filter_no_matches() {
        let catalog = generate(600, &mut Lcg::default());
        assert!(filter_items(&catalog, "no-such-thing").is_empty());
    }

    #[test]
    fn test_sort_asc_and_desc_are_reversed_prices() {
        let catalog = generate(600, &mut Lcg::default());

        let mut asc = filter_items(&catalog, "");
        sort_by_price(&mut asc, SortOrder::Asc);
        let mut desc = filter_items(&catalog, "");
        sort_by_price(&mut desc, SortOrder::Desc);

        let asc_prices: Vec<f64> = asc.iter().map(|i| i.price).collect();
        let mut desc_prices: Vec<f64> = desc.iter().map(|i| i.price).collect();
        desc_prices.reverse();
        assert_eq!(asc_prices, desc_prices);
        assert_eq!(asc[0].price, 10.08);
        assert_eq!(desc[0].price, 99.99);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let catalog = vec![item("a", "x", 5.0), item("b", "y", 1.0), item("c", "z", 5.0)];
        let mut refs: Vec<&Item> = catalog.iter().collect();
        sort_by_price(&mut refs, SortOrder::Desc);
        let ids: Vec<&str> = refs.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_sort_none_keeps_order() {
        let catalog = vec![item("a", "x", 5.0), item("b", "y", 1.0)];
        let mut refs: Vec<&Item> = catalog.iter().collect();
        sort_by_price(&mut refs, SortOrder::None);
        assert_eq!(refs[0].id, "a");
    }
}
