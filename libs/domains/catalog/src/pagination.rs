use crate::models::{Item, PageResult};

/// Cuts the window `[offset, offset + limit)` out of an already filtered and
/// sorted listing.
///
/// `total` counts the whole listing. `next_offset` is set only when
/// `offset + limit` still points inside it, and `has_more` mirrors it.
pub fn paginate(sorted_filtered: &[&Item], offset: usize, limit: usize) -> PageResult {
    let total = sorted_filtered.len();
    let end = offset.saturating_add(limit);

    let items = sorted_filtered
        .get(offset.min(total)..end.min(total))
        .unwrap_or_default()
        .iter()
        .map(|item| (*item).clone())
        .collect();

    let next_offset = (end < total).then_some(end);

    PageResult {
        items,
        total,
        next_offset,
        has_more: next_offset.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter_items;
    use crate::seed::{Lcg, generate};

    fn catalog() -> Vec<Item> {
        generate(600, &mut Lcg::default())
    }

    #[test]
    fn test_first_page_of_full_catalog() {
        let items = catalog();
        let all = filter_items(&items, "");
        let page = paginate(&all, 0, 20);

        assert_eq!(page.total, 600);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.next_offset, Some(20));
        assert!(page.has_more);
        assert_eq!(page.items[0].id, "1");
    }

    #[test]
    fn test_last_partial_page() {
        let items = catalog();
        let all = filter_items(&items, "");
        let page = paginate(&all, 590, 20);

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.next_offset, None);
        assert!(!page.has_more);
        assert_eq!(page.items[9].id, "600");
    }

    #[test]
    fn test_exact_last_page_has_no_next() {
        let items = catalog();
        let all = filter_items(&items, "");
        let page = paginate(&all, 580, 20);

        assert_eq!(page.items.len(), 20);
        assert!(!page.has_more);
    }

    #[test]
    fn test_offset_past_end_is_empty_but_counts() {
        let items = catalog();
        let all = filter_items(&items, "");
        let page = paginate(&all, 10_000, 20);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 600);
        assert!(!page.has_more);
    }

    #[test]
    fn test_no_matches() {
        let items = catalog();
        let none = filter_items(&items, "does-not-exist");
        let page = paginate(&none, 0, 20);

        assert_eq!(page, PageResult::empty());
    }

    #[test]
    fn test_has_more_tracks_next_offset() {
        let items = catalog();
        let all = filter_items(&items, "");
        for offset in [0, 17, 299, 579, 580, 581, 599, 600, 601] {
            for limit in [1, 20, 100] {
                let page = paginate(&all, offset, limit);
                assert_eq!(page.has_more, page.next_offset.is_some());
                assert!(page.items.len() <= limit);
            }
        }
    }

    #[test]
    fn test_huge_offset_does_not_overflow() {
        let items = catalog();
        let all = filter_items(&items, "");
        let page = paginate(&all, usize::MAX, 100);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }
}
