//! Text rendering of items, pages and the browse feed

use catalog_client::{FeedState, Footer};
use domain_catalog::{Item, PageResult, SortOrder};

/// Multi-line card for one item
pub fn item_card(item: &Item) -> String {
    let mut card = format!(
        "#{:<4} {}  ${:.2}\n      {}\n      {}",
        item.id, item.name, item.price, item.description, item.image
    );

    if let Some(alt) = &item.image_alt {
        card.push_str(&format!("\n      alt: {alt}"));
    }
    if let Some(tags) = item.image_tags.as_ref().filter(|t| !t.is_empty()) {
        card.push_str(&format!("\n      tags: {}", tags.join(", ")));
    }

    card
}

/// One-shot listing output
pub fn page(page: &PageResult) -> String {
    let mut out: Vec<String> = page.items.iter().map(item_card).collect();

    let shown = page.items.len();
    let summary = match page.next_offset {
        Some(next) => format!("{shown} of {} matching items; next offset {next}", page.total),
        None => format!("{shown} of {} matching items. End of results.", page.total),
    };
    out.push(summary);
    out.join("\n")
}

fn heading(feed: &FeedState) -> String {
    let query = feed.debounced_query();
    let mut heading = if query.trim().is_empty() {
        "── All items".to_string()
    } else {
        format!("── Results for \"{query}\"")
    };
    match feed.sort() {
        SortOrder::Asc => heading.push_str(", price low to high"),
        SortOrder::Desc => heading.push_str(", price high to low"),
        SortOrder::None => {}
    }
    heading
}

/// Incremental printer for the browse view.
///
/// Only emits what changed since the previous snapshot: a heading when the
/// feed restarts, cards for newly appended items, and the footer when its
/// state moves.
#[derive(Debug, Default)]
pub struct FeedRenderer {
    generation: Option<u64>,
    shown: usize,
    footer: Option<Footer>,
    rows: usize,
}

impl FeedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, feed: &FeedState) -> Vec<String> {
        let mut lines = Vec::new();

        if self.generation != Some(feed.generation()) {
            self.generation = Some(feed.generation());
            self.shown = 0;
            self.footer = None;
            lines.push(heading(feed));
        }

        let fresh = feed.items().get(self.shown..).unwrap_or(&[]);
        for item in fresh {
            lines.extend(item_card(item).lines().map(str::to_string));
        }
        self.shown = feed.items().len();

        let footer = feed.footer();
        if self.footer.as_ref() != Some(&footer) {
            if footer != Footer::Idle {
                lines.push(footer.to_string());
            }
            self.footer = Some(footer);
        }

        self.rows += lines.len();
        lines
    }

    /// Rows printed so far for the current feed and earlier ones
    pub fn rows(&self) -> usize {
        self.rows
    }
}
