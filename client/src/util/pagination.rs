//! Pagination arithmetic for the patient feed.
//!
//! Pages are 1-based. A listing with zero results still has one (empty) page
//! so the controls never render "page 1 of 0".

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// One slot in the page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl Pagination {
    #[must_use]
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        Self { page, per_page: per_page.max(1), total }
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let per_page = u64::from(self.per_page.max(1));
        let pages = self.total.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Current page forced into `1..=total_pages`.
    #[must_use]
    pub fn clamped_page(&self) -> u32 {
        self.page.clamp(1, self.total_pages())
    }

    /// Zero-based index of the first item on the current page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.clamped_page() - 1) * u64::from(self.per_page.max(1))
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.clamped_page() > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.clamped_page() < self.total_pages()
    }

    /// "Showing 11–20 of 53", or "No results" for an empty listing.
    #[must_use]
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "No results".to_owned();
        }
        let first = self.offset() + 1;
        let last = (self.offset() + u64::from(self.per_page.max(1))).min(self.total);
        format!("Showing {first}–{last} of {}", self.total)
    }

    /// Page strip with the first and last page always present, `siblings`
    /// pages either side of the current one, and an ellipsis for any gap of
    /// two or more pages (a gap of exactly one page shows that page instead).
    #[must_use]
    pub fn page_items(&self, siblings: u32) -> Vec<PageItem> {
        let total = self.total_pages();
        let current = self.clamped_page();
        let start = current.saturating_sub(siblings).max(1);
        let end = current.saturating_add(siblings).min(total);

        let mut items = Vec::new();
        if start > 1 {
            items.push(PageItem::Page(1));
            match start {
                2 => {}
                3 => items.push(PageItem::Page(2)),
                _ => items.push(PageItem::Ellipsis),
            }
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < total {
            match total - end {
                1 => {}
                2 => items.push(PageItem::Page(total - 1)),
                _ => items.push(PageItem::Ellipsis),
            }
            items.push(PageItem::Page(total));
        }
        items
    }
}
