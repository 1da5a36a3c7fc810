//! Pure pagination math for the property grid.
//!
//! The current page is owned by the caller and only ever moves through
//! [`clamp_page`], so an out-of-range request leaves it where it was.

use std::num::NonZeroUsize;
use std::ops::Range;

/// `ceil(item_length / item_per_page)`. A zero page size cannot be expressed.
pub fn compute_page_count(item_length: usize, item_per_page: NonZeroUsize) -> usize {
    item_length.div_ceil(item_per_page.get())
}

/// Returns `requested` if it lies in `[1, page_count]`, otherwise `current`.
pub fn clamp_page(requested: i64, page_count: usize, current: usize) -> usize {
    match usize::try_from(requested) {
        Ok(page) if (1..=page_count).contains(&page) => page,
        _ => current,
    }
}

/// Every page number, `1..=page_count`.
pub fn page_numbers(page_count: usize) -> Vec<usize> {
    (1..=page_count).collect()
}

/// Snapshot handed to the pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    pub current_page: usize,
    pub page_count: usize,
    pub page_numbers: Vec<usize>,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    page_count: usize,
    item_length: usize,
    item_per_page: NonZeroUsize,
}

impl Pager {
    /// Starts on page 1.
    pub fn new(item_length: usize, item_per_page: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_count: compute_page_count(item_length, item_per_page),
            item_length,
            item_per_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn go_to(&mut self, requested: i64) -> usize {
        self.current_page = clamp_page(requested, self.page_count, self.current_page);
        self.current_page
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current_page as i64 - 1)
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current_page as i64 + 1)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.page_count
    }

    pub fn state(&self) -> PagerState {
        PagerState {
            current_page: self.current_page,
            page_count: self.page_count,
            page_numbers: page_numbers(self.page_count),
            can_go_prev: self.can_go_prev(),
            can_go_next: self.can_go_next(),
        }
    }

    /// Item indices `[start, end)` shown on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let per_page = self.item_per_page.get();
        let start = (self.current_page - 1)
            .saturating_mul(per_page)
            .min(self.item_length);
        let end = start.saturating_add(per_page).min(self.item_length);
        start..end
    }
}
