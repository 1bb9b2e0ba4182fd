//! Fixed-size page window over the filtered members.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    /// 1-indexed.
    current_page: usize,
    total_pages: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Page targets for the navigation controls; `None` means the control is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub first: Option<usize>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    pub last: Option<usize>,
}

impl Pagination {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            total_pages: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Recompute the page count for `len` rows and go back to page 1.
    pub fn reset(&mut self, len: usize) {
        self.total_pages = len.div_ceil(self.page_size);
        self.current_page = 1;
    }

    /// Move to page `n`, clamped into `[1, total_pages]`.
    pub fn change_page(&mut self, n: usize) {
        self.current_page = n.clamp(1, self.total_pages.max(1));
    }

    /// Row range of the current page within a list of `len` rows.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    pub fn nav(&self) -> PageNav {
        let back = self.current_page > 1;
        let forward = self.current_page < self.total_pages;
        PageNav {
            first: back.then_some(1),
            previous: back.then(|| self.current_page - 1),
            next: forward.then(|| self.current_page + 1),
            last: forward.then_some(self.total_pages),
        }
    }
}
