use serde::{Deserialize, Serialize};

use super::QueryError;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// 1-based page request. The page size is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageSpec")]
pub struct PageSpec {
    page_index: usize,
    page_size: usize,
}

#[derive(Deserialize)]
struct RawPageSpec {
    page_index: usize,
    page_size: usize,
}

impl TryFrom<RawPageSpec> for PageSpec {
    type Error = QueryError;

    fn try_from(raw: RawPageSpec) -> Result<Self, Self::Error> {
        Self::new(raw.page_index, raw.page_size)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageSpec {
    pub fn new(page_index: usize, page_size: usize) -> Result<Self, QueryError> {
        if page_size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        Ok(Self {
            page_index,
            page_size,
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn with_page(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }

    /// Clamp the index into `1..=total_pages` for navigation controls.
    pub fn clamped(self, total_pages: usize) -> Self {
        self.with_page(self.page_index.clamp(1, total_pages.max(1)))
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// 1-based position of the first visible item, 0 when the page is empty.
    pub fn showing_from(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page_index - 1) * self.page_size + 1
        }
    }

    pub fn showing_to(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.showing_from() + self.items.len() - 1
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

/// Slice `[(p-1)*s, min(p*s, n))`. Indices outside `1..=total_pages` give an
/// empty page.
pub fn paginate<T: Clone>(items: &[T], spec: PageSpec) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, spec.page_size);

    let visible = if spec.page_index == 0 {
        Vec::new()
    } else {
        let start = (spec.page_index - 1).saturating_mul(spec.page_size);
        let end = start.saturating_add(spec.page_size).min(total_items);
        items.get(start..end).map(<[T]>::to_vec).unwrap_or_default()
    };

    Page {
        items: visible,
        page_index: spec.page_index,
        page_size: spec.page_size,
        total_items,
        total_pages,
    }
}
