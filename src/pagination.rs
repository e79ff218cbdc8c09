//! Shared pagination contract used by every list endpoint.
//!
//! Requests carry a `limit`/`offset` window, responses wrap the page of rows
//! together with the metadata needed to render a pager: the total row count
//! under the active filter, the window that produced the page, and the
//! one-based page number.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// A bounded window into a filtered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Builds a window from optional request parameters, clamping the limit
    /// into `1..=MAX_LIMIT` and the offset to be non-negative.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }

    /// One-based page number implied by this window.
    pub fn number(&self) -> i64 {
        self.offset / self.limit + 1
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    pub total: usize,
    pub limit: i64,
    pub offset: i64,
    pub page: i64,
}

/// One page of results plus pager metadata. The shape is identical across
/// every resource list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: usize, page: Page) -> Self {
        Self {
            data,
            meta: PageMeta {
                total,
                limit: page.limit,
                offset: page.offset,
                page: page.number(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_first_page_of_twenty() {
        let page = Page::new(None, None);
        assert_eq!(page.limit, 20);
        assert_eq!(page.offset, 0);
        assert_eq!(page.number(), 1);
    }

    #[test]
    fn page_number_is_floor_of_offset_over_limit_plus_one() {
        assert_eq!(Page { limit: 20, offset: 0 }.number(), 1);
        assert_eq!(Page { limit: 20, offset: 19 }.number(), 1);
        assert_eq!(Page { limit: 20, offset: 20 }.number(), 2);
        assert_eq!(Page { limit: 10, offset: 45 }.number(), 5);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(Page::new(Some(0), None).limit, 1);
        assert_eq!(Page::new(Some(1000), None).limit, MAX_LIMIT);
        assert_eq!(Page::new(None, Some(-5)).offset, 0);
    }

    #[test]
    fn paginated_carries_window_in_meta() {
        let page = Page {
            limit: 10,
            offset: 30,
        };
        let wrapped = Paginated::new(vec![1, 2, 3], 57, page);
        assert_eq!(wrapped.data.len(), 3);
        assert_eq!(wrapped.meta.total, 57);
        assert_eq!(wrapped.meta.limit, 10);
        assert_eq!(wrapped.meta.offset, 30);
        assert_eq!(wrapped.meta.page, 4);
    }
}
