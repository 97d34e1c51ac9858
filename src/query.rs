//! Pagination and sort-direction helpers shared by every collection.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Page size used by the list screens.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A 1-based page of `page_size` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Index of the first record on this page. Page 0 is read as page 1.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Number of pages needed to show `total` records.
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            0
        } else {
            total.div_ceil(self.page_size)
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of records plus the size of the whole matching set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    /// Cuts `request` out of an already filtered and sorted set. A page past
    /// the end is empty but still reports the full total.
    pub fn slice(records: Vec<T>, request: PageRequest) -> Self {
        let total = records.len();
        let items = records
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .collect();
        Self { items, total }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Orients an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseQueryError {
    #[error("unknown sort direction: {0:?}")]
    UnknownDirection(String),
    #[error("unknown sort field: {0:?}")]
    UnknownField(String),
}

impl FromStr for SortDirection {
    type Err = ParseQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ParseQueryError::UnknownDirection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_page_of_ten() {
        let page = Page::slice((1..=10).collect(), PageRequest::new(2, 5));
        assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = Page::slice((1..=10).collect::<Vec<_>>(), PageRequest::new(4, 5));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_partial_last_page() {
        let page = Page::slice((1..=7).collect(), PageRequest::new(2, 5));
        assert_eq!(page.items, vec![6, 7]);
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let page = Page::slice((1..=3).collect(), PageRequest::new(0, 2));
        assert_eq!(page.items, vec![1, 2]);
    }

    #[test]
    fn test_page_count() {
        let request = PageRequest::default();
        assert_eq!(request.page_count(0), 0);
        assert_eq!(request.page_count(5), 1);
        assert_eq!(request.page_count(11), 3);
        assert_eq!(PageRequest::new(1, 0).page_count(11), 0);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!(
            "up".parse::<SortDirection>(),
            Err(ParseQueryError::UnknownDirection("up".into()))
        );
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
    }
}
