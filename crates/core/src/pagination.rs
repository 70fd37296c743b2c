//! Page-based pagination shared by list endpoints.
//!
//! The inherited client contract is 1-based `page`/`limit` pairs rather
//! than limit/offset. Defaults: page 1; limit 10 for calls, 50 everywhere
//! else (callers pick the default that matches their endpoint).

/// Default page size for the call log.
pub const CALLS_PAGE_SIZE: i64 = 10;

/// Default page size for every other list endpoint.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Upper bound on requested page sizes.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    /// Build from raw query-string values, applying defaults and clamping.
    ///
    /// Malformed values are treated as absent: a bad filter is ignored,
    /// not an error.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, default_limit: i64) -> Self {
        let page = page
            .and_then(|p| p.parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        let limit = limit
            .and_then(|l| l.parse::<i64>().ok())
            .filter(|l| *l >= 1)
            .unwrap_or(default_limit)
            .min(MAX_PAGE_SIZE);
        Self { page, limit }
    }

    /// Zero-based row offset for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Number of pages needed for `total` rows, `ceil(total / limit)`.
    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }

    /// Slice one page out of an in-memory result set.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let start = (self.offset() as usize).min(items.len());
        let end = (start + self.limit as usize).min(items.len());
        items[start..end].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent_or_malformed() {
        let q = PageQuery::from_params(None, None, DEFAULT_PAGE_SIZE);
        assert_eq!(q, PageQuery { page: 1, limit: 50 });

        let q = PageQuery::from_params(Some("abc"), Some("-3"), CALLS_PAGE_SIZE);
        assert_eq!(q, PageQuery { page: 1, limit: 10 });
    }

    #[test]
    fn limit_is_clamped() {
        let q = PageQuery::from_params(Some("1"), Some("5000"), DEFAULT_PAGE_SIZE);
        assert_eq!(q.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn offset_and_total_pages() {
        let q = PageQuery::from_params(Some("2"), Some("10"), CALLS_PAGE_SIZE);
        assert_eq!(q.offset(), 10);
        assert_eq!(q.total_pages(28), 3);
        assert_eq!(q.total_pages(30), 3);
        assert_eq!(q.total_pages(31), 4);
        assert_eq!(q.total_pages(0), 0);
    }

    #[test]
    fn slice_returns_the_requested_window() {
        let items: Vec<i64> = (1..=28).collect();
        let q = PageQuery::from_params(Some("2"), Some("10"), CALLS_PAGE_SIZE);
        assert_eq!(q.slice(&items), (11..=20).collect::<Vec<_>>());

        // Last, partial page.
        let q = PageQuery::from_params(Some("3"), Some("10"), CALLS_PAGE_SIZE);
        assert_eq!(q.slice(&items), (21..=28).collect::<Vec<_>>());

        // Past the end.
        let q = PageQuery::from_params(Some("9"), Some("10"), CALLS_PAGE_SIZE);
        assert!(q.slice(&items).is_empty());
    }
}
