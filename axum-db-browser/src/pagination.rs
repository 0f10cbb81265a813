//! Page window arithmetic
//!
//! Converts a 1-based `page` / `per_page` pair and a table's row count into
//! the offset to query and the indices reported back to the client.

use crate::database::traits::DatabaseError;

/// Default upper bound for `per_page`
pub const DEFAULT_MAX_PER_PAGE: u64 = 500;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
    offset: u64,
}

impl PageRequest {
    /// Validate the raw path parameters
    ///
    /// Rejects `page == 0`, `per_page == 0`, `per_page > max_per_page` and
    /// offsets that do not fit in an `i64` (the type databases bind for OFFSET).
    pub fn new(page: u64, per_page: u64, max_per_page: u64) -> Result<Self, DatabaseError> {
        if page == 0 {
            return Err(DatabaseError::InvalidPage("page must be at least 1".into()));
        }
        if per_page == 0 {
            return Err(DatabaseError::InvalidPage(
                "per_page must be at least 1".into(),
            ));
        }
        if per_page > max_per_page {
            return Err(DatabaseError::InvalidPage(format!(
                "per_page must not exceed {}",
                max_per_page
            )));
        }

        let offset = (page - 1)
            .checked_mul(per_page)
            .filter(|offset| *offset <= i64::MAX as u64)
            .ok_or_else(|| DatabaseError::InvalidPage(format!("page {} is out of range", page)))?;

        Ok(Self {
            page,
            per_page,
            offset,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Rows to skip before the window starts
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Place this request against a table of `total_count` rows
    pub fn window(&self, total_count: u64) -> PageWindow {
        let to_index = self.offset.saturating_add(self.per_page).min(total_count);

        PageWindow {
            page: self.page,
            // Over-counts by one when total_count is a multiple of per_page.
            total_pages: 1 + total_count / self.per_page,
            offset: self.offset,
            limit: self.per_page,
            from_index: self.offset + 1,
            to_index,
            count: to_index.saturating_sub(self.offset),
            total_count,
        }
    }
}

/// Result of placing a page request against a row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub total_pages: u64,
    pub offset: u64,
    pub limit: u64,
    pub from_index: u64,
    pub to_index: u64,
    pub count: u64,
    pub total_count: u64,
}
