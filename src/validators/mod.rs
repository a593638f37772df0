/// Input validation utilities for the engagement endpoints
use crate::error::{AppError, Result};

/// Default page size for paginated feeds
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Hard upper bound on page size
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum accepted length for comment / tweet content
pub const MAX_CONTENT_LEN: usize = 2200;

/// Normalized pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: i64,
    pub limit: i64,
}

impl Page {
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Clamp raw pagination params to a sane window: `page >= 1`,
/// `1 <= limit <= MAX_PAGE_SIZE`. Out-of-range values are clamped rather than
/// rejected so deep-scrolling clients cannot trigger errors.
pub fn clamp_pagination(page: Option<i64>, limit: Option<i64>) -> Page {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    Page { page, limit }
}

/// Reject blank required text fields.
pub fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

/// Validate user-authored content: non-blank and within the length cap.
pub fn validate_content(field: &str, value: &str) -> Result<()> {
    require_non_blank(field, value)?;
    if value.chars().count() > MAX_CONTENT_LEN {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, MAX_CONTENT_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        let p = clamp_pagination(None, None);
        assert_eq!(p, Page { page: 1, limit: DEFAULT_PAGE_SIZE });
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn pagination_offset_math() {
        let p = clamp_pagination(Some(3), Some(25));
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn pagination_clamps_out_of_range() {
        assert_eq!(clamp_pagination(Some(0), Some(0)), Page { page: 1, limit: 1 });
        assert_eq!(
            clamp_pagination(Some(-5), Some(100_000)),
            Page { page: 1, limit: MAX_PAGE_SIZE }
        );
    }

    #[test]
    fn consecutive_pages_are_disjoint() {
        let first = clamp_pagination(Some(1), Some(3));
        let second = clamp_pagination(Some(2), Some(3));
        assert_eq!(first.offset() + first.limit, second.offset());
    }

    #[test]
    fn blank_fields_rejected() {
        assert!(require_non_blank("name", "   ").is_err());
        assert!(require_non_blank("name", "watch later").is_ok());
    }

    #[test]
    fn oversized_content_rejected() {
        let long = "x".repeat(MAX_CONTENT_LEN + 1);
        assert!(validate_content("content", &long).is_err());
        assert!(validate_content("content", "nice video").is_ok());
    }
}
