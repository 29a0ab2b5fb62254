//! Offset pagination: turns 1-indexed `page`/`size` request values into the
//! `skip`/`limit` window handed to the database.

use crate::validation::ValidationError;
use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub skip: i64,
    pub limit: i64,
}

impl Pagination {
    /// Window used when the request does not carry both `page` and `size`.
    /// The default size never exceeds `max_size`.
    pub fn first_page(max_size: u32) -> Self {
        let size = DEFAULT_PAGE_SIZE.min(max_size.max(1)) as i64;
        Self {
            skip: (DEFAULT_PAGE as i64 - 1) * size,
            limit: size,
        }
    }
}

/// Builds the window from raw request values.
///
/// When either value is absent or blank both fall back to `page=1, size=100`
/// (bounded by `max_size`).
/// Non-numeric, zero or negative values are rejected, as is a `size` larger
/// than `max_size`.
pub fn from_request(
    page: Option<&str>,
    size: Option<&str>,
    max_size: u32,
) -> Result<Pagination, ValidationError> {
    let page = page.filter(|v| !v.trim().is_empty());
    let size = size.filter(|v| !v.trim().is_empty());

    match (page, size) {
        (Some(page), Some(size)) => {
            let page = parse_positive("page", page)?;
            let size = parse_positive("size", size)?;
            get_offset_and_limit(page, size, max_size)
        }
        _ => Ok(Pagination::first_page(max_size)),
    }
}

pub fn get_offset_and_limit(page: u32, size: u32, max_size: u32) -> Result<Pagination, ValidationError> {
    if page == 0 {
        return Err(ValidationError::InvalidParameter(
            "page must be a positive integer".to_string(),
        ));
    }
    if size == 0 {
        return Err(ValidationError::InvalidParameter(
            "size must be a positive integer".to_string(),
        ));
    }
    if size > max_size {
        return Err(ValidationError::InvalidParameter(format!(
            "size must not exceed {}",
            max_size
        )));
    }

    let skip = (page as i64 - 1)
        .checked_mul(size as i64)
        .ok_or_else(|| ValidationError::InvalidParameter("page is out of range".to_string()))?;

    Ok(Pagination {
        skip,
        limit: size as i64,
    })
}

fn parse_positive(name: &str, value: &str) -> Result<u32, ValidationError> {
    match value.trim().parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ValidationError::InvalidParameter(format!(
            "{} must be a positive integer, got '{}'",
            name, value
        ))),
    }
}
