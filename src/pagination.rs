//! Page requests and pagination response headers.
//!
//! Wire format follows the original API: zero-based `page`, `size`, and a
//! `sort` parameter shaped `field,asc` / `field,desc`. The total row count
//! travels back in the `X-Total-Count` header.

use axum::http::header::HeaderMap;
use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Query parameters for paginated list endpoints.
#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index.
    #[param(example = 0)]
    pub page: Option<u64>,
    /// Page size, capped at 1000.
    #[param(example = 20)]
    pub size: Option<u64>,
    /// Sort directive in the format `field,asc` or `field,desc`.
    #[param(example = "lastName,desc")]
    pub sort: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// One requested ordering, matched against a per-entity whitelist of
/// sortable fields before it reaches SQL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortDirective {
    pub field: String,
    pub direction: Direction,
}

/// A resolved page request: zero-based index, clamped size, parsed sort
/// directives. Without directives the query emits no ORDER BY and the store's
/// natural retrieval order applies (stable for a fixed snapshot, but not a
/// documented guarantee).
#[derive(Clone, Debug)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortDirective>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn sorted_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.sort.push(SortDirective {
            field: field.into(),
            direction,
        });
        self
    }
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        let size = params
            .size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        Self {
            page: params.page.unwrap_or(0),
            size,
            sort: params.sort.as_deref().and_then(parse_sort).into_iter().collect(),
        }
    }
}

/// Parse a `field,asc` / `field,desc` directive. A missing or unrecognized
/// direction falls back to ascending; an empty field name yields nothing.
fn parse_sort(raw: &str) -> Option<SortDirective> {
    let mut parts = raw.splitn(2, ',');
    let field = parts.next()?.trim();
    if field.is_empty() {
        return None;
    }
    let direction = match parts.next().map(str::trim) {
        Some(dir) if dir.eq_ignore_ascii_case("desc") => Direction::Desc,
        _ => Direction::Asc,
    };
    Some(SortDirective {
        field: field.to_string(),
        direction,
    })
}

/// Build the `X-Total-Count` header for a paginated response.
///
/// # Panics
///
/// Panics if the count cannot be encoded as a header value, which cannot
/// happen for a decimal integer.
#[must_use]
pub fn total_count_header(total: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("X-Total-Count", total.to_string().parse().unwrap());
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_and_direction() {
        let directive = parse_sort("lastName,desc").unwrap();
        assert_eq!(directive.field, "lastName");
        assert_eq!(directive.direction, Direction::Desc);
    }

    #[test]
    fn direction_defaults_to_ascending() {
        assert_eq!(parse_sort("email").unwrap().direction, Direction::Asc);
        assert_eq!(parse_sort("email,sideways").unwrap().direction, Direction::Asc);
    }

    #[test]
    fn blank_sort_is_ignored() {
        assert!(parse_sort("").is_none());
        assert!(parse_sort("  ,desc").is_none());
    }

    #[test]
    fn page_request_clamps_size() {
        let request = PageRequest::from(PageParams {
            page: Some(3),
            size: Some(9999),
            sort: None,
        });
        assert_eq!(request.size, MAX_PAGE_SIZE);
        assert_eq!(request.offset(), 3 * MAX_PAGE_SIZE);

        let request = PageRequest::from(PageParams {
            page: None,
            size: Some(0),
            sort: None,
        });
        assert_eq!(request.size, 1);
        assert_eq!(request.page, 0);
    }

    #[test]
    fn defaults_apply_when_params_absent() {
        let request = PageRequest::from(PageParams::default());
        assert_eq!(request.page, 0);
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);
        assert!(request.sort.is_empty());
    }

    #[test]
    fn total_count_header_is_set() {
        let headers = total_count_header(15);
        assert_eq!(headers.get("X-Total-Count").unwrap(), "15");
    }
}
