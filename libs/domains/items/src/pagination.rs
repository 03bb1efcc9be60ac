//! Page slicing and pagination metadata.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 20;

/// A validated page request. `page` and `limit` are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Zero values fall back to the defaults.
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Coerce raw query-string values. Anything that is not a positive
    /// integer (including `2.0`) is replaced by its default.
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: coerce(page, DEFAULT_PAGE),
            limit: coerce(limit, DEFAULT_LIMIT),
        }
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn coerce(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

/// Pagination metadata describing the filtered set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationMeta {
    pub fn new(request: PageRequest, total_items: usize) -> Self {
        let total_pages = total_items.div_ceil(request.limit);
        Self {
            page: request.page,
            limit: request.limit,
            total_items,
            total_pages,
            has_next_page: request.page < total_pages,
            has_previous_page: request.page > 1,
        }
    }
}

/// Slice `[(page-1)*limit, page*limit)` out of `items`.
///
/// Pages past the end yield an empty slice. `total_items` counts everything
/// passed in, so callers should paginate the already-filtered set.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> (Vec<T>, PaginationMeta) {
    let meta = PaginationMeta::new(request, items.len());
    let page_items = items
        .into_iter()
        .skip(request.offset())
        .take(request.limit)
        .collect();

    (page_items, meta)
}
