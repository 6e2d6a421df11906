//! Filter → Sort → Paginate Pipeline
//!
//! Pure function over the immutable catalog snapshot: the page number, sort
//! key and direction arrive as explicit parameters instead of living in
//! session state, so every call is reproducible.

use crate::filter::{amount_quota_in_range, scholarship_matches};
use crate::sorter::{sort_scholarships, SortKey, SortOrder};
use crate::types::{FilterSelection, Scholarship};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            key: SortKey::Amount,
            order: SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// 1-based page number; out-of-range requests reset to the first page.
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of filtered, sorted results.
#[derive(Debug)]
pub struct FilteredPage<'a> {
    pub scholarships: Vec<&'a Scholarship>,
    pub total_matches: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Run the whole pipeline: eligibility + keyword + numeric-range filtering,
/// then sort, then slice out the requested page.
pub fn filter_sort_paginate<'a>(
    catalog: &'a [Scholarship],
    filters: &FilterSelection,
    sort: SortSpec,
    page: PageRequest,
) -> FilteredPage<'a> {
    let mut matched: Vec<&Scholarship> = catalog
        .iter()
        .filter(|s| in_numeric_ranges(s, filters) && scholarship_matches(s, filters))
        .collect();

    sort_scholarships(&mut matched, sort.key, sort.order);

    let page_size = page.page_size.max(1);
    let total_matches = matched.len();
    let total_pages = ((total_matches + page_size - 1) / page_size).max(1);
    // a filter change can strand the page number past the end; reset to 1
    let current = if page.page == 0 || page.page > total_pages {
        1
    } else {
        page.page
    };

    let start = (current - 1) * page_size;
    let end = (start + page_size).min(total_matches);
    let scholarships = if start < total_matches {
        matched[start..end].to_vec()
    } else {
        Vec::new()
    };

    FilteredPage {
        scholarships,
        total_matches,
        page: current,
        total_pages,
    }
}

fn in_numeric_ranges(scholarship: &Scholarship, filters: &FilterSelection) -> bool {
    if filters.amount_range.is_none() && filters.quota_range.is_none() {
        return true;
    }
    let amount_range = filters.amount_range.unwrap_or((0.0, f64::MAX));
    let quota_range = filters.quota_range.unwrap_or((0.0, f64::MAX));
    amount_quota_in_range(scholarship, amount_range, quota_range)
}
