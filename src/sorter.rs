//! Result Sorting
//!
//! Orders filtered listings by award amount, quota or close date. Listings
//! without the sort key keep the original placement rules: missing amounts
//! and quotas sort as -1, a missing close date sorts as 9999-12-31.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::numeric::min_amount_and_quota;
use crate::types::Scholarship;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Amount,
    Quota,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortKey {
    /// Direction a sort button starts in: deadlines soonest-first, numbers
    /// largest-first.
    pub fn default_order(&self) -> SortOrder {
        match self {
            SortKey::EndDate => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Sort a filtered page-worth of listings in place. The sort is stable, so
/// ties keep their catalog order in either direction.
pub fn sort_scholarships(scholarships: &mut [&Scholarship], key: SortKey, order: SortOrder) {
    let directed = |cmp: std::cmp::Ordering| match order {
        SortOrder::Asc => cmp,
        SortOrder::Desc => cmp.reverse(),
    };
    match key {
        SortKey::Amount => scholarships.sort_by(|a, b| {
            let a_val = min_amount_and_quota(a).0.unwrap_or(-1.0);
            let b_val = min_amount_and_quota(b).0.unwrap_or(-1.0);
            directed(a_val.partial_cmp(&b_val).unwrap_or(std::cmp::Ordering::Equal))
        }),
        SortKey::Quota => scholarships.sort_by(|a, b| {
            let a_val = min_amount_and_quota(a).1.unwrap_or(-1.0);
            let b_val = min_amount_and_quota(b).1.unwrap_or(-1.0);
            directed(a_val.partial_cmp(&b_val).unwrap_or(std::cmp::Ordering::Equal))
        }),
        SortKey::EndDate => scholarships.sort_by(|a, b| {
            let far_future = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
            let a_val = parse_end_date(&a.end_date).unwrap_or(far_future);
            let b_val = parse_end_date(&b.end_date).unwrap_or(far_future);
            directed(a_val.cmp(&b_val))
        }),
    }
}

/// Parse a close-date string. The snapshot carries `%Y-%m-%d` or `%Y/%m/%d`;
/// anything else falls back to digging a date out of the string.
pub fn parse_end_date(date_str: &str) -> Option<NaiveDate> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, fmt) {
            return Some(date);
        }
    }

    let re = regex::Regex::new(r"(\d{4})[-/](\d{1,2})[-/](\d{1,2})").ok()?;
    let caps = re.captures(date_str)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
