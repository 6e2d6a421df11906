//! Scholarship-Level Filtering
//!
//! Combines the keyword search, the per-group rules engine (OR across a
//! listing's application tracks) and the numeric range predicates into the
//! boolean the catalog page is built from.

use crate::numeric::min_amount_and_quota;
use crate::rules::group_matches;
use crate::types::{FilterSelection, Requirement, Scholarship};

/// The requirement groups a listing is actually matched against: each track
/// combined with the common tags, or the common tags alone when the listing
/// has no tracks.
pub fn effective_groups(scholarship: &Scholarship) -> Vec<Vec<Requirement>> {
    let tags = &scholarship.tags;
    if tags.groups.is_empty() {
        return vec![tags.common_tags.clone()];
    }
    tags.groups
        .iter()
        .map(|group| {
            let mut combined = group.requirements.clone();
            combined.extend(tags.common_tags.iter().cloned());
            combined
        })
        .collect()
}

/// True when the listing should appear for this selection: the keyword (if
/// any) occurs in the name or eligibility text, and at least one application
/// track satisfies every selected category.
pub fn scholarship_matches(scholarship: &Scholarship, filters: &FilterSelection) -> bool {
    if let Some(keyword) = filters.keyword.as_deref() {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() {
            let haystack =
                format!("{} {}", scholarship.name, scholarship.eligibility).to_lowercase();
            if !haystack.contains(&keyword) {
                return false;
            }
        }
    }

    effective_groups(scholarship)
        .iter()
        .any(|group| group_matches(group, filters))
}

/// Range predicate over the listing's minimum amount and quota. A listing
/// with no amount counts as 0 NTD; one with no quota counts as 1 place.
pub fn amount_quota_in_range(
    scholarship: &Scholarship,
    amount_range: (f64, f64),
    quota_range: (f64, f64),
) -> bool {
    let (min_amount, min_quota) = min_amount_and_quota(scholarship);
    let amount = min_amount.unwrap_or(0.0);
    let quota = min_quota.unwrap_or(1.0);
    amount >= amount_range.0
        && amount <= amount_range.1
        && quota >= quota_range.0
        && quota <= quota_range.1
}

/// True when no award-amount tag anywhere in the tree carries a positive
/// number — the "show undetermined amounts" toggle.
pub fn has_undetermined_amount(scholarship: &Scholarship) -> bool {
    !scholarship.tags.all_requirements().any(|req| {
        req.category == crate::types::Category::AwardAmount
            && req.numerical.as_ref().map_or(false, |n| n.num_value > 0.0)
    })
}
