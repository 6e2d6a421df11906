//! Eligibility Rules Engine
//!
//! Decides, per filter category, whether one requirement group satisfies the
//! user's selection. Three policies cover the whole vocabulary:
//!
//! - `Inclusive`: an unmarked category means "unrestricted"; the sidebar
//!   carries a 「不限/未明定」 pseudo-choice for students who want exactly
//!   the unrestricted listings.
//! - `StudentStatus`: same wildcard handling, but the special statuses
//!   (延畢生, 休學生) are whitelisted — a listing must name them explicitly,
//!   an unmarked listing is presumed open to ordinary students only.
//! - `UnmentionedWildcard`: multi-select categories whose pseudo-choice is
//!   spelled 「未提及」 and where a literal 「不限」 value is left alone.
//!
//! Categories outside these three carry no policy and never block a match.

use std::collections::HashSet;

use crate::normalize::{extract_excluded_tags, extract_included_tags, UNRESTRICTED};
use crate::types::{Category, FilterSelection, Requirement};

/// Sidebar pseudo-choice meaning "show me listings that do not restrict
/// this category" (inclusive and student-status categories).
pub const UNSPECIFIED_CHOICE: &str = "不限/未明定";

/// Sidebar pseudo-choice for the multi-select categories.
pub const UNMENTIONED_CHOICE: &str = "未提及";

/// Status assumed for listings that say nothing about enrollment.
pub const DEFAULT_STUDENT_STATUS: &str = "在學生";

/// Statuses a listing must name explicitly before they match.
pub const SPECIAL_STUDENT_STATUSES: &[&str] = &["延畢生", "休學生"];

/// Matching policy applied to one filter category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPolicy {
    Inclusive,
    StudentStatus,
    UnmentionedWildcard,
}

/// Static category → policy table. `None` means the category is inert to
/// the matcher (amounts, documents, obligations, the catch-all, ...).
pub fn policy_for(category: Category) -> Option<CategoryPolicy> {
    match category {
        Category::DegreeLevel
        | Category::Year
        | Category::College
        | Category::Nationality
        | Category::Domicile
        | Category::StudyLocation => Some(CategoryPolicy::Inclusive),
        Category::StudentStatus => Some(CategoryPolicy::StudentStatus),
        Category::SpecialIdentity
        | Category::FamilyCircumstance
        | Category::FinancialProof
        | Category::AidExclusion => Some(CategoryPolicy::UnmentionedWildcard),
        _ => None,
    }
}

/// True when one requirement group (a track's requirements combined with the
/// listing's common tags) satisfies every category the user filtered on.
/// Unselected categories are skipped; the first failing category wins.
pub fn group_matches(requirements: &[Requirement], filters: &FilterSelection) -> bool {
    for (category, selection) in filters.category_selections() {
        if selection.is_empty() {
            continue;
        }
        let Some(policy) = policy_for(category) else {
            continue;
        };

        let included = extract_included_tags(requirements, category);
        let excluded = extract_excluded_tags(requirements, category);

        let ok = match policy {
            CategoryPolicy::Inclusive => inclusive_matches(&included, &excluded, selection),
            CategoryPolicy::StudentStatus => {
                student_status_matches(&included, &excluded, selection)
            }
            CategoryPolicy::UnmentionedWildcard => {
                unmentioned_matches(&included, &excluded, selection)
            }
        };
        if !ok {
            return false;
        }
    }
    true
}

fn to_set(values: &[String]) -> HashSet<&str> {
    values.iter().map(String::as_str).collect()
}

/// Exclusion gate shared by all policies: fail only when every value the
/// user picked is explicitly excluded. A partially excluded selection still
/// has live choices to match on.
fn fully_excluded(selection: &[String], excluded: &[String]) -> bool {
    let excluded = to_set(excluded);
    selection.iter().all(|v| excluded.contains(v.as_str()))
}

/// Inclusive categories (學制, 年級, 學院, 國籍身分, 設籍地, 就讀地).
fn inclusive_matches(included: &[String], excluded: &[String], selection: &[String]) -> bool {
    if fully_excluded(selection, excluded) {
        return false;
    }

    let wants_unspecified = selection.iter().any(|v| v == UNSPECIFIED_CHOICE);
    let concrete: HashSet<&str> = selection
        .iter()
        .map(String::as_str)
        .filter(|v| *v != UNSPECIFIED_CHOICE)
        .collect();

    // a listing-side 「不限」 reads the same as no annotation at all
    let marked: Vec<&str> = included
        .iter()
        .map(String::as_str)
        .filter(|v| *v != UNRESTRICTED)
        .collect();
    let unmarked = marked.is_empty();

    if concrete.is_empty() {
        // only the pseudo-choice: exactly the unrestricted listings
        return unmarked;
    }

    let concrete_hit = !unmarked && marked.iter().any(|v| concrete.contains(v));
    if wants_unspecified {
        // both kinds picked: unrestricted listings OR matching marked ones
        unmarked || concrete_hit
    } else {
        // concrete values only: absence is not a wildcard here
        concrete_hit
    }
}

/// 學籍狀態: wildcard split first, then the special/normal whitelist split.
fn student_status_matches(included: &[String], excluded: &[String], selection: &[String]) -> bool {
    if fully_excluded(selection, excluded) {
        return false;
    }

    let wants_unspecified = selection.iter().any(|v| v == UNSPECIFIED_CHOICE);
    let concrete: HashSet<&str> = selection
        .iter()
        .map(String::as_str)
        .filter(|v| *v != UNSPECIFIED_CHOICE)
        .collect();

    let listing = to_set(included);
    let unmarked = listing.is_empty();

    if concrete.is_empty() {
        return unmarked;
    }

    let special: HashSet<&str> = concrete
        .iter()
        .copied()
        .filter(|v| SPECIAL_STUDENT_STATUSES.contains(v))
        .collect();
    let normal: HashSet<&str> = concrete.difference(&special).copied().collect();
    let says_unrestricted = listing.contains(UNRESTRICTED);

    // whitelist: an unmarked listing never admits a special status
    let special_hit = !special.is_empty()
        && !unmarked
        && (says_unrestricted || listing.iter().any(|v| special.contains(v)));

    let normal_hit = if normal.is_empty() {
        false
    } else if unmarked {
        // unmarked listings default to ordinary enrolled students
        normal.contains(DEFAULT_STUDENT_STATUS)
    } else {
        says_unrestricted || listing.iter().any(|v| normal.contains(v))
    };

    let concrete_hit = if !special.is_empty() && !normal.is_empty() {
        special_hit || normal_hit
    } else if !special.is_empty() {
        special_hit
    } else {
        normal_hit
    };

    if wants_unspecified {
        unmarked || concrete_hit
    } else {
        concrete_hit
    }
}

/// Multi-select categories (特殊身份, 家庭境遇, 經濟相關證明,
/// 補助/獎學金排斥) with the 「未提及」 pseudo-choice.
fn unmentioned_matches(included: &[String], excluded: &[String], selection: &[String]) -> bool {
    if fully_excluded(selection, excluded) {
        return false;
    }

    let wants_unmentioned = selection.iter().any(|v| v == UNMENTIONED_CHOICE);
    let concrete: HashSet<&str> = selection
        .iter()
        .map(String::as_str)
        .filter(|v| *v != UNMENTIONED_CHOICE)
        .collect();

    let unmarked = included.is_empty();
    if concrete.is_empty() {
        return unmarked;
    }

    let concrete_hit = !unmarked && included.iter().any(|v| concrete.contains(v.as_str()));
    if wants_unmentioned {
        unmarked || concrete_hit
    } else {
        concrete_hit
    }
}
