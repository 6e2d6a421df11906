//! Tag Value Normalization and Extraction
//!
//! Pulls standardized values out of a requirement group for one category,
//! separating asserted values from explicitly excluded (negated) ones, and
//! canonicalizes the synonyms the tagging pipeline is known to emit.

use crate::types::{Category, Requirement};

/// Listing-side value meaning "no restriction" for a category.
pub const UNRESTRICTED: &str = "不限";

/// Strong negation keywords: the whole clause reads as a prohibition.
const STRONG_NEGATION_KEYWORDS: &[&str] =
    &["不得申請", "不可申請", "不得", "不可", "排除", "除外"];

/// Weaker markers that also appear inside mixed include/exclude sentences.
const WEAK_NEGATION_MARKERS: &[&str] = &["不包含", "不含"];

/// A strong keyword buried mid-sentence only counts in clauses shorter
/// than this many chars.
const STRONG_KEYWORD_MAX_CHARS: usize = 20;

/// Above this length, a weak marker is assumed to sit inside a compound
/// sentence whose inclusive part is extracted separately.
const MIXED_CLAUSE_MIN_CHARS: usize = 30;

/// Classify whether a raw requirement text is fundamentally a negation,
/// e.g. 「延畢生不得申請」 or 「非本國籍」.
///
/// Long sentences containing 「不包含」/「不含」 are treated as mixed
/// conditions, not pure negations: 「就讀大學...不包含研究生」 still asserts
/// an inclusive part. The char thresholds are tuned against the tagged
/// corpus, not derived; tests pin the current behavior.
pub fn is_negative_condition(tag_value: &str) -> bool {
    if tag_value.starts_with('非') {
        return true;
    }

    let char_len = tag_value.chars().count();
    for keyword in STRONG_NEGATION_KEYWORDS {
        if tag_value.starts_with(keyword)
            || (tag_value.contains(keyword) && char_len < STRONG_KEYWORD_MAX_CHARS)
        {
            return true;
        }
    }

    let has_weak_marker = WEAK_NEGATION_MARKERS.iter().any(|m| tag_value.contains(m));
    if has_weak_marker && char_len > MIXED_CLAUSE_MIN_CHARS {
        return false;
    }
    has_weak_marker
}

/// Canonicalize one standardized value within its category. The rewrites
/// paper over known quirks of the upstream annotation.
fn canonicalize(category: Category, value: &str) -> String {
    let mapped = match (category, value) {
        // transfer students count as currently enrolled
        (_, "轉學生") => "在學生",
        // immigrant residents hold citizenship; only meaningful as a nationality
        (Category::Nationality, "新住民") => "本國籍",
        // every catalog entry is studied in Taiwan, so the value restricts nothing
        (Category::StudyLocation, "臺灣") => UNRESTRICTED,
        (_, "清寒證明") => "村里長提供之清寒證明",
        // hardship certificates misfiled under family circumstance by the tagger
        (Category::FamilyCircumstance, "導師提供之清寒證明" | "村里長提供之清寒證明") => {
            "其他"
        }
        _ => value,
    };
    mapped.to_string()
}

/// Split a possibly comma-joined standardized value into atomic values.
fn split_standardized(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect()
}

/// Standardized values asserted for `category`, skipping pure negations.
/// Empty when the category is unmentioned or only mentioned negatively.
pub fn extract_included_tags(requirements: &[Requirement], category: Category) -> Vec<String> {
    let mut values = Vec::new();

    for req in requirements {
        if req.category != category {
            continue;
        }
        let Some(std_val) = req.standardized_value.as_deref() else {
            continue;
        };
        if std_val.is_empty() || is_negative_condition(&req.tag_value) {
            continue;
        }
        for atom in split_standardized(std_val) {
            values.push(canonicalize(category, atom));
        }
    }

    values
}

/// Standardized values explicitly excluded for `category` (negated entries
/// only). When a negated entry carries no standardized value, the excluded
/// value is inferred from the raw text where the category allows it.
pub fn extract_excluded_tags(requirements: &[Requirement], category: Category) -> Vec<String> {
    let mut excluded = Vec::new();

    for req in requirements {
        if req.category != category || !is_negative_condition(&req.tag_value) {
            continue;
        }
        match req.standardized_value.as_deref() {
            Some(std_val) if !std_val.is_empty() => {
                for atom in split_standardized(std_val) {
                    excluded.push(atom.to_string());
                }
            }
            _ => {
                if let Some(inferred) = infer_excluded_value(category, &req.tag_value) {
                    excluded.push(inferred.to_string());
                }
            }
        }
    }

    excluded
}

/// Infer the excluded standardized value from raw text, e.g.
/// 「非延畢者」→ 延畢生.
fn infer_excluded_value(category: Category, tag_value: &str) -> Option<&'static str> {
    if category != Category::StudentStatus {
        return None;
    }
    if tag_value.contains("延畢") {
        Some("延畢生")
    } else if tag_value.contains("休學") {
        Some("休學生")
    } else {
        None
    }
}
