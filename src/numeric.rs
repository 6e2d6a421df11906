//! Numeric Tag Helpers
//!
//! Award amounts and quotas live in the `numerical` payload of their tags.
//! Amounts are normalized to NTD through a fixed unit→multiplier table so
//! that range filters and sorting compare like with like.

use crate::types::{Category, Scholarship, ScholarshipTags};

/// NTD per unit, keyed by the unit strings the tagging pipeline emits.
/// Matched exactly first, then by substring (units like 「美金/學年」).
const AMOUNT_MULTIPLIERS: &[(&str, f64)] = &[
    ("萬元", 10_000.0),
    ("美金", 31.5),
    ("美元", 31.5),
    ("USD", 31.5),
    ("歐元", 34.0),
    ("EUR", 34.0),
    ("日圓", 0.21),
    ("日幣", 0.21),
    ("JPY", 0.21),
    ("人民幣", 4.4),
    ("CNY", 4.4),
    ("港幣", 4.0),
    ("HKD", 4.0),
    ("英鎊", 40.0),
    ("GBP", 40.0),
];

/// Multiplier for an amount unit; unknown units (including plain 「元」)
/// pass through unchanged.
pub fn amount_multiplier(unit: &str) -> f64 {
    let unit = unit.trim();
    for (key, rate) in AMOUNT_MULTIPLIERS {
        if unit == *key {
            return *rate;
        }
    }
    for (key, rate) in AMOUNT_MULTIPLIERS {
        if unit.contains(key) {
            return *rate;
        }
    }
    1.0
}

/// Convert a tagged amount value to NTD.
pub fn convert_amount(value: f64, unit: Option<&str>) -> f64 {
    value * unit.map(amount_multiplier).unwrap_or(1.0)
}

/// Minimum award amount (NTD) and minimum quota across the common tags and
/// every group. `None` when no tag carries the corresponding number.
pub fn min_amount_and_quota(scholarship: &Scholarship) -> (Option<f64>, Option<f64>) {
    let mut min_amount: Option<f64> = None;
    let mut min_quota: Option<f64> = None;

    for req in scholarship.tags.all_requirements() {
        let Some(numerical) = &req.numerical else {
            continue;
        };
        match req.category {
            Category::AwardAmount => {
                let val = convert_amount(numerical.num_value, numerical.unit.as_deref());
                if min_amount.map_or(true, |m| val < m) {
                    min_amount = Some(val);
                }
            }
            Category::Quota => {
                let val = numerical.num_value;
                if min_quota.map_or(true, |m| val < m) {
                    min_quota = Some(val);
                }
            }
            _ => {}
        }
    }

    (min_amount, min_quota)
}

/// First numeric payload for `category`, common tags before groups, as a
/// display string plus the raw tag text. Backfills card fields when the
/// category has no explicit standardized tag.
pub fn extract_numeric_info(tags: &ScholarshipTags, category: Category) -> Option<(String, String)> {
    tags.all_requirements()
        .filter(|req| req.category == category)
        .find_map(|req| {
            let numerical = req.numerical.as_ref()?;
            let unit = numerical.unit.as_deref().unwrap_or("");
            Some((
                format!("{}{}", format_number(numerical.num_value), unit),
                req.tag_value.clone(),
            ))
        })
}

/// Whole amounts print without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
