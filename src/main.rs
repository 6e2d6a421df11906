use anyhow::Result;

use scholarship_finder::numeric::{extract_numeric_info, min_amount_and_quota};
use scholarship_finder::pipeline::{filter_sort_paginate, PageRequest, SortSpec};
use scholarship_finder::storage;
use scholarship_finder::types::Category;

fn main() -> Result<()> {
    let root = std::env::var("ROOT").unwrap_or_else(|_| ".".to_string());

    let scholarships = storage::load_scholarships(&root)?;
    let filters = storage::load_filter_selection(&root)?;

    let page = filter_sort_paginate(
        &scholarships,
        &filters,
        SortSpec::default(),
        PageRequest::default(),
    );

    println!(
        "Matched {} of {} scholarships (page {}/{})",
        page.total_matches,
        scholarships.len(),
        page.page,
        page.total_pages
    );

    for (idx, scholarship) in page.scholarships.iter().enumerate() {
        let amount = extract_numeric_info(&scholarship.tags, Category::AwardAmount)
            .map(|(display, _)| display)
            .unwrap_or_else(|| "金額未定".to_string());
        let deadline = if scholarship.end_date.is_empty() {
            "無截止日期"
        } else {
            scholarship.end_date.as_str()
        };
        println!(
            "{:>3}. {} - {} - {}",
            idx + 1,
            scholarship.name,
            amount,
            deadline
        );
        let (min_amount, min_quota) = min_amount_and_quota(scholarship);
        if let (Some(amount), Some(quota)) = (min_amount, min_quota) {
            println!("     最低 {}元 / {}名", amount, quota);
        }
    }

    Ok(())
}
