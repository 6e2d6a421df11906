//! Scholarship Finder Library
//!
//! Eligibility matching over an AI-tagged scholarship catalog: tag value
//! extraction, the three-policy rules engine, numeric range helpers and the
//! pure filter/sort/paginate pipeline behind the catalog page.

pub mod filter;
pub mod normalize;
pub mod numeric;
pub mod pipeline;
pub mod rules;
pub mod sorter;
pub mod storage;
pub mod types;

pub use types::*;
