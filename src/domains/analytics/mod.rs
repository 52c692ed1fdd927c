//! Analytics domain module.
//!
//! Derives category and pricing frequency tables, plus summary figures,
//! from the full catalog. Nothing is cached.

mod aggregator;

pub use aggregator::{
    CategoryCount, PALETTE, PricingCount, Report, Summary, aggregate, category_counts,
    pricing_count, pricing_counts,
};
