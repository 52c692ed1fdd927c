//! Frequency tables over the catalog.
//!
//! Everything here is recomputed from the tool list on each call.

use serde::{Deserialize, Serialize};

use crate::domains::catalog::Tool;

/// Chart colors assigned to pricing entries by position.
pub const PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

/// Number of tools in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Number of tools with one pricing label, with its chart color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingCount {
    pub pricing: String,
    pub count: usize,
    pub fill: String,
}

/// Headline figures shown above the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_tools: usize,
    pub categories: usize,
    pub free_tools: usize,
    pub freemium_tools: usize,
}

/// Full analytics report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub categories: Vec<CategoryCount>,
    pub pricing: Vec<PricingCount>,
    pub summary: Summary,
}

/// Count occurrences of each label, keeping first-encountered order.
fn count_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}

/// Category table ordered by descending count; ties keep first-encountered
/// order.
pub fn category_counts(tools: &[Tool]) -> Vec<CategoryCount> {
    let mut counts = count_labels(tools.iter().map(|t| t.category.as_str()));
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}

/// Pricing table in first-encountered order, colored round-robin from
/// [`PALETTE`].
pub fn pricing_counts(tools: &[Tool]) -> Vec<PricingCount> {
    count_labels(tools.iter().map(|t| t.pricing.as_str()))
        .into_iter()
        .enumerate()
        .map(|(index, (pricing, count))| PricingCount {
            pricing: pricing.to_string(),
            count,
            fill: PALETTE[index % PALETTE.len()].to_string(),
        })
        .collect()
}

/// Count for an exact pricing label, zero when absent.
pub fn pricing_count(pricing: &[PricingCount], label: &str) -> usize {
    pricing
        .iter()
        .find(|p| p.pricing == label)
        .map_or(0, |p| p.count)
}

/// Build the complete report for a tool list.
pub fn aggregate(tools: &[Tool]) -> Report {
    let categories = category_counts(tools);
    let pricing = pricing_counts(tools);

    let summary = Summary {
        total_tools: tools.len(),
        categories: categories.len(),
        free_tools: pricing_count(&pricing, "Free"),
        freemium_tools: pricing_count(&pricing, "Freemium"),
    };

    Report {
        categories,
        pricing,
        summary,
    }
}
