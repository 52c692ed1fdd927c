//! Inline SVG charts for the analytics page.

use std::f64::consts::PI;
use std::fmt::Write;

use super::layout::escape;
use crate::domains::analytics::{CategoryCount, PricingCount};

const BAR_COLOR: &str = "#8884d8";
const BAR_CHART_WIDTH: f64 = 480.0;
const BAR_CHART_HEIGHT: f64 = 300.0;
const BAR_LABEL_SPACE: f64 = 90.0;

const PIE_SIZE: f64 = 300.0;
const PIE_RADIUS: f64 = 110.0;

/// Vertical bar chart of category counts.
pub fn bar_chart(categories: &[CategoryCount]) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg class=\"bar-chart\" viewBox=\"0 0 {} {}\" role=\"img\" aria-label=\"Tools by category\">",
        BAR_CHART_WIDTH, BAR_CHART_HEIGHT
    );

    let max = categories.iter().map(|c| c.count).max().unwrap_or(0);
    if max == 0 {
        svg.push_str("</svg>");
        return svg;
    }

    let plot_height = BAR_CHART_HEIGHT - BAR_LABEL_SPACE;
    let slot = BAR_CHART_WIDTH / categories.len() as f64;
    let bar_width = slot * 0.6;

    for (index, entry) in categories.iter().enumerate() {
        let height = plot_height * entry.count as f64 / max as f64;
        let x = slot * index as f64 + (slot - bar_width) / 2.0;
        let y = plot_height - height;
        let label_x = x + bar_width / 2.0;
        let name = escape(&entry.category);

        let _ = write!(
            svg,
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_width:.1}\" height=\"{height:.1}\" fill=\"{BAR_COLOR}\">\
             <title>{name}: {count}</title></rect>\
             <text x=\"{label_x:.1}\" y=\"{count_y:.1}\" text-anchor=\"middle\" font-size=\"12\">{count}</text>\
             <text x=\"{label_x:.1}\" y=\"{name_y:.1}\" text-anchor=\"end\" font-size=\"12\" \
             transform=\"rotate(-45 {label_x:.1} {name_y:.1})\">{name}</text>",
            count = entry.count,
            count_y = (y - 4.0).max(12.0),
            name_y = plot_height + 16.0,
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Point on the pie circle for a fraction of a full turn, starting at 12 o'clock.
fn pie_point(fraction: f64) -> (f64, f64) {
    let angle = 2.0 * PI * fraction - PI / 2.0;
    let center = PIE_SIZE / 2.0;
    (
        center + PIE_RADIUS * angle.cos(),
        center + PIE_RADIUS * angle.sin(),
    )
}

/// Pie chart of the pricing distribution with a legend.
pub fn pie_chart(pricing: &[PricingCount]) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg class=\"pie-chart\" viewBox=\"0 0 {} {}\" role=\"img\" aria-label=\"Pricing models\">",
        PIE_SIZE, PIE_SIZE
    );

    let total: usize = pricing.iter().map(|p| p.count).sum();
    let center = PIE_SIZE / 2.0;
    let mut start = 0usize;

    for entry in pricing.iter().filter(|p| p.count > 0) {
        let name = escape(&entry.pricing);
        let fill = escape(&entry.fill);

        if entry.count == total {
            let _ = write!(
                svg,
                "<circle cx=\"{center}\" cy=\"{center}\" r=\"{PIE_RADIUS}\" fill=\"{fill}\">\
                 <title>{name}: {count}</title></circle>",
                count = entry.count
            );
            continue;
        }

        let end = start + entry.count;
        let (x1, y1) = pie_point(start as f64 / total as f64);
        let (x2, y2) = pie_point(end as f64 / total as f64);
        let large_arc = u8::from(entry.count * 2 > total);

        let _ = write!(
            svg,
            "<path d=\"M{center},{center} L{x1:.2},{y1:.2} A{PIE_RADIUS},{PIE_RADIUS} 0 {large_arc} 1 {x2:.2},{y2:.2} Z\" \
             fill=\"{fill}\"><title>{name}: {count}</title></path>",
            count = entry.count
        );
        start = end;
    }

    svg.push_str("</svg><ul class=\"legend\">");
    for entry in pricing {
        let _ = write!(
            svg,
            "<li><span class=\"badge\" style=\"background:{}\">&nbsp;</span>{}: {}</li>",
            escape(&entry.fill),
            escape(&entry.pricing),
            entry.count
        );
    }
    svg.push_str("</ul>");
    svg
}
