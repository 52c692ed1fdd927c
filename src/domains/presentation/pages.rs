//! Page renderers.
//!
//! Each page is rebuilt from the catalog, the favorites list and the
//! analytics report on every request.

use std::fmt::Write;

use super::charts::{bar_chart, pie_chart};
use super::filter::{ListingQuery, filter_tools};
use super::layout::{Page, escape, render_page};
use crate::domains::analytics::Report;
use crate::domains::catalog::{ALL_CATEGORIES, Catalog, Tool, same_category};
use crate::domains::favorites::FavoriteEntry;

fn favorite_button(tool_id: i64, is_favorite: bool) -> String {
    let label = if is_favorite {
        "&#9829; Remove from favorites"
    } else {
        "&#9825; Add to favorites"
    };
    format!(
        "<button type=\"button\" data-id=\"{}\" data-favorite=\"{}\" onclick=\"toggleFavorite(this)\">{}</button>",
        tool_id, is_favorite, label
    )
}

fn tool_card(tool: &Tool, is_favorite: bool) -> String {
    let mut card = String::new();
    let _ = write!(
        card,
        "<article class=\"card\" id=\"tool-{}\"><h3>{}</h3>\
         <p><span class=\"badge\">{}</span><span class=\"badge\">{}</span></p>\
         <p>{}</p><p>",
        tool.id,
        escape(&tool.name),
        escape(&tool.category),
        escape(&tool.pricing),
        escape(&tool.excerpt)
    );
    for tag in &tool.tags {
        let _ = write!(card, "<span class=\"badge\">#{}</span>", escape(tag));
    }
    let _ = write!(
        card,
        "</p><p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Visit</a> {}</p></article>",
        escape(&tool.url),
        favorite_button(tool.id, is_favorite)
    );
    card
}

/// The tool listing with search box and category selector.
pub fn listing_page(catalog: &Catalog, favorite_ids: &[i64], query: &ListingQuery) -> String {
    let search = query.search();
    let selected = query.category();
    let tools = filter_tools(catalog.tools(), search, selected);

    let mut content = String::new();
    content.push_str("<h1>AI Tools Directory</h1>");
    let _ = write!(
        content,
        "<form method=\"get\" action=\"{}\">\
         <input type=\"search\" name=\"q\" placeholder=\"Search tools, descriptions or tags\" value=\"{}\">\
         <select name=\"category\">",
        Page::Tools.path(),
        escape(search)
    );

    let selected_option = |value: &str| match selected {
        Some(category) if same_category(category, value) => " selected",
        None if value == ALL_CATEGORIES => " selected",
        _ => "",
    };

    let _ = write!(
        content,
        "<option value=\"{ALL_CATEGORIES}\"{}>All categories</option>",
        selected_option(ALL_CATEGORIES)
    );
    for category in catalog.categories() {
        let _ = write!(
            content,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(category),
            selected_option(category)
        );
    }
    content.push_str("</select> <button type=\"submit\">Filter</button></form>");

    if !search.is_empty() {
        let cleared = ListingQuery {
            q: None,
            category: query.category.clone(),
        }
        .to_query_string();
        let href = if cleared.is_empty() {
            Page::Tools.path().to_string()
        } else {
            format!("{}?{}", Page::Tools.path(), cleared)
        };
        let _ = write!(
            content,
            "<p><a class=\"clear-search\" href=\"{}\">Clear search</a></p>",
            escape(&href)
        );
    }

    let _ = write!(
        content,
        "<p>Showing {} of {} tools</p>",
        tools.len(),
        catalog.len()
    );

    if tools.is_empty() {
        content.push_str("<p>No tools match your search.</p>");
    } else {
        content.push_str("<section class=\"grid\">");
        for tool in tools {
            content.push_str(&tool_card(tool, favorite_ids.contains(&tool.id)));
        }
        content.push_str("</section>");
    }

    render_page(Page::Tools, "All Tools", &content)
}

/// The favorites list with remove buttons.
pub fn favorites_page(favorites: &[FavoriteEntry]) -> String {
    let mut content = String::new();
    let _ = write!(
        content,
        "<h1>Your Favorites</h1><p>{} favorite tools</p>",
        favorites.len()
    );

    if favorites.is_empty() {
        let _ = write!(
            content,
            "<p>No favorites yet. <a href=\"{}\">Browse all tools</a></p>",
            Page::Tools.path()
        );
    } else {
        content.push_str("<section class=\"grid\">");
        for entry in favorites {
            content.push_str(&tool_card(&entry.tool, true));
        }
        content.push_str("</section>");
    }

    render_page(Page::Favorites, "Favorites", &content)
}

/// Charts and summary numbers.
pub fn analytics_page(report: &Report) -> String {
    let summary = &report.summary;
    let mut content = String::new();

    content.push_str("<h1>Analytics</h1><p>Insights about AI tools in our directory</p>");
    let _ = write!(
        content,
        "<section class=\"grid\">\
         <article class=\"card\"><h2>Tools by Category</h2>{}</article>\
         <article class=\"card\"><h2>Pricing Models</h2>{}</article>\
         </section>",
        bar_chart(&report.categories),
        pie_chart(&report.pricing)
    );
    let _ = write!(
        content,
        "<section class=\"card stats\">\
         <div><strong>{}</strong>Total Tools</div>\
         <div><strong>{}</strong>Categories</div>\
         <div><strong>{}</strong>Free Tools</div>\
         <div><strong>{}</strong>Freemium Tools</div>\
         </section>",
        summary.total_tools, summary.categories, summary.free_tools, summary.freemium_tools
    );

    render_page(Page::Analytics, "Analytics", &content)
}
