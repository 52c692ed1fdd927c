//! Presentation domain module.
//!
//! Server-rendered HTML for the tool listing, the favorites list and the
//! analytics dashboard. Pages hold no state of their own; they are built from
//! the current catalog, favorites and report on each request, and the
//! favorite toggles call the JSON API.

mod charts;
mod filter;
mod layout;
mod pages;

pub use charts::{bar_chart, pie_chart};
pub use filter::{ListingQuery, filter_tools};
pub use layout::{Page, escape, render_page};
pub use pages::{analytics_page, favorites_page, listing_page};
