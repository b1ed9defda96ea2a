//! Poster rendering library.
//!
//! This crate turns a grouped drink stock into shareable output in two
//! formats:
//!
//! - **Text**: Plain-text poster for terminals and printouts
//! - **HTML**: Standalone styled page with one section per category
//!
//! Both renderers also cover the unresolved lines, so nothing a guest
//! submitted silently disappears from the poster.

mod common;
mod html;
mod text;

// Re-export public types and functions
pub use html::{HtmlPosterOptions, render_html_poster};
pub use text::{
    DEFAULT_TITLE, TextPosterOptions, render_text_poster, render_unknowns_export,
    render_unknowns_export_at,
};
