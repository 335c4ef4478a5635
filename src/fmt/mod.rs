//! Rendering concerns — severity coloring and the placeholder template engine —
//! kept apart from the dispatch logic in [`crate::logger`].

mod color;
mod template;

pub use color::{RESET, auto_detect, severity_color};
pub use template::{FormatSegment, FormatTemplate, Placeholder};
