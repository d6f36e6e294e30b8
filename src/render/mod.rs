//! Output renderers.
//!
//! Two stateless transformations from a completed [`LookupReport`] into an
//! output string: a plain-text form for humans and a single-line JSON form for
//! machines. Renderers never touch the network and never mutate the report.
//!
//! [`LookupReport`]: crate::models::LookupReport

mod json;
mod text;

pub use json::render_json;
pub use text::render_text;
