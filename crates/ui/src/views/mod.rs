// Report views
mod report;

pub use report::{render_json, render_text};
