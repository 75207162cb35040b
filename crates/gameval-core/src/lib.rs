pub mod catalogs;
pub mod diff;
pub mod error;
pub mod extract;
pub mod merge;
pub mod report;
pub mod scan;
pub mod table;
pub mod types;

pub use catalogs::{default_export_map, DEFAULT_BASE_URL, DEFAULT_TABLE_PATH, TABLE_HEADER};
pub use diff::{compare, DiffOptions};
pub use error::{GamevalError, Result};
pub use extract::{accumulate, extract_constants};
pub use merge::preserve_order_update;
pub use report::render;
pub use scan::{scan_project, scan_text, tracked_names};
pub use table::{load_table, parse_table, render_table, write_table};
pub use types::*;
