pub mod gviz_sheet_source;
pub mod table;

pub use gviz_sheet_source::{build_http_client, GvizSheetSource, DEFAULT_SHEETS_BASE_URL};
