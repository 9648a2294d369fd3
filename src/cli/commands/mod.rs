pub mod export;

pub use export::{ExportArgs, ExportSummary, handle_export_command};
