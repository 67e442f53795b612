pub mod markdown;
pub mod txt;

pub use markdown::{format_report, ReportLine};
pub use txt::{report_to_text, sections_to_text};
