pub mod compare;
pub mod diff;
pub mod extract;
pub mod report;

pub use compare::{
    CompareOptions, Comparison, VersionConstants, execute_compare, fetch_constants_from_version,
};
pub use diff::{ConstantChange, diff_constants};
pub use extract::{ConstantMap, extract_constants};
pub use report::{ReportFormat, generate_report};
