//! Workload input.
//!
//! - **`parse`**: the semicolon-delimited text format, with per-line warnings
//! - **`generate`**: seeded synthetic workloads
//!
//! Neither touches the filesystem; callers read and write files themselves.

mod generate;
mod parse;

pub use generate::WorkloadGenerator;
pub use parse::{parse_workload, ParsedWorkload};
