//! Semicolon-delimited workload format.
//!
//! ```text
//! # label;burst;arrival;queue_level;priority
//! A;5;0;1;1
//! B;3;1;2;4
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Bad lines are
//! skipped and reported as warnings, never as a hard failure.

use crate::models::ProcessSpec;
use crate::validation::{check_spec, ValidationError, ValidationErrorKind};

const FIELD_COUNT: usize = 5;

/// Result of parsing a workload.
#[derive(Debug, Clone, Default)]
pub struct ParsedWorkload {
    /// Valid descriptors, in input order.
    pub processes: Vec<ProcessSpec>,
    /// One warning per skipped line.
    pub warnings: Vec<ValidationError>,
}

impl ParsedWorkload {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Parses workload text into process descriptors.
pub fn parse_workload(input: &str) -> ParsedWorkload {
    let mut parsed = ParsedWorkload::default();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line) {
            Ok(spec) => match check_spec(&spec) {
                None => parsed.processes.push(spec),
                Some(problem) => parsed.warnings.push(ValidationError::new(
                    ValidationErrorKind::InvalidValue,
                    format!("Line {line_no}: {problem}: {line}"),
                )),
            },
            Err(reason) => parsed.warnings.push(ValidationError::new(
                ValidationErrorKind::MalformedLine,
                format!("Line {line_no}: {reason}: {line}"),
            )),
        }
    }

    parsed
}

fn parse_line(line: &str) -> Result<ProcessSpec, String> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        ));
    }

    let burst = parse_field::<i64>(fields[1], "burst time")?;
    let arrival = parse_field::<i64>(fields[2], "arrival time")?;
    // Signed, so negative levels reach the range check
    let level = parse_field::<i64>(fields[3], "queue level")?;
    let priority = parse_field::<i32>(fields[4], "priority")?;

    Ok(ProcessSpec::new(fields[0], burst, arrival)
        .with_queue_level(usize::try_from(level).unwrap_or(0))
        .with_priority(priority))
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.parse::<T>()
        .map_err(|_| format!("invalid {name} '{raw}'"))
}
