//! Input validation for MLFQ simulations.
//!
//! Checks the two input contracts before a run:
//! - Process descriptors: positive burst, non-negative arrival, level and
//!   priority of at least 1, unique labels
//! - Ladders: at least one level, levels numbered 1..N in order, positive
//!   round-robin quanta
//! - Placement: every initial level exists in the ladder
//!
//! All checks collect every problem instead of stopping at the first.

use crate::models::{Algorithm, Ladder, ProcessSpec};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same label.
    DuplicateLabel,
    /// A descriptor field violates its range.
    InvalidValue,
    /// A workload line could not be parsed.
    MalformedLine,
    /// The ladder has no levels.
    EmptyLadder,
    /// Level numbers are not 1..N in order.
    LevelNumbering,
    /// A round-robin level has a quantum below 1.
    InvalidQuantum,
    /// A process's initial level does not exist in the ladder.
    PlacementOutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks the field invariants of a single descriptor.
pub(crate) fn check_spec(spec: &ProcessSpec) -> Option<String> {
    let mut problems = Vec::new();
    if spec.burst_time <= 0 {
        problems.push(format!("burst time {} must be > 0", spec.burst_time));
    }
    if spec.arrival_time < 0 {
        problems.push(format!("arrival time {} must be >= 0", spec.arrival_time));
    }
    if spec.queue_level == 0 {
        problems.push("queue level must be >= 1".to_string());
    }
    if spec.priority <= 0 {
        problems.push(format!("priority {} must be >= 1", spec.priority));
    }
    if problems.is_empty() {
        None
    } else {
        Some(problems.join(", "))
    }
}

/// Validates process descriptors.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut labels = HashSet::new();

    for spec in processes {
        if !labels.insert(spec.label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLabel,
                format!("Duplicate process label: {}", spec.label),
            ));
        }
        if let Some(problem) = check_spec(spec) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Process '{}': {problem}", spec.label),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a ladder.
pub fn validate_ladder(ladder: &Ladder) -> ValidationResult {
    let mut errors = Vec::new();

    if ladder.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyLadder,
            "Ladder has no levels",
        ));
    }

    for (i, config) in ladder.levels.iter().enumerate() {
        if config.level != i + 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::LevelNumbering,
                format!(
                    "Level at position {} is numbered {} (expected {})",
                    i + 1,
                    config.level,
                    i + 1
                ),
            ));
        }
        if let Algorithm::RoundRobin(quantum) = config.algorithm {
            if quantum < 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidQuantum,
                    format!("Level {} has round-robin quantum {quantum}", config.level),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that every process starts on a level the ladder defines.
///
/// Processes failing this check are silently excluded by the dispatcher;
/// callers use this to surface them as warnings.
pub fn validate_placement(processes: &[ProcessSpec], ladder: &Ladder) -> ValidationResult {
    let levels: HashSet<usize> = ladder.levels.iter().map(|l| l.level).collect();
    let errors: Vec<ValidationError> = processes
        .iter()
        .filter(|spec| !levels.contains(&spec.queue_level))
        .map(|spec| {
            ValidationError::new(
                ValidationErrorKind::PlacementOutOfRange,
                format!(
                    "Process '{}' starts on level {} but the ladder has {} level(s)",
                    spec.label,
                    spec.queue_level,
                    ladder.len()
                ),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
