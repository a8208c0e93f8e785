//! Simulation errors.

use thiserror::Error;

/// Errors that prevent a simulation run from starting.
///
/// All of them are configuration problems: the caller may reconfigure and
/// retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// No ladder levels are configured.
    #[error("no queue levels configured")]
    NoLevels,

    /// No processes are loaded.
    #[error("no processes loaded")]
    NoProcesses,

    /// The ladder is structurally invalid (numbering or quantum).
    #[error("invalid ladder: {0}")]
    InvalidLadder(String),
}
