//! MLFQ domain models.
//!
//! Provides the data types consumed and produced by the dispatcher.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Validated input descriptor |
//! | `Process` | Descriptor plus runtime state and metrics |
//! | `Ladder` | Ordered level configuration |
//! | `ExecutionHistory` | Per-slice execution log |

mod history;
mod ladder;
mod process;

pub use history::{ExecutionHistory, ExecutionRecord};
pub use ladder::{Algorithm, Ladder, LadderPreset, LevelConfig};
pub use process::{Process, ProcessId, ProcessSpec, RESPONSE_UNSET};
