//! Queue ladder configuration.
//!
//! A ladder is the ordered list of MLFQ levels. Level 1 has the highest
//! priority; each level is bound to exactly one [`Algorithm`].
//!
//! # Presets
//!
//! | Preset | Levels |
//! |--------|--------|
//! | A | RR(1), RR(3), RR(4), SJF |
//! | B | RR(2), RR(3), RR(4), STCF |
//! | C | RR(3), RR(5), RR(6), RR(20) |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheduling algorithm bound to a ladder level.
///
/// `Sjf` and `Stcf` share one behavior in this engine: the queue is kept in
/// ascending remaining-burst order and a dispatched process runs to
/// completion without preemption. `Stcf` is a named synonym of
/// non-preemptive SJF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// FIFO level that time-slices by the given quantum (ticks).
    RoundRobin(i64),
    /// Shortest Job First.
    Sjf,
    /// Shortest Time-to-Completion First (non-preemptive here).
    Stcf,
}

impl Algorithm {
    /// Quantum for round-robin levels.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Algorithm::RoundRobin(q) => Some(*q),
            Algorithm::Sjf | Algorithm::Stcf => None,
        }
    }

    #[inline]
    pub fn is_round_robin(&self) -> bool {
        matches!(self, Algorithm::RoundRobin(_))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin(q) => write!(f, "RR({q})"),
            Algorithm::Sjf => f.write_str("SJF"),
            Algorithm::Stcf => f.write_str("STCF"),
        }
    }
}

/// Configuration of one ladder level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Level number (1 = highest priority).
    pub level: usize,
    /// Algorithm used by this level.
    pub algorithm: Algorithm,
}

impl LevelConfig {
    pub fn new(level: usize, algorithm: Algorithm) -> Self {
        Self { level, algorithm }
    }

    pub fn round_robin(level: usize, quantum: i64) -> Self {
        Self::new(level, Algorithm::RoundRobin(quantum))
    }
}

/// Ordered list of level configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ladder {
    /// Levels in priority order.
    pub levels: Vec<LevelConfig>,
}

impl Ladder {
    /// Creates an empty ladder.
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    /// Creates a ladder from explicit level configurations.
    pub fn from_levels(levels: Vec<LevelConfig>) -> Self {
        Self { levels }
    }

    /// Appends a level numbered after the current last level.
    pub fn with_level(mut self, algorithm: Algorithm) -> Self {
        let level = self.levels.len() + 1;
        self.levels.push(LevelConfig::new(level, algorithm));
        self
    }

    /// Appends a round-robin level.
    pub fn with_round_robin(self, quantum: i64) -> Self {
        self.with_level(Algorithm::RoundRobin(quantum))
    }

    /// Appends an SJF level.
    pub fn with_sjf(self) -> Self {
        self.with_level(Algorithm::Sjf)
    }

    /// Appends an STCF level.
    pub fn with_stcf(self) -> Self {
        self.with_level(Algorithm::Stcf)
    }

    /// Builds one of the named presets.
    pub fn preset(preset: LadderPreset) -> Self {
        match preset {
            LadderPreset::A => Self::new()
                .with_round_robin(1)
                .with_round_robin(3)
                .with_round_robin(4)
                .with_sjf(),
            LadderPreset::B => Self::new()
                .with_round_robin(2)
                .with_round_robin(3)
                .with_round_robin(4)
                .with_stcf(),
            LadderPreset::C => Self::new()
                .with_round_robin(3)
                .with_round_robin(5)
                .with_round_robin(6)
                .with_round_robin(20),
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Human-readable summary, e.g. `RR(1), RR(3), RR(4), SJF`.
    pub fn describe(&self) -> String {
        self.levels
            .iter()
            .map(|l| l.algorithm.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Named ladder presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LadderPreset {
    /// RR(1), RR(3), RR(4), SJF.
    A,
    /// RR(2), RR(3), RR(4), STCF.
    B,
    /// RR(3), RR(5), RR(6), RR(20).
    C,
}

impl LadderPreset {
    /// All presets in menu order.
    pub const ALL: [LadderPreset; 3] = [LadderPreset::A, LadderPreset::B, LadderPreset::C];

    /// Builds the ladder for this preset.
    pub fn ladder(self) -> Ladder {
        Ladder::preset(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            LadderPreset::A => "A",
            LadderPreset::B => "B",
            LadderPreset::C => "C",
        }
    }
}

impl FromStr for LadderPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(LadderPreset::A),
            "B" => Ok(LadderPreset::B),
            "C" => Ok(LadderPreset::C),
            other => Err(format!("unknown ladder preset '{other}'")),
        }
    }
}
