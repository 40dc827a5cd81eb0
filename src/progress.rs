// src/progress.rs
use std::fmt;

/// Pipeline stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Lookup,
    Fetch,
    Parse,
    Flatten,
    Align,
}

impl Stage {
    pub const ALL: [Stage; 5] = [Stage::Lookup, Stage::Fetch, Stage::Parse, Stage::Flatten, Stage::Align];

    /// 1-based position, for "[n/5]" style output.
    pub fn ordinal(&self) -> usize {
        Stage::ALL.iter().position(|s| s == self).map_or(0, |i| i + 1)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Lookup => "lookup",
            Stage::Fetch => "fetch",
            Stage::Parse => "parse",
            Stage::Flatten => "flatten",
            Stage::Align => "align",
        };
        f.write_str(name)
    }
}

/// Lightweight progress reporting for plan generation.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
