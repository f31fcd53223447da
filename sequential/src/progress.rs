use std::fmt;
use tracing::info;

pub const PHASES: usize = 5;

/// The five stages a run reports progress for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PrepareInput,
    Map,
    SortShuffle,
    Reduce,
    WriteResult,
}

impl Phase {
    /// 1-based position of the phase in a run.
    pub fn index(self) -> usize {
        match self {
            Phase::PrepareInput => 1,
            Phase::Map => 2,
            Phase::SortShuffle => 3,
            Phase::Reduce => 4,
            Phase::WriteResult => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::PrepareInput => "Prepare Input",
            Phase::Map => "Map",
            Phase::SortShuffle => "Sort and Shuffle",
            Phase::Reduce => "Reduce",
            Phase::WriteResult => "Write Result",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Stage", self.name())
    }
}

/// Observer for stage transitions.
pub trait Progress {
    fn started(&self, _phase: Phase) {}

    fn finished(&self, _phase: Phase) {}
}

/// Logs `n/5: Starting ...` / `n/5: Finished ...` lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn started(&self, phase: Phase) {
        info!("{}/{}: Starting {}", phase.index() - 1, PHASES, phase);
    }

    fn finished(&self, phase: Phase) {
        info!("{}/{}: Finished {}", phase.index(), PHASES, phase);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_numbered_in_order() {
        let phases = [
            Phase::PrepareInput,
            Phase::Map,
            Phase::SortShuffle,
            Phase::Reduce,
            Phase::WriteResult,
        ];
        let indexes: Vec<_> = phases.iter().map(|p| p.index()).collect();
        assert_eq!(indexes, (1..=PHASES).collect::<Vec<_>>());
        assert_eq!(Phase::SortShuffle.to_string(), "Sort and Shuffle Stage");
    }
}
