use crate::{
    config::RunConfig,
    group::sort_and_group,
    input::enumerate,
    map::run_map,
    output::{remove_existing, write_result},
    progress::{LogProgress, Phase, Progress},
    reduce::run_reduce,
    shuffle::Shuffler,
};
use common::{Mapper, MrError, MrResult, Reducer};
use std::path::Path;
use tracing::{error, info};

/// Where a run is. Moves forward one step per finished stage and never back;
/// any failure ends in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    InputPrepared,
    Mapped,
    SortedGrouped,
    Reduced,
    Written,
    Done,
    Failed,
}

pub struct Pipeline {
    config: RunConfig,
    progress: Box<dyn Progress>,
    state: RunState,
}

impl Pipeline {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            progress: Box::new(LogProgress),
            state: RunState::Init,
        }
    }

    pub fn with_progress(mut self, progress: impl Progress + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs all five stages. Nothing is carried over from a previous call.
    pub fn run<M, R>(&mut self, mapper: &M, reducer: &R) -> MrResult<()>
    where
        M: Mapper,
        R: Reducer<M::Value>,
    {
        self.state = RunState::Init;
        match self.execute(mapper, reducer) {
            Ok(()) => {
                self.state = RunState::Done;
                info!("done: {}", self.config.target.display());
                Ok(())
            }
            Err(e) => {
                error!("run failed in state {:?}: {}", self.state, e);
                self.state = RunState::Failed;
                Err(e)
            }
        }
    }

    fn execute<M, R>(&mut self, mapper: &M, reducer: &R) -> MrResult<()>
    where
        M: Mapper,
        R: Reducer<M::Value>,
    {
        let source = self.config.source.clone();
        let target = self.config.target.clone();
        if !source.exists() {
            return Err(MrError::InvalidInput { path: source });
        }
        remove_existing(&target)?;

        self.progress.started(Phase::PrepareInput);
        let files = enumerate(&source)?;
        self.advance(Phase::PrepareInput, RunState::InputPrepared);

        self.progress.started(Phase::Map);
        let intermediate = run_map(files, mapper)?;
        self.advance(Phase::Map, RunState::Mapped);

        self.progress.started(Phase::SortShuffle);
        let mut groups = sort_and_group(intermediate);
        Shuffler::new(self.config.shuffle_seed).shuffle_groups(&mut groups);
        self.advance(Phase::SortShuffle, RunState::SortedGrouped);

        self.progress.started(Phase::Reduce);
        let result = run_reduce(groups, reducer)?;
        self.advance(Phase::Reduce, RunState::Reduced);

        self.progress.started(Phase::WriteResult);
        write_result(&target, &result, self.config.write_bom)?;
        self.advance(Phase::WriteResult, RunState::Written);

        Ok(())
    }

    fn advance(&mut self, phase: Phase, next: RunState) {
        self.state = next;
        self.progress.finished(phase);
    }
}

/// Runs `mapper` and `reducer` over every file under `source` and writes the
/// result to `target`, logging stage progress.
pub fn map_reduce<M, R>(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
    mapper: &M,
    reducer: &R,
) -> MrResult<()>
where
    M: Mapper,
    R: Reducer<M::Value>,
{
    Pipeline::new(RunConfig::new(source, target)).run(mapper, reducer)
}
