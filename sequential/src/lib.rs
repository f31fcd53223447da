//! Single-process MapReduce: prepare input, map, sort and shuffle, reduce,
//! write the result. Every stage materializes its whole output in memory
//! before the next one starts.

pub mod config;
pub mod driver;
pub mod group;
pub mod input;
pub mod logging;
pub mod map;
pub mod output;
pub mod progress;
pub mod reduce;
pub mod shuffle;

pub use config::RunConfig;
pub use driver::{map_reduce, Pipeline, RunState};
pub use logging::init_logger;
pub use progress::{LogProgress, NoProgress, Phase, Progress};
