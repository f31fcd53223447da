use std::{io, path::PathBuf};
use thiserror::Error;

pub type MrResult<T> = Result<T, MrError>;

/// Every way a pipeline run can fail. All of them abort the run.
#[derive(Error, Debug)]
pub enum MrError {
    #[error("input path does not exist: {}", path.display())]
    InvalidInput { path: PathBuf },

    #[error("input is not a readable file or directory: {}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("map function failed on {id} line {line}")]
    Mapper {
        id: String,
        line: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("reduce function failed on key {key:?}")]
    Reducer {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to write result to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MrError {
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::UnreadableInput {
            path: path.into(),
            source: Some(source),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
