use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a generation run.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("cannot read sample file {}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("sample file {} is malformed: {reason}", path.display())]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("cannot write {}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SampleError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SampleError::ConfigMalformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SampleError>;
