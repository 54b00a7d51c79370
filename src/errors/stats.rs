// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while computing and writing statistics for one input file.

use crate::errors::StoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    /// The input text file does not exist. Callers report this and move on
    /// to the next job instead of failing the run.
    #[error("The input file '{}' does not exist. Please check the file path.", .0.display())]
    MissingInputFile(PathBuf),

    /// Reading the input or writing a CSV file failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persistence sink rejected a write
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl StatsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StatsError::Io {
            path: path.into(),
            source,
        }
    }
}
