/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for report and plot output

use crate::utils::errors::UtilsError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing results or reading overlay data
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot serialize {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed line {line} in experimental data {}: '{content}'", path.display())]
    MalformedExperimental {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error(transparent)]
    Conversion(#[from] UtilsError),
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        OutputError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for output operations
pub type Result<T> = std::result::Result<T, OutputError>;
