/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for RASSI output parsing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a RASSI report
///
/// A missing section is not an error: the readers return empty collections
/// and the caller decides how to stop.
#[derive(Error, Debug)]
pub enum RassiError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "State numbering in {} is not contiguous: expected state {expected}, found state {found}",
        path.display()
    )]
    StateIndexGap {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

impl RassiError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RassiError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for RASSI parsing operations
pub type Result<T> = std::result::Result<T, RassiError>;
