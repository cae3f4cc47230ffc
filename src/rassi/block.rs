/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Extraction of a delimited block of lines from a text report
//!
//! The block consists of the lines strictly after the first line containing
//! the start marker and before the next line containing the end marker.
//! A missing start marker yields nothing. A missing end marker is tolerated:
//! the block then runs to the end of the file and a warning is logged.

use super::errors::{RassiError, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    SeekingStart,
    Inside,
    Done,
}

/// Lazy iterator over the lines of one block
#[derive(Debug)]
pub struct BlockLines<R> {
    lines: Lines<R>,
    source: PathBuf,
    start: String,
    end: String,
    state: BlockState,
    line_number: usize,
}

impl<R: BufRead> BlockLines<R> {
    /// Scan `reader` for the block between `start` and `end`
    ///
    /// `source` only labels log messages and errors.
    pub fn new(reader: R, source: impl Into<PathBuf>, start: &str, end: &str) -> Self {
        Self {
            lines: reader.lines(),
            source: source.into(),
            start: start.to_string(),
            end: end.to_string(),
            state: BlockState::SeekingStart,
            line_number: 0,
        }
    }

    /// Label of the underlying source
    pub fn source(&self) -> &Path {
        &self.source
    }

    fn next_line(&mut self) -> Option<Result<String>> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line.map_err(|e| RassiError::io(&self.source, e)))
    }
}

impl<R: BufRead> Iterator for BlockLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                BlockState::Done => return None,
                BlockState::SeekingStart => match self.next_line() {
                    None => {
                        debug!(
                            "Marker '{}' not found in {}",
                            self.start,
                            self.source.display()
                        );
                        self.state = BlockState::Done;
                    }
                    Some(Err(e)) => {
                        self.state = BlockState::Done;
                        return Some(Err(e));
                    }
                    Some(Ok(line)) => {
                        if line.contains(&self.start) {
                            debug!(
                                "Found '{}' at line {} of {}",
                                self.start,
                                self.line_number,
                                self.source.display()
                            );
                            self.state = BlockState::Inside;
                        }
                    }
                },
                BlockState::Inside => match self.next_line() {
                    None => {
                        warn!(
                            "End marker '{}' not found in {}; reading block to end of file",
                            self.end,
                            self.source.display()
                        );
                        self.state = BlockState::Done;
                    }
                    Some(Err(e)) => {
                        self.state = BlockState::Done;
                        return Some(Err(e));
                    }
                    Some(Ok(line)) => {
                        if line.contains(&self.end) {
                            self.state = BlockState::Done;
                        } else {
                            return Some(Ok(line));
                        }
                    }
                },
            }
        }
    }
}

/// Open `path` and return the lazy block between `start` and `end`
pub fn extract_block<P: AsRef<Path>>(
    path: P,
    start: &str,
    end: &str,
) -> Result<BlockLines<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| RassiError::io(path, e))?;
    Ok(BlockLines::new(BufReader::new(file), path, start, end))
}
