/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Reader for the dipole transition strengths between spin-orbit states

use super::block::{extract_block, BlockLines};
use super::errors::Result;
use super::grammar::match_transition_line;
use super::model::{Transition, TransitionTable};
use log::{debug, info};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Line that opens the dipole transition table
pub const DIPOLE_START: &str = "++ Dipole transition strengths (SO states):";

/// Line that opens the velocity table, which ends the dipole table
pub const DIPOLE_END: &str = "++ Velocity transition strengths (SO states):";

/// Read the dipole transitions from a RASSI report
///
/// Returns an empty table when the dipole section is absent.
pub fn read_transitions<P: AsRef<Path>>(path: P) -> Result<TransitionTable> {
    info!("Reading transitions from {}", path.as_ref().display());
    let block = extract_block(path, DIPOLE_START, DIPOLE_END)?;
    collect_transitions(block)
}

/// Parse dipole transitions from any buffered source
pub fn parse_transitions<R: BufRead>(
    reader: R,
    source: impl Into<PathBuf>,
) -> Result<TransitionTable> {
    collect_transitions(BlockLines::new(reader, source, DIPOLE_START, DIPOLE_END))
}

fn collect_transitions<R: BufRead>(block: BlockLines<R>) -> Result<TransitionTable> {
    let mut transitions = Vec::new();
    for line in block {
        if let Some(row) = match_transition_line(&line?).matched() {
            debug!(
                "Transition {} -> {}: {:e}",
                row.initial_state, row.final_state, row.strength
            );
            transitions.push(Transition {
                initial_state: row.initial_state,
                final_state: row.final_state,
                strength: row.strength,
            });
        }
    }
    info!("Found {} transitions", transitions.len());
    Ok(TransitionTable::new(transitions))
}
