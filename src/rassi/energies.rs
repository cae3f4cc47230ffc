/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Reader for the spin-orbit state energies

use super::block::{extract_block, BlockLines};
use super::errors::{RassiError, Result};
use super::grammar::match_eigenvalue_line;
use super::model::StateEnergies;
use log::info;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Line that opens the eigenvalue table
pub const EIGENVALUES_START: &str = "Eigenvalues of complex Hamiltonian:";

/// Line that follows the eigenvalue table
pub const EIGENVALUES_END: &str = "Weights of the five most important";

/// Read the state energies (cm⁻¹) from a RASSI report
///
/// Returns an empty table when the eigenvalue section is absent. The state
/// numbers must run 1, 2, 3, ... without gaps.
pub fn read_state_energies<P: AsRef<Path>>(path: P) -> Result<StateEnergies> {
    info!("Reading excited state energies from {}", path.as_ref().display());
    let block = extract_block(path, EIGENVALUES_START, EIGENVALUES_END)?;
    collect_state_energies(block)
}

/// Parse state energies from any buffered source
pub fn parse_state_energies<R: BufRead>(
    reader: R,
    source: impl Into<PathBuf>,
) -> Result<StateEnergies> {
    collect_state_energies(BlockLines::new(
        reader,
        source,
        EIGENVALUES_START,
        EIGENVALUES_END,
    ))
}

fn collect_state_energies<R: BufRead>(block: BlockLines<R>) -> Result<StateEnergies> {
    let source = block.source().to_path_buf();
    let mut wavenumbers = Vec::new();
    for line in block {
        let Some(row) = match_eigenvalue_line(&line?).matched() else {
            continue;
        };
        let expected = wavenumbers.len() + 1;
        if row.index != expected {
            return Err(RassiError::StateIndexGap {
                path: source,
                expected,
                found: row.index,
            });
        }
        wavenumbers.push(row.wavenumber);
    }
    info!("Found {} states", wavenumbers.len());
    Ok(StateEnergies::new(wavenumbers))
}
