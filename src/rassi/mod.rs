/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! RASSI report parsing
//!
//! A RASSI report is a large semi-structured text file. Only two fixed-format
//! tables are read from it: the complex Hamiltonian eigenvalues (state
//! energies) and the dipole transition strengths between spin-orbit states.
//! Both are located with [`block::extract_block`] and recognized line by line
//! with the grammars in [`grammar`].

pub mod block;
pub mod energies;
pub mod errors;
pub mod grammar;
pub mod model;
pub mod transitions;

pub use block::{extract_block, BlockLines};
pub use energies::{parse_state_energies, read_state_energies, EIGENVALUES_END, EIGENVALUES_START};
pub use errors::{RassiError, Result};
pub use grammar::{
    match_eigenvalue_line, match_transition_line, EigenvalueRow, LineMatch, TransitionRow,
};
pub use model::{StateEnergies, Transition, TransitionTable};
pub use transitions::{parse_transitions, read_transitions, DIPOLE_END, DIPOLE_START};
