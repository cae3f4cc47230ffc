/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Transition energies from state energies

use super::errors::{Result, SpectrumError};
use crate::rassi::{StateEnergies, TransitionTable};

/// Energy of every transition, `E[final] - E[initial]`, in file order
///
/// The result may be negative for de-excitations. A state index outside the
/// energy table aborts with [`SpectrumError::MalformedReference`].
pub fn transition_energies(states: &StateEnergies, table: &TransitionTable) -> Result<Vec<f64>> {
    table
        .iter()
        .enumerate()
        .map(|(index, transition)| {
            match (
                states.get(transition.initial_state),
                states.get(transition.final_state),
            ) {
                (Some(initial), Some(final_energy)) => Ok(final_energy - initial),
                _ => Err(SpectrumError::MalformedReference {
                    transition: index + 1,
                    initial_state: transition.initial_state,
                    final_state: transition.final_state,
                    states: states.len(),
                }),
            }
        })
        .collect()
}
