/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Thermal population of the initial states
//!
//! Each state gets the factor `exp(-h·c·ν̃ / (k_B·T))` with ν̃ in m⁻¹. The
//! factors are relative weights, not a normalized distribution: a state at
//! 0 cm⁻¹ has factor 1 whichever state is listed first. Oscillator strengths
//! are multiplied by the factor of their initial state and then scaled so
//! the strongest weighted transition has weight 1.

use super::errors::{NormalizationStep, Result, SpectrumError};
use crate::rassi::{StateEnergies, Transition, TransitionTable};
use crate::utils::{thermal_energy, wavenumber_to_joule};
use log::debug;
use serde::Serialize;

/// Boltzmann factor of a state with the given wavenumber (cm⁻¹) at `temperature` (K)
pub fn boltzmann_factor(wavenumber: f64, temperature: f64) -> f64 {
    (-wavenumber_to_joule(wavenumber) / thermal_energy(temperature)).exp()
}

/// Boltzmann factors of all states, indexed like the energy table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoltzmannFactors {
    factors: Vec<f64>,
    temperature: f64,
}

impl BoltzmannFactors {
    /// Compute the factor of every state at `temperature`
    pub fn new(states: &StateEnergies, temperature: f64) -> Self {
        let factors = states
            .wavenumbers()
            .iter()
            .map(|&wavenumber| boltzmann_factor(wavenumber, temperature))
            .collect();
        Self {
            factors,
            temperature,
        }
    }

    /// Factor of a 1-based state, `None` outside 1..=N
    pub fn get(&self, state: usize) -> Option<f64> {
        state
            .checked_sub(1)
            .and_then(|index| self.factors.get(index))
            .copied()
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.factors
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// A transition with its energy, initial-state population and normalized weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedTransition {
    pub transition: Transition,
    /// Signed transition energy in cm⁻¹
    pub energy: f64,
    /// Boltzmann factor of the initial state
    pub boltzmann: f64,
    /// Oscillator strength × Boltzmann factor, scaled to a maximum of 1
    pub weight: f64,
}

impl WeightedTransition {
    /// Whether the initial state is populated above `threshold`
    pub fn is_populated(&self, threshold: f64) -> bool {
        self.boltzmann > threshold
    }
}

/// Weight every transition by the population of its initial state and normalize
///
/// `energies` must be parallel to `table` (see
/// [`transition_energies`](super::transition_energies)). Fails with
/// [`SpectrumError::DegenerateNormalization`] when no weighted strength is positive.
pub fn weight_transitions(
    table: &TransitionTable,
    energies: &[f64],
    factors: &BoltzmannFactors,
) -> Result<Vec<WeightedTransition>> {
    if energies.len() != table.len() {
        return Err(SpectrumError::InvalidParameter(format!(
            "{} transition energies for {} transitions",
            energies.len(),
            table.len()
        )));
    }

    let mut weighted = table
        .iter()
        .zip(energies)
        .enumerate()
        .map(|(index, (transition, &energy))| {
            let boltzmann =
                factors
                    .get(transition.initial_state)
                    .ok_or(SpectrumError::MalformedReference {
                        transition: index + 1,
                        initial_state: transition.initial_state,
                        final_state: transition.final_state,
                        states: factors.len(),
                    })?;
            Ok(WeightedTransition {
                transition: *transition,
                energy,
                boltzmann,
                weight: transition.strength * boltzmann,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let maximum = weighted
        .iter()
        .map(|w| w.weight)
        .fold(f64::NEG_INFINITY, f64::max);
    if !(maximum > 0.0 && maximum.is_finite()) {
        return Err(SpectrumError::DegenerateNormalization {
            step: NormalizationStep::OscillatorStrengths,
            maximum,
        });
    }
    debug!("Largest Boltzmann-weighted strength: {:e}", maximum);

    for w in &mut weighted {
        w.weight /= maximum;
    }
    Ok(weighted)
}
