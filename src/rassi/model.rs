/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Values read from a RASSI report

use serde::{Deserialize, Serialize};

/// Spin-orbit state energies in cm⁻¹, indexed 1..=N in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateEnergies {
    wavenumbers: Vec<f64>,
}

impl StateEnergies {
    /// Create the table from wavenumbers in state order
    pub fn new(wavenumbers: Vec<f64>) -> Self {
        Self { wavenumbers }
    }

    /// Number of states
    pub fn len(&self) -> usize {
        self.wavenumbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavenumbers.is_empty()
    }

    /// Energy of a 1-based state, `None` outside 1..=N
    pub fn get(&self, state: usize) -> Option<f64> {
        state
            .checked_sub(1)
            .and_then(|index| self.wavenumbers.get(index))
            .copied()
    }

    /// All wavenumbers in state order
    pub fn wavenumbers(&self) -> &[f64] {
        &self.wavenumbers
    }

    /// Iterate over `(state, wavenumber)` pairs with 1-based states
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.wavenumbers
            .iter()
            .enumerate()
            .map(|(index, &wavenumber)| (index + 1, wavenumber))
    }
}

/// A dipole transition between two spin-orbit states
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Initial state, 1-based
    pub initial_state: usize,
    /// Final state, 1-based
    pub final_state: usize,
    /// Oscillator strength
    pub strength: f64,
}

/// Transitions in file order; duplicates are kept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
}

impl TransitionTable {
    pub fn new(transitions: Vec<Transition>) -> Self {
        Self { transitions }
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.transitions.iter()
    }

    /// Initial states, parallel to [`final_states`](Self::final_states) and [`strengths`](Self::strengths)
    pub fn initial_states(&self) -> Vec<usize> {
        self.transitions.iter().map(|t| t.initial_state).collect()
    }

    pub fn final_states(&self) -> Vec<usize> {
        self.transitions.iter().map(|t| t.final_state).collect()
    }

    pub fn strengths(&self) -> Vec<f64> {
        self.transitions.iter().map(|t| t.strength).collect()
    }
}

impl<'a> IntoIterator for &'a TransitionTable {
    type Item = &'a Transition;
    type IntoIter = std::slice::Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.transitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_lookup_is_one_based() {
        let states = StateEnergies::new(vec![0.0, 5000.0, 12000.0]);
        assert_eq!(states.get(1), Some(0.0));
        assert_eq!(states.get(3), Some(12000.0));
        assert_eq!(states.get(0), None);
        assert_eq!(states.get(4), None);
        assert_eq!(
            states.iter().collect::<Vec<_>>(),
            vec![(1, 0.0), (2, 5000.0), (3, 12000.0)]
        );
    }

    #[test]
    fn test_parallel_columns() {
        let table = TransitionTable::new(vec![
            Transition {
                initial_state: 1,
                final_state: 2,
                strength: 0.5,
            },
            Transition {
                initial_state: 1,
                final_state: 2,
                strength: 0.5,
            },
        ]);
        assert_eq!(table.initial_states(), vec![1, 1]);
        assert_eq!(table.final_states(), vec![2, 2]);
        assert_eq!(table.strengths(), vec![0.5, 0.5]);
    }
}
