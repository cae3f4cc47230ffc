/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Selection of the line spectrum

use super::boltzmann::WeightedTransition;
use serde::Serialize;

/// One stick of the line spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePeak {
    /// Transition energy in cm⁻¹
    pub energy: f64,
    /// Normalized weighted oscillator strength
    pub weight: f64,
}

/// Discrete spectrum before broadening, in transition order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineSpectrum {
    pub peaks: Vec<LinePeak>,
}

impl LineSpectrum {
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinePeak> {
        self.peaks.iter()
    }
}

/// Keep transitions with `begin < energy < end` whose initial state is populated above `threshold`
pub fn select_lines(
    weighted: &[WeightedTransition],
    begin: f64,
    end: f64,
    threshold: f64,
) -> LineSpectrum {
    let peaks = weighted
        .iter()
        .filter(|w| begin < w.energy && w.energy < end && w.is_populated(threshold))
        .map(|w| LinePeak {
            energy: w.energy,
            weight: w.weight,
        })
        .collect();
    LineSpectrum { peaks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rassi::Transition;

    fn weighted(energy: f64, boltzmann: f64, weight: f64) -> WeightedTransition {
        WeightedTransition {
            transition: Transition {
                initial_state: 1,
                final_state: 2,
                strength: weight,
            },
            energy,
            boltzmann,
            weight,
        }
    }

    #[test]
    fn test_window_bounds_are_exclusive() {
        let lines = select_lines(
            &[
                weighted(8000.0, 1.0, 1.0),
                weighted(8000.5, 1.0, 0.5),
                weighted(25000.0, 1.0, 1.0),
                weighted(-12000.0, 1.0, 1.0),
            ],
            8000.0,
            25000.0,
            0.1,
        );
        assert_eq!(lines.peaks, vec![LinePeak { energy: 8000.5, weight: 0.5 }]);
    }

    #[test]
    fn test_threshold_is_strict_and_order_kept() {
        let lines = select_lines(
            &[
                weighted(20000.0, 0.5, 0.3),
                weighted(9000.0, 0.1, 1.0),
                weighted(10000.0, 0.2, 0.7),
            ],
            8000.0,
            25000.0,
            0.1,
        );
        let energies: Vec<f64> = lines.iter().map(|p| p.energy).collect();
        assert_eq!(energies, vec![20000.0, 10000.0]);
    }
}
