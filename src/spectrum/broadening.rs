/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Gaussian broadening of the line spectrum
//!
//! The spectrum is sampled at `points + 1` energies spread evenly over
//! `[begin, end]`. Each sample sums `weight · exp(-½((x - E)/σ)²)` over the
//! line spectrum, and the samples are scaled so the largest equals 1.

use super::errors::{NormalizationStep, Result, SpectrumError};
use super::selection::LineSpectrum;
use ndarray::Array1;
use rayon::prelude::*;

/// Unnormalized Gaussian kernel with peak height 1 at `x == center`
pub fn gaussian(x: f64, center: f64, sigma: f64) -> f64 {
    let reduced = (x - center) / sigma;
    (-0.5 * reduced * reduced).exp()
}

/// Sampled spectrum with intensities in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Sample energies in cm⁻¹
    pub energies: Array1<f64>,
    /// Normalized intensities
    pub intensities: Array1<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// Iterate over `(energy, intensity)` samples
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energies
            .iter()
            .copied()
            .zip(self.intensities.iter().copied())
    }
}

/// Energy of sample `point` out of `points` intervals over `[begin, end]`
pub fn sample_energy(point: usize, points: usize, begin: f64, end: f64) -> f64 {
    begin + point as f64 / points as f64 * (end - begin)
}

/// Broaden `lines` with Gaussians of width `sigma` over `[begin, end]`
///
/// Fails with [`SpectrumError::InvalidParameter`] for a non-positive `sigma`
/// or zero `points`, and with [`SpectrumError::DegenerateNormalization`] when
/// every sample is zero (for instance an empty line spectrum).
pub fn broaden(
    lines: &LineSpectrum,
    begin: f64,
    end: f64,
    points: usize,
    sigma: f64,
) -> Result<Spectrum> {
    if !(sigma > 0.0) {
        return Err(SpectrumError::InvalidParameter(format!(
            "broadening width must be positive, got {}",
            sigma
        )));
    }
    if points == 0 {
        return Err(SpectrumError::InvalidParameter(
            "spectrum needs at least one interval".to_string(),
        ));
    }

    let energies: Vec<f64> = (0..=points)
        .map(|point| sample_energy(point, points, begin, end))
        .collect();

    // Samples are independent; each one sums the lines in the same order
    let raw: Vec<f64> = energies
        .par_iter()
        .map(|&x| {
            lines
                .iter()
                .map(|peak| peak.weight * gaussian(x, peak.energy, sigma))
                .sum::<f64>()
        })
        .collect();
    let mut intensities = Array1::from_vec(raw);

    let maximum = intensities.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    if !(maximum > 0.0 && maximum.is_finite()) {
        return Err(SpectrumError::DegenerateNormalization {
            step: NormalizationStep::Broadening,
            maximum,
        });
    }
    intensities /= maximum;

    Ok(Spectrum {
        energies: Array1::from_vec(energies),
        intensities,
    })
}
