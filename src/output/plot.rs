/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Plot-ready export of the spectrum
//!
//! Rendering is left to external tools. This module converts the spectrum,
//! the line spectrum and an optional experimental overlay into the display
//! unit, works out the axis range and tick positions, and writes everything
//! as one JSON document.

use super::errors::{OutputError, Result};
use super::experimental::normalize_in_range;
use crate::spectrum::{DisplayUnit, LineSpectrum, Spectrum, SpectrumConfig};
use crate::utils::wavenumber_to_nanometer;
use log::{info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Plot data file name
pub const PLOT_FILE: &str = "plot.json";

const WAVENUMBER_TICK_STEP: f64 = 2000.0;
const WAVELENGTH_TICK_STEP: f64 = 100.0;

/// Upper bound on the number of tick intervals along one axis
const MAX_TICK_INTERVALS: f64 = 1000.0;

/// Axis range and ticks in the display unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl Axis {
    /// Axis for a window `[begin, end]` given in cm⁻¹
    pub fn for_window(unit: DisplayUnit, begin: f64, end: f64) -> Result<Self> {
        let (label, min, max, step) = match unit {
            DisplayUnit::Wavenumber => (
                "Wavenumber [cm**-1]",
                begin,
                end,
                WAVENUMBER_TICK_STEP,
            ),
            DisplayUnit::Wavelength => {
                // The conversion reverses the order; both ends round down to a full 100 nm
                let min = wavenumber_to_nanometer(end)?;
                let max = wavenumber_to_nanometer(begin)?;
                (
                    "Wavelength [nm]",
                    min - min % WAVELENGTH_TICK_STEP,
                    max - max % WAVELENGTH_TICK_STEP,
                    WAVELENGTH_TICK_STEP,
                )
            }
        };

        Ok(Self {
            label: label.to_string(),
            min,
            max,
            ticks: ticks(min, max, step),
        })
    }
}

/// Ticks `min + k·step` up to the first one at or beyond `max`
///
/// Axes needing more than [`MAX_TICK_INTERVALS`] intervals are only marked
/// at their two limits.
fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    let intervals = ((max - min) / step).ceil().max(0.0);
    if !intervals.is_finite() || intervals > MAX_TICK_INTERVALS {
        warn!(
            "Axis from {} to {} is too wide for ticks every {}; only the limits are marked",
            min, max, step
        );
        return vec![min, max];
    }

    (0..=intervals as usize)
        .map(|k| min + k as f64 * step)
        .collect()
}

/// Everything needed to draw the final figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotData {
    pub unit: DisplayUnit,
    pub x_axis: Axis,
    /// Sampled spectrum as `[x, intensity]`
    pub spectrum: Vec<[f64; 2]>,
    /// Line spectrum as `[x, weight]`
    pub line_spectrum: Vec<[f64; 2]>,
    /// Normalized experimental overlay as `[x, intensity]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<Vec<[f64; 2]>>,
}

fn to_unit(unit: DisplayUnit, wavenumber: f64) -> Result<f64> {
    match unit {
        DisplayUnit::Wavenumber => Ok(wavenumber),
        DisplayUnit::Wavelength => Ok(wavenumber_to_nanometer(wavenumber)?),
    }
}

impl PlotData {
    /// Convert the computed spectra into the configured display unit
    pub fn new(spectrum: &Spectrum, lines: &LineSpectrum, config: &SpectrumConfig) -> Result<Self> {
        let unit = config.unit;
        let x_axis = Axis::for_window(unit, config.begin, config.end)?;

        let spectrum = spectrum
            .iter()
            .map(|(x, y)| Ok([to_unit(unit, x)?, y]))
            .collect::<Result<Vec<_>>>()?;
        let line_spectrum = lines
            .iter()
            .map(|peak| Ok([to_unit(unit, peak.energy)?, peak.weight]))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            unit,
            x_axis,
            spectrum,
            line_spectrum,
            experimental: None,
        })
    }

    /// Attach experimental `(x, y)` data given in the display unit
    ///
    /// Points outside the axis range are dropped and the rest normalized;
    /// when nothing remains the overlay is left out.
    pub fn with_experimental(mut self, points: &[(f64, f64)]) -> Self {
        self.experimental = normalize_in_range(points, self.x_axis.min, self.x_axis.max)
            .map(|points| points.into_iter().map(|(x, y)| [x, y]).collect());
        self
    }

    /// Write the plot data as pretty-printed JSON
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| OutputError::io(&path, e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, self).map_err(|source| OutputError::Json {
            path: path.clone(),
            source,
        })?;
        out.flush().map_err(|e| OutputError::io(&path, e))?;
        info!("Plot data written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wavenumber_axis() {
        let axis = Axis::for_window(DisplayUnit::Wavenumber, 8000.0, 25000.0).unwrap();
        assert_eq!(axis.min, 8000.0);
        assert_eq!(axis.max, 25000.0);
        assert_eq!(axis.ticks.first(), Some(&8000.0));
        assert_eq!(axis.ticks.last(), Some(&26000.0));
        assert_eq!(axis.ticks.len(), 10);
    }

    #[test]
    fn test_wavelength_axis() {
        // 25000 cm**-1 = 400 nm, 8000 cm**-1 = 1250 nm
        let axis = Axis::for_window(DisplayUnit::Wavelength, 8000.0, 25000.0).unwrap();
        assert_relative_eq!(axis.min, 400.0);
        assert_relative_eq!(axis.max, 1200.0);
        assert_eq!(axis.ticks.len(), 9);
        assert_relative_eq!(axis.ticks[8], 1200.0);
    }

    #[test]
    fn test_ticks_end_on_exact_limit() {
        assert_eq!(ticks(0.0, 4000.0, 2000.0), vec![0.0, 2000.0, 4000.0]);
        assert_eq!(ticks(5.0, 5.0, 2000.0), vec![5.0]);
    }

    #[test]
    fn test_wide_axis_only_marks_limits() {
        // The step vanishes against the magnitude of the limits
        let axis = Axis::for_window(DisplayUnit::Wavenumber, 1.0e20, 2.0e20).unwrap();
        assert_eq!(axis.ticks, vec![1.0e20, 2.0e20]);

        let axis = Axis::for_window(DisplayUnit::Wavenumber, 1.0, 1.0e9).unwrap();
        assert_eq!(axis.ticks.len(), 2);
    }
}
