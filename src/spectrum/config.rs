/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Spectrum parameters

use super::errors::{Result, SpectrumError};
use crate::utils::constants::ROOM_TEMPERATURE;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Abscissa unit used when presenting the spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    /// cm⁻¹
    #[default]
    #[serde(alias = "cm**-1", alias = "cm-1", alias = "cm^-1")]
    Wavenumber,
    /// nm
    #[serde(alias = "nm")]
    Wavelength,
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayUnit::Wavenumber => write!(f, "cm**-1"),
            DisplayUnit::Wavelength => write!(f, "nm"),
        }
    }
}

impl FromStr for DisplayUnit {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cm**-1" | "cm-1" | "cm^-1" | "wavenumber" => Ok(DisplayUnit::Wavenumber),
            "nm" | "wavelength" => Ok(DisplayUnit::Wavelength),
            other => Err(SpectrumError::InvalidParameter(format!(
                "unknown unit '{}', expected \"cm**-1\" or \"nm\"",
                other
            ))),
        }
    }
}

/// Parameters for weighting, selecting and broadening transitions
///
/// Energies are in cm⁻¹. Every field has a default, so a JSON file only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrumConfig {
    /// Gaussian width σ
    pub sigma: f64,
    /// Lower end of the spectrum window
    pub begin: f64,
    /// Upper end of the spectrum window
    pub end: f64,
    /// Number of intervals; the spectrum has `points + 1` samples
    pub points: usize,
    /// Temperature in K for the Boltzmann factors
    pub temperature: f64,
    /// Unit of the exported plot data
    pub unit: DisplayUnit,
    /// Initial states need a Boltzmann factor above this value
    pub boltzmann_threshold: f64,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            sigma: 150.0,
            begin: 8000.0,
            end: 25000.0,
            points: 1000,
            temperature: ROOM_TEMPERATURE,
            unit: DisplayUnit::Wavenumber,
            boltzmann_threshold: 0.1,
        }
    }
}

impl SpectrumConfig {
    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Cannot open config {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Check the parameters once before any computation
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("sigma", self.sigma),
            ("begin", self.begin),
            ("end", self.end),
            ("temperature", self.temperature),
            ("boltzmann_threshold", self.boltzmann_threshold),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SpectrumError::InvalidParameter(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.sigma <= 0.0 {
            return Err(SpectrumError::InvalidParameter(format!(
                "sigma must be positive, got {}",
                self.sigma
            )));
        }
        if self.points == 0 {
            return Err(SpectrumError::InvalidParameter(
                "points must be at least 1".to_string(),
            ));
        }
        if self.begin >= self.end {
            return Err(SpectrumError::InvalidParameter(format!(
                "begin ({}) must be below end ({})",
                self.begin, self.end
            )));
        }
        if self.temperature <= 0.0 {
            return Err(SpectrumError::InvalidParameter(format!(
                "temperature must be positive, got {} K",
                self.temperature
            )));
        }
        if self.unit == DisplayUnit::Wavelength && self.begin <= 0.0 {
            return Err(SpectrumError::InvalidParameter(format!(
                "begin must be positive to display wavelengths, got {}",
                self.begin
            )));
        }
        Ok(())
    }
}
