/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Unit conversion utilities

use super::constants;
use super::errors::{Result, UtilsError};

/// Convert a wavenumber in cm⁻¹ to a wavelength in nm
///
/// The conversion is its own inverse, so the same function maps nm back to cm⁻¹.
pub fn wavenumber_to_nanometer(wavenumber: f64) -> Result<f64> {
    if wavenumber == 0.0 || !wavenumber.is_finite() {
        return Err(UtilsError::Math(format!(
            "cannot convert {} cm**-1 to a wavelength",
            wavenumber
        )));
    }
    Ok(constants::WAVENUMBER_NM_PRODUCT / wavenumber)
}

/// Convert a wavenumber in cm⁻¹ to an energy in J
pub fn wavenumber_to_joule(wavenumber: f64) -> f64 {
    wavenumber * constants::WAVENUMBER_TO_JOULE
}

/// Thermal energy k_B·T in J
pub fn thermal_energy(temperature: f64) -> f64 {
    constants::BOLTZMANN * temperature
}
