/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Utility functions for spectrum calculations
//!
//! This module provides the physical constants, unit conversions and
//! number formatting shared by the rest of the crate.

pub mod constants;
pub mod conversions;
pub mod errors;
pub mod format;

pub use conversions::{thermal_energy, wavenumber_to_joule, wavenumber_to_nanometer};
pub use errors::UtilsError;
pub use format::{format_scientific, truncate_to_integer};
