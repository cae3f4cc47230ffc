/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Physical constants used in the spectrum calculations

/// Planck constant in J·s
pub const PLANCK: f64 = 6.6260688e-34;

/// Speed of light in vacuum in m/s
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// Boltzmann constant in J/K
pub const BOLTZMANN: f64 = 1.380650e-23;

/// Metres per centimetre, inverted: 1 cm⁻¹ = 100 m⁻¹
pub const INV_CM_TO_INV_M: f64 = 100.0;

/// Energy in J of one wavenumber (E = h·c·ν̃[m⁻¹])
pub const WAVENUMBER_TO_JOULE: f64 = PLANCK * SPEED_OF_LIGHT * INV_CM_TO_INV_M;

/// ν̃[cm⁻¹] · λ[nm] = 10⁷
pub const WAVENUMBER_NM_PRODUCT: f64 = 1.0e7;

/// Room temperature in K used as the default for Boltzmann weighting
pub const ROOM_TEMPERATURE: f64 = 298.15;
