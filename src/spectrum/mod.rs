/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Absorption spectrum construction
//!
//! The stages run in order, each consuming the previous one:
//!
//! 1. [`transition_energies`]: `E[final] - E[initial]` per transition
//! 2. [`BoltzmannFactors`] and [`weight_transitions`]: thermal weighting and
//!    normalization of the oscillator strengths
//! 3. [`select_lines`]: energy window and population threshold
//! 4. [`broaden`]: sampled Gaussian-broadened spectrum

pub mod boltzmann;
pub mod broadening;
pub mod config;
pub mod errors;
pub mod selection;
pub mod transition_energy;

pub use boltzmann::{boltzmann_factor, weight_transitions, BoltzmannFactors, WeightedTransition};
pub use broadening::{broaden, gaussian, sample_energy, Spectrum};
pub use config::{DisplayUnit, SpectrumConfig};
pub use errors::{NormalizationStep, Result, SpectrumError};
pub use selection::{select_lines, LinePeak, LineSpectrum};
pub use transition_energy::transition_energies;
