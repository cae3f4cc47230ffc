/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the spectrum module

use std::fmt;
use thiserror::Error;

/// Result type for spectrum operations
pub type Result<T> = std::result::Result<T, SpectrumError>;

/// The max-based normalization that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationStep {
    /// Boltzmann-weighted oscillator strengths
    OscillatorStrengths,
    /// Gaussian-broadened spectrum samples
    Broadening,
}

impl fmt::Display for NormalizationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationStep::OscillatorStrengths => {
                write!(f, "Boltzmann-weighted oscillator strengths")
            }
            NormalizationStep::Broadening => write!(f, "Gaussian-broadened spectrum"),
        }
    }
}

/// Spectrum-specific errors
#[derive(Error, Debug)]
pub enum SpectrumError {
    /// A transition refers to a state missing from the energy table
    #[error(
        "Transition {transition} ({initial_state} -> {final_state}) references a state outside 1..={states}; \
         the energy and transition tables do not belong together"
    )]
    MalformedReference {
        /// 1-based position of the transition in file order
        transition: usize,
        initial_state: usize,
        final_state: usize,
        /// Number of states in the energy table
        states: usize,
    },

    /// Division by a zero (or non-finite) maximum
    #[error("Cannot normalize the {step}: maximum is {maximum}")]
    DegenerateNormalization {
        step: NormalizationStep,
        maximum: f64,
    },

    /// Error when parameters are invalid
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
