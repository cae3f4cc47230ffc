/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # rassi-spectrum
//!
//! Simulated absorption spectra from the output of a RASSI spin-orbit
//! calculation.
//!
//! The spin-orbit state energies and the dipole transition strengths are read
//! from the report, the transitions are weighted by the Boltzmann population
//! of their initial states, and the result is written as a line spectrum and
//! as a Gaussian-broadened spectrum sampled over a fixed window.
//!
//! ```no_run
//! use rassi_spectrum::{Pipeline, RunConfig, RunOutcome};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut config = RunConfig::new("rassi.log");
//!     config.spectrum.sigma = 100.0;
//!     if let RunOutcome::Completed(summary) = Pipeline::new(config).run()? {
//!         println!("{} lines in the window", summary.lines);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod output;
pub mod pipeline;
pub mod rassi;
pub mod spectrum;
pub mod utils;

pub use pipeline::{Pipeline, RunConfig, RunOutcome, RunSummary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_report_is_an_error() {
        let config = RunConfig::new("does/not/exist/rassi.log");
        assert!(Pipeline::new(config).run().is_err());
    }
}
