/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Result files
//!
//! Fixed-format text tables for the state energies, weighted transitions,
//! line spectrum and broadened spectrum, plus a JSON export for plotting.

pub mod errors;
pub mod experimental;
pub mod plot;
pub mod report;

pub use errors::{OutputError, Result};
pub use experimental::{normalize_in_range, parse_experimental, read_experimental};
pub use plot::{Axis, PlotData, PLOT_FILE};
pub use report::{
    render_energies, render_transitions, render_xy, ReportWriter, ENERGIES_FILE,
    LINE_SPECTRUM_FILE, SPECTRUM_FILE, TRANSITIONS_FILE,
};
