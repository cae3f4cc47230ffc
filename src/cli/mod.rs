/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! Values given on the command line override those from `--config`, which
//! override the defaults of [`SpectrumConfig`].

use crate::pipeline::{Pipeline, RunConfig, RunOutcome};
use crate::spectrum::{DisplayUnit, SpectrumConfig};
use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Simulated absorption spectrum from a RASSI calculation
#[derive(Parser, Debug, Clone)]
#[command(name = "rassi-spectrum", version, about)]
pub struct Cli {
    /// Output-File from a RASSI calculation
    #[arg(value_name = "OUTPUT_FILE")]
    pub report: PathBuf,

    /// Gaussian broadening in cm**-1 [default: 150]
    #[arg(short, long)]
    pub sigma: Option<f64>,

    /// Begin of the spectrum in cm**-1 [default: 8000]
    #[arg(long, visible_alias = "x0", allow_negative_numbers = true)]
    pub begin: Option<f64>,

    /// End of the spectrum in cm**-1 [default: 25000]
    #[arg(long, visible_alias = "x1", allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Number of intervals the spectrum is sampled with [default: 1000]
    #[arg(short, long)]
    pub points: Option<usize>,

    /// Temperature for the Boltzmann distribution in K [default: 298.15]
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Unit of the plot data, "cm**-1" or "nm" [default: cm**-1]
    #[arg(short, long)]
    pub unit: Option<DisplayUnit>,

    /// Threshold of the Boltzmann factor for including initial states [default: 0.1]
    #[arg(short, long = "boltzmann")]
    pub boltzmann_threshold: Option<f64>,

    /// File with experimental values for the plot data
    #[arg(short = 'f', long = "file")]
    pub experimental: Option<PathBuf>,

    /// JSON file with spectrum parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the result files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Merge defaults, the optional config file and command-line values
    pub fn into_run_config(self) -> Result<RunConfig> {
        let mut spectrum = match &self.config {
            Some(path) => SpectrumConfig::from_json_file(path)?,
            None => SpectrumConfig::default(),
        };

        if let Some(sigma) = self.sigma {
            spectrum.sigma = sigma;
        }
        if let Some(begin) = self.begin {
            spectrum.begin = begin;
        }
        if let Some(end) = self.end {
            spectrum.end = end;
        }
        if let Some(points) = self.points {
            spectrum.points = points;
        }
        if let Some(temperature) = self.temperature {
            spectrum.temperature = temperature;
        }
        if let Some(unit) = self.unit {
            spectrum.unit = unit;
        }
        if let Some(threshold) = self.boltzmann_threshold {
            spectrum.boltzmann_threshold = threshold;
        }

        Ok(RunConfig {
            report: self.report,
            output_dir: self.output_dir,
            spectrum,
            experimental: self.experimental,
        })
    }
}

/// Parse `args` (program name first) and run the pipeline
pub fn run_from<I, T>(args: I) -> Result<RunOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    Pipeline::new(cli.into_run_config()?).run()
}

/// Parse the process arguments and run the pipeline
///
/// Help and version requests print and exit the process.
pub fn run() -> Result<RunOutcome> {
    let cli = Cli::parse();
    Pipeline::new(cli.into_run_config()?).run()
}
