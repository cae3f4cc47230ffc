/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Single-pass run from a RASSI report to the spectrum files

use crate::output::{read_experimental, PlotData, ReportWriter, PLOT_FILE};
use crate::rassi::{read_state_energies, read_transitions};
use crate::spectrum::{
    broaden, select_lines, transition_energies, weight_transitions, BoltzmannFactors,
    SpectrumConfig,
};
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

/// Inputs and parameters of one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// RASSI output file
    pub report: PathBuf,
    /// Directory receiving the result files
    pub output_dir: PathBuf,
    /// Spectrum parameters
    pub spectrum: SpectrumConfig,
    /// Optional experimental data for the plot export
    pub experimental: Option<PathBuf>,
}

impl RunConfig {
    /// Run configuration with default parameters
    pub fn new(report: impl Into<PathBuf>) -> Self {
        Self {
            report: report.into(),
            output_dir: PathBuf::from("."),
            spectrum: SpectrumConfig::default(),
            experimental: None,
        }
    }
}

/// Counts and written files of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub states: usize,
    pub transitions: usize,
    /// Transitions in the line spectrum
    pub lines: usize,
    pub files: Vec<PathBuf>,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No eigenvalue table in the report; nothing was written
    NoStates,
    /// No dipole transitions; only the energies file was written
    NoTransitions { states: usize, energies: PathBuf },
    /// All files were written
    Completed(RunSummary),
}

/// Runs the whole calculation for one report
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: RunConfig,
}

impl Pipeline {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    fn log_parameters(&self) {
        let spectrum = &self.config.spectrum;
        info!("Begin spectrum at:             {:7} cm**-1", spectrum.begin as i64);
        info!("End spectrum at:               {:7} cm**-1", spectrum.end as i64);
        info!("Sigma for gaussian broadening: {:7.1} cm**-1", spectrum.sigma);
        info!("Used points for plotting:      {:7}", spectrum.points);
        info!("Temperature for Boltzmann:     {:7.2} K", spectrum.temperature);
        info!("Spectra will be printed in:    {:>7}", spectrum.unit.to_string());
        info!(
            "Threshold of Boltzmann factor: {:7.2}",
            spectrum.boltzmann_threshold
        );
        match &self.config.experimental {
            Some(path) => info!("Experimental values from:      {}", path.display()),
            None => info!("Experimental values from:      None"),
        }
    }

    /// Run every stage once, stopping early when the report has no data
    pub fn run(&self) -> Result<RunOutcome> {
        let params = &self.config.spectrum;
        params.validate().context("Invalid spectrum parameters")?;
        self.log_parameters();

        let report = &self.config.report;
        let states = read_state_energies(report)?;
        if states.is_empty() {
            warn!(
                "No spin-orbit state energies found in {}; nothing to do",
                report.display()
            );
            return Ok(RunOutcome::NoStates);
        }

        let table = read_transitions(report)?;
        let writer = ReportWriter::new(&self.config.output_dir)?;
        let energies_path = writer.write_energies(&states)?;

        if table.is_empty() {
            warn!("No oscillator strengths found; stopping after the energies file");
            return Ok(RunOutcome::NoTransitions {
                states: states.len(),
                energies: energies_path,
            });
        }

        let energies = transition_energies(&states, &table)
            .with_context(|| format!("Inconsistent tables in {}", report.display()))?;
        let factors = BoltzmannFactors::new(&states, params.temperature);
        let weighted = weight_transitions(&table, &energies, &factors)?;
        let transitions_path = writer.write_transitions(&weighted, params.boltzmann_threshold)?;

        let lines = select_lines(
            &weighted,
            params.begin,
            params.end,
            params.boltzmann_threshold,
        );
        info!("Line spectrum: {} transitions in the window", lines.len());
        let line_path = writer.write_line_spectrum(&lines)?;

        let spectrum = broaden(
            &lines,
            params.begin,
            params.end,
            params.points,
            params.sigma,
        )
        .context("No spectrum: no selected transition contributes inside the window")?;
        let spectrum_path = writer.write_spectrum(&spectrum)?;

        let mut plot = PlotData::new(&spectrum, &lines, params)?;
        if let Some(path) = &self.config.experimental {
            let points = read_experimental(path)?;
            plot = plot.with_experimental(&points);
        }
        let plot_path = plot.write_json(writer.path(PLOT_FILE))?;

        info!("All done!");
        Ok(RunOutcome::Completed(RunSummary {
            states: states.len(),
            transitions: table.len(),
            lines: lines.len(),
            files: vec![
                energies_path,
                transitions_path,
                line_path,
                spectrum_path,
                plot_path,
            ],
        }))
    }
}
