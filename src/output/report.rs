/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Plain-text result files
//!
//! The `render_*` functions write one table to any [`Write`] sink;
//! [`ReportWriter`] puts them into files inside an output directory.

use super::errors::{OutputError, Result};
use crate::rassi::StateEnergies;
use crate::spectrum::{LineSpectrum, Spectrum, WeightedTransition};
use crate::utils::{format_scientific, truncate_to_integer};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// State energies, one per line
pub const ENERGIES_FILE: &str = "energies.dat";

/// Weighted transitions from populated initial states
pub const TRANSITIONS_FILE: &str = "transitions.dat";

/// Line spectrum inside the window
pub const LINE_SPECTRUM_FILE: &str = "line_spectrum.dat";

/// Sampled broadened spectrum
pub const SPECTRUM_FILE: &str = "spectrum.dat";

const TRANSITIONS_HEADER: &str =
    "Transition in cm**-1  Initial state  Final state  Boltzmann factor  Weighted osc. strength";

/// Write state energies as `%.18e`, one per line
pub fn render_energies<W: Write>(out: &mut W, states: &StateEnergies) -> io::Result<()> {
    for &wavenumber in states.wavenumbers() {
        writeln!(out, "{}", format_scientific(wavenumber, 18))?;
    }
    Ok(())
}

/// Write the transition table, keeping rows whose initial-state factor exceeds `threshold`
pub fn render_transitions<W: Write>(
    out: &mut W,
    weighted: &[WeightedTransition],
    threshold: f64,
) -> io::Result<()> {
    writeln!(out, "{}", TRANSITIONS_HEADER)?;
    writeln!(out, "{}", "-".repeat(90))?;
    for w in weighted.iter().filter(|w| w.is_populated(threshold)) {
        writeln!(
            out,
            "{:20.6} {:14} {:12} {:17.6} {:23.6}",
            w.energy, w.transition.initial_state, w.transition.final_state, w.boltzmann, w.weight
        )?;
    }
    Ok(())
}

/// Write `(energy, intensity)` pairs as a 6-wide integer and a 7.4 float
pub fn render_xy<W, I>(out: &mut W, points: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (f64, f64)>,
{
    for (x, y) in points {
        writeln!(out, "{:6}{:7.4}", truncate_to_integer(x), y)?;
    }
    Ok(())
}

/// Writes the result tables into one directory
#[derive(Debug, Clone)]
pub struct ReportWriter {
    directory: PathBuf,
}

impl ReportWriter {
    /// Create a writer for `directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory).map_err(|e| OutputError::io(&directory, e))?;
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of `name` inside the output directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }

    fn write_file<F>(&self, name: &str, render: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
    {
        let path = self.path(name);
        let file = File::create(&path).map_err(|e| OutputError::io(&path, e))?;
        let mut out = BufWriter::new(file);
        render(&mut out)
            .and_then(|_| out.flush())
            .map_err(|e| OutputError::io(&path, e))?;
        Ok(path)
    }

    pub fn write_energies(&self, states: &StateEnergies) -> Result<PathBuf> {
        let path = self.write_file(ENERGIES_FILE, |out| render_energies(out, states))?;
        info!(
            "File {} written and contains the state energies in cm**-1",
            path.display()
        );
        Ok(path)
    }

    pub fn write_transitions(
        &self,
        weighted: &[WeightedTransition],
        threshold: f64,
    ) -> Result<PathBuf> {
        let path = self.write_file(TRANSITIONS_FILE, |out| {
            render_transitions(out, weighted, threshold)
        })?;
        info!("File {} written", path.display());
        Ok(path)
    }

    pub fn write_line_spectrum(&self, lines: &LineSpectrum) -> Result<PathBuf> {
        let path = self.write_file(LINE_SPECTRUM_FILE, |out| {
            render_xy(out, lines.iter().map(|peak| (peak.energy, peak.weight)))
        })?;
        info!("File {} written", path.display());
        Ok(path)
    }

    pub fn write_spectrum(&self, spectrum: &Spectrum) -> Result<PathBuf> {
        let path = self.write_file(SPECTRUM_FILE, |out| render_xy(out, spectrum.iter()))?;
        info!("File {} written", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rassi::Transition;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_render_energies() {
        let states = StateEnergies::new(vec![0.0, 12000.0]);
        let text = render(|out| render_energies(out, &states));
        assert_eq!(
            text,
            "0.000000000000000000e+00\n1.200000000000000000e+04\n"
        );
    }

    #[test]
    fn test_render_transitions_filters_on_population() {
        let row = |initial_state, boltzmann| WeightedTransition {
            transition: Transition {
                initial_state,
                final_state: 3,
                strength: 0.2,
            },
            energy: 12000.0,
            boltzmann,
            weight: 1.0,
        };
        let text = render(|out| render_transitions(out, &[row(1, 1.0), row(2, 0.05)], 0.1));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], TRANSITIONS_HEADER);
        assert_eq!(lines[1].len(), 90);
        assert_eq!(
            lines[2],
            "        12000.000000              1            3          1.000000                1.000000"
        );
    }

    #[test]
    fn test_render_xy() {
        let text = render(|out| render_xy(out, vec![(8016.99, 0.5), (12000.0, 1.0)]));
        assert_eq!(text, "  8016 0.5000\n 12000 1.0000\n");
    }
}
