/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Experimental spectrum overlay
//!
//! The overlay file has two whitespace-separated numbers per line, abscissa
//! and intensity, already in the display unit. Blank lines and lines
//! starting with `#` are ignored.

use super::errors::{OutputError, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Read `(x, y)` pairs from an experimental data file
pub fn read_experimental<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| OutputError::io(path, e))?;
    parse_experimental(BufReader::new(file), path)
}

/// Parse `(x, y)` pairs from any buffered source
pub fn parse_experimental<R: BufRead>(
    reader: R,
    source: impl Into<PathBuf>,
) -> Result<Vec<(f64, f64)>> {
    let source = source.into();
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| OutputError::io(&source, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let parsed = match fields.as_slice() {
            [x, y] => x.parse::<f64>().ok().zip(y.parse::<f64>().ok()),
            _ => None,
        };
        match parsed {
            Some(point) => points.push(point),
            None => {
                return Err(OutputError::MalformedExperimental {
                    path: source,
                    line: index + 1,
                    content: line,
                })
            }
        }
    }

    Ok(points)
}

/// Keep points with `lower < x < upper` and scale them to a maximum of 1
///
/// Returns `None`, with a warning, when nothing usable remains.
pub fn normalize_in_range(points: &[(f64, f64)], lower: f64, upper: f64) -> Option<Vec<(f64, f64)>> {
    let in_range: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|&(x, _)| lower < x && x < upper)
        .collect();

    if in_range.is_empty() {
        warn!("Experimental data not within specified range; no experimental overlay");
        return None;
    }

    let maximum = in_range
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !(maximum > 0.0 && maximum.is_finite()) {
        warn!(
            "Experimental intensities have no positive maximum ({}); no experimental overlay",
            maximum
        );
        return None;
    }

    info!("Experimental overlay: {} points in range", in_range.len());
    Some(in_range.into_iter().map(|(x, y)| (x, y / maximum)).collect())
}
