/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Line grammars for the two numeric tables of a RASSI report
//!
//! Both recognizers are explicit token parsers. A line either matches and
//! yields its fields, or is reported as [`LineMatch::Skipped`]; headers,
//! rules and blank lines inside a block fall into the latter.
//!
//! Eigenvalue rows:
//!
//! ```text
//!   <ws> index <ws> [-]d+.d+ <ws> [-]d+.d+ <ws> d+.d+ [<ws>]
//! ```
//!
//! Dipole transition rows (anything may follow the strength):
//!
//! ```text
//!   <ws> from <ws> to <ws> d.d+E(+|-)dd ...
//! ```

/// Outcome of matching one line against a grammar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineMatch<T> {
    /// The line matched and produced a row
    Matched(T),
    /// The line does not belong to the table
    Skipped,
}

impl<T> LineMatch<T> {
    /// Convert into an `Option`, dropping skipped lines
    pub fn matched(self) -> Option<T> {
        match self {
            LineMatch::Matched(row) => Some(row),
            LineMatch::Skipped => None,
        }
    }
}

/// One row of the complex Hamiltonian eigenvalue table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenvalueRow {
    /// Spin-orbit state number, 1-based
    pub index: usize,
    /// Total energy column (au)
    pub total_energy: f64,
    /// Energy relative to the lowest level (eV)
    pub relative_energy: f64,
    /// Energy relative to the lowest level (cm⁻¹)
    pub wavenumber: f64,
}

/// One row of the dipole transition strength table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRow {
    /// Initial state, 1-based
    pub initial_state: usize,
    /// Final state, 1-based
    pub final_state: usize,
    /// Oscillator strength
    pub strength: f64,
}

fn starts_with_whitespace(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_whitespace)
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// `d+.d+`, optionally preceded by a minus sign
fn is_decimal(token: &str, allow_sign: bool) -> bool {
    let unsigned = match token.strip_prefix('-') {
        Some(rest) if allow_sign => rest,
        Some(_) => return false,
        None => token,
    };
    match unsigned.split_once('.') {
        Some((int_part, frac_part)) => is_digits(int_part) && is_digits(frac_part),
        None => false,
    }
}

/// Length of the `d.d+E(+|-)dd` prefix of `token`, if present
fn scientific_prefix_len(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_digit() || bytes[1] != b'.' {
        return None;
    }

    let mut pos = 2;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == 2 {
        return None;
    }

    if bytes.get(pos) != Some(&b'E') {
        return None;
    }
    pos += 1;
    if !matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
        return None;
    }
    pos += 1;
    if pos + 2 > bytes.len() || !bytes[pos..pos + 2].iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(pos + 2)
}

/// Match a line of the eigenvalue table
pub fn match_eigenvalue_line(line: &str) -> LineMatch<EigenvalueRow> {
    if !starts_with_whitespace(line) {
        return LineMatch::Skipped;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [index, total, relative, wavenumber] = tokens.as_slice() else {
        return LineMatch::Skipped;
    };

    if !is_digits(index)
        || !is_decimal(total, true)
        || !is_decimal(relative, true)
        || !is_decimal(wavenumber, false)
    {
        return LineMatch::Skipped;
    }

    match (
        index.parse(),
        total.parse(),
        relative.parse(),
        wavenumber.parse(),
    ) {
        (Ok(index), Ok(total_energy), Ok(relative_energy), Ok(wavenumber)) => {
            LineMatch::Matched(EigenvalueRow {
                index,
                total_energy,
                relative_energy,
                wavenumber,
            })
        }
        _ => LineMatch::Skipped,
    }
}

/// Match a line of the dipole transition strength table
pub fn match_transition_line(line: &str) -> LineMatch<TransitionRow> {
    if !starts_with_whitespace(line) {
        return LineMatch::Skipped;
    }

    let mut tokens = line.split_whitespace();
    let (Some(from), Some(to), Some(strength)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return LineMatch::Skipped;
    };

    if !is_digits(from) || !is_digits(to) {
        return LineMatch::Skipped;
    }
    let Some(len) = scientific_prefix_len(strength) else {
        return LineMatch::Skipped;
    };

    match (from.parse(), to.parse(), strength[..len].parse()) {
        (Ok(initial_state), Ok(final_state), Ok(strength)) => LineMatch::Matched(TransitionRow {
            initial_state,
            final_state,
            strength,
        }),
        _ => LineMatch::Skipped,
    }
}
