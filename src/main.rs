/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Main executable for rassi-spectrum

use rassi_spectrum::RunOutcome;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("rassi-spectrum v{}", rassi_spectrum::VERSION);
    println!("Absorption spectra from RASSI spin-orbit state energies and transition strengths");
    println!("-----------------------------------------------------------");

    match rassi_spectrum::cli::run()? {
        RunOutcome::NoStates => println!("No spin-orbit states found. I quit."),
        RunOutcome::NoTransitions { states, .. } => {
            println!("Found {} states but no oscillator strengths. I quit.", states)
        }
        RunOutcome::Completed(summary) => println!(
            "{} states, {} transitions, {} lines in the spectrum window",
            summary.states, summary.transitions, summary.lines
        ),
    }

    Ok(())
}
