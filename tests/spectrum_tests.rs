/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Tests for transition energies, Boltzmann weighting, selection and broadening

use approx::assert_relative_eq;
use rassi_spectrum::rassi::{StateEnergies, Transition, TransitionTable};
use rassi_spectrum::spectrum::{
    boltzmann_factor, broaden, select_lines, transition_energies, weight_transitions,
    BoltzmannFactors, NormalizationStep, SpectrumConfig, SpectrumError,
};
use rstest::rstest;

fn transition(initial_state: usize, final_state: usize, strength: f64) -> Transition {
    Transition {
        initial_state,
        final_state,
        strength,
    }
}

fn example_states() -> StateEnergies {
    StateEnergies::new(vec![0.0, 150.0, 5000.0, 12000.0, 18000.0])
}

fn example_table() -> TransitionTable {
    TransitionTable::new(vec![
        transition(1, 4, 0.2),
        transition(1, 5, 0.1),
        transition(2, 4, 0.3),
        transition(3, 5, 0.4),
        transition(4, 1, 0.05),
    ])
}

#[test]
fn test_single_transition_example() {
    let states = StateEnergies::new(vec![0.0, 5000.0, 12000.0]);
    let table = TransitionTable::new(vec![transition(1, 3, 0.2)]);
    let config = SpectrumConfig::default();

    let energies = transition_energies(&states, &table).unwrap();
    assert_eq!(energies, vec![12000.0]);

    let factors = BoltzmannFactors::new(&states, config.temperature);
    assert_eq!(factors.get(1), Some(1.0));

    let weighted = weight_transitions(&table, &energies, &factors).unwrap();
    assert_eq!(weighted[0].weight, 1.0);

    let lines = select_lines(
        &weighted,
        config.begin,
        config.end,
        config.boltzmann_threshold,
    );
    assert_eq!(lines.len(), 1);
    assert_eq!(lines.peaks[0].energy, 12000.0);
    assert_eq!(lines.peaks[0].weight, 1.0);
}

#[test]
fn test_transition_energy_is_exact_difference() {
    let states = example_states();
    let table = example_table();
    let energies = transition_energies(&states, &table).unwrap();
    for (t, energy) in table.iter().zip(&energies) {
        let expected = states.wavenumbers()[t.final_state - 1]
            - states.wavenumbers()[t.initial_state - 1];
        assert_eq!(*energy, expected);
    }
    assert_eq!(energies[4], -12000.0);
}

#[test]
fn test_malformed_reference_names_the_transition() {
    let states = StateEnergies::new(vec![0.0, 5000.0]);
    let table = TransitionTable::new(vec![transition(1, 2, 0.1), transition(7, 1, 0.1)]);
    let err = transition_energies(&states, &table).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Transition 2"));
    assert!(message.contains("7 -> 1"));
}

#[rstest]
#[case(298.15)]
#[case(77.0)]
#[case(1000.0)]
fn test_boltzmann_factors_positive_and_decreasing(#[case] temperature: f64) {
    let wavenumbers = [0.0, 10.0, 100.0, 500.0, 1000.0, 2000.0];
    let factors: Vec<f64> = wavenumbers
        .iter()
        .map(|&w| boltzmann_factor(w, temperature))
        .collect();
    assert!(factors.iter().all(|&f| f > 0.0 && f <= 1.0));
    assert!(factors.windows(2).all(|pair| pair[1] < pair[0]));
}

#[test]
fn test_boltzmann_reference_is_zero_wavenumber() {
    // The first state is not shifted to zero: a table starting above 0 cm**-1
    // gives a ground state factor below one
    let states = StateEnergies::new(vec![100.0, 200.0]);
    let factors = BoltzmannFactors::new(&states, 298.15);
    assert!(factors.get(1).unwrap() < 1.0);
    assert_relative_eq!(
        factors.get(1).unwrap(),
        boltzmann_factor(100.0, 298.15),
        epsilon = 1e-15
    );
}

#[test]
fn test_weighted_maximum_is_one() {
    let states = example_states();
    let table = example_table();
    let energies = transition_energies(&states, &table).unwrap();
    let factors = BoltzmannFactors::new(&states, 298.15);
    let weighted = weight_transitions(&table, &energies, &factors).unwrap();

    let maximum = weighted.iter().map(|w| w.weight).fold(0.0, f64::max);
    assert_relative_eq!(maximum, 1.0, epsilon = 1e-12);
    assert!(weighted.iter().all(|w| (0.0..=1.0).contains(&w.weight)));

    // Strength × factor ratios survive the normalization
    let raw: Vec<f64> = table
        .iter()
        .map(|t| t.strength * factors.get(t.initial_state).unwrap())
        .collect();
    let raw_max = raw.iter().copied().fold(0.0, f64::max);
    for (w, r) in weighted.iter().zip(&raw) {
        assert_relative_eq!(w.weight, r / raw_max, epsilon = 1e-12);
    }
}

#[test]
fn test_zero_strengths_are_degenerate() {
    let states = example_states();
    let table = TransitionTable::new(vec![transition(1, 4, 0.0), transition(1, 5, 0.0)]);
    let energies = transition_energies(&states, &table).unwrap();
    let factors = BoltzmannFactors::new(&states, 298.15);
    match weight_transitions(&table, &energies, &factors) {
        Err(SpectrumError::DegenerateNormalization { step, .. }) => {
            assert_eq!(step, NormalizationStep::OscillatorStrengths)
        }
        other => panic!("expected a normalization failure, got {:?}", other),
    }
}

#[rstest]
#[case(8000.0, 25000.0, 0.1)]
#[case(10000.0, 15000.0, 0.1)]
#[case(-20000.0, 20000.0, 0.0)]
#[case(8000.0, 25000.0, 0.9)]
fn test_selection_is_exact_partition(#[case] begin: f64, #[case] end: f64, #[case] threshold: f64) {
    let states = example_states();
    let table = example_table();
    let energies = transition_energies(&states, &table).unwrap();
    let factors = BoltzmannFactors::new(&states, 298.15);
    let weighted = weight_transitions(&table, &energies, &factors).unwrap();

    let lines = select_lines(&weighted, begin, end, threshold);
    let expected: Vec<(f64, f64)> = weighted
        .iter()
        .filter(|w| begin < w.energy && w.energy < end && w.boltzmann > threshold)
        .map(|w| (w.energy, w.weight))
        .collect();
    let selected: Vec<(f64, f64)> = lines.iter().map(|p| (p.energy, p.weight)).collect();
    assert_eq!(selected, expected);
}

#[test]
fn test_broadened_spectrum_bounds() {
    let states = example_states();
    let table = example_table();
    let config = SpectrumConfig::default();
    let energies = transition_energies(&states, &table).unwrap();
    let factors = BoltzmannFactors::new(&states, config.temperature);
    let weighted = weight_transitions(&table, &energies, &factors).unwrap();
    let lines = select_lines(
        &weighted,
        config.begin,
        config.end,
        config.boltzmann_threshold,
    );

    let spectrum = broaden(
        &lines,
        config.begin,
        config.end,
        config.points,
        config.sigma,
    )
    .unwrap();
    assert_eq!(spectrum.len(), config.points + 1);
    assert_eq!(spectrum.energies[0], config.begin);
    assert_relative_eq!(spectrum.energies[config.points], config.end);
    assert!(spectrum.intensities.iter().all(|&v| (0.0..=1.0).contains(&v)));
    assert_eq!(
        spectrum.intensities.iter().copied().fold(0.0, f64::max),
        1.0
    );

    // Lines at 11850 and 12000 cm**-1 merge into one band between them
    let (peak_energy, _) = spectrum
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert!(peak_energy > 11850.0 && peak_energy < 12000.0);
}

#[test]
fn test_broadening_sums_overlapping_lines() {
    let states = StateEnergies::new(vec![0.0, 10000.0, 10100.0]);
    let table = TransitionTable::new(vec![transition(1, 2, 0.5), transition(1, 3, 0.5)]);
    let energies = transition_energies(&states, &table).unwrap();
    let factors = BoltzmannFactors::new(&states, 298.15);
    let weighted = weight_transitions(&table, &energies, &factors).unwrap();
    let lines = select_lines(&weighted, 9000.0, 11000.0, 0.1);

    let spectrum = broaden(&lines, 9000.0, 11000.0, 2000, 150.0).unwrap();
    // Sample 1050 is at 10050 cm**-1, halfway between the two lines
    assert_relative_eq!(spectrum.energies[1050], 10050.0, epsilon = 1e-9);
    assert_eq!(spectrum.intensities[1050], 1.0);
}

#[test]
fn test_window_without_lines_is_degenerate() {
    let states = example_states();
    let table = example_table();
    let energies = transition_energies(&states, &table).unwrap();
    let factors = BoltzmannFactors::new(&states, 298.15);
    let weighted = weight_transitions(&table, &energies, &factors).unwrap();
    let lines = select_lines(&weighted, 30000.0, 40000.0, 0.1);
    assert!(lines.is_empty());

    match broaden(&lines, 30000.0, 40000.0, 100, 150.0) {
        Err(SpectrumError::DegenerateNormalization { step, .. }) => {
            assert_eq!(step, NormalizationStep::Broadening)
        }
        other => panic!("expected a normalization failure, got {:?}", other),
    }
}

#[rstest]
#[case(SpectrumConfig { sigma: 0.0, ..SpectrumConfig::default() })]
#[case(SpectrumConfig { points: 0, ..SpectrumConfig::default() })]
#[case(SpectrumConfig { begin: 25000.0, end: 8000.0, ..SpectrumConfig::default() })]
#[case(SpectrumConfig { temperature: 0.0, ..SpectrumConfig::default() })]
#[case(SpectrumConfig { sigma: f64::NAN, ..SpectrumConfig::default() })]
fn test_invalid_configurations(#[case] config: SpectrumConfig) {
    assert!(matches!(
        config.validate(),
        Err(SpectrumError::InvalidParameter(_))
    ));
}
