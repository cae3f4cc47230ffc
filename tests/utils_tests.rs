/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use approx::assert_relative_eq;
use rassi_spectrum::utils::{
    constants, format_scientific, thermal_energy, wavenumber_to_joule, wavenumber_to_nanometer,
};

#[test]
fn test_unit_conversions() {
    // Test cm**-1 ↔ nm conversions
    let wavenumber = 12500.0;
    let nanometer = wavenumber_to_nanometer(wavenumber).unwrap();
    let converted_back = wavenumber_to_nanometer(nanometer).unwrap();

    assert_relative_eq!(nanometer, 800.0, epsilon = 1e-10);
    assert_relative_eq!(converted_back, wavenumber, epsilon = 1e-10);

    // Test cm**-1 → J
    assert_relative_eq!(
        wavenumber_to_joule(wavenumber),
        wavenumber * constants::PLANCK * constants::SPEED_OF_LIGHT * 100.0,
        epsilon = 1e-30
    );
}

#[test]
fn test_thermal_energy_in_wavenumbers() {
    // k_B·T at room temperature is roughly 207 cm**-1
    let kt_in_wavenumbers =
        thermal_energy(constants::ROOM_TEMPERATURE) / wavenumber_to_joule(1.0);
    assert_relative_eq!(kt_in_wavenumbers, 207.22, max_relative = 1e-4);
}

#[test]
fn test_scientific_format_round_trips_values() {
    for value in [0.0, 1.5, 12000.0, 123456.789, 1.0e-7] {
        let text = format_scientific(value, 18);
        assert_relative_eq!(text.parse::<f64>().unwrap(), value, max_relative = 1e-15);
    }
}
