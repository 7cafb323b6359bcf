//! Constants derived from simulation parameters.

use plume_types::{GasType, SimulationParameters, Vector3, GAS_CONSTANT};
use std::f64::consts::PI;

/// Per-run constants used to turn filament positions into concentrations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationMetadata {
    pub gas_type: GasType,
    pub source_position: Vector3,

    /// Moles of target gas carried by one filament.
    pub total_moles_in_filament: f64,

    /// Moles of all gases in one cm³ at the run's temperature and pressure.
    pub moles_all_gases_per_cm3: f64,
}

impl SimulationMetadata {
    pub fn from_parameters(params: &SimulationParameters) -> Self {
        let moles_all_gases_per_cm3 = params.pressure / (GAS_CONSTANT * params.temperature);

        let source = &params.source;
        let moles_per_cm3_at_center = source.ppm_center / 1e6 * moles_all_gases_per_cm3;
        let total_moles_in_filament = moles_per_cm3_at_center
            * (8.0 * PI.powi(3)).sqrt()
            * source.initial_sigma.powi(3);

        Self {
            gas_type: source.gas_type,
            source_position: source.position,
            total_moles_in_filament,
            moles_all_gases_per_cm3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ppm_at_center(meta: &SimulationMetadata, sigma: f64) -> f64 {
        let moles_per_cm3 =
            meta.total_moles_in_filament / ((8.0 * PI.powi(3)).sqrt() * sigma.powi(3));
        1e6 * moles_per_cm3 / meta.moles_all_gases_per_cm3
    }

    #[test]
    fn test_fresh_filament_center_matches_ppm() {
        let params = SimulationParameters::default();
        let meta = SimulationMetadata::from_parameters(&params);

        let ppm = ppm_at_center(&meta, params.source.initial_sigma);
        assert!((ppm - params.source.ppm_center).abs() < 1e-9);
    }

    #[test]
    fn test_ideal_gas_density() {
        let meta = SimulationMetadata::from_parameters(&SimulationParameters::default());
        // ~4.09e-5 mol/cm³ at 298 K and 1 atm
        assert!((meta.moles_all_gases_per_cm3 - 4.0894e-5).abs() < 1e-8);
    }
}
