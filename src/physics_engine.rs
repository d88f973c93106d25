// Physics Engine - Hypothetical Impact Calculator
// Order-of-magnitude impact scaling: spherical mass, kinetic energy, TNT, crater, seismic

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// =============================================================================
// PHYSICAL CONSTANTS (SI Units)
// =============================================================================

/// Energy released by one kilogram of TNT (J/kg)
pub const TNT_SPECIFIC_ENERGY: f64 = 4.184e6;

/// Impact velocity assumed for every hypothetical impact (m/s).
/// The catalog relative velocity is deliberately not used.
pub const ASSUMED_IMPACT_VELOCITY: f64 = 20_000.0;

/// Bulk density of the target crust (kg/m³)
pub const TARGET_ROCK_DENSITY: f64 = 2500.0;

/// Earth surface gravity (m/s²)
pub const EARTH_SURFACE_GRAVITY: f64 = 9.81;

/// Earth-Moon mean distance (km)
pub const LUNAR_DISTANCE_KM: f64 = 384_400.0;

/// Crater scaling law prefactor
const CRATER_SCALING_FACTOR: f64 = 1.8;

/// Crater scaling law exponent (energy^(1/3.4))
const CRATER_SCALING_EXPONENT: f64 = 1.0 / 3.4;

/// Gutenberg-Richter energy relation: M = (log10(E) - 5.24) / 1.44
const SEISMIC_LOG_OFFSET: f64 = 5.24;
const SEISMIC_LOG_SCALE: f64 = 1.44;

/// Asteroid bulk density presets (kg/m³)
/// References: Carry (2012), DeMeo & Carry (2013)
pub mod asteroid_density {
    pub const C_TYPE: f64 = 1700.0; // Carbonaceous
    pub const S_TYPE: f64 = 2700.0; // Silicaceous
    pub const M_TYPE: f64 = 4000.0; // Metallic
    pub const DEFAULT: f64 = 3000.0; // Generic rocky body
}

// =============================================================================
// SCALING FUNCTIONS
// =============================================================================

/// Mass of a sphere of the given diameter at the default rocky density (kg)
pub fn mass(diameter_m: f64) -> f64 {
    mass_with_density(diameter_m, asteroid_density::DEFAULT)
}

/// Mass of a sphere of the given diameter and bulk density (kg)
pub fn mass_with_density(diameter_m: f64, density: f64) -> f64 {
    let radius = diameter_m / 2.0;
    let volume = (4.0 / 3.0) * PI * radius.powi(3);
    volume * density
}

/// Kinetic energy in Joules
pub fn kinetic_energy(mass_kg: f64, velocity_ms: f64) -> f64 {
    0.5 * mass_kg * velocity_ms.powi(2)
}

/// Energy expressed as kilograms of TNT
pub fn tnt_equivalent(energy_j: f64) -> f64 {
    energy_j / TNT_SPECIFIC_ENERGY
}

/// Crater diameter (m) for an impact into average continental crust
pub fn crater_diameter(energy_j: f64) -> f64 {
    crater_diameter_with(energy_j, TARGET_ROCK_DENSITY, EARTH_SURFACE_GRAVITY)
}

/// Crater diameter (m) with explicit target density (kg/m³) and gravity (m/s²)
pub fn crater_diameter_with(energy_j: f64, target_density: f64, gravity: f64) -> f64 {
    CRATER_SCALING_FACTOR * (energy_j / (target_density * gravity)).powf(CRATER_SCALING_EXPONENT)
}

/// Equivalent earthquake magnitude. Non-positive energy means no impact.
pub fn seismic_magnitude(energy_j: f64) -> f64 {
    if energy_j <= 0.0 {
        return 0.0;
    }
    (energy_j.log10() - SEISMIC_LOG_OFFSET) / SEISMIC_LOG_SCALE
}

// =============================================================================
// IMPACT ESTIMATE
// =============================================================================

/// Derived quantities for a hypothetical impact of a body of one diameter
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImpactEstimate {
    pub diameter_m: f64,
    pub velocity_ms: f64,
    pub mass_kg: f64,
    pub kinetic_energy_j: f64,
    pub tnt_kg: f64,
    pub crater_diameter_m: f64,
    pub seismic_magnitude: f64,
}

impl ImpactEstimate {
    /// Estimate at the fixed assumed impact velocity and default density
    pub fn at_assumed_velocity(diameter_m: f64) -> Self {
        Self::new(diameter_m, asteroid_density::DEFAULT, ASSUMED_IMPACT_VELOCITY)
    }

    pub fn new(diameter_m: f64, density: f64, velocity_ms: f64) -> Self {
        let mass_kg = mass_with_density(diameter_m, density);
        let kinetic_energy_j = kinetic_energy(mass_kg, velocity_ms);

        Self {
            diameter_m,
            velocity_ms,
            mass_kg,
            kinetic_energy_j,
            tnt_kg: tnt_equivalent(kinetic_energy_j),
            crater_diameter_m: crater_diameter(kinetic_energy_j),
            seismic_magnitude: seismic_magnitude(kinetic_energy_j),
        }
    }

    /// TNT equivalent in megatons (1e9 kg TNT)
    pub fn tnt_megatons(&self) -> f64 {
        self.tnt_kg / 1e9
    }
}

// =============================================================================
// TESTS
// =============================================================================
