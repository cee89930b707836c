//! Synthetic reading generation.
//!
//! Pure logic; the engine passes in its own random generator, so tests
//! can use a seeded [`rand::rngs::StdRng`] for reproducible sequences.

use rand::Rng;

use crate::sensor::SensorType;

/// Produce one plausible instantaneous reading for a sensor type.
///
/// Ranges per type:
///
/// | Type         | Range         |
/// |--------------|---------------|
/// | strain       | 300 ± 25      |
/// | vibration    | 0 .. 0.5      |
/// | pressure     | 50 .. 70      |
/// | rebar_stress | 50 .. 80      |
/// | other        | 50 .. 70      |
///
/// Always returns a finite value.
pub fn synthesize_value<R: Rng + ?Sized>(sensor_type: SensorType, rng: &mut R) -> f64 {
    match sensor_type {
        SensorType::Strain => 300.0 + rng.random_range(-25.0..25.0),
        SensorType::Vibration => rng.random_range(0.0..0.5),
        SensorType::Pressure => 50.0 + rng.random_range(0.0..20.0),
        SensorType::RebarStress => 50.0 + rng.random_range(0.0..30.0),
        SensorType::Other => 50.0 + rng.random_range(0.0..20.0),
    }
}
