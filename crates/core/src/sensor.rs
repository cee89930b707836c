//! Sensor type enumeration.
//!
//! Sensor types are stored as plain text in the `sensors` table. The
//! enumeration here only matters to the simulation engine, which picks a
//! synthesis profile per type; the CRUD layer passes the string through
//! untouched.

use serde::{Deserialize, Serialize};

/// The fixed set of sensor types with distinct synthesis profiles.
///
/// Any string that is not a recognised type maps to [`SensorType::Other`],
/// never an error: a sensor with a typo'd type still produces readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    /// Structural strain gauge (microstrain).
    Strain,
    /// Vibration sensor (acceleration amplitude).
    Vibration,
    /// Pressure transducer.
    Pressure,
    /// Rebar stress meter.
    RebarStress,
    /// Anything else, including unrecognised type strings.
    Other,
}

impl SensorType {
    /// Parse a stored type string, falling back to [`SensorType::Other`].
    ///
    /// Accepts both `rebar_stress` and the hyphenated `rebar-stress`
    /// spelling found in older sensor records.
    pub fn parse(s: &str) -> Self {
        match s {
            "strain" => Self::Strain,
            "vibration" => Self::Vibration,
            "pressure" => Self::Pressure,
            "rebar_stress" | "rebar-stress" => Self::RebarStress,
            _ => Self::Other,
        }
    }

    /// The canonical stored string for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strain => "strain",
            Self::Vibration => "vibration",
            Self::Pressure => "pressure",
            Self::RebarStress => "rebar_stress",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types() {
        assert_eq!(SensorType::parse("strain"), SensorType::Strain);
        assert_eq!(SensorType::parse("vibration"), SensorType::Vibration);
        assert_eq!(SensorType::parse("pressure"), SensorType::Pressure);
        assert_eq!(SensorType::parse("rebar_stress"), SensorType::RebarStress);
        assert_eq!(SensorType::parse("rebar-stress"), SensorType::RebarStress);
        assert_eq!(SensorType::parse("other"), SensorType::Other);
    }

    #[test]
    fn unknown_type_falls_back_to_other() {
        assert_eq!(SensorType::parse("displacement"), SensorType::Other);
        assert_eq!(SensorType::parse(""), SensorType::Other);
        assert_eq!(SensorType::parse("STRAIN"), SensorType::Other);
    }

    #[test]
    fn canonical_strings_round_trip() {
        for t in [
            SensorType::Strain,
            SensorType::Vibration,
            SensorType::Pressure,
            SensorType::RebarStress,
            SensorType::Other,
        ] {
            assert_eq!(SensorType::parse(t.as_str()), t);
        }
    }
}
