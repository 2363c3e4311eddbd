use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use super::Environment;

/// Common cooling locations with canonical ambient temperatures.
///
/// The values follow food-safety standard appliance settings. Outdoor
/// cooling has no canonical temperature; build an [`Environment`] from a
/// live forecast instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolingLocation {
    /// A standard freezer at −20 °C.
    Freezer,
    /// A standard refrigerator at 5 °C.
    Fridge,
}

impl CoolingLocation {
    /// Canonical ambient temperature for this location.
    #[must_use]
    pub fn ambient_temp(self) -> ThermodynamicTemperature {
        let celsius = match self {
            CoolingLocation::Freezer => -20.0,
            CoolingLocation::Fridge => 5.0,
        };
        ThermodynamicTemperature::new::<degree_celsius>(celsius)
    }
}

impl From<CoolingLocation> for Environment {
    fn from(location: CoolingLocation) -> Self {
        Environment::air(location.ambient_temp())
    }
}

/// A serving-temperature preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempPreset {
    pub label: &'static str,
    /// Target temperature in degrees Celsius.
    pub celsius: f64,
    pub description: &'static str,
}

impl TempPreset {
    /// The preset's target temperature as a quantity.
    #[must_use]
    pub fn target_temp(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.celsius)
    }
}

/// Serving-temperature presets, coldest first.
pub const TEMP_PRESETS: [TempPreset; 7] = [
    TempPreset {
        label: "Slushy",
        celsius: 0.0,
        description: "Icy slushy consistency",
    },
    TempPreset {
        label: "Super Cold",
        celsius: 1.0,
        description: "Almost freezing, very cold",
    },
    TempPreset {
        label: "Perfect",
        celsius: 2.0,
        description: "Ideal drinking temperature",
    },
    TempPreset {
        label: "Cold",
        celsius: 3.0,
        description: "Nice and cold",
    },
    TempPreset {
        label: "Chilled",
        celsius: 4.0,
        description: "Lightly chilled",
    },
    TempPreset {
        label: "Cool",
        celsius: 5.0,
        description: "Just cool enough",
    },
    TempPreset {
        label: "Cool-ish",
        celsius: 6.0,
        description: "Barely chilled",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn canonical_location_temperatures() {
        assert_relative_eq!(
            CoolingLocation::Freezer.ambient_temp().get::<degree_celsius>(),
            -20.0
        );
        assert_relative_eq!(
            CoolingLocation::Fridge.ambient_temp().get::<degree_celsius>(),
            5.0
        );
    }

    #[test]
    fn presets_run_coldest_first() {
        for pair in TEMP_PRESETS.windows(2) {
            assert!(pair[0].celsius < pair[1].celsius);
        }

        let perfect = TEMP_PRESETS
            .iter()
            .find(|preset| preset.label == "Perfect")
            .unwrap();
        assert_relative_eq!(perfect.target_temp().get::<degree_celsius>(), 2.0);
    }
}
