use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

/// An active cooling medium in direct contact with the vessel.
///
/// A medium replaces the base ambient temperature with its own fixed
/// temperature and scales the rate constant, so a beverage buried in snow
/// cools against 0 °C regardless of the weather outside. "Still air at the
/// base ambient" is the absence of a medium, `Option::<CoolingMedium>::None`;
/// at most one medium can be in effect per request by construction.
///
/// Variants are ordered from slowest to fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolingMedium {
    /// Buried in snow at the freezing point.
    Snow,
    /// Submerged in cold tap water.
    Water,
    /// Submerged in an ice-water bath.
    IceWater,
    /// Submerged in salted ice water at the NaCl-water eutectic.
    SaltIceWater,
    /// Blasted with a CO₂ fire extinguisher (sublimating dry ice).
    Co2,
}

/// Heat-transfer characteristics of a [`CoolingMedium`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediumProfile {
    /// Display name.
    pub name: &'static str,
    /// Fixed temperature the beverage cools against while the medium is active.
    pub ambient_temp: ThermodynamicTemperature,
    /// Factor applied to the base rate constant.
    pub rate_multiplier: f64,
    /// Extra factor applied on top of [`rate_multiplier`](Self::rate_multiplier)
    /// for aluminum vessels. Glass gets no bonus.
    pub aluminum_bonus: f64,
    /// One-line description of the mechanism.
    pub description: &'static str,
    /// Safety warning, where one applies.
    pub warning: Option<&'static str>,
}

impl CoolingMedium {
    /// Every medium, ordered from slowest to fastest.
    pub const ALL: [CoolingMedium; 5] = [
        CoolingMedium::Snow,
        CoolingMedium::Water,
        CoolingMedium::IceWater,
        CoolingMedium::SaltIceWater,
        CoolingMedium::Co2,
    ];

    /// The canonical heat-transfer profile for this medium.
    #[must_use]
    pub fn profile(self) -> MediumProfile {
        match self {
            CoolingMedium::Snow => MediumProfile {
                name: "In Snow",
                ambient_temp: celsius(0.0),
                rate_multiplier: 1.3,
                aluminum_bonus: 1.1,
                description: "Snow provides better surface contact than still air but less than water",
                warning: None,
            },
            CoolingMedium::Water => MediumProfile {
                name: "In Cold Water",
                ambient_temp: celsius(10.0),
                rate_multiplier: 2.5,
                aluminum_bonus: 1.3,
                description: "Cold tap water conducts heat far better than air",
                warning: None,
            },
            CoolingMedium::IceWater => MediumProfile {
                name: "In Ice Water",
                ambient_temp: celsius(0.0),
                rate_multiplier: 4.0,
                aluminum_bonus: 1.4,
                description: "Ice-water bath, enhanced by convection currents and latent heat of fusion",
                warning: None,
            },
            CoolingMedium::SaltIceWater => MediumProfile {
                name: "In Salt Ice Water",
                ambient_temp: celsius(-21.0),
                rate_multiplier: 6.0,
                aluminum_bonus: 1.4,
                description: "Salt lowers the freezing point to the NaCl-water eutectic and keeps liquid contact",
                warning: None,
            },
            CoolingMedium::Co2 => MediumProfile {
                name: "CO₂ Fire Extinguisher",
                ambient_temp: celsius(-78.5),
                rate_multiplier: 12.0,
                aluminum_bonus: 1.4,
                description: "Direct contact with dry ice sublimating at atmospheric pressure",
                warning: Some("Can cause thermal shock! Risk of explosion with sealed containers."),
            },
        }
    }
}

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn canonical_profile_values() {
        let snow = CoolingMedium::Snow.profile();
        assert_relative_eq!(snow.ambient_temp.get::<degree_celsius>(), 0.0);
        assert_relative_eq!(snow.rate_multiplier, 1.3);
        assert_relative_eq!(snow.aluminum_bonus, 1.1);

        let salt = CoolingMedium::SaltIceWater.profile();
        assert_relative_eq!(salt.ambient_temp.get::<degree_celsius>(), -21.0);
        assert_relative_eq!(salt.rate_multiplier, 6.0);

        let co2 = CoolingMedium::Co2.profile();
        assert_relative_eq!(co2.ambient_temp.get::<degree_celsius>(), -78.5);
        assert_relative_eq!(co2.rate_multiplier, 12.0);
        assert_relative_eq!(co2.aluminum_bonus, 1.4);
    }

    #[test]
    fn multipliers_increase_from_slowest_to_fastest() {
        let multipliers: Vec<f64> = CoolingMedium::ALL
            .iter()
            .map(|medium| medium.profile().rate_multiplier)
            .collect();

        for pair in multipliers.windows(2) {
            assert!(
                pair[0] < pair[1],
                "media must be ordered slowest to fastest, got {pair:?}"
            );
        }
    }

    #[test]
    fn only_co2_carries_a_warning() {
        for medium in CoolingMedium::ALL {
            let profile = medium.profile();
            assert_eq!(
                profile.warning.is_some(),
                medium == CoolingMedium::Co2,
                "{} warning mismatch",
                profile.name
            );
        }
    }
}
