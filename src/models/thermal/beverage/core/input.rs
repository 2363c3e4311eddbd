use uom::si::{
    f64::{ThermodynamicTemperature, Volume},
    thermodynamic_temperature::degree_celsius,
    volume::milliliter,
};

use super::{CoolingLocation, CoolingMedium, VesselMaterial};

/// The beverage being cooled: its current temperature and its vessel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beverage {
    /// Current (starting) temperature.
    pub temperature: ThermodynamicTemperature,
    /// Vessel volume. Must be strictly positive; checked by
    /// [`validate`](super::validate).
    pub volume: Volume,
    /// Vessel wall material.
    pub vessel: VesselMaterial,
}

/// A standard 330 ml aluminum can at room temperature.
impl Default for Beverage {
    fn default() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
            volume: Volume::new::<milliliter>(330.0),
            vessel: VesselMaterial::Aluminum,
        }
    }
}

/// The environment the beverage cools in.
///
/// When a [`CoolingMedium`] is active it takes over entirely: the beverage
/// cools against the medium's fixed temperature and `ambient_temp` is
/// ignored. Without a medium, the beverage cools against `ambient_temp` in
/// still air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Base ambient temperature (freezer, fridge, or outdoors).
    pub ambient_temp: ThermodynamicTemperature,
    /// Active cooling medium, if any.
    pub medium: Option<CoolingMedium>,
}

impl Environment {
    /// Still air at the given ambient temperature.
    #[must_use]
    pub fn air(ambient_temp: ThermodynamicTemperature) -> Self {
        Self {
            ambient_temp,
            medium: None,
        }
    }

    /// Submersion in (or contact with) the given medium.
    ///
    /// The stored base ambient is set to the medium's own temperature;
    /// it is unused while the medium is active.
    #[must_use]
    pub fn in_medium(medium: CoolingMedium) -> Self {
        Self {
            ambient_temp: medium.profile().ambient_temp,
            medium: Some(medium),
        }
    }

    /// The temperature the beverage actually cools against.
    #[must_use]
    pub fn effective_ambient(&self) -> ThermodynamicTemperature {
        match self.medium {
            Some(medium) => medium.profile().ambient_temp,
            None => self.ambient_temp,
        }
    }
}

/// A standard freezer with no medium.
impl Default for Environment {
    fn default() -> Self {
        CoolingLocation::Freezer.into()
    }
}

/// A full cooling request: beverage, environment, and target temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingParameters {
    pub beverage: Beverage,
    pub environment: Environment,
    /// Temperature the caller wants the beverage to reach.
    pub target_temp: ThermodynamicTemperature,
}

/// A default beverage in a freezer, aiming for the "Perfect" 2 °C serve.
impl Default for CoolingParameters {
    fn default() -> Self {
        Self {
            beverage: Beverage::default(),
            environment: Environment::default(),
            target_temp: ThermodynamicTemperature::new::<degree_celsius>(2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn effective_ambient_without_medium_is_base_ambient() {
        let environment = Environment::air(ThermodynamicTemperature::new::<degree_celsius>(5.0));
        assert_relative_eq!(
            environment.effective_ambient().get::<degree_celsius>(),
            5.0
        );
    }

    #[test]
    fn effective_ambient_with_medium_ignores_base_ambient() {
        let environment = Environment {
            ambient_temp: ThermodynamicTemperature::new::<degree_celsius>(35.0),
            medium: Some(CoolingMedium::SaltIceWater),
        };
        assert_relative_eq!(
            environment.effective_ambient().get::<degree_celsius>(),
            -21.0
        );
    }

    #[test]
    fn defaults_mirror_the_standard_request() {
        let params = CoolingParameters::default();
        assert_relative_eq!(
            params.beverage.temperature.get::<degree_celsius>(),
            20.0
        );
        assert_relative_eq!(params.beverage.volume.get::<milliliter>(), 330.0);
        assert_eq!(params.beverage.vessel, VesselMaterial::Aluminum);
        assert_relative_eq!(
            params.environment.ambient_temp.get::<degree_celsius>(),
            -20.0
        );
        assert_eq!(params.environment.medium, None);
        assert_relative_eq!(params.target_temp.get::<degree_celsius>(), 2.0);
    }
}
