use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// This trait provides a [`minus`](Self::minus) method that subtracts two
/// [`ThermodynamicTemperature`] values (absolute temperatures) and returns a
/// [`TemperatureInterval`] (temperature difference).
///
/// For background on this distinction and why this extension is needed:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature, temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn subtract_temperatures() {
        let beverage = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let ice_bath = ThermodynamicTemperature::new::<degree_celsius>(0.0);

        // A gap driving the cooling, and its (negative) reverse.
        assert_relative_eq!(beverage.minus(ice_bath).get::<delta_celsius>(), 20.0);
        assert_relative_eq!(ice_bath.minus(beverage).get::<delta_celsius>(), -20.0);
    }

    #[test]
    fn interval_ratio_is_dimensionless() {
        use uom::si::ratio::ratio;

        let current = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let target = ThermodynamicTemperature::new::<degree_celsius>(2.0);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(-20.0);

        let fraction = target.minus(ambient) / current.minus(ambient);
        assert_relative_eq!(fraction.get::<ratio>(), 22.0 / 40.0);
    }
}
