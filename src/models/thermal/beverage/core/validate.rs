use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::CoolingParameters;

/// A cooling request that cannot be solved as asked.
///
/// Every variant is a deterministic function of the inputs; there is no
/// runtime failure mode. Caller-facing flows must check this before relying
/// on [`cooling_time`](super::cooling_time), whose boundary returns (zero or
/// infinity) are deliberately silent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// The vessel volume is zero, negative, or `NaN`.
    #[error("volume must be positive")]
    InvalidVolume,

    /// The beverage cannot cool any further in this environment.
    #[error("beverage is already at or below the environment temperature")]
    AlreadyAtOrBelowAmbient,

    /// No cooling is needed to reach the target.
    #[error("beverage is already cold enough, no cooling needed")]
    AlreadyAtOrBelowTarget,

    /// The environment can never bring the beverage down to the target.
    #[error(
        "cannot cool to or below the environment temperature ({:.1}°C)",
        .ambient.get::<degree_celsius>()
    )]
    TargetUnreachable {
        /// The effective ambient temperature (a medium's fixed temperature
        /// when one is active).
        ambient: ThermodynamicTemperature,
    },
}

/// Checks a cooling request before solving.
///
/// Applies the same medium-override logic as the solver, so a request that
/// looks fine against the outdoor ambient can still be rejected once an
/// active medium replaces it (cold tap water will never reach a 2 °C
/// target, whatever the weather).
///
/// # Errors
///
/// Returns the first failed check, in order: volume positivity, current
/// temperature above the effective ambient, current temperature above the
/// target, target above the effective ambient.
pub fn validate(params: &CoolingParameters) -> Result<(), ParameterError> {
    if StrictlyPositive::check(&params.beverage.volume.value).is_err() {
        return Err(ParameterError::InvalidVolume);
    }

    let ambient = params.environment.effective_ambient();

    if params.beverage.temperature <= ambient {
        return Err(ParameterError::AlreadyAtOrBelowAmbient);
    }
    if params.beverage.temperature <= params.target_temp {
        return Err(ParameterError::AlreadyAtOrBelowTarget);
    }
    if params.target_temp <= ambient {
        return Err(ParameterError::TargetUnreachable { ambient });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Volume, volume::milliliter};

    use crate::models::thermal::beverage::core::{Beverage, CoolingMedium, Environment};

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn the_default_request_is_valid() {
        assert_eq!(validate(&CoolingParameters::default()), Ok(()));
    }

    #[test]
    fn rejects_non_positive_volumes() {
        for volume_ml in [0.0, -330.0, f64::NAN] {
            let params = CoolingParameters {
                beverage: Beverage {
                    volume: Volume::new::<milliliter>(volume_ml),
                    ..Beverage::default()
                },
                ..CoolingParameters::default()
            };
            assert_eq!(validate(&params), Err(ParameterError::InvalidVolume));
        }
    }

    #[test]
    fn rejects_a_beverage_already_colder_than_its_environment() {
        let params = CoolingParameters {
            beverage: Beverage {
                temperature: celsius(-25.0),
                ..Beverage::default()
            },
            ..CoolingParameters::default()
        };
        assert_eq!(
            validate(&params),
            Err(ParameterError::AlreadyAtOrBelowAmbient)
        );
    }

    #[test]
    fn rejects_a_target_at_or_above_the_current_temperature() {
        let params = CoolingParameters {
            target_temp: celsius(20.0),
            ..CoolingParameters::default()
        };
        assert_eq!(
            validate(&params),
            Err(ParameterError::AlreadyAtOrBelowTarget)
        );
    }

    #[test]
    fn rejects_targets_the_environment_cannot_reach() {
        let params = CoolingParameters {
            environment: Environment::air(celsius(5.0)),
            target_temp: celsius(2.0),
            ..CoolingParameters::default()
        };
        assert_eq!(
            validate(&params),
            Err(ParameterError::TargetUnreachable {
                ambient: celsius(5.0)
            })
        );
    }

    #[test]
    fn an_active_medium_replaces_the_ambient_during_validation() {
        // 2 °C is fine for a freezer but unreachable in 10 °C tap water.
        let params = CoolingParameters {
            environment: Environment::in_medium(CoolingMedium::Water),
            ..CoolingParameters::default()
        };
        let error = validate(&params).unwrap_err();
        assert_eq!(
            error,
            ParameterError::TargetUnreachable {
                ambient: celsius(10.0)
            }
        );
        assert_eq!(
            error.to_string(),
            "cannot cool to or below the environment temperature (10.0°C)"
        );
    }

    #[test]
    fn checks_run_in_declaration_order() {
        // Invalid volume wins even when every other check would also fail.
        let params = CoolingParameters {
            beverage: Beverage {
                temperature: celsius(-25.0),
                volume: Volume::new::<milliliter>(-1.0),
                ..Beverage::default()
            },
            target_temp: celsius(30.0),
            ..CoolingParameters::default()
        };
        assert_eq!(validate(&params), Err(ParameterError::InvalidVolume));
    }
}
