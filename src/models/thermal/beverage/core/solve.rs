use uom::{
    ConstZero,
    si::{
        f64::{ThermodynamicTemperature, Time},
        ratio::ratio,
        thermodynamic_temperature::degree_celsius,
        time::minute,
    },
};

use crate::support::units::TemperatureDifference;

use super::{Beverage, CoolingParameters, Environment, rate::EffectiveConditions};

/// Solves Newton's law of cooling for the time to reach the target temperature.
///
/// `T(t) = T_ambient + (T_initial − T_ambient)·e^(−kt)`, rearranged for the
/// time at which `T(t) = T_target`:
///
/// `t = −ln((T_target − T_ambient) / (T_initial − T_ambient)) / k`
///
/// The result is rounded to the nearest whole minute. Boundary conditions are
/// encoded in the returned value rather than raised, so the function is total:
///
/// - already at or below the effective ambient → zero,
/// - target at or above the current temperature → zero,
/// - target at or below the effective ambient → positive infinity (Newton's
///   law only approaches ambient asymptotically, so even equality is
///   unreachable in finite time).
///
/// These returns are defensive, not a substitute for
/// [`validate`](super::validate): caller-facing flows should validate first
/// so the boundary cases surface as errors instead of silent zeros.
///
/// # Panics
///
/// Panics if the beverage volume is not strictly positive; see
/// [`validate`](super::validate).
#[must_use]
pub fn cooling_time(params: &CoolingParameters) -> Time {
    let current = params.beverage.temperature;
    let target = params.target_temp;
    let ambient = params.environment.effective_ambient();

    if current <= ambient {
        return Time::ZERO;
    }
    if target >= current {
        return Time::ZERO;
    }
    if target <= ambient {
        return Time::new::<minute>(f64::INFINITY);
    }

    // Both intervals are strictly positive past the boundary checks, so the
    // fraction is in (0, 1) and the logarithm is finite and negative.
    let conditions = EffectiveConditions::derive(&params.beverage, &params.environment);
    let fraction = (target.minus(ambient) / current.minus(ambient)).get::<ratio>();
    let minutes = -fraction.ln() / conditions.rate.per_minute();

    Time::new::<minute>(minutes.round().max(0.0))
}

/// The beverage temperature after cooling for `elapsed` time.
///
/// The inverse of [`cooling_time`], useful for trajectory displays and for
/// checking a solve. The result is rounded to one decimal place; at zero
/// elapsed time it equals the current temperature, and as `elapsed → ∞` it
/// approaches, but never crosses, the effective ambient.
///
/// # Panics
///
/// Panics if the beverage volume is not strictly positive; see
/// [`validate`](super::validate).
#[must_use]
pub fn temperature_at(
    beverage: &Beverage,
    environment: &Environment,
    elapsed: Time,
) -> ThermodynamicTemperature {
    let conditions = EffectiveConditions::derive(beverage, environment);
    let ambient = conditions.ambient_temp;

    let decay = (-conditions.rate.per_minute() * elapsed.get::<minute>()).exp();
    round_to_tenth(ambient + beverage.temperature.minus(ambient) * decay)
}

pub(crate) fn round_to_tenth(temperature: ThermodynamicTemperature) -> ThermodynamicTemperature {
    let celsius = temperature.get::<degree_celsius>();
    ThermodynamicTemperature::new::<degree_celsius>((celsius * 10.0).round() / 10.0)
}
