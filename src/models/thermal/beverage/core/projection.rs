use jiff::Timestamp;
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use crate::support::units::TemperatureDifference;

use super::{
    Beverage, CoolingMedium,
    rate::rate_constant,
    solve::round_to_tenth,
};

/// One hourly ambient-temperature sample from a weather forecast.
///
/// Samples are expected in ascending timestamp order; insertion order is
/// time order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSample {
    pub timestamp: Timestamp,
    pub ambient_temp: ThermodynamicTemperature,
}

/// One predicted point of a beverage-temperature trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    /// Timestamp of the forecast sample this point corresponds to.
    pub timestamp: Timestamp,
    /// Predicted beverage temperature, rounded to one decimal place.
    pub beverage_temp: ThermodynamicTemperature,
    /// The ambient at this point: the sample's, or the medium's fixed
    /// temperature when a medium is active.
    pub ambient_temp: ThermodynamicTemperature,
    /// The beverage is at or below the target temperature.
    pub target_reached: bool,
    /// The beverage is below the freeze-risk threshold.
    pub freeze_risk: bool,
}

/// Tuning knobs for [`project_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// How long each sample's ambient is held against the beverage.
    pub step: Time,
    /// Minimum number of points to emit before early-stopping, so short
    /// projections still show a trend.
    pub min_trend_points: usize,
    /// Beverage temperatures below this flag a freeze risk.
    pub freeze_threshold: ThermodynamicTemperature,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            step: Time::new::<minute>(60.0),
            min_trend_points: 24,
            freeze_threshold: ThermodynamicTemperature::new::<degree_celsius>(1.0),
        }
    }
}

/// Projects the beverage temperature across a forecast with default settings.
///
/// See [`project_with`].
#[must_use]
pub fn project(
    beverage: &Beverage,
    medium: Option<CoolingMedium>,
    forecast: &[ForecastSample],
    target_temp: ThermodynamicTemperature,
) -> Vec<ProjectionPoint> {
    project_with(
        beverage,
        medium,
        forecast,
        target_temp,
        ProjectionConfig::default(),
    )
}

/// Projects the beverage temperature hour by hour across a forecast.
///
/// The first point echoes the starting temperature. Every later point
/// applies Newton's law over one fixed step, driven by the **previous**
/// sample's ambient: a forecast point describes the conditions held constant
/// for the hour preceding it. An active medium overrides the forecast
/// entirely — an immersed vessel does not feel the weather — so every point
/// cools against, and reports, the medium's fixed temperature.
///
/// An empty forecast yields an empty projection (no forecast available, not
/// an error). Once a point is at or below target *and* below the freeze
/// threshold, the walk stops after that point, provided at least
/// [`min_trend_points`](ProjectionConfig::min_trend_points) have been
/// emitted. There is no failure mode; "target never reached" is simply the
/// absence of any point with [`target_reached`](ProjectionPoint::target_reached)
/// set, which callers detect by scanning the sequence.
///
/// The walk itself carries full precision; only the emitted temperatures are
/// rounded, and the flags are computed from the rounded values so they agree
/// exactly with what the caller sees.
///
/// # Panics
///
/// Panics if the beverage volume is not strictly positive; see
/// [`validate`](super::validate).
#[must_use]
pub fn project_with(
    beverage: &Beverage,
    medium: Option<CoolingMedium>,
    forecast: &[ForecastSample],
    target_temp: ThermodynamicTemperature,
    config: ProjectionConfig,
) -> Vec<ProjectionPoint> {
    if forecast.is_empty() {
        return Vec::new();
    }

    let rate = rate_constant(beverage, medium);
    let medium_ambient = medium.map(|medium| medium.profile().ambient_temp);
    let decay = (-rate.per_minute() * config.step.get::<minute>()).exp();

    let mut points = Vec::with_capacity(forecast.len());
    let mut temperature = beverage.temperature;

    for (i, sample) in forecast.iter().enumerate() {
        if i > 0 {
            let driving = medium_ambient.unwrap_or(forecast[i - 1].ambient_temp);
            temperature = driving + temperature.minus(driving) * decay;
        }

        let beverage_temp = round_to_tenth(temperature);
        let target_reached = beverage_temp <= target_temp;
        let freeze_risk = beverage_temp < config.freeze_threshold;

        points.push(ProjectionPoint {
            timestamp: sample.timestamp,
            beverage_temp,
            ambient_temp: medium_ambient.unwrap_or(sample.ambient_temp),
            target_reached,
            freeze_risk,
        });

        if target_reached && freeze_risk && points.len() >= config.min_trend_points {
            break;
        }
    }

    points
}
