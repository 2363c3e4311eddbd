//! Beverage cooling models.
//!
//! This module provides [`twine_core::Model`] implementations for beverage
//! cooling. The computational core is in the internal [`core`] module; the
//! data types the adapters exchange are re-exported here.
//!
//! Two adapters cover the two questions callers ask:
//!
//! - [`CoolingTimer`]: how many minutes until the beverage reaches its
//!   target temperature in a fixed environment. Validates the request
//!   before solving, so boundary conditions surface as a
//!   [`ParameterError`] instead of a silent zero or infinity.
//! - [`ForecastProjector`]: the hour-by-hour trajectory the beverage
//!   follows under an outdoor forecast, with target-reached and
//!   freeze-risk flags per point. Infallible: an empty forecast simply
//!   yields an empty trajectory.

pub(crate) mod core;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{ThermodynamicTemperature, Time};

pub use self::core::{
    Beverage, CoolingLocation, CoolingMedium, CoolingParameters, EffectiveConditions,
    Environment, ForecastSample, MediumProfile, ParameterError, ProjectionConfig,
    ProjectionPoint, REFERENCE_VOLUME_ML, RateConstant, TEMP_PRESETS, TempPreset,
    VesselMaterial, cooling_time, project, project_with, temperature_at, validate,
};

/// Solves for the time to chill a beverage to its target temperature.
///
/// The output is in minutes, rounded to the nearest whole minute. A target
/// strictly between the effective ambient and the current temperature always
/// yields a finite time; requests outside that band are rejected by
/// validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolingTimer;

impl Model for CoolingTimer {
    type Input = CoolingParameters;
    type Output = Time;
    type Error = ParameterError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        validate(input)?;
        Ok(cooling_time(input))
    }
}

/// A request for a [`ForecastProjector`] trajectory.
///
/// The base ambient temperature is absent by construction: the forecast
/// supplies it, and an active medium overrides the forecast entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRequest {
    pub beverage: Beverage,
    /// Active cooling medium, if any.
    pub medium: Option<CoolingMedium>,
    /// Hourly ambient samples, ordered by ascending timestamp.
    pub forecast: Vec<ForecastSample>,
    pub target_temp: ThermodynamicTemperature,
}

/// Projects a beverage-temperature trajectory across a weather forecast.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastProjector;

impl Model for ForecastProjector {
    type Input = ProjectionRequest;
    type Output = Vec<ProjectionPoint>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(project(
            &input.beverage,
            input.medium,
            &input.forecast,
            input.target_temp,
        ))
    }
}
