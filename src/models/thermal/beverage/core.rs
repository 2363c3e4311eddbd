//! Newton's-law beverage cooling core.
//!
//! Everything here is a pure, synchronous function of its inputs: no clock,
//! no I/O, no state between calls. Callers may invoke these from any number
//! of threads without coordination.
//!
//! The shared piece is [`rate_constant`], which turns a vessel, a volume,
//! and an optional [`CoolingMedium`] into the effective Newton's-law rate
//! constant. [`cooling_time`] and [`temperature_at`] apply it against a
//! single fixed ambient; [`project`] walks it across an hourly forecast.

mod input;
mod medium;
mod presets;
mod projection;
mod rate;
mod solve;
mod validate;
mod vessel;

pub use input::{Beverage, CoolingParameters, Environment};
pub use medium::{CoolingMedium, MediumProfile};
pub use presets::{CoolingLocation, TEMP_PRESETS, TempPreset};
pub use projection::{
    ForecastSample, ProjectionConfig, ProjectionPoint, project, project_with,
};
pub use rate::{EffectiveConditions, REFERENCE_VOLUME_ML, RateConstant, rate_constant};
pub use solve::{cooling_time, temperature_at};
pub use validate::{ParameterError, validate};
pub use vessel::VesselMaterial;
