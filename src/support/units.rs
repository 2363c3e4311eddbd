//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical units (temperature, volume, time).
//! This module provides extensions that are useful for modeling but aren't
//! included in [`uom`].
//!
//! ## Temperature differences
//!
//! Newton's law of cooling is driven by the gap between the beverage and its
//! surroundings, so the models constantly subtract one absolute temperature
//! from another. The [`TemperatureDifference`] trait provides a
//! [`minus`](TemperatureDifference::minus) method for exactly that:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use quench_models::support::units::TemperatureDifference;
//!
//! let beverage = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let freezer = ThermodynamicTemperature::new::<degree_celsius>(-20.0);
//! let gap = beverage.minus(freezer);
//! // gap is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
