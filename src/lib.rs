//! # Quench Models
//!
//! Beverage cooling models and model-building tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The models answer two questions about a beverage placed in a cooling
//! environment: *how long until it reaches a target temperature* (a
//! closed-form Newton's-law solve), and *what trajectory does it follow
//! under a changing outdoor forecast* (an hourly projection with
//! target-reached and freeze-risk detection).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
