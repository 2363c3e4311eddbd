//! Public Quench models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently only
//! `thermal`) based on an opinionated taxonomy. This organization may
//! evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The
//! [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the model-specific core API; the data types the adapters exchange
//! are re-exported from the model module itself.

pub mod thermal;
