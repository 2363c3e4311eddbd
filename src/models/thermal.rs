//! Thermal systems models.
//!
//! This module contains models for thermal systems. Its sole occupant
//! today is the beverage cooling family.

pub mod beverage;
