use uom::si::{f64::ThermodynamicTemperature, volume::milliliter};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

use super::{Beverage, CoolingMedium, Environment, VesselMaterial};

/// Reference vessel volume for surface-area scaling: a standard 330 ml can.
pub const REFERENCE_VOLUME_ML: f64 = 330.0;

/// Surface-area-to-volume scaling for geometrically similar cylinders,
/// `SA/V ∝ V^(-1/3)`.
const VOLUME_SCALING_EXPONENT: f64 = 0.33;

/// A Newton's-law rate constant, per minute.
///
/// Larger values cool faster. The rate constant is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RateConstant(Constrained<f64, StrictlyPositive>);

impl RateConstant {
    /// Creates a [`RateConstant`] from a per-minute decay rate.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the rate is zero, negative, or `NaN`.
    pub fn new(per_minute: f64) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(per_minute)?))
    }

    /// The decay rate in inverse minutes.
    #[must_use]
    pub fn per_minute(self) -> f64 {
        self.0.into_inner()
    }
}

/// What the beverage actually cools against once any medium override is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveConditions {
    /// Effective rate constant, with volume scaling and medium multipliers applied.
    pub rate: RateConstant,
    /// Effective ambient temperature: the medium's fixed temperature when one
    /// is active, the base ambient otherwise.
    pub ambient_temp: ThermodynamicTemperature,
}

impl EffectiveConditions {
    /// Derives the effective rate constant and ambient temperature.
    ///
    /// # Panics
    ///
    /// Panics if the beverage volume is not strictly positive. Callers are
    /// expected to run [`validate`](super::validate) first.
    #[must_use]
    pub fn derive(beverage: &Beverage, environment: &Environment) -> Self {
        Self {
            rate: rate_constant(beverage, environment.medium),
            ambient_temp: environment.effective_ambient(),
        }
    }
}

/// Derives the effective rate constant for a beverage in an optional medium.
///
/// The base rate comes from the vessel material, scaled by
/// `(330 / volume_ml)^0.33` so smaller vessels cool faster, then multiplied
/// by the medium profile (and its aluminum bonus) when a medium is active.
///
/// The ambient temperature plays no part here, which is what lets the
/// forecast projection reuse one rate across samples with varying ambients.
///
/// # Panics
///
/// Panics if the beverage volume is not strictly positive. Callers are
/// expected to run [`validate`](super::validate) first.
#[must_use]
pub fn rate_constant(beverage: &Beverage, medium: Option<CoolingMedium>) -> RateConstant {
    let mut rate = beverage.vessel.base_rate_per_minute();

    let volume_ml = beverage.volume.get::<milliliter>();
    rate *= (REFERENCE_VOLUME_ML / volume_ml).powf(VOLUME_SCALING_EXPONENT);

    if let Some(medium) = medium {
        let profile = medium.profile();
        rate *= profile.rate_multiplier;
        if beverage.vessel == VesselMaterial::Aluminum {
            rate *= profile.aluminum_bonus;
        }
    }

    RateConstant::new(rate).expect("a positive volume always yields a positive rate constant")
}
