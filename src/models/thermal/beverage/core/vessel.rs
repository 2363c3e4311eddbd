/// Vessel wall material.
///
/// The material sets the base Newton's-law rate constant in still air.
/// The two values differ by less than 15%: empirically, wall conductivity
/// is not rate-limiting in a low-convection environment, so cans and
/// bottles cool at nearly the same pace in air. The gap only opens up in
/// high-heat-transfer media, where each [`MediumProfile`] applies an
/// aluminum bonus on top of the base rate.
///
/// [`MediumProfile`]: super::MediumProfile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VesselMaterial {
    /// An aluminum can.
    Aluminum,
    /// A glass bottle.
    Glass,
}

impl VesselMaterial {
    /// Base rate constant in still air, per minute, for a reference-volume vessel.
    #[must_use]
    pub fn base_rate_per_minute(self) -> f64 {
        match self {
            VesselMaterial::Aluminum => 0.012,
            VesselMaterial::Glass => 0.011,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            VesselMaterial::Aluminum => "Aluminum can",
            VesselMaterial::Glass => "Glass bottle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rates_differ_by_less_than_15_percent() {
        let aluminum = VesselMaterial::Aluminum.base_rate_per_minute();
        let glass = VesselMaterial::Glass.base_rate_per_minute();

        assert!(aluminum > glass, "aluminum should cool faster than glass");
        assert!(
            (aluminum - glass) / glass < 0.15,
            "materials should be within 15% of each other in air"
        );
    }
}
