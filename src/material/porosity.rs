use super::{PorosityExponential, PorositySoilMechanics};
use crate::base::{ParamPorosity, MINIMUM_POROSITY};
use crate::StrError;

/// Defines a trait for mechanical porosity laws
///
/// The law returns the porosity of a rock element subjected to a vertical
/// effective stress (VES). Compaction is irreversible, thus the law must use
/// the maximum of the current and the historical maximum VES.
pub trait PorosityLaw {
    /// Returns the mechanical porosity given the effective stress state
    ///
    /// # Input
    ///
    /// * `ves` -- current vertical effective stress (Pa)
    /// * `max_ves` -- maximum vertical effective stress ever experienced (Pa)
    fn mechanical_porosity(&self, ves: f64, max_ves: f64) -> f64;
}

/// Implements a porosity model with optional chemical compaction
///
/// Chemical compaction (e.g. quartz cementation) is tracked by the simulator
/// as a separate non-positive fractional state variable and, when enabled,
/// is added to the mechanical porosity. The combined value is clamped to
/// `[MINIMUM_POROSITY, 1.0]`.
pub struct Porosity {
    /// Holds the base implementation
    pub base: Box<dyn PorosityLaw>,
}

impl Porosity {
    /// Allocates a new instance
    pub fn new(param: &ParamPorosity) -> Result<Self, StrError> {
        let base: Box<dyn PorosityLaw> = match param {
            &ParamPorosity::Exponential { phi_0, c } => Box::new(PorosityExponential::new(phi_0, c)?),
            &ParamPorosity::SoilMechanics { e_0, beta } => Box::new(PorositySoilMechanics::new(e_0, beta)?),
        };
        Ok(Porosity { base })
    }

    /// Returns the porosity at a point, optionally including chemical compaction
    ///
    /// # Input
    ///
    /// * `ves` -- current vertical effective stress (Pa)
    /// * `max_ves` -- maximum vertical effective stress ever experienced (Pa)
    /// * `include_chemical_compaction` -- whether the chemical term participates
    /// * `chemical_compaction` -- non-positive porosity reduction from cementation
    pub fn porosity(&self, ves: f64, max_ves: f64, include_chemical_compaction: bool, chemical_compaction: f64) -> f64 {
        let phi = self.base.mechanical_porosity(ves, max_ves);
        if include_chemical_compaction {
            f64::min(1.0, f64::max(MINIMUM_POROSITY, phi + chemical_compaction))
        } else {
            phi
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Porosity;
    use crate::base::{ParamPorosity, SampleParams, MINIMUM_POROSITY};
    use crate::StrError;
    use russell_chk::assert_approx_eq;

    #[test]
    fn new_works() -> Result<(), StrError> {
        let p1 = SampleParams::param_standard_shale();
        let p2 = ParamPorosity::SoilMechanics {
            e_0: 1.5,   // [-]
            beta: 0.25, // [-]
        };
        let m1 = Porosity::new(&p1)?;
        let m2 = Porosity::new(&p2)?;
        assert!(m1.porosity(0.0, 0.0, false, 0.0) > 0.0);
        assert!(m2.porosity(0.0, 0.0, false, 0.0) > 0.0);
        Ok(())
    }

    #[test]
    fn chemical_compaction_works() -> Result<(), StrError> {
        let model = Porosity::new(&SampleParams::param_standard_shale())?;
        let phi_mech = model.porosity(1e7, 1e7, false, -0.1);
        let phi_chem = model.porosity(1e7, 1e7, true, -0.1);
        assert_approx_eq!(phi_chem, phi_mech - 0.1, 1e-15);

        // large cementation clamps at the minimum porosity
        let phi_min = model.porosity(1e7, 1e7, true, -1.0);
        assert_approx_eq!(phi_min, MINIMUM_POROSITY, 1e-15);
        Ok(())
    }
}
