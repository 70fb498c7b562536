use super::PorosityLaw;
use crate::StrError;

/// Implements a porosity law based on the soil-mechanics void-ratio line
///
/// The void ratio decreases linearly with the logarithm of effective stress,
///
/// ```text
/// e(σ) = max(e₀ - β · ln(1 + σ/σ_ref), 0)    with σ = max(ves, max_ves)
/// φ = e / (1 + e)
/// ```
///
/// where σ_ref = 100 kPa is a fixed reference stress.
pub struct PorositySoilMechanics {
    e_0: f64,  // void ratio at zero effective stress
    beta: f64, // compression index over ln(stress)
}

/// Reference stress for the logarithmic void-ratio line (Pa)
const SIGMA_REF: f64 = 1e5;

impl PorositySoilMechanics {
    /// Allocates a new instance
    pub fn new(e_0: f64, beta: f64) -> Result<Self, StrError> {
        if e_0 <= 0.0 {
            return Err("e_0 parameter for the soil mechanics porosity model is invalid");
        }
        if beta < 0.0 {
            return Err("beta parameter for the soil mechanics porosity model is invalid");
        }
        Ok(PorositySoilMechanics { e_0, beta })
    }
}

impl PorosityLaw for PorositySoilMechanics {
    fn mechanical_porosity(&self, ves: f64, max_ves: f64) -> f64 {
        let sigma = f64::max(0.0, f64::max(ves, max_ves));
        let e = f64::max(self.e_0 - self.beta * f64::ln(1.0 + sigma / SIGMA_REF), 0.0);
        e / (1.0 + e)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
