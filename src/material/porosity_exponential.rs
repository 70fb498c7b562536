use super::PorosityLaw;
use crate::StrError;

/// Implements the exponential (Athy-type) porosity law in effective-stress form
///
/// ```text
/// φ(σ) = φ₀ · exp(-c · σ)    with σ = max(ves, max_ves)
/// ```
///
/// # Reference
///
/// * Athy LF (1930) Density, porosity, and compaction of sedimentary rocks.
///   AAPG Bulletin, 14(1), 1-24
pub struct PorosityExponential {
    phi_0: f64, // depositional (surface) porosity
    c: f64,     // stress sensitivity, 1/Pa
}

impl PorosityExponential {
    /// Allocates a new instance
    pub fn new(phi_0: f64, c: f64) -> Result<Self, StrError> {
        if phi_0 <= 0.0 || phi_0 > 1.0 {
            return Err("phi_0 parameter for the exponential porosity model is invalid");
        }
        if c < 0.0 {
            return Err("c parameter for the exponential porosity model is invalid");
        }
        Ok(PorosityExponential { phi_0, c })
    }
}

impl PorosityLaw for PorosityExponential {
    fn mechanical_porosity(&self, ves: f64, max_ves: f64) -> f64 {
        let sigma = f64::max(0.0, f64::max(ves, max_ves));
        self.phi_0 * f64::exp(-self.c * sigma)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::PorosityExponential;
    use crate::material::PorosityLaw;
    use crate::StrError;
    use russell_chk::assert_approx_eq;

    #[test]
    fn new_handles_wrong_input() {
        assert_eq!(
            PorosityExponential::new(0.0, 1e-8).err(),
            Some("phi_0 parameter for the exponential porosity model is invalid")
        );
        assert_eq!(
            PorosityExponential::new(1.1, 1e-8).err(),
            Some("phi_0 parameter for the exponential porosity model is invalid")
        );
        assert_eq!(
            PorosityExponential::new(0.6, -1.0).err(),
            Some("c parameter for the exponential porosity model is invalid")
        );
    }

    #[test]
    fn mechanical_porosity_works() -> Result<(), StrError> {
        let law = PorosityExponential::new(0.62, 5.0e-8)?;
        assert_approx_eq!(law.mechanical_porosity(0.0, 0.0), 0.62, 1e-15);
        assert_approx_eq!(law.mechanical_porosity(2e7, 0.0), 0.62 * f64::exp(-1.0), 1e-15);

        // irreversible: the historical maximum drives the porosity
        assert_approx_eq!(
            law.mechanical_porosity(1e7, 2e7),
            law.mechanical_porosity(2e7, 2e7),
            1e-15
        );
        Ok(())
    }
}
