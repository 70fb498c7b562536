use super::{ParamAnnealing, ParamPorosity};

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns porosity parameters for a standard shale
    pub fn param_standard_shale() -> ParamPorosity {
        ParamPorosity::Exponential {
            phi_0: 0.62,  // [-]
            c: 5.0e-8,    // 1/Pa
        }
    }

    /// Returns porosity parameters for a standard sandstone
    pub fn param_standard_sandstone() -> ParamPorosity {
        ParamPorosity::Exponential {
            phi_0: 0.41,  // [-]
            c: 2.66e-8,   // 1/Pa
        }
    }

    /// Returns porosity parameters for a silty shale (void-ratio law)
    pub fn param_silty_shale() -> ParamPorosity {
        ParamPorosity::SoilMechanics {
            e_0: 1.5,   // [-]
            beta: 0.25, // [-]
        }
    }

    /// Returns porosity parameters for a mobile salt layer
    ///
    /// Salt is taken as effectively non-porous; the tiny depositional porosity
    /// keeps the compaction integrand well-defined.
    pub fn param_mobile_salt() -> ParamPorosity {
        ParamPorosity::Exponential {
            phi_0: 0.05,  // [-]
            c: 1.0e-6,    // 1/Pa
        }
    }

    /// Returns annealing parameters for Durango apatite
    pub fn param_durango_apatite() -> ParamAnnealing {
        ParamAnnealing {
            c0: -4.87,                  // [-]
            c1: 0.000168,               // 1/K
            c2: 28.12,                  // [-]
            a: 0.35,                    // [-]
            b: 2.7,                     // [-]
            initial_track_length: 16.3, // µm
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
