use serde::{Deserialize, Serialize};

/// Holds parameters for porosity-effective-stress laws
///
/// The law returns the porosity `φ` as a function of the vertical effective
/// stress (VES) and the maximum VES ever experienced (plastic loading memory).
#[derive(Clone, Copy, Debug)]
pub enum ParamPorosity {
    /// Exponential (Athy-type) porosity law
    ///
    /// ```text
    /// φ = φ₀ exp(-c σᵥ')
    /// ```
    ///
    /// where `σᵥ'` is the maximum of VES and max-VES, i.e., the law keeps
    /// the most-compacted state under unloading (no porosity rebound).
    Exponential {
        /// Depositional (surface) porosity
        phi_0: f64,

        /// Compaction coefficient (1/Pa)
        c: f64,
    },

    /// Void-ratio (soil-mechanics) porosity law
    ///
    /// ```text
    /// e = e₀ - β ln(1 + σᵥ'/σref)    with σref = 100 kPa
    /// φ = e / (1 + e)
    /// ```
    SoilMechanics {
        /// Depositional void ratio
        e_0: f64,

        /// Compression coefficient (slope of e versus ln σᵥ')
        beta: f64,
    },
}

/// Holds parameters for the fission-track annealing model
///
/// The fanning-Arrhenius description of track-length annealing:
///
/// ```text
/// g(r) = [((1 - r^b)/b)^a - 1]/a
/// g(r) = c0 + c1 T (ln t + c2)
/// ```
///
/// with `r` the mean length-reduction ratio, `t` in seconds, and `T` in
/// Kelvin.
///
/// # Reference
///
/// * Laslett GM, Green PF, Duddy IR, Gleadow AJW (1987) Thermal annealing of
///   fission tracks in apatite, 2. A quantitative analysis.
///   Chemical Geology (Isotope Geoscience Section), 65, 1-13
#[derive(Clone, Copy, Debug)]
pub struct ParamAnnealing {
    /// c0 constant of the fanning-Arrhenius equation
    pub c0: f64,

    /// c1 constant of the fanning-Arrhenius equation (1/K)
    pub c1: f64,

    /// c2 constant of the fanning-Arrhenius equation
    pub c2: f64,

    /// Exponent `a` of the length-reduction transform
    pub a: f64,

    /// Exponent `b` of the length-reduction transform
    pub b: f64,

    /// Initial (unannealed) mean track length (µm)
    pub initial_track_length: f64,
}

/// Holds one row of the tabular sample input
///
/// Samples are created once at load time from this table; the depth is the
/// present-day true-vertical depth of the specimen and never changes.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ParamSample {
    /// Identification of the physical rock specimen
    pub id: String,

    /// Present-day true-vertical depth (m, positive downward)
    pub depth: f64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
