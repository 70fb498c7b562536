use crate::material::Porosity;

/// Number of integration sub-steps per optimisation level
const N_STEPS_TABLE: [usize; 5] = [3, 3, 4, 4, 5];

/// Returns the number of sub-steps for the compaction equation
///
/// Coarser integration is used at lower fidelity settings. The table is a
/// calibration-significant constant: changing it changes simulated ages.
///
/// # Panics
///
/// This function panics if `optimisation_level` is not in `1 ≤ level ≤ 5`.
#[inline]
pub fn n_steps_compaction_equation(optimisation_level: usize) -> usize {
    N_STEPS_TABLE[optimisation_level - 1]
}

/// Holds the boundary state of one element for compaction integration
///
/// The boundary values (VES, max-VES, chemical compaction) are snapshots at a
/// single timestep for one bracketing node pair and are assumed to vary
/// linearly with real thickness across the element. "Bottom" refers to the
/// deeper node.
///
/// The integrator converts between solid thickness (the pore-free,
/// mass-conserving coordinate) and real thickness (the physical coordinate)
/// across the element by integrating the compaction equation
///
/// ```text
/// d(solid thickness)                ⌠
/// ────────────────── = 1 - φ   ⇒   s = │ (1 - φ(r)) dr
/// d(real thickness)                ⌡
/// ```
///
/// where the porosity φ follows the element's lithology law evaluated at the
/// interpolated boundary state.
pub struct CompactionStep<'a> {
    /// Vertical effective stress at the bottom (deeper) node in Pa
    pub ves_bottom: f64,

    /// Vertical effective stress at the top node in Pa
    pub ves_top: f64,

    /// Maximum vertical effective stress at the bottom node in Pa
    pub max_ves_bottom: f64,

    /// Maximum vertical effective stress at the top node in Pa
    pub max_ves_top: f64,

    /// Chemical compaction fraction at the bottom node
    pub chemical_compaction_bottom: f64,

    /// Chemical compaction fraction at the top node
    pub chemical_compaction_top: f64,

    /// Whether chemical compaction participates in the porosity
    pub include_chemical_compaction: bool,

    /// Real (physical) thickness of the whole element in m
    pub real_thickness_element: f64,

    /// Solid thickness of the whole element in m
    pub solid_thickness_element: f64,

    /// Porosity law of the element's lithology
    pub porosity: &'a Porosity,
}

impl<'a> CompactionStep<'a> {
    /// Integrates solid thickness from a real-thickness span (trapezoidal rule)
    ///
    /// Partitions `real_span` into `n_steps` equal sub-intervals starting from
    /// the bottom node and accumulates `0.5·((1-φ_start)+(1-φ_end))·Δr` per
    /// sub-interval. The result is clamped to `[0, solid_thickness_element]`
    /// to absorb geometric-loop inaccuracy.
    pub fn solid_thickness_from_real(&self, real_span: f64, n_steps: usize) -> f64 {
        let d_real = real_span / (n_steps as f64);
        let mut accumulated_real = 0.0;
        let mut solid = 0.0;
        let mut one_minus_phi_start = 1.0 - self.porosity_at(accumulated_real);
        for _ in 0..n_steps {
            accumulated_real += d_real;
            let one_minus_phi_end = 1.0 - self.porosity_at(accumulated_real);
            solid += 0.5 * (one_minus_phi_start + one_minus_phi_end) * d_real;
            one_minus_phi_start = one_minus_phi_end;
        }
        f64::min(f64::max(solid, 0.0), self.solid_thickness_element)
    }

    /// Integrates real thickness from a solid-thickness span (predictor-corrector)
    ///
    /// Partitions `solid_span` into `n_steps` equal sub-intervals. The real
    /// thickness is the unknown locating the next porosity evaluation, so each
    /// sub-interval first predicts `Δr = Δs/(1-φ_start)` and then corrects with
    /// `Δr = Δs/(1 - ½(φ_start+φ_end))` using the porosity at the predicted
    /// end position.
    pub fn real_thickness_from_solid(&self, solid_span: f64, n_steps: usize) -> f64 {
        let d_solid = solid_span / (n_steps as f64);
        let mut real = 0.0;
        for _ in 0..n_steps {
            let phi_start = self.porosity_at(real);
            let predicted = real + d_solid / (1.0 - phi_start);
            let phi_end = self.porosity_at(predicted);
            real += d_solid / (1.0 - 0.5 * (phi_start + phi_end));
        }
        real
    }

    /// Evaluates the porosity at an accumulated real thickness above the bottom node
    fn porosity_at(&self, accumulated_real: f64) -> f64 {
        let xi = if self.real_thickness_element > 0.0 {
            accumulated_real / self.real_thickness_element
        } else {
            0.0
        };
        let ves = self.ves_bottom + xi * (self.ves_top - self.ves_bottom);
        let max_ves = self.max_ves_bottom + xi * (self.max_ves_top - self.max_ves_bottom);
        let chemical = self.chemical_compaction_bottom + xi * (self.chemical_compaction_top - self.chemical_compaction_bottom);
        self.porosity
            .porosity(ves, max_ves, self.include_chemical_compaction, chemical)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
