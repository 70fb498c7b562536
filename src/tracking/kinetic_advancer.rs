use super::Sample;
use crate::base::{Config, SamplePhase};
use crate::geometry::Column;
use crate::material::KineticModel;

/// Drives a kinetic model through a sample's thermal history
///
/// The advancer pairs consecutive history points into intervals: the duration
/// comes from the age difference (ages decrease towards the present, so the
/// difference is non-negative for a correctly recorded history) and the
/// temperature from the later point of the pair. Exactly one `advance_state`
/// call is made per passing interval, in stored order; the kinetic models are
/// path-dependent and not commutative under reordering.
///
/// Each interval passes through a second deposition gate, independent of the
/// per-point gate applied while building the history: the solid thickness
/// below the sample is compared against the bracketing element's solid
/// thickness at the interval's *start* age. The two gates overlap but are
/// evaluated against different reference ages, and the interval gate can
/// exclude the very first interval even when both of its endpoints passed the
/// per-point gate.
pub struct KineticAdvancer<'a> {
    /// Configuration holding the unit-conversion constants
    pub config: &'a Config,
}

impl<'a> KineticAdvancer<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config) -> Self {
        KineticAdvancer { config }
    }

    /// Consumes the sample's history and advances the kinetic model
    ///
    /// A history with fewer than two points cannot form an interval and
    /// leaves the model untouched. The sample transitions to the
    /// KineticsDriven phase either way.
    ///
    /// # Input
    ///
    /// * `column` -- the representative column of the sample's formation
    /// * `model` -- the per-sample kinetic state to advance
    ///
    /// # Panics
    ///
    /// This function panics unless the sample's history has been built.
    pub fn drive<M>(&self, sample: &mut Sample, column: &Column, model: &mut M)
    where
        M: KineticModel,
    {
        assert!(
            sample.phase() == SamplePhase::HistoryBuilt,
            "the history must be built before driving kinetics"
        );
        let history = sample.history();
        if history.len() > 1 {
            let lower = sample.lower_node();
            let solid_sample = sample.solid_thickness_to_lower_node();
            let mut previous_age = history[0].time;
            for point in &history[1..] {
                let duration = (previous_age - point.time) * self.config.seconds_per_ma;
                let temperature = point.temperature + self.config.kelvin_at_zero_celsius;
                if solid_sample <= column.solid_thickness(lower, previous_age) {
                    model.advance_state(duration, temperature);
                }
                previous_age = point.time;
            }
        }
        sample.mark_kinetics_driven();
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
