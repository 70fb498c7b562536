use super::{KineticAdvancer, LayerHistoryStore, Sample, SampleHistoryBuilder, SampleLocator};
use crate::base::{Config, ParamSample, SamplePhase};
use crate::geometry::Basin;
use crate::material::KineticModel;
use crate::StrError;

/// Implements the sample-tracking pipeline of a basin simulation
///
/// The tracker owns the samples, the layer-history store, and the
/// configuration, and exposes the three hooks the surrounding simulator must
/// call:
///
/// 1. [SampleTracker::collect_sample_tracking_data] once per simulation
///    timestep, in strictly decreasing-age order;
/// 2. [SampleTracker::compute] once at the end of a pass to bind the samples
///    (if not done explicitly before), build their thermal histories, and
///    drive the per-sample kinetic models;
/// 3. [SampleTracker::clear_sample_input_history] between independent
///    calibration passes, e.g. between iterative-coupling outer loops.
///
/// Samples whose depth falls in no formation stay unbound and are silently
/// excluded from history building and kinetic advancement.
pub struct SampleTracker {
    /// Configuration parameters
    pub config: Config,

    samples: Vec<Sample>,
    store: LayerHistoryStore,
    bound: bool,
}

impl SampleTracker {
    /// Allocates a new instance
    pub fn new(config: Config) -> Self {
        SampleTracker {
            config,
            samples: Vec::new(),
            store: LayerHistoryStore::new(),
            bound: false,
        }
    }

    /// Creates a sample from one row of the tabular input and returns its index
    pub fn add_sample(&mut self, param: &ParamSample) -> Result<usize, StrError> {
        self.samples.push(Sample::new(param)?);
        Ok(self.samples.len() - 1)
    }

    /// Returns the number of samples
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    /// Returns an access to a sample
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of range.
    #[inline]
    pub fn sample(&self, index: usize) -> &Sample {
        &self.samples[index]
    }

    /// Returns an access to all samples
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns an access to the layer-history store
    #[inline]
    pub fn store(&self) -> &LayerHistoryStore {
        &self.store
    }

    /// Binds the samples to the formations containing their depths
    ///
    /// Must run after the geometry has reached its present-day state. Callers
    /// that know the present-day geometry up front may call this before the
    /// time loop so that recording covers the formations of interest from the
    /// first timestep; otherwise [SampleTracker::compute] binds lazily.
    pub fn bind_samples(&mut self, basin: &Basin) {
        SampleLocator::bind(&mut self.samples, basin, &mut self.store);
        self.bound = true;
    }

    /// Records the current continuum fields; call once per simulation timestep
    ///
    /// # Input
    ///
    /// * `time` -- geological age of the timestep (Ma); calls must come in
    ///   strictly decreasing order
    pub fn collect_sample_tracking_data(&mut self, time: f64, basin: &Basin) {
        self.store.record(time, basin);
    }

    /// Clears the recorded histories for a fresh calibration pass
    ///
    /// Empties the layer-history store (keeping the formation bindings) and
    /// the per-sample thermal histories (returning bound samples to the Bound
    /// phase). The caller is responsible for invoking this between passes;
    /// stale data left uncleared is not detected.
    pub fn clear_sample_input_history(&mut self) {
        self.store.clear();
        for sample in &mut self.samples {
            sample.clear_history();
        }
    }

    /// Runs the full per-pass pipeline and returns the success status
    ///
    /// Binds the samples if not bound yet, then, for every bound sample:
    /// derives the bracketing node pair from the latest recorded timestep,
    /// integrates the solid thickness between the lower node and the sample,
    /// replays the recorded timesteps into the sample's thermal history, and
    /// drives the matching kinetic state through that history. Unbound
    /// samples and samples whose formation has no recorded timestep are
    /// silently skipped.
    ///
    /// # Input
    ///
    /// * `states` -- per-sample kinetic states, index-aligned with the
    ///   samples; any aggregate finalization (pooled ages, chi-squared) is
    ///   performed by the caller afterwards
    ///
    /// Returns false if `states` is not index-aligned with the samples.
    pub fn compute<M>(&mut self, basin: &Basin, states: &mut [M]) -> bool
    where
        M: KineticModel,
    {
        if states.len() != self.samples.len() {
            return false;
        }
        if !self.bound {
            self.bind_samples(basin);
        }
        let builder = SampleHistoryBuilder::new(&self.config);
        let advancer = KineticAdvancer::new(&self.config);
        for (sample, state) in self.samples.iter_mut().zip(states.iter_mut()) {
            let formation_id = match sample.formation_id() {
                Some(id) => id,
                None => continue,
            };
            let history = match self.store.history(formation_id) {
                Some(h) if h.n_timesteps() > 0 => h,
                _ => continue,
            };
            let formation = basin.formation(formation_id);
            if sample.phase() != SamplePhase::Bound {
                continue; // already processed in this pass
            }
            SampleLocator::determine_upper_and_lower_node(sample, history);
            builder.compute_solid_thickness_sample_to_lower_node(sample, formation, history);
            builder.build_history(sample, formation, history);
            advancer.drive(sample, &formation.column, state);
        }
        true
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SampleTracker;
    use crate::base::{Config, LayerKind, ParamSample, SamplePhase, SampleParams};
    use crate::geometry::Basin;
    use crate::material::KineticModel;
    use crate::StrError;

    struct CountingModel {
        n_calls: usize,
    }

    impl KineticModel for CountingModel {
        fn advance_state(&mut self, _duration: f64, _temperature: f64) {
            self.n_calls += 1;
        }
    }

    /// One formation (100-300 m) with two elements deposited since 100 Ma
    fn new_basin() -> Result<Basin, StrError> {
        let mut basin = Basin::new(100.0)?;
        let id = basin.add_formation("Brent", LayerKind::NonMobile, &SampleParams::param_standard_shale(), 2)?;
        let column = &mut basin.formation_mut(id).column;
        for element in 0..2 {
            column
                .add_solid_thickness_point(element, 110.0, 0.0)?
                .add_solid_thickness_point(element, 100.0, 70.0)?;
        }
        column.set_state(
            vec![300.0, 200.0, 100.0],
            vec![80.0, 75.0, 70.0],
            vec![3.0e6, 2.0e6, 1.0e6],
            vec![3.0e6, 2.0e6, 1.0e6],
            vec![0.0, 0.0, 0.0],
        )?;
        Ok(basin)
    }

    #[test]
    fn add_sample_works() -> Result<(), StrError> {
        let mut tracker = SampleTracker::new(Config::new());
        let index = tracker.add_sample(&ParamSample {
            id: "BH-1".to_string(),
            depth: 250.0,
        })?;
        assert_eq!(index, 0);
        assert_eq!(tracker.n_samples(), 1);
        assert_eq!(tracker.sample(0).id(), "BH-1");
        assert_eq!(tracker.samples().len(), 1);
        Ok(())
    }

    #[test]
    fn compute_rejects_misaligned_states() -> Result<(), StrError> {
        let basin = new_basin()?;
        let mut tracker = SampleTracker::new(Config::new());
        tracker.add_sample(&ParamSample {
            id: "BH-1".to_string(),
            depth: 250.0,
        })?;
        let mut states: Vec<CountingModel> = Vec::new();
        assert_eq!(tracker.compute(&basin, &mut states), false);
        Ok(())
    }

    #[test]
    fn pipeline_works() -> Result<(), StrError> {
        let basin = new_basin()?;
        let mut tracker = SampleTracker::new(Config::new());
        tracker.add_sample(&ParamSample {
            id: "inside".to_string(),
            depth: 250.0,
        })?;
        tracker.add_sample(&ParamSample {
            id: "outside".to_string(),
            depth: 900.0,
        })?;

        // bind, record three timesteps, then run the pipeline
        tracker.bind_samples(&basin);
        for time in [100.0, 50.0, 0.0] {
            tracker.collect_sample_tracking_data(time, &basin);
        }
        let mut states = vec![CountingModel { n_calls: 0 }, CountingModel { n_calls: 0 }];
        assert_eq!(tracker.compute(&basin, &mut states), true);

        // the contained sample went through the whole pipeline
        assert_eq!(tracker.sample(0).phase(), SamplePhase::KineticsDriven);
        assert_eq!(tracker.sample(0).history().len(), 3);
        assert_eq!(states[0].n_calls, 2);

        // the uncontained sample is silently excluded
        assert_eq!(tracker.sample(1).phase(), SamplePhase::Unbound);
        assert_eq!(tracker.sample(1).history().len(), 0);
        assert_eq!(states[1].n_calls, 0);
        Ok(())
    }

    #[test]
    fn clear_enables_a_fresh_pass() -> Result<(), StrError> {
        let basin = new_basin()?;
        let mut tracker = SampleTracker::new(Config::new());
        tracker.add_sample(&ParamSample {
            id: "BH-1".to_string(),
            depth: 250.0,
        })?;
        tracker.bind_samples(&basin);
        for time in [100.0, 50.0, 0.0] {
            tracker.collect_sample_tracking_data(time, &basin);
        }
        let mut states = vec![CountingModel { n_calls: 0 }];
        assert!(tracker.compute(&basin, &mut states));
        assert_eq!(tracker.sample(0).history().len(), 3);

        // reset and replay a shorter pass
        tracker.clear_sample_input_history();
        assert_eq!(tracker.sample(0).phase(), SamplePhase::Bound);
        assert_eq!(tracker.store().history(0).unwrap().n_timesteps(), 0);
        for time in [40.0, 0.0] {
            tracker.collect_sample_tracking_data(time, &basin);
        }
        let mut states = vec![CountingModel { n_calls: 0 }];
        assert!(tracker.compute(&basin, &mut states));
        assert_eq!(tracker.sample(0).history().len(), 2);
        assert_eq!(states[0].n_calls, 1);
        Ok(())
    }
}
