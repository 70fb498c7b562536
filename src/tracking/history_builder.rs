use super::{n_steps_compaction_equation, CompactionStep, LayerHistory, Sample};
use crate::base::{Config, SamplePhase, PRESENT_DAY};
use crate::geometry::Formation;

/// Builds the (time, temperature) history of a sample from recorded layer data
///
/// The builder replays every recorded timestep of the sample's formation and
/// interpolates the temperature at the sample position between the bracketing
/// nodes. The interpolation weight depends on the layer kind:
///
/// * **non-mobile** layers re-derive the sample's position within the element
///   at every historical timestep by inverting the compaction equation: the
///   solid thickness between the lower node and the sample is conserved, so
///   the corresponding real thickness at that timestep follows from the
///   recorded boundary stresses;
/// * **mobile** layers have prescribed geometry with no meaningful relation
///   between solid content and node depths, so the present-day geometric
///   ratio is reused for all timesteps.
///
/// Timesteps older than the sample's deposition are skipped (not
/// zero-filled): a point enters the history only while the solid thickness
/// below the sample fits inside the bracketing element's solid thickness at
/// that age.
pub struct SampleHistoryBuilder<'a> {
    /// Configuration holding the optimisation level
    pub config: &'a Config,
}

impl<'a> SampleHistoryBuilder<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config) -> Self {
        SampleHistoryBuilder { config }
    }

    /// Computes the solid thickness between the lower node and the sample
    ///
    /// Integrates the compaction equation over the real-thickness gap between
    /// the sample's stored lower-node depth and its fixed depth, using the
    /// boundary values of the most recent recorded timestep. The result is
    /// clamped against the present-day solid thickness of the bracketing
    /// element and stored on the sample.
    ///
    /// # Panics
    ///
    /// This function panics if the sample is unbound or if no timestep has
    /// been recorded.
    pub fn compute_solid_thickness_sample_to_lower_node(
        &self,
        sample: &mut Sample,
        formation: &Formation,
        history: &LayerHistory,
    ) {
        assert!(sample.phase() != SamplePhase::Unbound, "sample must be bound before integrating solid thickness");
        assert!(history.n_timesteps() > 0, "at least one timestep must be recorded before integrating solid thickness");
        let latest = history.n_timesteps() - 1;
        let (lower, upper) = (sample.lower_node(), sample.upper_node());
        let step = CompactionStep {
            ves_bottom: history.ves[latest][lower],
            ves_top: history.ves[latest][upper],
            max_ves_bottom: history.max_ves[latest][lower],
            max_ves_top: history.max_ves[latest][upper],
            chemical_compaction_bottom: history.chemical_compaction[latest][lower],
            chemical_compaction_top: history.chemical_compaction[latest][upper],
            include_chemical_compaction: self.config.include_chemical_compaction,
            real_thickness_element: history.depth[latest][lower] - history.depth[latest][upper],
            solid_thickness_element: formation.column.solid_thickness(lower, PRESENT_DAY),
            porosity: &formation.porosity,
        };
        let n_steps = n_steps_compaction_equation(self.config.optimisation_level);
        let real_span = sample.lower_node_depth() - sample.depth();
        let solid = step.solid_thickness_from_real(real_span, n_steps);
        sample.set_solid_thickness_to_lower_node(solid);
    }

    /// Replays the recorded timesteps and appends the sample's thermal history
    ///
    /// The timesteps are visited in recorded (chronological) order. Each
    /// passing timestep appends one `(time, temperature ℃)` point; the sample
    /// then transitions to the HistoryBuilt phase.
    ///
    /// # Panics
    ///
    /// This function panics unless the sample is in the Bound phase.
    pub fn build_history(&self, sample: &mut Sample, formation: &Formation, history: &LayerHistory) {
        assert!(sample.phase() == SamplePhase::Bound, "history can only be built for a bound sample");
        let (lower, upper) = (sample.lower_node(), sample.upper_node());
        let n_steps = n_steps_compaction_equation(self.config.optimisation_level);
        let mobile = formation.is_mobile();

        // constant present-day geometric weight for mobile layers
        let ratio_present_day =
            (sample.lower_node_depth() - sample.depth()) / (sample.lower_node_depth() - sample.upper_node_depth());

        for t in 0..history.n_timesteps() {
            let time = history.reference_times[t];

            // deposition gate: skip timesteps before the sample existed
            let solid_element = formation.column.solid_thickness(lower, time);
            if sample.solid_thickness_to_lower_node() > solid_element {
                continue;
            }
            if history.depth[t].len() <= upper {
                continue; // bracketing nodes not yet recorded at this age
            }

            let ratio = if mobile {
                ratio_present_day
            } else {
                let step = CompactionStep {
                    ves_bottom: history.ves[t][lower],
                    ves_top: history.ves[t][upper],
                    max_ves_bottom: history.max_ves[t][lower],
                    max_ves_top: history.max_ves[t][upper],
                    chemical_compaction_bottom: history.chemical_compaction[t][lower],
                    chemical_compaction_top: history.chemical_compaction[t][upper],
                    include_chemical_compaction: self.config.include_chemical_compaction,
                    real_thickness_element: history.depth[t][lower] - history.depth[t][upper],
                    solid_thickness_element: solid_element,
                    porosity: &formation.porosity,
                };
                let real = step.real_thickness_from_solid(sample.solid_thickness_to_lower_node(), n_steps);
                // clamp absorbs geometric-loop drift
                f64::min(1.0, f64::max(0.0, real / step.real_thickness_element))
            };

            let temperature =
                history.temperature[t][lower] + ratio * (history.temperature[t][upper] - history.temperature[t][lower]);
            sample.append_history(time, temperature);
        }
        sample.mark_history_built();
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SampleHistoryBuilder;
    use crate::base::{Config, LayerKind, ParamSample, SamplePhase, SampleParams};
    use crate::geometry::Basin;
    use crate::tracking::{LayerHistoryStore, Sample, SampleLocator};
    use crate::StrError;
    use russell_chk::assert_approx_eq;

    /// One formation below 100 m of water with two elements of 100 m each;
    /// three recorded timesteps at 100, 50, and 0 Ma
    fn new_scenario(kind: LayerKind, deposit_age_element_0: f64) -> Result<(Basin, LayerHistoryStore), StrError> {
        let mut basin = Basin::new(100.0)?;
        let id = basin.add_formation("Brent", kind, &SampleParams::param_standard_shale(), 2)?;
        let column = &mut basin.formation_mut(id).column;
        column
            .add_solid_thickness_point(0, deposit_age_element_0 + 10.0, 0.0)?
            .add_solid_thickness_point(0, deposit_age_element_0, 70.0)?;
        column
            .add_solid_thickness_point(1, 60.0, 0.0)?
            .add_solid_thickness_point(1, 50.0, 70.0)?;
        let mut store = LayerHistoryStore::new();
        store.ensure_layer(0);
        // the effective stress grows towards present day (progressive burial)
        for (time, temp_bottom, ves_bottom) in [(100.0, 40.0, 1.0e6), (50.0, 60.0, 2.0e6), (0.0, 80.0, 3.0e6)] {
            let column = &mut basin.formation_mut(id).column;
            column.set_state(
                vec![300.0, 200.0, 100.0],
                vec![temp_bottom, temp_bottom - 5.0, temp_bottom - 10.0],
                vec![ves_bottom, 0.8 * ves_bottom, 0.6 * ves_bottom],
                vec![ves_bottom, 0.8 * ves_bottom, 0.6 * ves_bottom],
                vec![0.0, 0.0, 0.0],
            )?;
            store.record(time, &basin);
        }
        Ok((basin, store))
    }

    fn bound_sample(depth: f64, store: &LayerHistoryStore) -> Sample {
        let mut sample = Sample::new(&ParamSample {
            id: "S-1".to_string(),
            depth,
        })
        .unwrap();
        sample.bind(0, "Brent");
        SampleLocator::determine_upper_and_lower_node(&mut sample, store.history(0).unwrap());
        sample
    }

    #[test]
    fn solid_thickness_anchor_works() -> Result<(), StrError> {
        let (basin, store) = new_scenario(LayerKind::NonMobile, 110.0)?;
        let config = Config::new();
        let builder = SampleHistoryBuilder::new(&config);
        let mut sample = bound_sample(250.0, &store);
        assert_eq!((sample.lower_node(), sample.upper_node()), (0, 1));

        builder.compute_solid_thickness_sample_to_lower_node(&mut sample, basin.formation(0), store.history(0).unwrap());

        // half the element with porosity below one: 0 < s < 50 and never
        // above the element's present-day solid thickness (70 m)
        let solid = sample.solid_thickness_to_lower_node();
        assert!(solid > 0.0 && solid < 50.0);
        assert!(solid <= 70.0);
        Ok(())
    }

    #[test]
    fn deposition_gate_skips_early_timesteps() -> Result<(), StrError> {
        // element 0 receives its solid content only at 60 Ma: the sample did
        // not exist at the 100 Ma timestep and gets exactly two points
        let (basin, store) = new_scenario(LayerKind::NonMobile, 60.0)?;
        let config = Config::new();
        let builder = SampleHistoryBuilder::new(&config);
        let mut sample = bound_sample(250.0, &store);

        builder.compute_solid_thickness_sample_to_lower_node(&mut sample, basin.formation(0), store.history(0).unwrap());
        builder.build_history(&mut sample, basin.formation(0), store.history(0).unwrap());

        assert_eq!(sample.phase(), SamplePhase::HistoryBuilt);
        let history = sample.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].time, 50.0);
        assert_eq!(history[1].time, 0.0);
        Ok(())
    }

    #[test]
    fn full_history_is_built_when_always_deposited() -> Result<(), StrError> {
        let (basin, store) = new_scenario(LayerKind::NonMobile, 110.0)?;
        let config = Config::new();
        let builder = SampleHistoryBuilder::new(&config);
        let mut sample = bound_sample(250.0, &store);

        builder.compute_solid_thickness_sample_to_lower_node(&mut sample, basin.formation(0), store.history(0).unwrap());
        builder.build_history(&mut sample, basin.formation(0), store.history(0).unwrap());

        let history = sample.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].time, 100.0);
        assert_eq!(history[2].time, 0.0);

        // interpolated temperatures lie between the bracketing node values
        for (point, temp_bottom) in history.iter().zip([40.0, 60.0, 80.0]) {
            assert!(point.temperature < temp_bottom);
            assert!(point.temperature > temp_bottom - 5.0);
        }
        Ok(())
    }

    #[test]
    fn mobile_and_non_mobile_paths_differ() -> Result<(), StrError> {
        // identical recorded data; only the layer kind differs. The
        // compaction-consistent weight of the non-mobile path must differ
        // from the constant geometric weight of the mobile path for an
        // off-center sample
        let (basin_nm, store_nm) = new_scenario(LayerKind::NonMobile, 110.0)?;
        let (basin_mo, store_mo) = new_scenario(LayerKind::Mobile, 110.0)?;
        let config = Config::new();
        let builder = SampleHistoryBuilder::new(&config);

        let mut fixed = bound_sample(230.0, &store_nm);
        builder.compute_solid_thickness_sample_to_lower_node(&mut fixed, basin_nm.formation(0), store_nm.history(0).unwrap());
        builder.build_history(&mut fixed, basin_nm.formation(0), store_nm.history(0).unwrap());

        let mut moving = bound_sample(230.0, &store_mo);
        builder.compute_solid_thickness_sample_to_lower_node(&mut moving, basin_mo.formation(0), store_mo.history(0).unwrap());
        builder.build_history(&mut moving, basin_mo.formation(0), store_mo.history(0).unwrap());

        assert_eq!(fixed.history().len(), moving.history().len());
        let max_difference = fixed
            .history()
            .iter()
            .zip(moving.history())
            .map(|(a, b)| f64::abs(a.temperature - b.temperature))
            .fold(0.0, f64::max);
        assert!(max_difference > 1e-6);
        Ok(())
    }

    #[test]
    fn mobile_ratio_is_the_present_day_geometric_weight() -> Result<(), StrError> {
        let (basin, store) = new_scenario(LayerKind::Mobile, 110.0)?;
        let config = Config::new();
        let builder = SampleHistoryBuilder::new(&config);

        // sample at 250 m in the 300-200 m element: ratio = 0.5
        let mut sample = bound_sample(250.0, &store);
        builder.compute_solid_thickness_sample_to_lower_node(&mut sample, basin.formation(0), store.history(0).unwrap());
        builder.build_history(&mut sample, basin.formation(0), store.history(0).unwrap());
        for (point, temp_bottom) in sample.history().iter().zip([40.0, 60.0, 80.0]) {
            assert_approx_eq!(point.temperature, temp_bottom - 2.5, 1e-14);
        }
        Ok(())
    }
}
