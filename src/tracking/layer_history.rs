use crate::geometry::Basin;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holds the recorded time series of one stratigraphic formation
///
/// One row is appended per recorded simulation timestep to each of five
/// parallel arrays sampling the nodal fields of the formation's
/// representative column. Rows are ordered chronologically (decreasing
/// geological age) and, within a row, nodes go bottom-to-top: index 0 is the
/// deepest node and the row length equals the number of active elements at
/// that timestep plus one.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LayerHistory {
    /// Id of the formation this history belongs to
    ///
    /// **(readonly)**
    pub formation_id: usize,

    /// Geological age of each recorded timestep (Ma, strictly decreasing)
    pub reference_times: Vec<f64>,

    /// Depth at each node (m, positive downward) per timestep
    pub depth: Vec<Vec<f64>>,

    /// Temperature at each node (℃) per timestep
    pub temperature: Vec<Vec<f64>>,

    /// Vertical effective stress at each node (Pa) per timestep
    pub ves: Vec<Vec<f64>>,

    /// Maximum vertical effective stress at each node (Pa) per timestep
    pub max_ves: Vec<Vec<f64>>,

    /// Chemical-compaction fraction at each node per timestep
    pub chemical_compaction: Vec<Vec<f64>>,
}

impl LayerHistory {
    /// Allocates a new (empty) instance bound to a formation
    pub fn new(formation_id: usize) -> Self {
        LayerHistory {
            formation_id,
            reference_times: Vec::new(),
            depth: Vec::new(),
            temperature: Vec::new(),
            ves: Vec::new(),
            max_ves: Vec::new(),
            chemical_compaction: Vec::new(),
        }
    }

    /// Returns the number of recorded timesteps
    #[inline]
    pub fn n_timesteps(&self) -> usize {
        self.reference_times.len()
    }

    /// Empties all five series and the reference times, keeping the binding
    pub fn reset(&mut self) {
        self.reference_times.clear();
        self.depth.clear();
        self.temperature.clear();
        self.ves.clear();
        self.max_ves.clear();
        self.chemical_compaction.clear();
    }
}

/// Holds the layer histories of all formations referenced by bound samples
///
/// The store is populated lazily: a formation gets a [LayerHistory] the first
/// time a sample binds to it, and only those formations are sampled by
/// [LayerHistoryStore::record]. Recording must happen once per simulation
/// timestep, in strictly decreasing-age order; the store does not verify the
/// ordering and out-of-order calls yield physically meaningless (not
/// crashing) downstream interpolation.
pub struct LayerHistoryStore {
    histories: HashMap<usize, LayerHistory>,
}

impl LayerHistoryStore {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        LayerHistoryStore {
            histories: HashMap::new(),
        }
    }

    /// Creates the history of a formation unless it exists already
    pub fn ensure_layer(&mut self, formation_id: usize) {
        self.histories
            .entry(formation_id)
            .or_insert_with(|| LayerHistory::new(formation_id));
    }

    /// Returns the number of tracked formations
    #[inline]
    pub fn n_layers(&self) -> usize {
        self.histories.len()
    }

    /// Returns an access to the history of a formation, if tracked
    #[inline]
    pub fn history(&self, formation_id: usize) -> Option<&LayerHistory> {
        self.histories.get(&formation_id)
    }

    /// Appends one row to the history of every tracked formation
    ///
    /// For each tracked formation, samples the current nodal arrays of its
    /// representative column. Two cases skip the append:
    ///
    /// * a mobile formation whose depositing (top) element has zero solid
    ///   thickness at `time` has not received any sediment yet in its current
    ///   instance; its entire history is discarded so that stale
    ///   pre-deposition rows cannot leak into later interpolation;
    /// * a formation whose column has no active element yet (fewer than two
    ///   current nodes) has nothing to sample.
    ///
    /// # Input
    ///
    /// * `time` -- geological age of the timestep (Ma); calls must come in
    ///   strictly decreasing order, once per timestep
    pub fn record(&mut self, time: f64, basin: &Basin) {
        for history in self.histories.values_mut() {
            let formation = basin.formation(history.formation_id);
            let column = &formation.column;
            if formation.is_mobile() {
                let depositing = column.max_elements() - 1;
                if column.solid_thickness(depositing, time) == 0.0 {
                    history.reset();
                    continue;
                }
            }
            if column.node_depth.len() < 2 {
                continue;
            }
            history.reference_times.push(time);
            history.depth.push(column.node_depth.clone());
            history.temperature.push(column.node_temperature.clone());
            history.ves.push(column.node_ves.clone());
            history.max_ves.push(column.node_max_ves.clone());
            history.chemical_compaction.push(column.node_chemical_compaction.clone());
        }
    }

    /// Empties the time series of every tracked formation
    ///
    /// The formation bindings are retained so that a new calibration pass can
    /// re-record without re-binding the samples.
    pub fn clear(&mut self) {
        for history in self.histories.values_mut() {
            history.reset();
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{LayerHistory, LayerHistoryStore};
    use crate::base::{LayerKind, SampleParams};
    use crate::geometry::Basin;
    use crate::StrError;

    fn new_basin() -> Result<Basin, StrError> {
        let mut basin = Basin::new(100.0)?;
        let shale = basin.add_formation("Lista", LayerKind::NonMobile, &SampleParams::param_standard_shale(), 2)?;
        let salt = basin.add_formation("Zechstein", LayerKind::Mobile, &SampleParams::param_mobile_salt(), 2)?;
        for id in [shale, salt] {
            let column = &mut basin.formation_mut(id).column;
            column
                .add_solid_thickness_point(0, 100.0, 0.0)?
                .add_solid_thickness_point(0, 80.0, 40.0)?;
            // the depositing (top) element holds solid during 100-75 Ma, is
            // emptied until 60 Ma, and redeposits from 55 Ma onward
            column
                .add_solid_thickness_point(1, 110.0, 0.0)?
                .add_solid_thickness_point(1, 100.0, 40.0)?
                .add_solid_thickness_point(1, 80.0, 40.0)?
                .add_solid_thickness_point(1, 75.0, 0.0)?
                .add_solid_thickness_point(1, 60.0, 0.0)?
                .add_solid_thickness_point(1, 55.0, 40.0)?;
            column.set_state(
                vec![300.0, 200.0, 100.0],
                vec![30.0, 25.0, 20.0],
                vec![3.0e6, 2.0e6, 1.0e6],
                vec![3.0e6, 2.0e6, 1.0e6],
                vec![0.0, 0.0, 0.0],
            )?;
        }
        Ok(basin)
    }

    #[test]
    fn new_works() {
        let history = LayerHistory::new(7);
        assert_eq!(history.formation_id, 7);
        assert_eq!(history.n_timesteps(), 0);

        let store = LayerHistoryStore::new();
        assert_eq!(store.n_layers(), 0);
        assert!(store.history(0).is_none());
    }

    #[test]
    fn record_tracks_only_ensured_layers() -> Result<(), StrError> {
        let basin = new_basin()?;
        let mut store = LayerHistoryStore::new();
        store.ensure_layer(0);
        store.ensure_layer(0); // idempotent
        assert_eq!(store.n_layers(), 1);

        store.record(50.0, &basin);
        store.record(0.0, &basin);
        let history = store.history(0).unwrap();
        assert_eq!(history.n_timesteps(), 2);
        assert_eq!(history.reference_times, &[50.0, 0.0]);
        assert_eq!(history.depth[0], &[300.0, 200.0, 100.0]);
        assert_eq!(history.temperature[1], &[30.0, 25.0, 20.0]);
        assert_eq!(history.ves[0].len(), 3);
        assert_eq!(history.max_ves[0].len(), 3);
        assert_eq!(history.chemical_compaction[0].len(), 3);
        assert!(store.history(1).is_none()); // never ensured
        Ok(())
    }

    #[test]
    fn mobile_layer_resets_before_deposition() -> Result<(), StrError> {
        let basin = new_basin()?;
        let mut store = LayerHistoryStore::new();
        store.ensure_layer(1); // the mobile salt

        // two rows while the depositing element holds sediment
        store.record(90.0, &basin);
        store.record(85.0, &basin);
        assert_eq!(store.history(1).unwrap().n_timesteps(), 2);

        // zero solid thickness at the depositing element discards everything
        store.record(70.0, &basin);
        let history = store.history(1).unwrap();
        assert_eq!(history.n_timesteps(), 0);
        assert_eq!(history.depth.len(), 0);
        assert_eq!(history.temperature.len(), 0);
        assert_eq!(history.ves.len(), 0);
        assert_eq!(history.max_ves.len(), 0);
        assert_eq!(history.chemical_compaction.len(), 0);

        // the next successful record starts a fresh single-row history
        store.record(50.0, &basin);
        assert_eq!(store.history(1).unwrap().n_timesteps(), 1);
        assert_eq!(store.history(1).unwrap().reference_times, &[50.0]);
        Ok(())
    }

    #[test]
    fn clear_keeps_bindings() -> Result<(), StrError> {
        let basin = new_basin()?;
        let mut store = LayerHistoryStore::new();
        store.ensure_layer(0);
        store.record(50.0, &basin);
        store.clear();
        assert_eq!(store.n_layers(), 1);
        assert_eq!(store.history(0).unwrap().n_timesteps(), 0);
        store.record(40.0, &basin);
        assert_eq!(store.history(0).unwrap().n_timesteps(), 1);
        Ok(())
    }
}
