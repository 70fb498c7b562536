use super::{LayerHistory, LayerHistoryStore, Sample};
use crate::base::{SamplePhase, PRESENT_DAY};
use crate::geometry::Basin;

/// Binds samples to the formations containing their present-day depths
///
/// Binding runs once per model, after the geometry has reached its
/// present-day state. A sample whose depth falls in no formation stays
/// unbound and is silently excluded from history building and kinetic
/// advancement; this is not an error.
pub struct SampleLocator {}

impl SampleLocator {
    /// Binds every still-unbound sample to the formation containing its depth
    ///
    /// Walks the formations from the surface downward, accumulating the real
    /// thickness of every element holding solid content at present day. A
    /// sample is bound to the first formation whose depth interval
    /// `[upper_surface, lower_surface]` contains it, and the formation's
    /// layer history is created in the store so that subsequent recording
    /// covers it.
    pub fn bind(samples: &mut [Sample], basin: &Basin, store: &mut LayerHistoryStore) {
        let mut upper_surface = basin.sea_bottom_depth;
        for formation_id in 0..basin.n_formations() {
            let formation = basin.formation(formation_id);
            let column = &formation.column;
            let mut lower_surface = upper_surface;
            for element in 0..column.n_active_elements() {
                if column.solid_thickness(element, PRESENT_DAY) > 0.0 {
                    lower_surface += column.real_thickness(element);
                }
            }
            for sample in samples.iter_mut() {
                if sample.phase() == SamplePhase::Unbound
                    && sample.depth() >= upper_surface
                    && sample.depth() <= lower_surface
                {
                    sample.bind(formation_id, &formation.name);
                    store.ensure_layer(formation_id);
                }
            }
            upper_surface = lower_surface;
        }
    }

    /// Determines the node pair bracketing a sample in its bound formation
    ///
    /// Uses the depth array of the most recent recorded timestep. Within the
    /// row, index 0 is the deepest node and depths decrease with the index.
    /// A sample deeper than the deepest node clamps to the bottom element
    /// `(0, 1)`; one shallower than the shallowest node clamps to the top
    /// element `(n-2, n-1)`; otherwise the scan walks from the top node
    /// downward and stops at the first containing pair. The clamps tolerate
    /// small mismatches between the fixed sample depth and the continuously
    /// deforming mesh; out-of-range depths never fail.
    ///
    /// The bracket and its present-day node depths are stored on the sample.
    ///
    /// # Panics
    ///
    /// This function panics if the sample is unbound, if no timestep has been
    /// recorded yet, or if the latest row has fewer than two nodes.
    pub fn determine_upper_and_lower_node(sample: &mut Sample, history: &LayerHistory) {
        assert!(sample.phase() != SamplePhase::Unbound, "sample must be bound before locating nodes");
        assert!(history.n_timesteps() > 0, "at least one timestep must be recorded before locating nodes");
        let row = &history.depth[history.n_timesteps() - 1];
        let n = row.len();
        assert!(n >= 2, "the latest recorded row must have at least two nodes");
        let depth = sample.depth();
        let (lower, upper) = if depth >= row[0] {
            (0, 1)
        } else if depth <= row[n - 1] {
            (n - 2, n - 1)
        } else {
            let mut pair = (n - 2, n - 1);
            for i_node in (1..n).rev() {
                if row[i_node] <= depth && depth <= row[i_node - 1] {
                    pair = (i_node - 1, i_node);
                    break;
                }
            }
            pair
        };
        sample.set_nodes(lower, upper, row[lower], row[upper]);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
