use crate::base::{ParamSample, SamplePhase};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds one interpolated point of a sample's thermal history
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct HistoryPoint {
    /// Geological age in Ma (0 = present day)
    pub time: f64,

    /// Temperature in ℃
    pub temperature: f64,
}

/// Represents one physical rock specimen with a fixed present-day depth
///
/// A sample starts unbound, is bound once to the formation containing its
/// depth, receives its thermal history from the recorded layer histories, and
/// finally drives a kinetic model. The phases are enforced with assertions so
/// that out-of-order calls fail loudly instead of producing garbage:
///
/// ```text
/// Unbound → Bound → HistoryBuilt → KineticsDriven
///             ↑__________↓_______________↓   (clear_history)
/// ```
pub struct Sample {
    id: String,
    depth: f64, // present-day true-vertical depth in m
    phase: SamplePhase,

    // binding state (valid from phase Bound onward)
    formation_id: Option<usize>,
    formation_name: String,
    lower_node: usize,
    upper_node: usize,
    lower_node_depth: f64,
    upper_node_depth: f64,
    solid_thickness_to_lower_node: f64,

    // accumulated thermal history, oldest first
    history: Vec<HistoryPoint>,
}

impl Sample {
    /// Allocates a new (unbound) instance
    pub fn new(param: &ParamSample) -> Result<Self, StrError> {
        if param.depth < 0.0 {
            return Err("sample depth must be ≥ 0");
        }
        Ok(Sample {
            id: param.id.clone(),
            depth: param.depth,
            phase: SamplePhase::Unbound,
            formation_id: None,
            formation_name: String::new(),
            lower_node: 0,
            upper_node: 1,
            lower_node_depth: 0.0,
            upper_node_depth: 0.0,
            solid_thickness_to_lower_node: 0.0,
            history: Vec::new(),
        })
    }

    /// Returns the sample identifier
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the present-day depth in m
    #[inline]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Returns the current lifecycle phase
    #[inline]
    pub fn phase(&self) -> SamplePhase {
        self.phase
    }

    /// Returns the id of the formation containing this sample, if bound
    #[inline]
    pub fn formation_id(&self) -> Option<usize> {
        self.formation_id
    }

    /// Returns the name of the formation containing this sample (empty if unbound)
    #[inline]
    pub fn formation_name(&self) -> &str {
        &self.formation_name
    }

    /// Returns the index of the lower (deeper) bracketing node
    #[inline]
    pub fn lower_node(&self) -> usize {
        self.lower_node
    }

    /// Returns the index of the upper (shallower) bracketing node
    #[inline]
    pub fn upper_node(&self) -> usize {
        self.upper_node
    }

    /// Returns the present-day depth of the lower bracketing node in m
    #[inline]
    pub fn lower_node_depth(&self) -> f64 {
        self.lower_node_depth
    }

    /// Returns the present-day depth of the upper bracketing node in m
    #[inline]
    pub fn upper_node_depth(&self) -> f64 {
        self.upper_node_depth
    }

    /// Returns the solid thickness between the lower node and the sample in m
    #[inline]
    pub fn solid_thickness_to_lower_node(&self) -> f64 {
        self.solid_thickness_to_lower_node
    }

    /// Returns the accumulated thermal history, oldest point first
    #[inline]
    pub fn history(&self) -> &[HistoryPoint] {
        &self.history
    }

    /// Binds this sample to its containing formation
    ///
    /// # Panics
    ///
    /// This function panics if the sample is already bound.
    pub fn bind(&mut self, formation_id: usize, formation_name: &str) {
        assert!(self.phase == SamplePhase::Unbound, "sample is already bound to a formation");
        self.formation_id = Some(formation_id);
        self.formation_name = formation_name.to_string();
        self.phase = SamplePhase::Bound;
    }

    /// Stores the bracketing node pair and its present-day depths
    ///
    /// # Panics
    ///
    /// This function panics if the sample is unbound or if the nodes are not
    /// an adjacent (lower, lower+1) pair.
    pub fn set_nodes(&mut self, lower_node: usize, upper_node: usize, lower_node_depth: f64, upper_node_depth: f64) {
        assert!(self.phase != SamplePhase::Unbound, "sample must be bound before setting nodes");
        assert!(lower_node + 1 == upper_node, "bracketing nodes must be adjacent");
        self.lower_node = lower_node;
        self.upper_node = upper_node;
        self.lower_node_depth = lower_node_depth;
        self.upper_node_depth = upper_node_depth;
    }

    /// Stores the solid thickness between the lower node and the sample
    ///
    /// # Panics
    ///
    /// This function panics if the sample is unbound.
    pub fn set_solid_thickness_to_lower_node(&mut self, value: f64) {
        assert!(self.phase != SamplePhase::Unbound, "sample must be bound before setting solid thickness");
        self.solid_thickness_to_lower_node = value;
    }

    /// Appends one interpolated point to the thermal history
    ///
    /// # Panics
    ///
    /// This function panics unless the sample is in the Bound phase.
    pub fn append_history(&mut self, time: f64, temperature: f64) {
        assert!(self.phase == SamplePhase::Bound, "history can only be appended to a bound sample");
        self.history.push(HistoryPoint { time, temperature });
    }

    /// Marks the thermal history as complete
    ///
    /// # Panics
    ///
    /// This function panics unless the sample is in the Bound phase.
    pub fn mark_history_built(&mut self) {
        assert!(self.phase == SamplePhase::Bound, "history can only be built once per pass");
        self.phase = SamplePhase::HistoryBuilt;
    }

    /// Marks the kinetic model as driven to completion
    ///
    /// # Panics
    ///
    /// This function panics unless the history has been built.
    pub fn mark_kinetics_driven(&mut self) {
        assert!(
            self.phase == SamplePhase::HistoryBuilt,
            "kinetics can only be driven after the history is built"
        );
        self.phase = SamplePhase::KineticsDriven;
    }

    /// Clears the thermal history, returning a bound sample to the Bound phase
    ///
    /// The formation binding and node bracket are retained. Unbound samples
    /// stay unbound.
    pub fn clear_history(&mut self) {
        self.history.clear();
        if self.phase != SamplePhase::Unbound {
            self.phase = SamplePhase::Bound;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
