use super::PiecewiseLinear;
use crate::StrError;

/// Holds the representative vertical column of one stratigraphic layer
///
/// The sample-tracking core operates on a single representative column per
/// layer: lateral variation is resolved by the surrounding simulator and the
/// relevant fields are assumed laterally uniform along this column. The
/// column carries two kinds of data:
///
/// * the solid thickness of every finite element as a function of geological
///   age (set up once from the deposition/erosion schedule), and
/// * the *current* nodal fields (depth, temperature, VES, max-VES, chemical
///   compaction), overwritten by the caller at every simulation timestep and
///   sampled by the layer-history store.
///
/// # Notation
///
/// * Node and element index 0 is the deepest; indices increase upward
/// * `n_active` is the number of elements currently deposited; the current
///   nodal arrays have length `n_active + 1`
/// * Depths are true-vertical, in meters, positive downward; hence the
///   current depth array decreases with the node index
pub struct Column {
    /// Maximum number of elements this layer can hold when fully deposited
    max_elements: usize,

    /// Solid thickness of each element versus geological age (m)
    solid_thickness: Vec<PiecewiseLinear>,

    /// Current depth at each active node (m, positive downward)
    pub node_depth: Vec<f64>,

    /// Current temperature at each active node (℃)
    pub node_temperature: Vec<f64>,

    /// Current vertical effective stress at each active node (Pa)
    pub node_ves: Vec<f64>,

    /// Current maximum vertical effective stress at each active node (Pa)
    pub node_max_ves: Vec<f64>,

    /// Current chemical-compaction fraction at each active node (non-positive)
    pub node_chemical_compaction: Vec<f64>,
}

impl Column {
    /// Allocates a new instance with empty current arrays
    pub fn new(max_elements: usize) -> Result<Self, StrError> {
        if max_elements < 1 {
            return Err("max_elements must be ≥ 1");
        }
        Ok(Column {
            max_elements,
            solid_thickness: vec![PiecewiseLinear::new(); max_elements],
            node_depth: Vec::new(),
            node_temperature: Vec::new(),
            node_ves: Vec::new(),
            node_max_ves: Vec::new(),
            node_chemical_compaction: Vec::new(),
        })
    }

    /// Returns the maximum number of elements of this layer
    #[inline]
    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    /// Returns the number of currently deposited elements
    #[inline]
    pub fn n_active_elements(&self) -> usize {
        self.node_depth.len().saturating_sub(1)
    }

    /// Adds a knot to the solid-thickness function of an element
    ///
    /// The ages may be added in any order; knots are kept sorted internally.
    pub fn add_solid_thickness_point(&mut self, element: usize, age: f64, value: f64) -> Result<&mut Self, StrError> {
        if element >= self.max_elements {
            return Err("element index is out of range");
        }
        self.solid_thickness[element].add_point(age, value);
        Ok(self)
    }

    /// Returns the solid thickness of an element at a given geological age (m)
    ///
    /// # Panics
    ///
    /// A panic will occur if `element ≥ max_elements`.
    #[inline]
    pub fn solid_thickness(&self, element: usize, age: f64) -> f64 {
        self.solid_thickness[element].eval(age)
    }

    /// Returns the current real (physical) thickness of an element (m)
    ///
    /// # Panics
    ///
    /// A panic will occur if the element is not active in the current state.
    #[inline]
    pub fn real_thickness(&self, element: usize) -> f64 {
        self.node_depth[element] - self.node_depth[element + 1]
    }

    /// Overwrites the current nodal arrays with the state of one timestep
    ///
    /// All arrays must have the same length (number of active elements + 1),
    /// at most `max_elements + 1`.
    pub fn set_state(
        &mut self,
        depth: Vec<f64>,
        temperature: Vec<f64>,
        ves: Vec<f64>,
        max_ves: Vec<f64>,
        chemical_compaction: Vec<f64>,
    ) -> Result<(), StrError> {
        let n = depth.len();
        if temperature.len() != n || ves.len() != n || max_ves.len() != n || chemical_compaction.len() != n {
            return Err("all nodal arrays must have the same length");
        }
        if n > self.max_elements + 1 {
            return Err("the number of nodes exceeds max_elements + 1");
        }
        self.node_depth = depth;
        self.node_temperature = temperature;
        self.node_ves = ves;
        self.node_max_ves = max_ves;
        self.node_chemical_compaction = chemical_compaction;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
