use serde::{Deserialize, Serialize};

/// Defines how the geometry of a stratigraphic layer evolves
///
/// The kind selects the interpolation path used when a sample's position
/// within the layer is reconstructed for past timesteps.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum LayerKind {
    /// Standard sedimentary layer whose geometry follows burial compaction
    ///
    /// The position of a sample within the layer is re-derived at every
    /// historical timestep from the compaction equation (solid thickness is
    /// conserved; real thickness shrinks as porosity decreases).
    NonMobile,

    /// Layer whose geometry is prescribed independently of compaction
    ///
    /// Examples: salt or shale bodies moved by diapirism. The node depths of
    /// such layers are not derivable from their solid content, so the
    /// present-day geometric ratio is reused for all historical timesteps.
    Mobile,
}

impl LayerKind {
    /// Returns true for layers whose geometry is prescribed (not compaction-driven)
    #[inline]
    pub fn is_mobile(&self) -> bool {
        *self == LayerKind::Mobile
    }
}

/// Defines the lifecycle phase of a tracked sample
///
/// The phases make the calling order of the tracking pipeline explicit;
/// each transition asserts its predecessor so that sequencing mistakes
/// fail loudly instead of producing silently meaningless histories.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum SamplePhase {
    /// Created from tabular input; no containing formation found yet
    Unbound = 0,

    /// Bound to a formation; bracketing nodes may be (re-)derived
    Bound = 1,

    /// The (time, temperature) history has been built for the current pass
    HistoryBuilt = 2,

    /// The kinetic model has consumed the history of the current pass
    KineticsDriven = 3,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
