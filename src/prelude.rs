//! Makes available common structures needed to run a simulation
//!
//! You may write `use bpsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, LayerKind, SamplePhase, DEFAULT_OUT_DIR, KELVIN_AT_ZERO_CELSIUS, SECONDS_PER_MA};
pub use crate::base::{ParamAnnealing, ParamPorosity, ParamSample, SampleParams};
pub use crate::geometry::{Basin, Column, Formation};
pub use crate::material::{FissionTrackAnnealing, KineticModel, Porosity};
pub use crate::tracking::{Sample, SampleTracker};
