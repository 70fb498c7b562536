//! Implements the stratigraphic geometry consumed by the sample-tracking core

mod basin;
mod column;
mod formation;
mod piecewise_linear;
pub use crate::geometry::basin::*;
pub use crate::geometry::column::*;
pub use crate::geometry::formation::*;
pub use crate::geometry::piecewise_linear::*;
