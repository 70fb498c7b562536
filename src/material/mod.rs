//! Implements material models: porosity laws and kinetic transformation models

mod annealing;
mod kinetics;
mod porosity;
mod porosity_exponential;
mod porosity_soil_mechanics;
pub use crate::material::annealing::*;
pub use crate::material::kinetics::*;
pub use crate::material::porosity::*;
pub use crate::material::porosity_exponential::*;
pub use crate::material::porosity_soil_mechanics::*;
