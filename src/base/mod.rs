//! Implements the base structures for a sample-tracking simulation

mod config;
mod constants;
mod enums;
mod parameters;
mod sample_params;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
