//! Implements the sample-tracking core: compaction integration, layer
//! histories, sample binding, history building, and kinetic advancement

mod compaction;
mod history_builder;
mod kinetic_advancer;
mod layer_history;
mod locator;
mod sample;
mod tracker;
pub use crate::tracking::compaction::*;
pub use crate::tracking::history_builder::*;
pub use crate::tracking::kinetic_advancer::*;
pub use crate::tracking::layer_history::*;
pub use crate::tracking::locator::*;
pub use crate::tracking::sample::*;
pub use crate::tracking::tracker::*;
