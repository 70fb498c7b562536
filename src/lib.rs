//! bpsim - Basin and petroleum-system thermal-history simulation
//!
//! This crate implements the sample-tracking and forward-geochemical-kinetics
//! subsystem of a basin simulator: it follows physical rock samples through a
//! time-evolving, compacting stratigraphic column, interpolates temperature
//! histories onto the (moving) sample locations using compaction-consistent
//! integration, and drives incremental transformation-kinetics models (e.g.
//! fission-track annealing) with the resulting time-temperature paths.
//!
//! The main modules are:
//!
//! * [`base`] -- configuration, constants, enums, and parameter sets
//! * [`geometry`] -- representative columns, formations, and the basin registry
//! * [`material`] -- porosity laws and transformation-kinetics models
//! * [`tracking`] -- the sample-tracking core: compaction integration, layer
//!   histories, sample binding, history building, and kinetic advancement

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod geometry;
pub mod material;
pub mod prelude;
pub mod tracking;
