use super::{KELVIN_AT_ZERO_CELSIUS, SECONDS_PER_MA};
use crate::StrError;
use std::fmt;

/// Holds configuration data for the sample-tracking pipeline
///
/// This struct replaces the global parameters singleton of earlier designs:
/// the unit-conversion constants and fidelity settings are visible in every
/// constructor that needs them and are trivially overridable in tests.
pub struct Config {
    /// Global optimisation level controlling the integration fidelity
    ///
    /// Valid range: `1 ≤ optimisation_level ≤ 5`. Lower levels map to fewer
    /// sub-steps of the compaction equation (see
    /// [crate::tracking::n_steps_compaction_equation]).
    pub optimisation_level: usize,

    /// Enables the chemical-compaction term in porosity evaluations
    pub include_chemical_compaction: bool,

    /// Number of seconds in one million years
    pub seconds_per_ma: f64,

    /// Temperature in Kelvin corresponding to 0 ℃
    pub kelvin_at_zero_celsius: f64,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            optimisation_level: 3,
            include_chemical_compaction: false,
            seconds_per_ma: SECONDS_PER_MA,
            kelvin_at_zero_celsius: KELVIN_AT_ZERO_CELSIUS,
        }
    }

    /// Sets the global optimisation level
    pub fn set_optimisation_level(&mut self, level: usize) -> Result<&mut Self, StrError> {
        if level < 1 || level > 5 {
            return Err("optimisation level must be in 1 ≤ level ≤ 5");
        }
        self.optimisation_level = level;
        Ok(self)
    }

    /// Sets whether porosity evaluations include the chemical-compaction term
    pub fn set_include_chemical_compaction(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.include_chemical_compaction = flag;
        Ok(self)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "optimisation_level = {:?}\n", self.optimisation_level).unwrap();
        write!(f, "include_chemical_compaction = {:?}\n", self.include_chemical_compaction).unwrap();
        write!(f, "seconds_per_ma = {:?}\n", self.seconds_per_ma).unwrap();
        write!(f, "kelvin_at_zero_celsius = {:?}\n", self.kelvin_at_zero_celsius).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
