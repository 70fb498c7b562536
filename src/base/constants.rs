/// Defines the number of seconds in one million years (Julian)
pub const SECONDS_PER_MA: f64 = 3.15576e13;

/// Defines the temperature in Kelvin corresponding to 0 ℃
pub const KELVIN_AT_ZERO_CELSIUS: f64 = 273.15;

/// Defines the geological age representing present day (ages count backward in Ma)
pub const PRESENT_DAY: f64 = 0.0;

/// Defines the residual porosity kept by any lithology under full compaction
pub const MINIMUM_POROSITY: f64 = 0.03;

/// Defines the directory where the command-line tools save result files
pub const DEFAULT_OUT_DIR: &str = "/tmp/bpsim/results";
