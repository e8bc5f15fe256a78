//! Application-wide constants
//!
//! Fixed values shared by the permutation rules, the output path
//! derivation and the ambient configuration.

/// Application name, used for the config directory and the log target
pub const APP_NAME: &str = "userpermutation";

/// Appended to the input file stem to build the output file name
/// (`users.txt` -> `users_permutation.txt`)
pub const OUTPUT_STEM_SUFFIX: &str = "_permutation";

/// Number of candidates produced for every name record
pub const PERMUTATIONS_PER_NAME: usize = 6;

/// Logging defaults
pub mod logging {
    /// Level used for the crate target when nothing else is configured
    pub const DEFAULT_LEVEL: &str = "warn";

    /// Level used when `--debug` is given
    pub const DEBUG_LEVEL: &str = "debug";

    /// Accepted values for `log_level` in the config file
    pub const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

    /// File name used when a configured log path has no file component
    pub const DEFAULT_LOG_FILE_NAME: &str = "userpermutation.log";
}
