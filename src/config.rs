//! Module `config` provides the solver's configuration.
use std::path::PathBuf;

/// Configuration built from command line options
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// CNF file in DIMACS format
    pub cnf_file: PathBuf,

    /// Disable the summary line printed after solving
    pub quiet_mode: bool,

    /// Dump a trace of propagation, simplification, decisions and
    /// backtracking. All tracing hangs off this one switch.
    pub verbose: bool,
}

impl<T: AsRef<str>> From<T> for Config {
    fn from(path: T) -> Config {
        Config {
            cnf_file: PathBuf::from(path.as_ref()),
            ..Config::default()
        }
    }
}
