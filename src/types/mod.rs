//! Module `types` provides various building blocks, including
//! some common traits.

/// methods on clause
pub mod clause;
/// methods on CNF file
pub mod cnf;
/// methods on literals
pub mod lit;
/// methods on Var
pub mod var;

pub use self::{clause::*, cnf::*, lit::*, var::*};

pub use crate::{config::Config, solver::SolverEvent};

use std::{collections::HashMap, fmt};

/// API for object instantiation based on `Config` and `CNFDescription`.
/// This is implemented by all the solver sub-modules except `Config` and
/// `CNFDescription` themselves.
///
/// # Example
///
/// ```
/// use crate::{dplr::config::Config, dplr::types::*};
/// use dplr::{cdb::ClauseDB, solver::Solver};
/// let _ = ClauseDB::instantiate(&Config::default(), &CNFDescription::default());
/// let _ = Solver::instantiate(&Config::default(), &CNFDescription::default());
///```
pub trait Instantiate {
    /// make and return an object from `Config` and `CNFDescription`.
    fn instantiate(conf: &Config, cnf: &CNFDescription) -> Self;
}

/// A satisfying assignment: the name of every assigned variable mapped to
/// its value. Variables still unassigned when the clause sequence empties
/// are left out.
pub type Model = HashMap<String, bool, ahash::RandomState>;

/// Internal errors.
/// Note: logical unsatisfiability is *not* an error; it is reported as
/// [`Certificate::UNSAT`](`crate::solver::Certificate::UNSAT`).
#[derive(Debug, Eq, PartialEq)]
pub enum SolverError {
    // A clause contains a literal out of the range defined in its header,
    // or '0', or an empty builder token.
    InvalidLiteral,
    // Exceptions caused by file operations
    IOError,
    // An injected assignment contradicts the current one, or names an
    // unknown variable.
    Inconsistent,
    // A broken invariant in the search loop. Never a satisfiability verdict.
    SolverBug,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A Return type used by solver functions.
pub type MaybeInconsistent = Result<(), SolverError>;
