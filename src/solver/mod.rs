//! Module `solver` provides the top-level API as a SAT solver.
/// API to instantiate
mod build;
/// DPLL search engine
mod search;
/// Module `validate` implements a model checker.
mod validate;

pub use self::{build::SatSolverIF, search::SolveIF, validate::ValidateIF};

use {
    crate::{assign::AssignStack, cdb::ClauseDB, state::State, types::*},
    std::fmt,
};

/// Normal results returned by Solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Certificate {
    /// It is satisfiable; holds the assigned vars' name-to-value mapping.
    SAT(Model),
    /// It is unsatisfiable.
    UNSAT,
}

/// The return type of `Solver::solve`.
/// This captures the following three cases:
/// * `Certificate::SAT` -- solved with a satisfiable assignment set,
/// * `Certificate::UNSAT` -- proved that it's an unsatisfiable problem, and
/// * `SolverError::*` -- caused by a bug
pub type SolverResult = Result<Certificate, SolverError>;

/// Steps of the search loop, reported to
/// [`State`](`crate::state::State`) for counting and tracing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverEvent {
    /// a var was forced by a unit clause.
    Propagate(Lit),
    /// the active sequence was rebuilt; holds whether any clause shrank.
    Simplify(bool),
    /// branching on a literal.
    Decide(Lit),
    /// a decision was flipped and its frame rolled back.
    Backtrack(Lit),
    /// an empty clause appeared.
    Conflict,
    /// terminal: all clauses are satisfied.
    Satisfied,
    /// terminal: the decision stack is exhausted.
    Exhausted,
}

/// The SAT solver object consisting of 3 sub modules.
/// ```
/// use crate::dplr::*;
/// use std::path::Path;
///
/// let mut s = Solver::try_from(Path::new("cnfs/uf6.cnf")).expect("can't load");
/// if let Ok(Certificate::SAT(model)) = s.solve() {
///     assert!(model.len() <= 6);
/// } else {
///     panic!("It should be satisfied!");
/// }
/// assert_eq!(
///     Solver::try_from(Path::new("cnfs/unsat.cnf")).expect("can't load").solve(),
///     Ok(Certificate::UNSAT),
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    /// assignment management
    pub asg: AssignStack,
    /// clause container
    pub cdb: ClauseDB,
    /// misc data holder
    pub state: State,
}

impl Instantiate for Solver {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Solver {
        Solver {
            asg: AssignStack::instantiate(config, cnf),
            cdb: ClauseDB::instantiate(config, cnf),
            state: State::instantiate(config, cnf),
        }
    }
}

impl fmt::Display for Solver {
    /// The committed rendering: the active clause sequence as a bracketed
    /// list of bracketed clauses, negative literals `-`-prefixed.
    ///
    /// ```
    /// use crate::dplr::*;
    ///
    /// let s = Solver::from_list(
    ///     &Config::default(),
    ///     &[vec!["a", "b", "-c"], vec!["-b", "c"], vec!["-a"], vec!["b"]],
    /// ).expect("invalid token");
    /// assert_eq!(s.to_string(), "[[a, b, -c], [-b, c], [-a], [b]]");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cdb.render(&self.asg))
    }
}

/// Example
/// ```
/// use crate::dplr::*;
///
/// let v: Vec<Vec<i32>> = vec![];
/// assert!(matches!(
///     Certificate::try_from(v),
///     Ok(Certificate::SAT(_))
/// ));
/// assert!(matches!(
///     Certificate::try_from(vec![vec![0_i32]]),
///     Err(SolverError::InvalidLiteral)
/// ));
/// ```
impl<V: AsRef<[i32]>> TryFrom<Vec<V>> for Certificate {
    type Error = SolverError;
    fn try_from(vec: Vec<V>) -> SolverResult {
        Solver::try_from((Config::default(), vec.as_ref())).and_then(|mut s| s.solve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! sat {
        ($vec: expr, $should_be: pat) => {
            let result = Certificate::try_from($vec);
            assert!(matches!(result, $should_be), "{result:?}");
        };
    }

    #[test]
    fn test_on_memory_solving() {
        let v0: Vec<Vec<i32>> = vec![];
        sat!(v0, Ok(Certificate::SAT(_)));
        let v1: Vec<Vec<i32>> = vec![vec![]];
        sat!(v1, Ok(Certificate::UNSAT));
        sat!(vec![vec![1i32]], Ok(Certificate::SAT(_)));
        sat!(vec![vec![1i32], vec![-1]], Ok(Certificate::UNSAT));
        sat!(
            vec![vec![1i32, 2], vec![-1, 3], vec![1, -3], vec![-1, 2]],
            Ok(Certificate::SAT(_))
        );
        sat!(
            vec![
                vec![1i32, 2],
                vec![-1, 3],
                vec![1, -3],
                vec![-1, -2],
                vec![-2, -3]
            ],
            Ok(Certificate::SAT(_))
        );
        sat!(
            vec![
                vec![1i32, 2],
                vec![-1, 3],
                vec![-1, -3],
                vec![-1, -2],
                vec![1, -2]
            ],
            Ok(Certificate::UNSAT)
        );

        // auto conversion via `as_ref`
        let (v1, v2, v3, v4, v5) = (
            vec![1i32, 2],
            vec![-1i32, 3],
            vec![1i32, -3],
            vec![-1i32, 2],
            vec![-3i32],
        );
        sat!(vec![&v1, &v2, &v3, &v4, &v5], Ok(Certificate::SAT(_)));
    }

    #[test]
    fn test_an_empty_clause_wins_over_everything() {
        sat!(
            vec![vec![1i32, 2], vec![], vec![-1]],
            Ok(Certificate::UNSAT)
        );
    }
}
