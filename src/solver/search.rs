//! DPLL search engine: the propagate/simplify fixpoint plus the
//! decide/backtrack controller.
use {
    super::{Certificate, Solver, SolverEvent, SolverResult},
    crate::{
        assign::{AssignIF, PropagateIF},
        cdb::ClauseDBIF,
        state::StateIF,
        types::*,
    },
};

/// API for solving like [`solve`](`crate::solver::SolveIF::solve`).
pub trait SolveIF {
    /// search a satisfying assignment.
    ///
    /// A solver instance is single-use: solving destructively transforms
    /// the active clause sequence (to empty on SAT, to a conflict marker
    /// on UNSAT), so calling `solve` again on the same instance is not
    /// guaranteed to reproduce the original answer. Build a fresh instance
    /// for every question.
    ///
    /// # Errors
    ///
    /// * `SolverError::SolverBug` if a search invariant breaks; this is a
    ///   defect report, never a satisfiability verdict.
    ///
    /// # Example
    ///
    /// ```
    /// use crate::dplr::*;
    /// use std::path::Path;
    ///
    /// let mut s = Solver::try_from(Path::new("cnfs/uf6.cnf")).expect("can't load");
    /// let res = s.solve();
    /// assert!(res.is_ok());
    /// assert_ne!(res.unwrap(), Certificate::UNSAT);
    /// ```
    fn solve(&mut self) -> SolverResult;
    /// return true iff a satisfying assignment exists. Single-use, like
    /// `solve`.
    fn has_solution(&mut self) -> bool;
}

impl SolveIF for Solver {
    fn solve(&mut self) -> SolverResult {
        let Solver {
            ref mut asg,
            ref mut cdb,
            ref mut state,
        } = self;
        state.begin(asg, cdb);
        loop {
            //
            //## Propagate/simplify fixpoint
            //
            // Each round forces at most one var, then rebuilds the clause
            // sequence. The round after the last change sees neither a
            // propagation nor a shrink and exits.
            loop {
                let propagated = asg.propagate_unit(cdb);
                if let Some(l) = propagated {
                    state.trace(asg, cdb, SolverEvent::Propagate(l));
                }
                let shrank = cdb.simplify(asg);
                state.trace(asg, cdb, SolverEvent::Simplify(shrank));
                if cdb.has_conflict() || (propagated.is_none() && !shrank) {
                    break;
                }
            }
            //
            //## Terminal check: every clause satisfied
            //
            if cdb.is_fully_satisfied() {
                state.trace(asg, cdb, SolverEvent::Satisfied);
                state.report(asg);
                return Ok(Certificate::SAT(asg.model()));
            }
            //
            //## Terminal check or rollback: an empty clause appeared
            //
            if cdb.has_conflict() {
                state.trace(asg, cdb, SolverEvent::Conflict);
                let Some((snapshot, flipped)) = asg.backtrack() else {
                    state.trace(asg, cdb, SolverEvent::Exhausted);
                    state.report(asg);
                    return Ok(Certificate::UNSAT);
                };
                cdb.restore(snapshot);
                state.trace(asg, cdb, SolverEvent::Backtrack(flipped));
                let shrank = cdb.simplify(asg);
                state.trace(asg, cdb, SolverEvent::Simplify(shrank));
                continue;
            }
            //
            //## Branch
            //
            if asg.remains() {
                // after simplify, active clauses hold only unassigned vars,
                // so the first literal of the first clause is a legal pick
                let Some(lit) = cdb.first_free_literal() else {
                    debug_assert!(false, "free vars left but no clause to branch on");
                    return Err(SolverError::SolverBug);
                };
                debug_assert!(asg.assign(lit.vi).is_none());
                asg.decide(lit, cdb.snapshot());
                state.trace(asg, cdb, SolverEvent::Decide(lit));
                let shrank = cdb.simplify(asg);
                state.trace(asg, cdb, SolverEvent::Simplify(shrank));
                continue;
            }
            // a non-empty sequence without a conflict implies a free var;
            // reaching here means the simplify invariant broke
            debug_assert!(
                false,
                "non-empty clause sequence, no conflict, no free var"
            );
            return Err(SolverError::SolverBug);
        }
    }
    fn has_solution(&mut self) -> bool {
        matches!(self.solve(), Ok(Certificate::SAT(_)))
    }
}
