//! Crate `validate` implements a model checker over the original,
//! unshrunk clause sequence.
use {
    super::Solver,
    crate::types::*,
};

/// API for SAT validator like [`inject_assignment`](`crate::solver::ValidateIF::inject_assignment`),
/// [`validate`](`crate::solver::ValidateIF::validate`) and so on.
pub trait ValidateIF {
    /// load an assignment set into the solver.
    ///
    /// # Errors
    ///
    /// * `SolverError::Inconsistent` if it names an unknown variable or
    ///   contradicts an assignment already made.
    fn inject_assignment(&mut self, model: &Model) -> MaybeInconsistent;
    /// return the first original clause that the current assignment does
    /// not satisfy, rendered literal by literal; `None` means the
    /// assignment is a model of the problem.
    fn validate(&self) -> Option<Vec<String>>;
}

impl ValidateIF for Solver {
    /// # Example
    ///
    /// ```
    /// use crate::dplr::*;
    ///
    /// let mut s = Solver::from_list(
    ///     &Config::default(),
    ///     &[vec!["a", "b"], vec!["-b", "c"]],
    /// ).expect("invalid token");
    /// let model: Model = [("a", true), ("b", false)]
    ///     .iter()
    ///     .map(|(k, v)| (k.to_string(), *v))
    ///     .collect();
    /// assert_eq!(s.inject_assignment(&model), Ok(()));
    /// assert_eq!(s.validate(), None);
    /// ```
    fn inject_assignment(&mut self, model: &Model) -> MaybeInconsistent {
        for (name, value) in model {
            match self.asg.lookup(name) {
                Some(vi) => self.asg.set_value(vi, *value)?,
                None => return Err(SolverError::Inconsistent),
            }
        }
        Ok(())
    }
    fn validate(&self) -> Option<Vec<String>> {
        self.cdb
            .original_iter()
            .find(|c| !c.is_satisfied(&self.asg))
            .map(|c| c.iter().map(|l| l.render(&self.asg)).collect())
    }
}
