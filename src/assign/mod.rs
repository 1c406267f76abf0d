//! Module `assign` implements the variable universe and the rollback
//! trail: every assignment made while a decision is active is recorded in
//! that decision's reset set, so a conflict can be undone exactly.

/// unit propagation
mod propagate;
/// main struct AssignStack
mod stack;

pub use self::{propagate::PropagateIF, stack::AssignStack};

use crate::types::*;

/// API for the variable universe like [`assign`](`crate::assign::AssignIF::assign`),
/// [`var`](`crate::assign::AssignIF::var`), [`model`](`crate::assign::AssignIF::model`)
/// and so on.
pub trait AssignIF {
    /// return the assignment of var `vi`.
    fn assign(&self, vi: VarId) -> Option<bool>;
    /// return a reference to var `vi`.
    fn var(&self, vi: VarId) -> &Var;
    /// return the number of vars.
    fn num_vars(&self) -> usize;
    /// return the number of open decisions.
    fn decision_level(&self) -> usize;
    /// return true if any var is still unassigned.
    fn remains(&self) -> bool;
    /// return the assigned vars' name-to-value mapping.
    fn model(&self) -> Model;
    /// return the values of all vars in insertion order.
    fn var_assignments(&self) -> Vec<Option<bool>>;
}
