//! Module `cdb` provides the clause store: the active, shrinking clause
//! sequence plus the pristine original sequence kept for model checking.
use {
    crate::{
        assign::{AssignIF, AssignStack},
        types::*,
    },
    std::slice::Iter,
};

/// API for the clause store.
pub trait ClauseDBIF {
    /// true iff the active sequence is empty: every clause was satisfied.
    fn is_fully_satisfied(&self) -> bool;
    /// true iff some active clause is empty: a conflict under the current
    /// partial assignment.
    fn has_conflict(&self) -> bool;
    /// rebuild the active sequence: drop clauses containing a true literal
    /// and strip false literals from the survivors; a clause reduced to
    /// nothing stays as the conflict marker. Returns whether any clause
    /// shrank; dropped clauses alone do not count as a change.
    fn simplify(&mut self, asg: &AssignStack) -> bool;
    /// evaluate the original, unshrunk sequence under the current
    /// assignment; independent of everything `simplify` did.
    fn full_evaluation(&self, asg: &AssignStack) -> bool;
    /// iterate the active sequence.
    fn iter(&self) -> Iter<'_, Clause>;
    /// clone the active sequence for a decision frame.
    fn snapshot(&self) -> Vec<Clause>;
    /// adopt a frame's snapshot as the active sequence.
    fn restore(&mut self, snapshot: Vec<Clause>);
    /// the first literal of the first active clause: the branching
    /// heuristic's pick.
    fn first_free_literal(&self) -> Option<Lit>;
}

/// Clause database.
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    /// the active clause sequence, replaced wholesale by `simplify`
    clauses: Vec<Clause>,
    /// the sequence as given, kept for `full_evaluation`
    original: Vec<Clause>,
}

impl Instantiate for ClauseDB {
    fn instantiate(_conf: &Config, _cnf: &CNFDescription) -> Self {
        ClauseDB::default()
    }
}

impl ClauseDBIF for ClauseDB {
    fn is_fully_satisfied(&self) -> bool {
        self.clauses.is_empty()
    }
    fn has_conflict(&self) -> bool {
        self.clauses.iter().any(|c| c.is_empty())
    }
    fn simplify(&mut self, asg: &AssignStack) -> bool {
        let mut changed = false;
        let mut next = Vec::with_capacity(self.clauses.len());
        for mut c in std::mem::take(&mut self.clauses) {
            if c.is_satisfied(asg) {
                continue;
            }
            let len = c.len();
            c.lits.retain(|l| asg.assign(l.vi).is_none());
            if c.len() != len {
                changed = true;
            }
            next.push(c);
        }
        self.clauses = next;
        changed
    }
    fn full_evaluation(&self, asg: &AssignStack) -> bool {
        self.original.iter().all(|c| c.is_satisfied(asg))
    }
    fn iter(&self) -> Iter<'_, Clause> {
        self.clauses.iter()
    }
    fn snapshot(&self) -> Vec<Clause> {
        self.clauses.clone()
    }
    fn restore(&mut self, snapshot: Vec<Clause>) {
        self.clauses = snapshot;
    }
    fn first_free_literal(&self) -> Option<Lit> {
        self.clauses.first().and_then(|c| c.iter().next().copied())
    }
}

impl ClauseDB {
    /// append a clause to both the original and the active sequences.
    pub(crate) fn push(&mut self, c: Clause) {
        self.original.push(c.clone());
        self.clauses.push(c);
    }
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }
    /// iterate the sequence as given.
    pub fn original_iter(&self) -> Iter<'_, Clause> {
        self.original.iter()
    }
    /// render the active sequence as `[[a, -b], [c], ...]`.
    pub fn render(&self, asg: &AssignStack) -> String {
        format!(
            "[{}]",
            self.clauses
                .iter()
                .map(|c| c.render(asg))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
