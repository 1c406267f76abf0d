/// main struct AssignStack
use {
    super::AssignIF,
    crate::types::*,
    std::{
        collections::{HashMap, HashSet},
        slice::Iter,
    },
};

type NameMap = HashMap<String, VarId, ahash::RandomState>;
type ResetSet = HashSet<VarId, ahash::RandomState>;

/// The rollback record of one decision: the clause sequence to restore,
/// the vars to unassign, and the literal that was branched on at its
/// currently-tried polarity.
#[derive(Clone, Debug)]
struct DecisionFrame {
    /// the active clause sequence as it was just before the decision
    snapshot: Vec<Clause>,
    /// vars assigned while this frame was active
    reset: ResetSet,
    /// the branched literal
    decision: Lit,
}

/// The variable universe and the decision trail.
#[derive(Clone, Debug, Default)]
pub struct AssignStack {
    /// the variable arena, in insertion order
    vars: Vec<Var>,
    /// name to arena index
    names: NameMap,
    /// vars assigned before any decision was made
    root_reset: ResetSet,
    /// one frame per open decision, innermost last
    frames: Vec<DecisionFrame>,
}

impl Instantiate for AssignStack {
    /// A DIMACS header declares the variable universe up front, so the
    /// arena is pre-filled with vars named `"1"..="nbvar"`. The list
    /// builders instead intern vars in first-occurrence order.
    fn instantiate(_conf: &Config, cnf: &CNFDescription) -> Self {
        let vars = match cnf.pathname {
            CNFIndicator::File(_) => Var::new_vars(cnf.num_of_variables),
            _ => Vec::new(),
        };
        let names = vars
            .iter()
            .enumerate()
            .map(|(vi, v)| (v.name.clone(), vi))
            .collect();
        AssignStack {
            vars,
            names,
            ..AssignStack::default()
        }
    }
}

impl AssignIF for AssignStack {
    fn assign(&self, vi: VarId) -> Option<bool> {
        self.vars[vi].assign
    }
    fn var(&self, vi: VarId) -> &Var {
        &self.vars[vi]
    }
    fn num_vars(&self) -> usize {
        self.vars.len()
    }
    fn decision_level(&self) -> usize {
        self.frames.len()
    }
    fn remains(&self) -> bool {
        self.vars.iter().any(|v| v.assign.is_none())
    }
    fn model(&self) -> Model {
        self.vars
            .iter()
            .filter_map(|v| v.assign.map(|b| (v.name.clone(), b)))
            .collect()
    }
    fn var_assignments(&self) -> Vec<Option<bool>> {
        self.vars.iter().map(|v| v.assign).collect()
    }
}

impl AssignStack {
    /// intern `name`, returning its arena index.
    pub fn var_id<S: AsRef<str>>(&mut self, name: S) -> VarId {
        if let Some(vi) = self.names.get(name.as_ref()) {
            return *vi;
        }
        let vi = self.vars.len();
        self.vars.push(Var::new(name.as_ref()));
        self.names.insert(name.as_ref().to_string(), vi);
        vi
    }
    /// look a name up without interning it.
    pub fn lookup(&self, name: &str) -> Option<VarId> {
        self.names.get(name).copied()
    }
    /// iterate the arena in insertion order.
    pub fn var_iter(&self) -> Iter<'_, Var> {
        self.vars.iter()
    }
    /// the reset set accumulating assignments right now: the innermost
    /// frame's, or the root set when no decision is open.
    fn reset_set_mut(&mut self) -> &mut ResetSet {
        self.frames
            .last_mut()
            .map_or(&mut self.root_reset, |f| &mut f.reset)
    }
    /// assign an unassigned var and record it into the active reset set.
    pub(crate) fn assign_var(&mut self, vi: VarId, value: bool) {
        debug_assert!(self.vars[vi].assign.is_none());
        self.vars[vi].assign = Some(value);
        self.reset_set_mut().insert(vi);
    }
    /// set a var for the validator; reassigning the same value is a no-op.
    pub(crate) fn set_value(&mut self, vi: VarId, value: bool) -> MaybeInconsistent {
        match self.vars[vi].assign {
            None => {
                self.assign_var(vi, value);
                Ok(())
            }
            Some(b) if b == value => Ok(()),
            Some(_) => Err(SolverError::Inconsistent),
        }
    }
    /// assign the decision literal's var to satisfy it and open a frame
    /// holding the pre-decision clause sequence. The decision var itself is
    /// *not* part of the new frame's reset set; it is undone by flipping.
    pub(crate) fn decide(&mut self, lit: Lit, snapshot: Vec<Clause>) {
        debug_assert!(self.vars[lit.vi].assign.is_none());
        self.vars[lit.vi].assign = Some(lit.positive);
        self.frames.push(DecisionFrame {
            snapshot,
            reset: ResetSet::default(),
            decision: lit,
        });
    }
    /// pop the innermost frame: flip its decision var to the untried
    /// polarity, unassign every var in its reset set, and merge the
    /// decision var into the parent frame's reset set when one remains.
    /// Returns the clause snapshot to restore and the flipped literal, or
    /// `None` when no decision is open (the formula is unsatisfiable).
    pub(crate) fn backtrack(&mut self) -> Option<(Vec<Clause>, Lit)> {
        let frame = self.frames.pop()?;
        let flipped = !frame.decision;
        self.vars[flipped.vi].assign = Some(flipped.positive);
        for vi in frame.reset {
            self.vars[vi].assign = None;
        }
        if let Some(parent) = self.frames.last_mut() {
            parent.reset.insert(flipped.vi);
        }
        Some((frame.snapshot, flipped))
    }
}
