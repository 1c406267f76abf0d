/// implement unit propagation over the active clause sequence
use {
    super::{AssignIF, AssignStack},
    crate::{
        cdb::{ClauseDB, ClauseDBIF},
        types::*,
    },
};

/// API for unit propagation.
pub trait PropagateIF {
    /// scan the active clause sequence for the first clause of length one
    /// whose var is still unassigned, assign the var to satisfy it, record
    /// it into the active reset set, and return the literal. At most one
    /// assignment per call; the caller re-scans after simplifying.
    ///
    /// A unit clause whose var is already assigned is left alone here:
    /// exposing it as satisfied or as a conflict is simplification's job.
    fn propagate_unit(&mut self, cdb: &ClauseDB) -> Option<Lit>;
}

impl PropagateIF for AssignStack {
    fn propagate_unit(&mut self, cdb: &ClauseDB) -> Option<Lit> {
        for c in cdb.iter() {
            if let Some(l) = c.unit() {
                if self.assign(l.vi).is_none() {
                    self.assign_var(l.vi, l.positive);
                    return Some(l);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::types::Instantiate};

    fn build(clauses: &[Vec<i32>]) -> (AssignStack, ClauseDB) {
        let config = Config::default();
        let cnf = CNFDescription::from(clauses);
        let mut asg = AssignStack::instantiate(&config, &cnf);
        let mut cdb = ClauseDB::instantiate(&config, &cnf);
        for c in clauses {
            let lits = c
                .iter()
                .map(|i| Lit::from((asg.var_id(i.unsigned_abs().to_string()), 0 < *i)))
                .collect::<Vec<_>>();
            cdb.push(Clause::from(lits));
        }
        (asg, cdb)
    }

    #[test]
    fn test_first_unit_wins() {
        let (mut asg, cdb) = build(&[vec![1, 2], vec![-3], vec![2]]);
        let l = asg.propagate_unit(&cdb).expect("a unit clause exists");
        assert!(!l.positive);
        assert_eq!(asg.var(l.vi).name(), "3");
        assert_eq!(asg.assign(l.vi), Some(false));
    }

    #[test]
    fn test_assigned_units_are_skipped() {
        let (mut asg, cdb) = build(&[vec![1], vec![2]]);
        assert!(asg.propagate_unit(&cdb).is_some());
        let l = asg.propagate_unit(&cdb).expect("the second unit");
        assert_eq!(asg.var(l.vi).name(), "2");
        assert_eq!(asg.propagate_unit(&cdb), None);
    }
}
