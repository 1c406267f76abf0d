//! Module `state` is a collection of internal data about the search.
//! It is the only place that prints: the engine reports
//! [`SolverEvent`](`crate::solver::SolverEvent`)s and `State` decides,
//! from one verbosity switch, what reaches the terminal.
use {
    crate::{
        assign::{AssignIF, AssignStack},
        cdb::ClauseDB,
        solver::SolverEvent,
        types::*,
    },
    std::ops::{Index, IndexMut},
};

/// stat index
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stat {
    /// the number of decisions
    Decision = 0,
    /// the number of unit propagations
    Propagation,
    /// the number of conflicts
    Conflict,
    /// the number of backtracks
    Backtrack,
    /// the number of simplification passes
    Simplification,
    /// don't use this dummy (as a terminator).
    EndOfStatIndex,
}

/// Data storage for [`Solver`](`crate::solver::Solver`).
#[derive(Clone, Debug, Default)]
pub struct State {
    /// solver configuration
    pub config: Config,
    /// the problem description
    pub target: CNFDescription,
    /// search statistics
    stats: [usize; Stat::EndOfStatIndex as usize],
}

impl Index<Stat> for State {
    type Output = usize;
    #[inline]
    fn index(&self, i: Stat) -> &usize {
        &self.stats[i as usize]
    }
}

impl IndexMut<Stat> for State {
    #[inline]
    fn index_mut(&mut self, i: Stat) -> &mut usize {
        &mut self.stats[i as usize]
    }
}

impl Instantiate for State {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> State {
        State {
            config: config.clone(),
            target: cnf.clone(),
            ..State::default()
        }
    }
}

/// API for diagnostic reporting.
pub trait StateIF {
    /// print the formula about to be solved, in trace mode.
    fn begin(&self, asg: &AssignStack, cdb: &ClauseDB);
    /// count a search event and, in trace mode, print it.
    fn trace(&mut self, asg: &AssignStack, cdb: &ClauseDB, e: SolverEvent);
    /// print the search summary, unless quiet.
    fn report(&self, asg: &AssignStack);
}

impl StateIF for State {
    fn begin(&self, asg: &AssignStack, cdb: &ClauseDB) {
        if self.config.verbose {
            println!("c solving: {}", cdb.render(asg));
        }
    }
    fn trace(&mut self, asg: &AssignStack, cdb: &ClauseDB, e: SolverEvent) {
        match e {
            SolverEvent::Propagate(_) => self[Stat::Propagation] += 1,
            SolverEvent::Simplify(_) => self[Stat::Simplification] += 1,
            SolverEvent::Decide(_) => self[Stat::Decision] += 1,
            SolverEvent::Backtrack(_) => self[Stat::Backtrack] += 1,
            SolverEvent::Conflict => self[Stat::Conflict] += 1,
            _ => (),
        }
        if !self.config.verbose {
            return;
        }
        match e {
            SolverEvent::Propagate(l) => println!("c unit propagate: {}", l.render(asg)),
            SolverEvent::Simplify(true) => println!("c simplify: {}", cdb.render(asg)),
            SolverEvent::Simplify(false) => (),
            SolverEvent::Decide(l) => println!("c decide: {}", l.render(asg)),
            SolverEvent::Backtrack(l) => {
                println!("c backtrack: retry with {}", l.render(asg));
            }
            SolverEvent::Conflict => {
                println!("c conflict at level {}", asg.decision_level());
            }
            SolverEvent::Satisfied => println!("c all clauses satisfied"),
            SolverEvent::Exhausted => println!("c decision stack exhausted"),
        }
    }
    fn report(&self, asg: &AssignStack) {
        if self.config.quiet_mode {
            return;
        }
        println!(
            "c {}: {} decisions, {} propagations, {} conflicts, {} backtracks, {} vars",
            self.target,
            self[Stat::Decision],
            self[Stat::Propagation],
            self[Stat::Conflict],
            self[Stat::Backtrack],
            asg.num_vars(),
        );
    }
}
