//! Solver Builder
use {
    super::Solver,
    crate::{assign::AssignIF, types::*},
    std::{
        fs::File,
        io::{BufRead, BufReader},
        path::Path,
    },
};

/// API for SAT solver creation and modification.
pub trait SatSolverIF {
    /// add a clause of integer literals to the Solver; the magnitude is the
    /// variable name, the sign its polarity. Must be called before `solve`.
    ///
    /// # Errors
    ///
    /// * `SolverError::InvalidLiteral` if the clause contains a `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use crate::dplr::*;
    ///
    /// let mut s = Solver::default();
    /// assert!(s.add_clause(vec![1, -2]).is_ok());
    /// assert!(s.add_clause(vec![2]).is_ok());
    /// assert!(matches!(s.add_clause(vec![0, 8]), Err(SolverError::InvalidLiteral)));
    /// assert!(matches!(s.solve(), Ok(Certificate::SAT(_))));
    /// ```
    fn add_clause<V: AsRef<[i32]>>(&mut self, vec: V) -> Result<&mut Solver, SolverError>;
    /// make a Solver and load the CNF of `config.cnf_file` into it.
    ///
    /// # Errors
    ///
    /// * `SolverError::IOError` if it failed to load or the header is
    ///   missing or malformed.
    /// * `SolverError::InvalidLiteral` if a literal is `0` standalone or
    ///   out of the range the header declares.
    fn build(config: &Config) -> Result<Solver, SolverError>;
    /// make a Solver from clauses of string tokens; a `-` prefix negates,
    /// and the same base token always maps to the same variable. First
    /// occurrence fixes the variable order.
    ///
    /// # Errors
    ///
    /// * `SolverError::InvalidLiteral` on an empty or bare-`-` token.
    ///
    /// # Example
    ///
    /// ```
    /// use crate::dplr::*;
    ///
    /// let mut s = Solver::from_list(
    ///     &Config::default(),
    ///     &[vec!["a", "b"], vec!["-a"]],
    /// ).expect("invalid token");
    /// assert!(matches!(s.solve(), Ok(Certificate::SAT(_))));
    /// ```
    fn from_list<S: AsRef<str>>(config: &Config, clauses: &[Vec<S>])
        -> Result<Solver, SolverError>;
}

impl SatSolverIF for Solver {
    fn add_clause<V: AsRef<[i32]>>(&mut self, vec: V) -> Result<&mut Solver, SolverError> {
        let mut lits = Vec::with_capacity(vec.as_ref().len());
        for i in vec.as_ref() {
            if *i == 0 {
                return Err(SolverError::InvalidLiteral);
            }
            let vi = self.asg.var_id(i.unsigned_abs().to_string());
            lits.push(Lit::from((vi, 0 < *i)));
        }
        self.cdb.push(Clause::from(lits));
        Ok(self)
    }
    fn build(config: &Config) -> Result<Solver, SolverError> {
        let CNFReader { cnf, reader } = CNFReader::try_from(config.cnf_file.as_path())?;
        Solver::instantiate(config, &cnf).inject(reader)
    }
    fn from_list<S: AsRef<str>>(
        config: &Config,
        clauses: &[Vec<S>],
    ) -> Result<Solver, SolverError> {
        let cnf = CNFDescription {
            num_of_variables: 0,
            num_of_clauses: clauses.len(),
            pathname: CNFIndicator::LitVec(clauses.len()),
        };
        let mut s = Solver::instantiate(config, &cnf);
        for clause in clauses {
            let mut lits = Vec::with_capacity(clause.len());
            for token in clause {
                let (name, positive) = match token.as_ref().strip_prefix('-') {
                    Some(base) => (base, false),
                    None => (token.as_ref(), true),
                };
                if name.is_empty() {
                    return Err(SolverError::InvalidLiteral);
                }
                lits.push(Lit::from((s.asg.var_id(name), positive)));
            }
            s.cdb.push(Clause::from(lits));
        }
        Ok(s)
    }
}

impl Solver {
    /// read the clause lines left in `reader` after the DIMACS header.
    /// A `c` comment line is skipped; a line starting with `%` or an empty
    /// line ends clause input early.
    fn inject(mut self, mut reader: BufReader<File>) -> Result<Solver, SolverError> {
        let num_vars = self.asg.num_vars();
        let mut buf = String::new();
        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = buf.trim();
                    if line.is_empty() || line.starts_with('%') {
                        break;
                    }
                    if line.starts_with('c') {
                        continue;
                    }
                    let mut lits = Vec::new();
                    for seg in line.split_whitespace() {
                        let i = seg.parse::<i32>().map_err(|_| SolverError::InvalidLiteral)?;
                        if i == 0 {
                            break;
                        }
                        let vi = i.unsigned_abs() as usize;
                        if num_vars < vi {
                            return Err(SolverError::InvalidLiteral);
                        }
                        lits.push(Lit::from((vi - 1, 0 < i)));
                    }
                    self.cdb.push(Clause::from(lits));
                }
                Err(_) => return Err(SolverError::IOError),
            }
        }
        Ok(self)
    }
}

impl TryFrom<&Path> for Solver {
    type Error = SolverError;
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Solver::build(&Config::from(path.to_string_lossy()))
    }
}

impl<'a, V: AsRef<[i32]>> TryFrom<(Config, &'a [V])> for Solver {
    type Error = SolverError;
    fn try_from((config, vec): (Config, &'a [V])) -> Result<Self, Self::Error> {
        let cnf = CNFDescription::from(vec);
        let mut s = Solver::instantiate(&config, &cnf);
        for v in vec {
            s.add_clause(v)?;
        }
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::path::Path};

    #[test]
    fn test_build_from_file() {
        let config = Config::from("cnfs/uf6.cnf");
        match Solver::build(&config) {
            Ok(s) => {
                assert_eq!(s.asg.num_vars(), 6);
                assert_eq!(s.cdb.num_clauses(), 6);
            }
            Err(e) => panic!("failed to build a solver for cnfs/uf6.cnf: {e}"),
        }
    }

    #[test]
    fn test_dimacs_declares_the_universe() {
        // var 6 occurs in one clause only; vars are created from the header
        let s = Solver::try_from(Path::new("cnfs/uf6.cnf")).expect("can't load");
        let names = s.asg.var_iter().map(|v| v.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_out_of_range_literal() {
        assert!(matches!(
            Solver::try_from(Path::new("cnfs/bad-range.cnf")),
            Err(SolverError::InvalidLiteral)
        ));
    }

    #[test]
    fn test_builder_first_occurrence_order() {
        let s = Solver::try_from((Config::default(), &[vec![3, -1], vec![2]][..]))
            .expect("invalid clause");
        let names = s.asg.var_iter().map(|v| v.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names, ["3", "1", "2"]);
    }

    #[test]
    fn test_list_tokens() {
        let config = Config::default();
        assert!(Solver::from_list(&config, &[vec!["a", "-b"]]).is_ok());
        assert!(matches!(
            Solver::from_list(&config, &[vec!["a", ""]]),
            Err(SolverError::InvalidLiteral)
        ));
        assert!(matches!(
            Solver::from_list(&config, &[vec!["-"]]),
            Err(SolverError::InvalidLiteral)
        ));
    }
}
