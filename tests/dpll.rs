//! End-to-end properties of the search engine: soundness against the
//! original clause sequence, agreement with brute force on small
//! instances, and determinism.
use {
    dplr::{cdb::ClauseDBIF, Certificate, Config, Model, SolveIF, Solver},
    std::path::Path,
};

fn solve(clauses: &[Vec<i32>]) -> Certificate {
    Solver::try_from((Config::default(), clauses))
        .expect("invalid clause")
        .solve()
        .expect("the search must not break")
}

/// truth-table enumeration; usable up to a handful of vars only
fn brute_force_is_sat(clauses: &[Vec<i32>]) -> bool {
    let n = clauses
        .iter()
        .flat_map(|c| c.iter().map(|l| l.unsigned_abs() as usize))
        .max()
        .unwrap_or(0);
    assert!(n <= 10);
    'candidate: for bits in 0u32..1 << n {
        for c in clauses {
            let satisfied = c.iter().any(|l| {
                let value = bits & (1 << (l.unsigned_abs() - 1)) != 0;
                if 0 < *l {
                    value
                } else {
                    !value
                }
            });
            if !satisfied {
                continue 'candidate;
            }
        }
        return true;
    }
    false
}

fn formulas() -> Vec<Vec<Vec<i32>>> {
    vec![
        vec![],
        vec![vec![]],
        vec![vec![1]],
        vec![vec![1], vec![-1]],
        vec![vec![1, 2, -3], vec![-2, 3], vec![-1], vec![2]],
        vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]],
        vec![vec![1, 2], vec![-1, 3], vec![1, -3], vec![-1, 2]],
        vec![vec![1, 2], vec![-1, 3], vec![-1, -3], vec![-1, -2], vec![1, -2]],
        vec![
            vec![1, -2, 3],
            vec![-1, -2, 4],
            vec![-3, -4, -5],
            vec![-1, 2, 3],
            vec![-3, 4, 5],
            vec![1, -2, 6],
        ],
        // pigeon-hole: 3 pigeons, 2 holes
        vec![
            vec![1, 2],
            vec![3, 4],
            vec![5, 6],
            vec![-1, -3],
            vec![-1, -5],
            vec![-3, -5],
            vec![-2, -4],
            vec![-2, -6],
            vec![-4, -6],
        ],
    ]
}

#[test]
fn test_unit_clauses_force_the_model() {
    match solve(&[vec![1, 2, -3], vec![-2, 3], vec![-1], vec![2]]) {
        Certificate::SAT(model) => {
            let expected: Model = [("1", false), ("2", true), ("3", true)]
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect();
            assert_eq!(model, expected);
        }
        Certificate::UNSAT => panic!("it should be satisfiable"),
    }
}

#[test]
fn test_empty_clause_is_unsat_no_matter_what() {
    assert_eq!(solve(&[vec![]]), Certificate::UNSAT);
    assert_eq!(solve(&[vec![1], vec![], vec![2, 3]]), Certificate::UNSAT);
}

#[test]
fn test_no_clauses_is_trivially_sat() {
    match solve(&[]) {
        Certificate::SAT(model) => assert!(model.is_empty()),
        Certificate::UNSAT => panic!("an empty formula has the empty model"),
    }
}

#[test]
fn test_agrees_with_brute_force() {
    for clauses in formulas() {
        let verdict = matches!(solve(&clauses), Certificate::SAT(_));
        assert_eq!(
            verdict,
            brute_force_is_sat(&clauses),
            "wrong verdict on {clauses:?}"
        );
    }
}

#[test]
fn test_soundness_of_returned_models() {
    for clauses in formulas() {
        if let Certificate::SAT(model) = solve(&clauses) {
            use dplr::ValidateIF;
            let mut witness = Solver::try_from((Config::default(), clauses.as_slice()))
                .expect("invalid clause");
            witness
                .inject_assignment(&model)
                .expect("a fresh solver accepts its twin's model");
            assert_eq!(witness.validate(), None, "unsound model for {clauses:?}");
            assert!(witness.cdb.full_evaluation(&witness.asg));
        }
    }
}

#[test]
fn test_determinism() {
    for clauses in formulas() {
        let first = solve(&clauses);
        let second = solve(&clauses);
        assert_eq!(first, second);
    }
}

#[test]
fn test_solving_files() {
    let mut s = Solver::try_from(Path::new("cnfs/uf6.cnf")).expect("can't load");
    assert!(matches!(s.solve(), Ok(Certificate::SAT(_))));
    let mut s = Solver::try_from(Path::new("cnfs/unsat.cnf")).expect("can't load");
    assert_eq!(s.solve(), Ok(Certificate::UNSAT));
    let mut s = Solver::try_from(Path::new("cnfs/hole3.cnf")).expect("can't load");
    assert_eq!(s.solve(), Ok(Certificate::UNSAT));
}

#[test]
fn test_file_and_list_agree() {
    let clauses = vec![
        vec![1, -2, 3],
        vec![-1, -2, 4],
        vec![-3, -4, -5],
        vec![-1, 2, 3],
        vec![-3, 4, 5],
        vec![1, -2, 6],
    ];
    let from_list = solve(&clauses);
    let mut s = Solver::try_from(Path::new("cnfs/uf6.cnf")).expect("can't load");
    assert_eq!(s.solve().expect("the search must not break"), from_list);
}
