// Command-line entry point: argument parsing and result printing only.
use {
    dplr::{
        config::Config,
        solver::{Certificate, SatSolverIF, SolveIF, Solver},
    },
    std::{env, path::PathBuf, process::exit},
};

const VERSION: &str = concat!("dplr-", env!("CARGO_PKG_VERSION"));
const USAGE: &str = "usage: dplr [-v|--verbose] [-q|--quiet] <cnf-file>";

fn main() {
    let mut config = Config::default();
    let mut target: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--version" => {
                println!("{VERSION}");
                exit(0);
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                exit(0);
            }
            "--verbose" | "-v" => config.verbose = true,
            "--quiet" | "-q" => config.quiet_mode = true,
            _ if arg.starts_with('-') => {
                eprintln!("unknown option '{arg}'");
                eprintln!("{USAGE}");
                exit(1);
            }
            _ => target = Some(PathBuf::from(arg)),
        }
    }
    let Some(path) = target else {
        eprintln!("{USAGE}");
        exit(1);
    };
    config.cnf_file = path;
    let mut s = match Solver::build(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to load {}: {e}", config.cnf_file.display());
            exit(1);
        }
    };
    match s.solve() {
        Ok(Certificate::SAT(_)) => {
            // print the assignment in variable order, rendering style
            // matching the formula display: `-` marks false
            let values = s
                .asg
                .var_iter()
                .filter_map(|v| {
                    v.value()
                        .map(|b| format!("{}{}", if b { "" } else { "-" }, v.name()))
                })
                .collect::<Vec<_>>()
                .join(" ");
            println!("s SATISFIABLE");
            println!("v {values}");
        }
        Ok(Certificate::UNSAT) => println!("s UNSATISFIABLE"),
        Err(e) => {
            eprintln!("solver failed: {e}");
            exit(1);
        }
    }
}
