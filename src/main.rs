use std::process;

use clap::{App, Arg};

use npuzzle_solver::solver;
use npuzzle_solver::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("npuzzle-solver")
        .version("0.1")
        .arg(
            Arg::with_name("quiet")
                .short("-q")
                .long("--quiet")
                .help("don't print search progress"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();

    let level = path.load_level().unwrap_or_else(|err| {
        println!("Can't load puzzle {}: {}", path, err);
        process::exit(1);
    });

    if !solver::is_solvable(&level.initial) {
        println!("Puzzle is not solvable");
        return;
    }

    println!("Solving...");
    let solver_ok = level.solve(!matches.is_present("quiet")).unwrap_or_else(|err| {
        println!("Solver failed: {}", err);
        process::exit(1);
    });
    println!("{}", solver_ok.stats);
    match solver_ok.path_states {
        Some(path_states) => {
            println!("Found solution:");
            for state in &path_states {
                println!("{}", state);
            }
            println!("Moves: {}", path_states.len());
        }
        None => println!("No solution"),
    }
}
