use std::{error::Error, process::ExitCode};

use threatscore::{evaluate_with, parameters::Options, Board};

const USAGE: &str = "Usage: threatscore <position-file>";

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let position = std::fs::read_to_string(path).map_err(|e| format!("unable to read '{path}': {e}"))?;
    let board = Board::new(&position)?;

    let options = Options::default();
    let (white, black) = evaluate_with(&board, &options)?;

    #[cfg(feature = "trace")]
    if let Ok(table) = threatscore::evaluate::evaluate_debug(&board, &options) {
        eprint!("{table}");
    }

    println!("White's score is {white:?}");
    println!("Black's score is {black:?}");

    Ok(())
}
