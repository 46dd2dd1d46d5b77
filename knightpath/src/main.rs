//! knightpath — the shortest knight path between two squares.
//!
//! Reads two coordinates from stdin (`a1h8`, line endings and spaces are
//! ignored) and prints the move count and the path.

mod config;
mod error;
mod input;
mod logger;

use std::io::{self, Read, Write};
use std::process::ExitCode;

use knight_paths::{Knight, shortest_path};
use log::{info, warn};

use config::{Config, LOG_ENV};
use error::Error;
use input::CharReader;

fn main() -> ExitCode {
    let config = Config::from_env();
    let result = logger::init(config.log_level)
        .map_err(Error::from)
        .and_then(|()| {
            if let Some(bad) = &config.rejected_log_level {
                warn!("ignoring unknown {LOG_ENV} level {bad:?}");
            }
            run(&config, io::stdin().lock(), io::stdout().lock())
        });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prompt, read one query from `input`, and write the answer to `out`.
fn run<R: Read, W: Write>(config: &Config, input: R, mut out: W) -> Result<(), Error> {
    write!(out, "{}", config.prompt)?;
    out.flush()?;

    let mut reader = CharReader::new(input);
    let start = reader.read_square()?;
    let end = reader.read_square()?;
    info!("searching {start} -> {end}");

    let path = shortest_path(&Knight, start, end)?;
    writeln!(out, "Shortest path:")?;
    writeln!(out, "\tMoves: {}", path.moves())?;
    writeln!(out, "\tPath: {path}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_core::CoordinateError;

    fn query(input: &str) -> Result<String, Error> {
        let config = Config {
            prompt: String::new(),
            ..Config::default()
        };
        let mut out = Vec::new();
        run(&config, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn single_move() {
        assert_eq!(
            query("a1b3\n").unwrap(),
            "Shortest path:\n\tMoves: 1\n\tPath: a1b3\n"
        );
    }

    #[test]
    fn corner_to_corner() {
        let out = query("a1\r\nh8\r\n").unwrap();
        assert!(out.contains("\tMoves: 6\n"));
        assert!(out.contains("\tPath: a1"));
        assert!(out.trim_end().ends_with("h8"));
    }

    #[test]
    fn same_square() {
        assert_eq!(
            query("E4e4").unwrap(),
            "Shortest path:\n\tMoves: 0\n\tPath: e4\n"
        );
    }

    #[test]
    fn prints_prompt_first() {
        let mut out = Vec::new();
        run(&Config::default(), "a1a2".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(
            out.starts_with("Start coordinate and end coordinate (ex. a1h7): Shortest path:")
        );
        assert!(out.contains("\tPath: a1b3c1a2\n"));
    }

    #[test]
    fn rejects_invalid_coordinate() {
        assert!(matches!(
            query("z9a1"),
            Err(Error::Coordinate(CoordinateError::File('z')))
        ));
        assert!(matches!(
            query("a1a9"),
            Err(Error::Coordinate(CoordinateError::Rank('9')))
        ));
    }

    #[test]
    fn rejects_short_input() {
        assert!(matches!(query("a1b"), Err(Error::UnexpectedEof)));
        assert!(matches!(query(""), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn error_display() {
        let e = Error::from(CoordinateError::File('z'));
        assert_eq!(e.to_string(), "invalid coordinate: file 'z' is not in a-h");
    }
}
