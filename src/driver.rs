// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text driver: read a problem's parameters, stream every sequence out.
//!
//! Input is whitespace-separated integers, possibly spread over several lines:
//!
//! | Problem | Input |
//! |---|---|
//! | `parentheses` | `N` |
//! | `combinations` | `N K` |
//! | `bst-preorders` | `N` |
//! | `permutations` | `N` followed by `N` integers |
//!
//! Each complete sequence becomes one output line, in emission order.
//! Parentheses are printed without separators, numbers space-separated.
//! Input with no tokens at all produces no output.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;
use tracing::debug;

use crate::engine::{generate, Constraint};
use crate::error::GenerateError;
use crate::generators::{BstPreorders, Combinations, MultisetPermutations, Parentheses};

/// Which generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Problem {
    /// Balanced parentheses with N pairs
    Parentheses,
    /// K-element subsets of 1..N
    Combinations,
    /// Preorders of every BST over keys 1..N
    BstPreorders,
    /// Distinct permutations of N integers
    Permutations,
}

/// Driver settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    /// Reject out-of-domain parameters (K > N, over-long sequences) instead
    /// of producing no output.
    pub strict: bool,
}

/// Errors reported by [`run`].
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read input")]
    Read(#[source] std::io::Error),

    #[error("failed to write output")]
    Write(#[source] std::io::Error),

    #[error("input ended before {expected}")]
    MissingValue { expected: &'static str },

    #[error("invalid {name} {token:?}")]
    Parse {
        name: &'static str,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Whitespace-separated tokens of the whole input.
struct Tokens {
    tokens: std::vec::IntoIter<String>,
}

impl Tokens {
    fn read<R: BufRead>(input: R) -> Result<Self, DriverError> {
        let mut tokens = Vec::new();
        for line in input.lines() {
            let line = line.map_err(DriverError::Read)?;
            tokens.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(Self {
            tokens: tokens.into_iter(),
        })
    }

    /// Next token parsed as `T`, or `None` at end of input.
    fn next<T>(&mut self, name: &'static str) -> Result<Option<T>, DriverError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        match self.tokens.next() {
            None => Ok(None),
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|source| DriverError::Parse { name, token, source }),
        }
    }

    /// Next token parsed as `T`; end of input is an error.
    fn require<T>(&mut self, name: &'static str) -> Result<T, DriverError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        self.next(name)?
            .ok_or(DriverError::MissingValue { expected: name })
    }
}

/// Run `problem` on `input`, writing one line per sequence to `output`.
///
/// Returns the number of lines written.
pub fn run<R: BufRead, W: Write>(
    problem: Problem,
    options: DriverOptions,
    input: R,
    mut output: W,
) -> Result<u64, DriverError> {
    let mut tokens = Tokens::read(input)?;
    let Some(n) = tokens.next::<usize>("N")? else {
        debug!("empty input");
        return Ok(0);
    };

    match problem {
        Problem::Parentheses => {
            let generator = if options.strict {
                Parentheses::checked(n)?
            } else {
                Parentheses::new(n)
            };
            write_sequences(generator, "", &mut output)
        }
        Problem::Combinations => {
            let k = tokens.require::<usize>("K")?;
            let generator = if options.strict {
                Combinations::checked(n, k)?
            } else {
                Combinations::new(n, k)
            };
            write_sequences(generator, " ", &mut output)
        }
        Problem::BstPreorders => {
            let generator = if options.strict {
                BstPreorders::checked(n)?
            } else {
                BstPreorders::new(n)
            };
            write_sequences(generator, " ", &mut output)
        }
        Problem::Permutations => {
            let items = (0..n)
                .map(|_| tokens.require::<i64>("permutation item"))
                .collect::<Result<Vec<_>, _>>()?;
            let generator = if options.strict {
                MultisetPermutations::checked(items)?
            } else {
                MultisetPermutations::new(items)
            };
            write_sequences(generator, " ", &mut output)
        }
    }
}

/// Stream every sequence of `constraint` to `output`, joined by `separator`.
fn write_sequences<C, W>(constraint: C, separator: &str, output: &mut W) -> Result<u64, DriverError>
where
    C: Constraint,
    C::Item: Display,
    W: Write,
{
    let mut engine = generate(constraint);
    let mut lines = 0u64;
    while let Some(sequence) = engine.advance() {
        write_line(output, sequence, separator).map_err(DriverError::Write)?;
        lines += 1;
    }
    debug!(
        generator = engine.constraint().name(),
        lines,
        statistics = %engine.statistics(),
        "finished writing"
    );
    Ok(lines)
}

fn write_line<T: Display, W: Write>(output: &mut W, sequence: &[T], separator: &str) -> std::io::Result<()> {
    for (i, item) in sequence.iter().enumerate() {
        if i > 0 {
            output.write_all(separator.as_bytes())?;
        }
        write!(output, "{}", item)?;
    }
    writeln!(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(problem: Problem, strict: bool, input: &str) -> Result<String, DriverError> {
        let mut output = Vec::new();
        run(problem, DriverOptions { strict }, input.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            run_str(Problem::Parentheses, false, "2\n").unwrap(),
            "(())\n()()\n"
        );
    }

    #[test]
    fn test_combinations_across_lines() {
        assert_eq!(
            run_str(Problem::Combinations, false, "4\n3\n").unwrap(),
            "1 2 3\n1 2 4\n1 3 4\n2 3 4\n"
        );
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        assert_eq!(run_str(Problem::BstPreorders, false, "").unwrap(), "");
        assert_eq!(run_str(Problem::Parentheses, false, "  \n\n").unwrap(), "");
    }

    #[test]
    fn test_missing_k() {
        assert!(matches!(
            run_str(Problem::Combinations, false, "5"),
            Err(DriverError::MissingValue { expected: "K" })
        ));
    }

    #[test]
    fn test_negative_n_rejected() {
        assert!(matches!(
            run_str(Problem::Parentheses, false, "-1"),
            Err(DriverError::Parse { name: "N", .. })
        ));
    }

    #[test]
    fn test_lenient_versus_strict() {
        assert_eq!(run_str(Problem::Combinations, false, "3 5").unwrap(), "");
        assert!(matches!(
            run_str(Problem::Combinations, true, "3 5"),
            Err(DriverError::Generate(GenerateError::InvalidArgument { .. }))
        ));
    }

    #[test]
    fn test_permutations() {
        assert_eq!(
            run_str(Problem::Permutations, false, "3\n2 1 1\n").unwrap(),
            "1 1 2\n1 2 1\n2 1 1\n"
        );
        assert!(matches!(
            run_str(Problem::Permutations, false, "3\n2 1\n"),
            Err(DriverError::MissingValue { .. })
        ));
    }

    #[test]
    fn test_line_count() {
        let mut output = Vec::new();
        let lines = run(
            Problem::BstPreorders,
            DriverOptions::default(),
            "4".as_bytes(),
            &mut output,
        )
        .unwrap();
        assert_eq!(lines, 14);
    }
}
