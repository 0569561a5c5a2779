//! # unitcalc
//!
//! unitcalc is a unit-aware calculator language written in Rust.
//! It tokenizes, parses, checks and evaluates one-line expressions such as
//! `10 km - 2 m + 12 mi` or `2 s + 3 h -> min`, tracking composite units
//! like `m s^-2` and variables across lines.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::session::{Outcome, Session};

/// Defines the structure of parsed lines.
///
/// This module declares the `Expr` enum and related types that represent one
/// input line as a tree. The tree is built by the parser, checked by the
/// validity and unit checkers and folded by the evaluator.
///
/// # Responsibilities
/// - Defines the node types for numbers, units, operators and assignment.
/// - Classifies nodes into number-producing and unit-producing kinds.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors a line can produce, from malformed input
/// to dimensional mismatches and division by zero, and the write-once slot
/// that keeps only the first of them.
///
/// # Responsibilities
/// - Defines error enums for structural and runtime failures.
/// - Formats each error as a single user-facing line.
pub mod error;
/// Orchestrates the entire process of evaluating a line.
///
/// This module ties together lexing, parsing, checking, evaluation, the unit
/// algebra and the variable store, and exposes the [`session::Session`] that
/// drives them.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, checkers and evaluator.
/// - Keeps variable bindings alive between lines.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Line-by-line driver.
///
/// Reads lines from any [`repl::LineSource`], runs them through a session
/// and writes the results.
pub mod repl;
/// General numeric helpers.
///
/// Checked float-to-integer conversion for unit degrees and the number
/// formatting used for results.
pub mod util;

/// Evaluates every line of `source` in a single session.
///
/// Lines are evaluated in order, so assignments are visible to the lines
/// after them. Evaluation stops after a `quit` or `exit` line, which is
/// included in the result.
///
/// # Returns
/// One [`Outcome`] per evaluated line.
///
/// # Examples
/// ```
/// use unitcalc::{evaluate_lines, interpreter::session::Outcome};
///
/// let outcomes = evaluate_lines("x = 9 + 10\nx * 2\n1 / 0");
/// assert_eq!(outcomes[0].to_string(), "x = 19");
/// assert_eq!(outcomes[1].to_string(), "38");
/// assert!(matches!(outcomes[2], Outcome::Error(_)));
/// ```
#[must_use]
pub fn evaluate_lines(source: &str) -> Vec<Outcome> {
    let mut session = Session::new();
    let mut outcomes = Vec::new();

    for line in source.lines() {
        let outcome = session.execute_line(line);
        let quit = outcome.is_quit();
        outcomes.push(outcome);
        if quit {
            break;
        }
    }

    outcomes
}
