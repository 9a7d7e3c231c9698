//! # mathqa
//!
//! mathqa reads and runs the small arithmetic programs that accompany math
//! word problems. It converts nested call syntax into linear programs,
//! validates linear programs against an operator catalog, interprets them with
//! a fixed set of math primitives, and normalizes free-text answer options
//! into canonical numbers.

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

use std::collections::HashSet;

use crate::{
    binding::{bind_program, extract_numerals},
    catalog::OperatorCatalog,
    interpreter::{EvalResult, Interpreter},
    program::{LinearProgram, ProgramForm, linearize, token::strip_to_tokens, validate_linear_program},
};

/// Runs many programs at once.
///
/// Programs are interpreted on a `rayon` thread pool sharing one read-only
/// catalog. A failing program is recorded in its own slot and never stops its
/// siblings.
pub mod batch;
/// Binds `n<i>` placeholders to the numerals of a problem's text.
pub mod binding;
/// The operator catalog and the allowed-argument list.
///
/// # Responsibilities
/// - Maps each operator name to its exact arity.
/// - Loads the `name | arity` catalog format from text or a file.
/// - Derives the built-in catalog from the primitive registry.
pub mod catalog;
/// Provides unified error types for conversion, validation and evaluation.
///
/// This module defines every error a program or an option string can raise.
/// Each carries the position of the failure: a token index for the front end,
/// an operation index for the interpreter.
///
/// # Responsibilities
/// - Defines one error enum per failure kind (structural, domain, reference,
///   catalog).
/// - Unifies them in `EvalError` for the interpreter.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Executes linear programs.
///
/// This module ties the primitive registry, the memory bank and argument
/// resolution together into the interpreter.
///
/// # Responsibilities
/// - Resolves every argument token to a number.
/// - Runs each operation through its primitive and records the result.
/// - Stops a program at its first failure.
pub mod interpreter;
/// Canonical numbers: integral values as integers, everything else as reals.
pub mod number;
/// The shared numeral grammar.
pub mod numeral;
/// Normalizes free-text answer options.
pub mod options;
/// The program front end: tokenizer, operations, converter and validator.
pub mod program;
/// General utilities for safe numeric conversion and rounding.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u64` and `f64` without silent data loss.
/// - Round to a fixed number of decimal places.
pub mod util;

/// Solves one problem: reads its program, binds placeholders to the numerals
/// of `problem_text`, and interprets the result.
///
/// Nested programs are converted to linear form first.
///
/// # Errors
/// Returns the first structural, reference or domain error raised. Nothing
/// outside this program is affected.
///
/// # Examples
/// ```
/// use mathqa::{catalog::OperatorCatalog, program::ProgramForm, solve_program};
///
/// let catalog = OperatorCatalog::builtin();
/// let text = "a shopkeeper sold 120 pens at a gain of 20 % .";
///
/// let answer = solve_program("add(n0,const_1000)", text, ProgramForm::Nested, &catalog);
/// assert_eq!(answer, Ok(Some(1120.0)));
///
/// let answer = solve_program("multiply(n0,n1)|divide(#0,const_100)|", text, ProgramForm::Linear, &catalog);
/// assert_eq!(answer, Ok(Some(24.0)));
///
/// // Referencing a result that was never computed fails this program only.
/// assert!(solve_program("add(#5,n0)", text, ProgramForm::Linear, &catalog).is_err());
/// ```
pub fn solve_program(source: &str,
                     problem_text: &str,
                     form: ProgramForm,
                     catalog: &OperatorCatalog)
                     -> EvalResult<Option<f64>> {
    solve_program_with_arguments(source, problem_text, form, catalog, None)
}

/// [`solve_program`] with an allowed-argument set.
///
/// Before placeholders are bound, every argument must be a member of
/// `allowed`. This replaces the converter's `n<digits>` / `const_<digits>`
/// shape test, so constants such as `const_pi` can be admitted.
///
/// # Errors
/// `StructuralError::InvalidArgument` for an argument outside `allowed`, then
/// see [`solve_program`].
///
/// # Examples
/// ```
/// use std::collections::HashSet;
///
/// use mathqa::{catalog::OperatorCatalog, program::ProgramForm, solve_program_with_arguments};
///
/// let catalog = OperatorCatalog::builtin();
/// let allowed: HashSet<String> = ["n0", "const_pi"].iter().map(|s| (*s).to_string()).collect();
///
/// let answer = solve_program_with_arguments("multiply(const_pi, n0)",
///                                           "a radius of 2 m",
///                                           ProgramForm::Nested,
///                                           &catalog,
///                                           Some(&allowed));
/// assert_eq!(answer, Ok(Some(6.28318)));
/// ```
pub fn solve_program_with_arguments(source: &str,
                                    problem_text: &str,
                                    form: ProgramForm,
                                    catalog: &OperatorCatalog,
                                    allowed: Option<&HashSet<String>>)
                                    -> EvalResult<Option<f64>> {
    let mut program = match form {
        ProgramForm::Nested => linearize(source, catalog, allowed)?,
        ProgramForm::Linear => {
            let tokens = strip_to_tokens(source);
            validate_linear_program(&tokens, catalog, allowed)?;
            LinearProgram::from_tokens(&tokens, catalog)?
        },
    };

    bind_program(&mut program, &extract_numerals(problem_text));
    Interpreter::new(catalog).run(&program)
}
