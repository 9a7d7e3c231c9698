use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    catalog::OperatorCatalog,
    interpreter::{EvalResult, Interpreter},
    program::{LinearProgram, ProgramForm},
    solve_program_with_arguments,
};

/// One outcome per program, in input order.
pub type BatchOutcome = Vec<EvalResult<Option<f64>>>;

/// A program paired with the problem text its placeholders are bound from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Program text, nested or linear.
    pub program: String,
    /// The word problem the program solves.
    pub text:    String,
}

impl Problem {
    /// Creates a problem from its parts.
    pub fn new(program: impl Into<String>, text: impl Into<String>) -> Self {
        Self { program: program.into(),
               text:    text.into(), }
    }
}

/// Interprets every program in parallel.
///
/// A failing program only fails its own slot; its siblings are unaffected.
/// Every contained failure is logged with the index of its program.
///
/// # Errors
/// Returns the first misuse error (see [`crate::error::EvalError::is_misuse`])
/// in input order instead of the outcomes.
///
/// # Example
/// ```
/// use mathqa::{batch::solve_batch, catalog::OperatorCatalog, program::LinearProgram};
///
/// let catalog = OperatorCatalog::builtin();
/// let programs = vec![LinearProgram::parse("add(1,2)", &catalog).unwrap(),
///                     LinearProgram::parse("divide(1,0)", &catalog).unwrap()];
///
/// let outcomes = solve_batch(&programs, &catalog).unwrap();
/// assert_eq!(outcomes[0], Ok(Some(3.0)));
/// assert!(outcomes[1].is_err());
/// ```
pub fn solve_batch(programs: &[LinearProgram], catalog: &OperatorCatalog) -> EvalResult<BatchOutcome> {
    let interpreter = Interpreter::new(catalog);
    let outcomes: BatchOutcome = programs.par_iter().map(|program| interpreter.run(program)).collect();

    settle(outcomes)
}

/// Binds, converts when needed, and interprets every problem in parallel.
///
/// When `allowed` is given, every argument of every program must be a member
/// of it before placeholders are bound.
///
/// # Errors
/// See [`solve_batch`].
pub fn solve_problems(problems: &[Problem],
                      catalog: &OperatorCatalog,
                      form: ProgramForm,
                      allowed: Option<&HashSet<String>>)
                      -> EvalResult<BatchOutcome> {
    let outcomes: BatchOutcome =
        problems.par_iter()
                .map(|problem| solve_program_with_arguments(&problem.program, &problem.text, form, catalog, allowed))
                .collect();

    settle(outcomes)
}

fn settle(outcomes: BatchOutcome) -> EvalResult<BatchOutcome> {
    if let Some(misuse) = outcomes.iter().find_map(|o| o.as_ref().err().filter(|e| e.is_misuse())) {
        return Err(misuse.clone());
    }

    let failed = outcomes.iter()
                         .enumerate()
                         .filter_map(|(index, outcome)| outcome.as_ref().err().map(|e| (index, e)))
                         .inspect(|(index, error)| tracing::warn!(index, %error, "program produced no result"))
                         .count();
    tracing::info!(total = outcomes.len(), failed, "batch finished");

    Ok(outcomes)
}
