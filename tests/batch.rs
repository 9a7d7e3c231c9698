use std::collections::HashSet;

use mathqa::{
    batch::{Problem, solve_batch, solve_problems},
    binding::{bind_placeholders, extract_numerals},
    catalog::OperatorCatalog,
    error::{DomainError, EvalError, ReferenceError, StructuralError},
    program::{LinearProgram, ProgramForm},
};
use pretty_assertions::assert_eq;

#[test]
fn failures_stay_in_their_slot() {
    let catalog = OperatorCatalog::builtin();
    let programs: Vec<LinearProgram> = ["add(1,2)",
                                        "add(1,2)|add(#0,1)|add(#1,1)|add(#5,1)",
                                        "divide(4,0)",
                                        "",
                                        "multiply(6,7)"].iter()
                                                         .map(|s| LinearProgram::parse(s, &catalog).unwrap())
                                                         .collect();

    let outcomes = solve_batch(&programs, &catalog).unwrap();

    assert_eq!(outcomes,
               vec![Ok(Some(3.0)),
                    Err(EvalError::Reference(ReferenceError::OutOfBounds { index: 5,
                                                                           len:   3,
                                                                           step:  3, })),
                    Err(EvalError::Domain(DomainError::DivisionByZero { operator: "divide",
                                                                        step:     0, })),
                    Ok(None),
                    Ok(Some(42.0))]);
}

#[test]
fn misuse_fails_the_batch() {
    let catalog = OperatorCatalog::builtin();
    let programs = vec![LinearProgram::parse("add(1,2)", &catalog).unwrap(),
                        LinearProgram::parse("add(n0,2)", &catalog).unwrap()];

    let error = solve_batch(&programs, &catalog).unwrap_err();
    assert_eq!(error,
               EvalError::UnresolvedPlaceholder { token: "n0".to_string(),
                                                  step:  0, });
}

#[test]
fn large_batch_keeps_order() {
    let catalog = OperatorCatalog::builtin();
    let programs: Vec<LinearProgram> =
        (0..500).map(|i| LinearProgram::parse(&format!("multiply({i},2)|add(#0,1)"), &catalog).unwrap())
                .collect();

    let outcomes = solve_batch(&programs, &catalog).unwrap();

    for (i, outcome) in outcomes.into_iter().enumerate() {
        assert_eq!(outcome, Ok(Some(f64::from(u32::try_from(i).unwrap()) * 2.0 + 1.0)));
    }
}

#[test]
fn problems_bind_their_own_numerals() {
    let catalog = OperatorCatalog::builtin();
    let problems = vec![Problem::new("add(n0, n1)", "sum 3 and 4 ."),
                        Problem::new("multiply(n0, const_100)", "what is 2.5 percent of 100 ?"),
                        Problem::new("divide(n0, subtract(n1, n1))", "divide 10 by 7 minus 7")];

    let outcomes = solve_problems(&problems, &catalog, ProgramForm::Nested, None).unwrap();

    assert_eq!(outcomes[0], Ok(Some(7.0)));
    assert_eq!(outcomes[1], Ok(Some(250.0)));
    assert!(matches!(outcomes[2], Err(EvalError::Domain(DomainError::DivisionByZero { .. }))));
}

#[test]
fn numerals_from_problem_text() {
    assert_eq!(extract_numerals("the cost of 1,500 kg is rs . 2.75 per kg , after 2 years"),
               vec!["1500", "2.75", "2"]);
    assert!(extract_numerals("no numbers here").is_empty());
}

#[test]
fn missing_numeral_falls_back() {
    let mut tokens = vec!["add".to_string(), "n0".to_string(), "n4".to_string()];
    bind_placeholders(&mut tokens, &[]);
    assert_eq!(tokens, vec!["add", "1", "1"]);

    let mut tokens = vec!["n2".to_string(), "#0".to_string(), "const_100".to_string()];
    bind_placeholders(&mut tokens, &["8".to_string()]);
    assert_eq!(tokens, vec!["8", "#0", "const_100"]);
}

#[test]
fn allowed_arguments_reach_every_problem() {
    let catalog = OperatorCatalog::builtin();
    let allowed: HashSet<String> = ["n0", "n1", "const_pi", "#0"].iter().map(|s| (*s).to_string()).collect();
    let problems = vec![Problem::new("multiply(const_pi, n0)", "a radius of 2 m"),
                        Problem::new("add(n0, const_100)", "add 5 to it")];

    let outcomes = solve_problems(&problems, &catalog, ProgramForm::Nested, Some(&allowed)).unwrap();
    assert_eq!(outcomes[0], Ok(Some(6.28318)));
    assert_eq!(outcomes[1],
               Err(EvalError::Structural(StructuralError::InvalidArgument { token:    "const_100".to_string(),
                                                                            position: 2, })));

    let linear = vec![Problem::new("multiply(const_pi,n0)|add(#0,n1)|", "sides 2 and 3")];
    let outcomes = solve_problems(&linear, &catalog, ProgramForm::Linear, Some(&allowed)).unwrap();
    assert_eq!(outcomes[0].as_ref().map(|a| a.map(|v| (v * 1e5).round())), Ok(Some(928_318.0)));

    let without = solve_problems(&problems[..1], &catalog, ProgramForm::Nested, None).unwrap();
    assert!(matches!(without[0], Err(EvalError::Structural(StructuralError::InvalidArgument { .. }))));
}
