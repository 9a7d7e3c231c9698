use mathqa::{
    binding::bind_program,
    catalog::OperatorCatalog,
    error::{DomainError, EvalError, ReferenceError, StructuralError},
    interpreter::{Interpreter, MemoryBank},
    number::Number,
    program::{LinearProgram, Operation, linearize},
};
use pretty_assertions::assert_eq;

fn run(source: &str) -> Result<Option<f64>, EvalError> {
    let catalog = OperatorCatalog::builtin();
    let program = LinearProgram::parse(source, &catalog).unwrap_or_else(|e| panic!("'{source}' is malformed: {e}"));
    Interpreter::new(&catalog).run(&program)
}

fn assert_answer(source: &str, expected: f64) {
    match run(source) {
        Ok(Some(answer)) => assert!((answer - expected).abs() < 1e-9,
                                    "'{source}' gave {answer}, expected {expected}"),
        other => panic!("'{source}' gave {other:?}, expected {expected}"),
    }
}

#[test]
fn constants_and_literals() {
    assert_answer("add(120,const_1000)", 1120.0);
    assert_answer("multiply(const_0_5,10)", 5.0);
    assert_answer("multiply(const_pi,const_2)", 6.28318);
    assert_answer("subtract(-3,2.5)", -5.5);
}

#[test]
fn answer_is_last_result() {
    assert_answer("add(1,2)|multiply(#0,4)|subtract(#1,#0)", 9.0);
    assert_answer("factorial(10)", 3_628_800.0);
    assert_answer("choose(5,2)|permutation(5,2)|add(#0,#1)", 30.0);
}

#[test]
fn memory_holds_every_result_in_order() {
    let catalog = OperatorCatalog::builtin();
    let program = LinearProgram::parse("add(1,2)|multiply(#0,4)|subtract(#1,#0)", &catalog).unwrap();
    let mut memory = MemoryBank::new();

    let answer = Interpreter::new(&catalog).run_with_memory(&program, &mut memory).unwrap();

    assert_eq!(memory.as_slice(), &[3.0, 12.0, 9.0]);
    assert_eq!(memory.len(), program.len());
    assert_eq!(answer, memory.last());
}

#[test]
fn empty_program_has_no_result() {
    let catalog = OperatorCatalog::builtin();
    assert_eq!(Interpreter::new(&catalog).run(&LinearProgram::new()), Ok(None));
}

#[test]
fn reference_past_memory_fails() {
    assert_eq!(run("add(1,2)|add(#0,1)|add(#1,1)|add(#5,1)"),
               Err(EvalError::Reference(ReferenceError::OutOfBounds { index: 5,
                                                                      len:   3,
                                                                      step:  3, })));
    assert_eq!(run("add(1,#0)"),
               Err(EvalError::Reference(ReferenceError::OutOfBounds { index: 0,
                                                                      len:   0,
                                                                      step:  0, })));
    assert_eq!(run("add(1,#x)"),
               Err(EvalError::Reference(ReferenceError::Malformed { token: "#x".to_string(),
                                                                    step:  0, })));
}

#[test]
fn domain_errors() {
    assert_eq!(run("add(1,2)|divide(#0,0)"),
               Err(EvalError::Domain(DomainError::DivisionByZero { operator: "divide",
                                                                   step:     1, })));
    assert!(matches!(run("sqrt(-4)"), Err(EvalError::Domain(DomainError::InvalidArgument { .. }))));
    assert!(matches!(run("log(0)"), Err(EvalError::Domain(DomainError::InvalidArgument { .. }))));
    assert!(matches!(run("factorial(2.5)"), Err(EvalError::Domain(_))));
    assert!(matches!(run("power(10,400)"), Err(EvalError::Domain(DomainError::NonFinite { .. }))));
}

#[test]
fn bad_tokens() {
    assert_eq!(run("add(abc,1)"),
               Err(EvalError::Structural(StructuralError::InvalidLiteral { token: "abc".to_string(),
                                                                           step:  0, })));
    assert_eq!(run("add(const_x,1)"),
               Err(EvalError::Structural(StructuralError::InvalidConstant { token: "const_x".to_string(),
                                                                            step:  0, })));
}

#[test]
fn unknown_operator_and_arity() {
    let catalog = OperatorCatalog::builtin();
    let interpreter = Interpreter::new(&catalog);

    let unknown = LinearProgram::from(vec![Operation::new("frobnicate", vec!["1".to_string()])]);
    assert_eq!(interpreter.run(&unknown),
               Err(EvalError::Structural(StructuralError::UnknownOperator { name: "frobnicate".to_string(),
                                                                            step: 0, })));

    let short = LinearProgram::from(vec![Operation::new("add", vec!["1".to_string()])]);
    assert_eq!(interpreter.run(&short),
               Err(EvalError::Structural(StructuralError::ArityMismatch { operator: "add".to_string(),
                                                                          expected: 2,
                                                                          found:    1,
                                                                          step:     0, })));
}

#[test]
fn unbound_placeholder_is_misuse() {
    let error = run("add(n0,1)").unwrap_err();
    assert_eq!(error,
               EvalError::UnresolvedPlaceholder { token: "n0".to_string(),
                                                  step:  0, });
    assert!(error.is_misuse());
    assert!(!run("divide(1,0)").unwrap_err().is_misuse());
}

#[test]
fn flat_tokens_are_grouped_then_run() {
    let catalog = OperatorCatalog::builtin();
    let answer = Interpreter::new(&catalog).run_tokens(&["add", "1", "2", "multiply", "#0", "4"]);
    assert_eq!(answer, Ok(Some(12.0)));
}

#[test]
fn nested_and_linear_forms_agree() {
    let catalog = OperatorCatalog::builtin();
    let numerals = vec!["12".to_string(), "30".to_string(), "4".to_string()];

    let mut nested = linearize("divide(multiply(n0, n1), add(n2, const_2))", &catalog, None).unwrap();
    let mut linear = LinearProgram::parse("multiply(n0,n1)|add(n2,const_2)|divide(#0,#1)|", &catalog).unwrap();
    bind_program(&mut nested, &numerals);
    bind_program(&mut linear, &numerals);

    assert_eq!(nested, linear);
    let interpreter = Interpreter::new(&catalog);
    assert_eq!(interpreter.run(&nested), Ok(Some(60.0)));
    assert_eq!(interpreter.run(&linear), Ok(Some(60.0)));
}

#[test]
fn answers_are_reported_canonically() {
    assert_eq!(Number::rounded(run("divide(10,4)").unwrap().unwrap()), Number::Real(2.5));
    assert_eq!(Number::rounded(run("divide(10,5)").unwrap().unwrap()), Number::Integer(2));
    assert_eq!(Number::rounded(run("divide(1,3)").unwrap().unwrap()), Number::Real(0.33333));
}

#[test]
fn dataset_spellings() {
    assert_answer("reminder(17,5)", 2.0);
    assert_answer("reminder(-7,3)", 2.0);
    assert_answer("circumface(1)", 2.0 * std::f64::consts::PI);
}

#[test]
fn huge_counts_overflow_at_once() {
    assert_eq!(run("permutation(1000000000000000,1000000000000000)"),
               Err(EvalError::Domain(DomainError::NonFinite { operator: "permutation",
                                                              step:     0, })));
    assert_eq!(run("choose(1000000000000000,500000000000000)"),
               Err(EvalError::Domain(DomainError::NonFinite { operator: "choose",
                                                              step:     0, })));
    assert_eq!(run("permutation(1000000000000000,100)"),
               Err(EvalError::Domain(DomainError::NonFinite { operator: "permutation",
                                                              step:     0, })));
    assert_answer("permutation(200,2)", 39_800.0);
    assert_answer("choose(200,2)", 19_900.0);
}
