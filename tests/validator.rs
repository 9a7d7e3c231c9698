use std::collections::HashSet;

use mathqa::{
    catalog::OperatorCatalog,
    error::StructuralError,
    program::{
        LinearProgram,
        validator::{is_valid_linear_program, validate_linear_program},
    },
};
use pretty_assertions::assert_eq;

fn validation_error(tokens: &[&str]) -> StructuralError {
    let catalog = OperatorCatalog::builtin();
    match validate_linear_program(tokens, &catalog, None) {
        Ok(()) => panic!("{tokens:?} validated but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn well_formed_programs() {
    let catalog = OperatorCatalog::builtin();
    assert!(is_valid_linear_program(&["add", "n0", "n1"], &catalog, None));
    assert!(is_valid_linear_program(&["add", "n0", "n1", "divide", "#0", "const_100"], &catalog, None));
    assert!(is_valid_linear_program(&["triangle_area_three_edges", "n0", "n1", "n2", "sqrt", "#0"],
                                    &catalog,
                                    None));
}

#[test]
fn empty_program_is_valid() {
    let catalog = OperatorCatalog::builtin();
    let tokens: [&str; 0] = [];
    assert!(validate_linear_program(&tokens, &catalog, None).is_ok());
}

#[test]
fn must_start_with_operator() {
    assert_eq!(validation_error(&["n0", "add", "n1"]),
               StructuralError::ExpectedOperator { token:    "n0".to_string(),
                                                   position: 0, });
}

#[test]
fn operator_cannot_interrupt_arguments() {
    assert_eq!(validation_error(&["add", "n0", "divide", "n1", "n2"]),
               StructuralError::MissingArguments { operator:  "add".to_string(),
                                                   remaining: 1,
                                                   position:  2, });
}

#[test]
fn program_cannot_end_early() {
    assert_eq!(validation_error(&["add", "n0"]),
               StructuralError::MissingArguments { operator:  "add".to_string(),
                                                   remaining: 1,
                                                   position:  2, });
    assert_eq!(validation_error(&["add"]),
               StructuralError::MissingArguments { operator:  "add".to_string(),
                                                   remaining: 2,
                                                   position:  1, });
}

#[test]
fn extra_argument_is_rejected() {
    assert_eq!(validation_error(&["add", "n0", "n1", "n2"]),
               StructuralError::UnexpectedArgument { token:    "n2".to_string(),
                                                     position: 3, });
}

#[test]
fn allowed_set_is_enforced() {
    let catalog = OperatorCatalog::builtin();
    let allowed: HashSet<String> = ["n0", "n1", "#0"].iter().map(|s| (*s).to_string()).collect();

    assert!(is_valid_linear_program(&["add", "n0", "n1", "sqrt", "#0"], &catalog, Some(&allowed)));
    assert_eq!(validate_linear_program(&["add", "n0", "n9"], &catalog, Some(&allowed)),
               Err(StructuralError::InvalidArgument { token:    "n9".to_string(),
                                                      position: 2, }));
}

#[test]
fn grouping_follows_arity() {
    let catalog = OperatorCatalog::builtin();
    let program = LinearProgram::parse("add n0 n1 multiply #0 const_3 factorial #1", &catalog).unwrap();

    assert_eq!(program.len(), 3);
    assert_eq!(program.to_string(), "add(n0,n1)|multiply(#0,const_3)|factorial(#1)");
    assert_eq!(program.tokens(),
               vec!["add", "n0", "n1", "multiply", "#0", "const_3", "factorial", "#1"]);

    assert!(LinearProgram::parse("add(n0)|", &catalog).is_err());
}
