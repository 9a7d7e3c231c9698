use std::collections::HashSet;

use mathqa::{
    catalog::OperatorCatalog,
    error::StructuralError,
    interpreter::registry::lookup,
    program::{
        LinearProgram,
        ProgramForm,
        converter::{convert_nested_to_linear, linearize},
        token::{Argument, strip_to_tokens},
        validator::validate_linear_program,
    },
    solve_program,
};
use pretty_assertions::assert_eq;

fn convert(source: &str) -> String {
    let catalog = OperatorCatalog::builtin();
    match linearize(source, &catalog, None) {
        Ok(program) => program.to_string(),
        Err(e) => panic!("Conversion of '{source}' failed: {e}"),
    }
}

fn conversion_error(source: &str) -> StructuralError {
    let catalog = OperatorCatalog::builtin();
    match linearize(source, &catalog, None) {
        Ok(program) => panic!("Conversion of '{source}' succeeded with '{program}' but was expected to fail"),
        Err(failure) => failure.error,
    }
}

#[test]
fn single_operation() {
    assert_eq!(convert("add(n0, n1)"), "add(n0,n1)");
    assert_eq!(convert("factorial(n0)"), "factorial(n0)");
}

#[test]
fn inner_call_is_emitted_first() {
    assert_eq!(convert("multiply(divide(n0, const_100), n1)"),
               "divide(n0,const_100)|multiply(#0,n1)");
    assert_eq!(convert("add(n0, multiply(n1, const_100))"),
               "multiply(n1,const_100)|add(n0,#0)");
}

#[test]
fn sibling_calls_get_increasing_references() {
    assert_eq!(convert("subtract(add(n0, n1), multiply(n2, n3))"),
               "add(n0,n1)|multiply(n2,n3)|subtract(#0,#1)");
    assert_eq!(convert("volume_rectangular_prism(n0, add(n1, n2), sqrt(n3))"),
               "add(n1,n2)|sqrt(n3)|volume_rectangular_prism(n0,#0,#1)");
}

#[test]
fn deep_nesting() {
    assert_eq!(convert("divide(multiply(subtract(n0, n1), add(n2, const_1)), const_2)"),
               "subtract(n0,n1)|add(n2,const_1)|multiply(#0,#1)|divide(#2,const_2)");
}

#[test]
fn empty_program_converts_to_empty() {
    let catalog = OperatorCatalog::builtin();
    let tokens: [&str; 0] = [];
    assert_eq!(convert_nested_to_linear(&tokens, &catalog, None).unwrap(),
               LinearProgram::new());
    assert_eq!(convert("   "), "");
}

#[test]
fn invalid_argument_is_rejected() {
    assert_eq!(conversion_error("add(n0, foo)"),
               StructuralError::InvalidArgument { token:    "foo".to_string(),
                                                  position: 2, });
    assert_eq!(conversion_error("add(n0, 12)"),
               StructuralError::InvalidArgument { token:    "12".to_string(),
                                                  position: 2, });
    assert_eq!(conversion_error("circle_area(const_pi)"),
               StructuralError::InvalidArgument { token:    "const_pi".to_string(),
                                                  position: 1, });
}

#[test]
fn allowed_set_replaces_shape_test() {
    let catalog = OperatorCatalog::builtin();
    let allowed: HashSet<String> = ["n0", "const_pi"].iter().map(|s| (*s).to_string()).collect();

    let program = linearize("multiply(const_pi, n0)", &catalog, Some(&allowed)).unwrap();
    assert_eq!(program.to_string(), "multiply(const_pi,n0)");

    let failure = linearize("multiply(const_pi, n1)", &catalog, Some(&allowed)).unwrap_err();
    assert_eq!(failure.error,
               StructuralError::InvalidArgument { token:    "n1".to_string(),
                                                  position: 2, });
}

#[test]
fn orphan_argument_keeps_partial_output() {
    let catalog = OperatorCatalog::builtin();
    let failure = convert_nested_to_linear(&["add", "n0", "n1", "n2"], &catalog, None).unwrap_err();

    assert_eq!(failure.error,
               StructuralError::OrphanArgument { token:    "n2".to_string(),
                                                 position: 3, });
    assert_eq!(failure.emitted.to_string(), "add(n0,n1)");
}

#[test]
fn leftover_and_unfinished() {
    assert_eq!(conversion_error("add(n0)"),
               StructuralError::LeftoverArguments { arguments: vec!["n0".to_string()] });
    assert_eq!(conversion_error("multiply(add(n0, n1))"),
               StructuralError::UnfinishedOperators { operators: vec!["multiply".to_string()] });
    assert_eq!(conversion_error("add(n0, n1) multiply"),
               StructuralError::UnfinishedOperators { operators: vec!["multiply".to_string()] });
}

#[test]
fn converted_programs_validate() {
    let catalog = OperatorCatalog::builtin();
    let sources = ["add(n0, n1)",
                   "multiply(divide(n0, const_100), n1)",
                   "subtract(add(n0, n1), multiply(n2, n3))",
                   "triangle_area_three_edges(n0, n1, power(n2, const_2))"];

    for source in sources {
        let program = linearize(source, &catalog, None).unwrap();
        assert!(validate_linear_program(&program.tokens(), &catalog, None).is_ok(),
                "'{program}' from '{source}' does not validate");
    }
}

#[test]
fn back_references_only_look_backwards() {
    let catalog = OperatorCatalog::builtin();
    let program = linearize("divide(multiply(subtract(n0, n1), add(n2, const_1)), sqrt(n3))",
                            &catalog,
                            None).unwrap();

    for (step, operation) in program.iter().enumerate() {
        for argument in &operation.arguments {
            if let Argument::BackReference(index) = Argument::classify(argument) {
                let index: usize = index.parse().unwrap();
                assert!(index < step, "step {step} references #{index}");
            }
        }
    }
}

#[test]
fn tokenizer_accepts_both_layouts() {
    assert_eq!(strip_to_tokens("multiply(divide(n0, const_100), n1)"),
               vec!["multiply", "divide", "n0", "const_100", "n1"]);
    assert_eq!(strip_to_tokens("divide(n0,const_100)|multiply(#0,n1)|"),
               vec!["divide", "n0", "const_100", "multiply", "#0", "n1"]);
}

const TREE_OPERATORS: [&str; 8] =
    ["add", "subtract", "multiply", "max", "min", "negate", "floor", "triangle_perimeter"];
const TREE_NUMERALS: [&str; 6] = ["3", "8", "2", "5", "7", "4"];

enum Tree {
    Placeholder(usize),
    Constant(u32),
    Call(&'static str, Vec<Tree>),
}

impl Tree {
    fn render(&self) -> String {
        match self {
            Self::Placeholder(i) => format!("n{i}"),
            Self::Constant(v) => format!("const_{v}"),
            Self::Call(name, children) => {
                let children: Vec<String> = children.iter().map(Self::render).collect();
                format!("{name}({})", children.join(", "))
            },
        }
    }

    fn value(&self) -> f64 {
        match self {
            Self::Placeholder(i) => TREE_NUMERALS[*i].parse().unwrap(),
            Self::Constant(v) => f64::from(*v),
            Self::Call(name, children) => {
                let primitive = lookup(name).unwrap();
                let args: Vec<f64> = children.iter().map(Self::value).collect();
                (primitive.func)(&args, 0).unwrap()
            },
        }
    }
}

/// Deterministic linear congruential generator, enough to vary tree shapes.
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        usize::try_from(self.0 >> 33).unwrap() % bound
    }

    fn tree(&mut self, depth: usize) -> Tree {
        if depth > 0 && (depth == 4 || self.below(3) == 0) {
            return self.leaf();
        }
        let name = TREE_OPERATORS[self.below(TREE_OPERATORS.len())];
        let arity = lookup(name).unwrap().arity;
        Tree::Call(name, (0..arity).map(|_| self.tree(depth + 1)).collect())
    }

    fn leaf(&mut self) -> Tree {
        if self.below(4) == 0 {
            Tree::Constant(u32::try_from(self.below(10)).unwrap())
        } else {
            Tree::Placeholder(self.below(TREE_NUMERALS.len()))
        }
    }
}

#[test]
fn generated_trees_evaluate_the_same_after_conversion() {
    let catalog = OperatorCatalog::builtin();
    let text = format!("the values are {} .", TREE_NUMERALS.join(" and "));
    let mut rng = Lcg(0x5eed);

    for _ in 0..300 {
        let tree = rng.tree(0);
        let source = tree.render();

        let answer = solve_program(&source, &text, ProgramForm::Nested, &catalog);
        assert_eq!(answer, Ok(Some(tree.value())), "'{source}'");
    }
}
