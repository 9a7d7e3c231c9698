use std::{collections::HashSet, path::Path};

use mathqa::{
    catalog::{OperatorCatalog, read_argument_set},
    error::CatalogError,
    interpreter::registry::PRIMITIVE_NAMES,
};
use pretty_assertions::assert_eq;

#[test]
fn parses_name_arity_lines() {
    let catalog: OperatorCatalog = "add | 2\n\n  sqrt|1  \nvolume_cone | 2\n".parse().unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.arity("add"), Some(2));
    assert_eq!(catalog.arity("sqrt"), Some(1));
    assert_eq!(catalog.arity("volume_cone"), Some(2));
    assert_eq!(catalog.arity("n0"), None);
    assert!(!catalog.contains("subtract"));
}

#[test]
fn reports_the_offending_line() {
    assert!(matches!(OperatorCatalog::parse("add | 2\nsubtract 2"),
                     Err(CatalogError::MalformedLine { line: 2, .. })));
    assert!(matches!(OperatorCatalog::parse("add | two"),
                     Err(CatalogError::InvalidArity { line: 1, .. })));
    assert!(matches!(OperatorCatalog::parse("add | 2\n\nadd | 3"),
                     Err(CatalogError::DuplicateOperator { line: 3, .. })));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(OperatorCatalog::from_path(Path::new("tests/does_not_exist.txt")),
                     Err(CatalogError::Io { .. })));
}

#[test]
fn builtin_covers_every_primitive() {
    let catalog = OperatorCatalog::builtin();

    assert_eq!(catalog.len(), PRIMITIVE_NAMES.len());
    for name in PRIMITIVE_NAMES {
        assert!(catalog.contains(name), "builtin catalog lacks '{name}'");
    }
}

#[test]
fn catalog_file_matches_builtin() {
    let from_file = OperatorCatalog::from_path(Path::new("tests/data/operators.txt")).unwrap();
    assert_eq!(from_file, OperatorCatalog::builtin());
}

#[test]
fn argument_set_skips_blank_lines() {
    let allowed = read_argument_set("n0\n  n1  \n\nconst_100\n");
    let expected: HashSet<String> = ["n0", "n1", "const_100"].iter().map(|s| (*s).to_string()).collect();
    assert_eq!(allowed, expected);
}
