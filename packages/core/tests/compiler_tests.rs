//! JSONPath compiler acceptance and rejection tests

use jsurf_core::error::ErrorKind;
use jsurf_core::path::{PathCompiler, PathOperator};

fn operators(path: &str) -> Vec<PathOperator> {
    PathCompiler::compile(path)
        .expect("expression should compile")
        .operators()
        .to_vec()
}

fn rejection(path: &str) -> ErrorKind {
    PathCompiler::compile(path)
        .expect_err("expression should be rejected")
        .kind
}

#[test]
fn test_root_only() {
    assert_eq!(operators("$"), vec![PathOperator::Root]);
}

#[test]
fn test_dotted_children() {
    assert_eq!(
        operators("$.store.book"),
        vec![
            PathOperator::Root,
            PathOperator::Child {
                name: "store".to_string()
            },
            PathOperator::Child {
                name: "book".to_string()
            },
        ]
    );
}

#[test]
fn test_quoted_child() {
    assert_eq!(
        operators("$['with space']"),
        vec![
            PathOperator::Root,
            PathOperator::Child {
                name: "with space".to_string()
            },
        ]
    );
    assert_eq!(operators("$[\"a\"]"), operators("$['a']"));
}

#[test]
fn test_wildcards() {
    assert_eq!(
        operators("$.*"),
        vec![PathOperator::Root, PathOperator::Wildcard]
    );
    assert_eq!(operators("$[*]"), operators("$.*"));
    assert_eq!(
        operators("$.x[*]"),
        vec![
            PathOperator::Root,
            PathOperator::Child {
                name: "x".to_string()
            },
            PathOperator::Wildcard,
        ]
    );
}

#[test]
fn test_array_index_and_slice() {
    assert_eq!(
        operators("$.x[1]"),
        vec![
            PathOperator::Root,
            PathOperator::Child {
                name: "x".to_string()
            },
            PathOperator::ArrayIndex { index: 1 },
        ]
    );
    assert_eq!(
        operators("$.x[1:3]"),
        vec![
            PathOperator::Root,
            PathOperator::Child {
                name: "x".to_string()
            },
            PathOperator::ArraySlice {
                lower: Some(1),
                upper: Some(3)
            },
        ]
    );
    assert_eq!(
        operators("$.x[:3]"),
        vec![
            PathOperator::Root,
            PathOperator::Child {
                name: "x".to_string()
            },
            PathOperator::ArraySlice {
                lower: None,
                upper: Some(3)
            },
        ]
    );
    assert_eq!(
        operators("$.x[1:]"),
        vec![
            PathOperator::Root,
            PathOperator::Child {
                name: "x".to_string()
            },
            PathOperator::ArraySlice {
                lower: Some(1),
                upper: None
            },
        ]
    );
}

#[test]
fn test_deep_scan_forms() {
    assert_eq!(
        operators("$..author"),
        vec![
            PathOperator::Root,
            PathOperator::DeepScan,
            PathOperator::Child {
                name: "author".to_string()
            },
        ]
    );
    assert_eq!(
        operators("$..*"),
        vec![PathOperator::Root, PathOperator::DeepScan, PathOperator::Wildcard]
    );
    assert_eq!(
        operators("$..[2]"),
        vec![
            PathOperator::Root,
            PathOperator::DeepScan,
            PathOperator::ArrayIndex { index: 2 },
        ]
    );
    assert_eq!(
        operators("$..a.b"),
        vec![
            PathOperator::Root,
            PathOperator::DeepScan,
            PathOperator::Child {
                name: "a".to_string()
            },
            PathOperator::Child {
                name: "b".to_string()
            },
        ]
    );
}

#[test]
fn test_malformed_expressions_are_invalid_path() {
    assert_eq!(rejection(""), ErrorKind::InvalidPath);
    assert_eq!(rejection("store.book"), ErrorKind::InvalidPath);
    assert_eq!(rejection("$."), ErrorKind::InvalidPath);
    assert_eq!(rejection("$.."), ErrorKind::InvalidPath);
    assert_eq!(rejection("$.a."), ErrorKind::InvalidPath);
    assert_eq!(rejection("$.x["), ErrorKind::InvalidPath);
    assert_eq!(rejection("$.x[]"), ErrorKind::InvalidPath);
    assert_eq!(rejection("$.x[1"), ErrorKind::InvalidPath);
    assert_eq!(rejection("$.x['open"), ErrorKind::InvalidPath);
    assert_eq!(rejection("$x"), ErrorKind::InvalidPath);
}

#[test]
fn test_unsupported_operators_are_distinguished() {
    assert_eq!(
        rejection("$.x[?(@.active)]"),
        ErrorKind::UnsupportedPathOperator
    );
    assert_eq!(rejection("$.x[0,2]"), ErrorKind::UnsupportedPathOperator);
    assert_eq!(rejection("$.x[-1]"), ErrorKind::UnsupportedPathOperator);
    assert_eq!(rejection("$.x[0:4:2]"), ErrorKind::UnsupportedPathOperator);
}

#[test]
fn test_validate_shares_compile_rules() {
    assert!(PathCompiler::validate("$.a.b[3].c").is_ok());
    assert!(PathCompiler::validate("$..x").is_ok());
    assert!(PathCompiler::validate("$!").is_err());
}
