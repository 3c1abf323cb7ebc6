use jpath::cli::{
    CliError, GetOptions, SetOptions, TokensOptions, execute_get, execute_set, execute_tokens,
    to_output,
};
use jpath::{SyntaxErrorKind, WriteError};
use serde_json::json;

const DOC: &str = r#"{"user": {"name": "Ada", "roles": ["admin", "editor"]}}"#;

fn get_opts(path: &str, input: Option<&str>) -> GetOptions {
    GetOptions {
        path: path.to_string(),
        input: input.map(str::to_string),
    }
}

fn set_opts(path: &str, value: &str, string: bool) -> SetOptions {
    SetOptions {
        path: path.to_string(),
        value: value.to_string(),
        string,
        input: Some(DOC.to_string()),
    }
}

// ============================================================================
// get
// ============================================================================

#[test]
fn test_get_value() {
    let result = execute_get(&get_opts("user.roles[1]", Some(DOC))).unwrap();
    assert_eq!(result, json!("editor"));
}

#[test]
fn test_get_subtree() {
    let result = execute_get(&get_opts("user", Some(DOC))).unwrap();
    assert_eq!(result, json!({"name": "Ada", "roles": ["admin", "editor"]}));
}

#[test]
fn test_get_not_found() {
    let err = execute_get(&get_opts("user.email", Some(DOC))).unwrap_err();
    assert!(matches!(err, CliError::NotFound(ref p) if p == "user.email"));
    assert_eq!(err.to_string(), "No value at path 'user.email'");
}

#[test]
fn test_get_reports_syntax_error() {
    let err = execute_get(&get_opts("user..name", Some(DOC))).unwrap_err();
    match err {
        CliError::Syntax(e) => assert_eq!(e.kind, SyntaxErrorKind::EmptyKey),
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_get_syntax_checked_before_input() {
    let err = execute_get(&get_opts("a[", None)).unwrap_err();
    assert!(matches!(err, CliError::Syntax(_)));
}

#[test]
fn test_get_no_input() {
    let err = execute_get(&get_opts("user", None)).unwrap_err();
    assert!(matches!(err, CliError::NoInput));
}

#[test]
fn test_get_invalid_json() {
    let err = execute_get(&get_opts("user", Some("{not json"))).unwrap_err();
    assert!(matches!(err, CliError::Json(_)));
    assert!(err.to_string().starts_with("Invalid JSON: "));
}

// ============================================================================
// set
// ============================================================================

#[test]
fn test_set_json_value() {
    let result = execute_set(&set_opts("user.address.city", r#""Kampala""#, false)).unwrap();
    assert_eq!(result["user"]["address"], json!({"city": "Kampala"}));
    assert_eq!(result["user"]["name"], json!("Ada"));
}

#[test]
fn test_set_structured_value() {
    let result = execute_set(&set_opts("user.roles[3]", r#"{"id": 9}"#, false)).unwrap();
    assert_eq!(
        result["user"]["roles"],
        json!(["admin", "editor", null, {"id": 9}])
    );
}

#[test]
fn test_set_string_value() {
    let result = execute_set(&set_opts("user.name", "not json", true)).unwrap();
    assert_eq!(result["user"]["name"], json!("not json"));
}

#[test]
fn test_set_rejects_bad_value() {
    let err = execute_set(&set_opts("user.name", "not json", false)).unwrap_err();
    assert!(matches!(err, CliError::Json(_)));
}

#[test]
fn test_set_rejects_bad_path() {
    let err = execute_set(&set_opts("user.roles[-1]", "1", false)).unwrap_err();
    match err {
        CliError::Syntax(e) => assert_eq!(e.kind, SyntaxErrorKind::SignedIndex),
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_set_rejects_unallocatable_index() {
    let path = format!("user.roles[{}]", usize::MAX);
    let err = execute_set(&set_opts(&path, "1", false)).unwrap_err();
    assert!(matches!(err, CliError::Write(WriteError::Capacity { .. })));
}

#[test]
fn test_set_preserves_member_order() {
    let result = execute_set(&set_opts("user.name", "1", false)).unwrap();
    assert_eq!(
        to_output(&result, false).unwrap(),
        r#"{"user":{"name":1,"roles":["admin","editor"]}}"#
    );
}

// ============================================================================
// tokens
// ============================================================================

#[test]
fn test_tokens_list() {
    let result = execute_tokens(&TokensOptions {
        path: r#"user.roles[1]["a.b"]"#.to_string(),
        canonical: false,
    })
    .unwrap();

    assert_eq!(
        result,
        json!([{"key": "user"}, {"key": "roles"}, {"index": 1}, {"key": "a.b"}])
    );
}

#[test]
fn test_tokens_canonical() {
    let result = execute_tokens(&TokensOptions {
        path: r#"a.[ 1 ]["b"][" c"]"#.to_string(),
        canonical: true,
    })
    .unwrap();

    assert_eq!(result, json!("a[1].b. c"));
}

#[test]
fn test_pretty_output() {
    let output = to_output(&json!({"a": [1]}), true).unwrap();
    assert_eq!(output, "{\n  \"a\": [\n    1\n  ]\n}");
}
