// tests/integration_tests.rs

use tel_lang::LiftOptions;
use tel_lang::cli::{
    CheckOptions, CheckResult, CliError, execute_ast, execute_check, execute_format,
};

fn check(expression: &str, syntax_only: bool) -> Result<CheckResult, CliError> {
    execute_check(&CheckOptions {
        expression: expression.to_string(),
        syntax_only,
        ..Default::default()
    })
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_valid_expression() {
    match check("spend > 10 AND fb|clicks BETWEEN 1 AND 5", false).unwrap() {
        CheckResult::Valid(node) => {
            assert_eq!(
                node.to_string(),
                "((spend > 10) AND ((fb|clicks >= 1) AND (fb|clicks <= 5)))"
            );
        }
        other => panic!("expected valid result, got {:?}", other),
    }
}

#[test]
fn test_check_empty_expression() {
    assert!(matches!(check("  ", false).unwrap(), CheckResult::Empty));
}

#[test]
fn test_check_syntax_only_skips_lifting() {
    // Arithmetic parses but does not lift
    assert!(matches!(
        check("a + 1", true).unwrap(),
        CheckResult::SyntaxValid
    ));
    assert!(matches!(
        check("a + 1", false),
        Err(CliError::Tel(tel_lang::TelError::UnsupportedExpression(_)))
    ));
}

#[test]
fn test_check_syntax_error_message() {
    let err = check("a = (1", false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error: Unexpected symbol \"<EOF>\" on line 1, position 7"
    );
}

#[test]
fn test_check_respects_max_depth() {
    let options = CheckOptions {
        expression: "((((x))))".to_string(),
        syntax_only: true,
        options: LiftOptions::default().with_max_depth(2),
    };
    assert!(matches!(
        execute_check(&options),
        Err(CliError::Tel(tel_lang::TelError::NestingTooDeep { limit: 2 }))
    ));
}

// ============================================================================
// format
// ============================================================================

#[test]
fn test_format_canonical_text() {
    let text = execute_format(
        "not (active) or region not in ('eu')",
        &LiftOptions::default(),
    )
    .unwrap();
    assert_eq!(text, "(NOT active OR NOT (region IN 'eu'))");
}

#[test]
fn test_format_empty_expression() {
    let err = execute_format("", &LiftOptions::default()).unwrap_err();
    assert!(matches!(err, CliError::EmptyExpression));
    assert_eq!(err.to_string(), "Expression is empty");
}

// ============================================================================
// ast
// ============================================================================

#[test]
fn test_ast_compact_json() {
    let json = execute_ast("x = -1", &LiftOptions::default(), false).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"kind":"Expr","operator":"=","args":["#,
            r#"{"kind":"Taxon","slug":"x","namespace":null,"is_optional":false,"tag":null},"#,
            r#"{"kind":"Literal","value":-1,"raw_text":"-1"}]}"#
        )
    );
}

#[test]
fn test_ast_pretty_json() {
    let json = execute_ast("null", &LiftOptions::default(), true).unwrap();
    assert_eq!(
        json,
        "{\n  \"kind\": \"Literal\",\n  \"value\": null,\n  \"raw_text\": \"null\"\n}"
    );
}

#[test]
fn test_ast_function_arguments() {
    let json = execute_ast("f(n = 'a')", &LiftOptions::default(), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["kind"], "Function");
    assert_eq!(value["args"][0]["name"], "n");
    assert_eq!(value["args"][0]["value"]["value"], "a");
}

#[test]
fn test_ast_reports_lift_errors() {
    let err = execute_ast("x BETWEEN 1", &LiftOptions::default(), false).unwrap_err();
    assert!(matches!(
        err,
        CliError::Tel(tel_lang::TelError::MalformedBetween(_))
    ));
}
