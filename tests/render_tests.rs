// tests/render_tests.rs

use rstest::rstest;
use tel_lang::{
    Argument, Expr, Function, Literal, LiteralValue, Node, Operator, Taxon, lift_program, render,
};

fn format(source: &str) -> String {
    render(&lift_program(source).unwrap().expect("expression"))
}

fn taxon(slug: &str) -> Node {
    Taxon::new(slug).into()
}

// ============================================================================
// Node Kinds
// ============================================================================

#[test]
fn test_literal_renders_raw_text() {
    let node: Node = Literal::new(LiteralValue::Integer(10), "1_0 (raw)").into();
    assert_eq!(render(&node), "1_0 (raw)");
}

#[rstest]
#[case(Taxon::new("slug"), "slug")]
#[case(Taxon { namespace: Some("ns".into()), ..Taxon::new("slug") }, "ns|slug")]
#[case(Taxon { tag: Some("t".into()), ..Taxon::new("slug") }, "slug:t")]
#[case(Taxon { is_optional: true, ..Taxon::new("slug") }, "?slug")]
fn test_taxon_segments(#[case] taxon: Taxon, #[case] expected: &str) {
    assert_eq!(render(&Node::from(taxon)), expected);
}

#[test]
fn test_taxon_parts_needing_quotes() {
    let node: Node = Taxon {
        slug: "total spend".into(),
        namespace: Some("and".into()),
        is_optional: false,
        tag: Some("say \"hi\"".into()),
    }
    .into();
    assert_eq!(render(&node), r#""and"|"total spend":"say \"hi\"""#);
}

#[test]
fn test_function_arguments() {
    let node: Node = Function {
        name: "f".into(),
        args: vec![
            Argument::positional(taxon("a")),
            Argument::named("n", Literal::new(LiteralValue::Integer(1), "1").into()),
        ],
    }
    .into();
    assert_eq!(render(&node), "f(a,n=1)");
}

#[test]
fn test_function_without_arguments() {
    let node: Node = Function {
        name: "now".into(),
        args: vec![],
    }
    .into();
    assert_eq!(render(&node), "now()");
}

#[test]
fn test_unary_padding() {
    let not: Node = Expr::unary(Operator::Not, taxon("x")).into();
    let minus: Node = Expr::unary(Operator::Minus, taxon("x")).into();
    let plus: Node = Expr::unary(Operator::Plus, taxon("x")).into();

    assert_eq!(render(&not), "NOT x");
    assert_eq!(render(&minus), "-x");
    assert_eq!(render(&plus), "+x");
}

#[test]
fn test_binary_is_fully_parenthesized() {
    let node: Node = Expr::binary(
        Operator::Or,
        Expr::binary(Operator::Eq, taxon("a"), taxon("b")).into(),
        taxon("c"),
    )
    .into();
    assert_eq!(render(&node), "((a = b) OR c)");
}

#[test]
fn test_display_matches_render() {
    let node = lift_program("NOT x IN (1)").unwrap().unwrap();
    assert_eq!(node.to_string(), render(&node));
}

// ============================================================================
// Canonical Form
// ============================================================================

#[rstest]
#[case("a and b", "(a AND b)")]
#[case("((a = 1))", "(a = 1)")]
#[case("x not in (1)", "NOT (x IN 1)")]
#[case("x is not null", "NOT (x IS null)")]
#[case("name like 'a%'", "(name LIKE 'a%')")]
#[case("+x > -3", "(x > -3)")]
#[case("-x", "-x")]
#[case("NOT NOT true", "true")]
#[case("f( a ,b=2 )", "f(a,b=2)")]
#[case("x between -1 and +1", "((x >= -1) AND (x <= 1))")]
#[case("a = (NOT b)", "(a = NOT b)")]
#[case("-(NOT a)", "-NOT a")]
fn test_canonical_form(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(format(source), expected);
}

#[rstest]
#[case("a AND b OR NOT c = 1")]
#[case("?ns|slug:tag IN ('a')")]
#[case("x NOT IN (1)")]
#[case("x BETWEEN 1 AND 10")]
#[case("x NOT BETWEEN 1 AND 10")]
#[case("f(period = 'day', g(x)) >= -2.5")]
#[case(r#""my ns"|slug = "a\"b""#)]
#[case("- -x <> 1e3")]
#[case("a = (NOT b)")]
#[case("x IN (NOT y)")]
#[case("-(NOT a)")]
#[case("name LIKE (NOT p)")]
#[case("x BETWEEN (NOT a) AND -(NOT b)")]
#[case("f(n = (NOT a)) >= NOT NOT b")]
fn test_canonical_form_is_stable(#[case] source: &str) {
    let once = format(source);
    let twice = format(&once);
    assert_eq!(once, twice);
    assert_eq!(
        lift_program(&once).unwrap(),
        lift_program(&twice).unwrap()
    );
}
