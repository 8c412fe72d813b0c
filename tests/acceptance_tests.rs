// Black-box acceptance tests: source text in, verdict out.

use std::fs;
use std::path::Path;

use rstest::rstest;

use minicheck::accepts;
use minicheck::parser::lexer::{render, tokenize};
use minicheck::parser::parse::Parser;

#[rstest]
#[case::assignment("x = 1 ;")]
#[case::declaration("int x ;")]
#[case::declaration_chain("int x , y , z ;")]
#[case::float_declaration("float f ;")]
#[case::float_literal("x = 3.14 ;")]
#[case::empty_block("{ } ;")]
#[case::block_with_body("{ x = 1 ; y = 2 ; } ;")]
#[case::nested_blocks("{ { } ; { x = 1 ; } ; } ;")]
#[case::if_double_semicolon("if ( x > 1 ) y = 2 ; ;")]
#[case::if_else("if ( x == 1 ) y = 2 ; else y = 3 ; ;")]
#[case::while_loop("while ( x <= 10 ) x = x + 1 ; ;")]
#[case::while_with_block("while ( i < 3 ) { i = i + 1 ; } ; ;")]
#[case::nested_arithmetic("x = ( 1 + 2 ) * 3 % 4 ;")]
#[case::boolean_chain("if ( x == 1 && y == 2 || z > 3 ) x = 0 ; ;")]
#[case::relational_chain("if ( a < b ) c = 1 ; ;")]
#[case::keyword_as_identifier("if = 3 ;")]
fn accepted(#[case] source: &str) {
    assert!(accepts(source), "expected accept: {:?}", source);
}

#[rstest]
#[case::missing_semicolon("x = 1")]
#[case::single_semicolon_if("if ( x > 1 ) y = 2 ;")]
#[case::single_semicolon_while("while ( x < 3 ) x = x + 1 ;")]
#[case::declaration_missing_comma("int x y ;")]
#[case::declaration_trailing_comma("int x , ;")]
#[case::trailing_token("x = 1 ; foo")]
#[case::two_statements("x = 1 ; y = 2 ;")]
#[case::statement_level_boolean("x == 1 && y == 2 ;")]
#[case::bare_block("{ }")]
#[case::unclosed_block("{ x = 1 ; ;")]
#[case::parenthesized_boolean("if ( ( x == 1 ) && ( y == 2 ) ) z = 3 ; ;")]
#[case::truncated_float("x = 3. ;")]
#[case::leading_dot_float("x = .5 ;")]
#[case::dangling_operator("x = 1 + ;")]
#[case::unknown_word("x = @ ;")]
#[case::alphanumeric_word("x = y2 ;")]
#[case::unspaced_comma("int x, y ;")]
#[case::assignment_without_target("= 1 ;")]
#[case::empty("")]
fn rejected(#[case] source: &str) {
    assert!(!accepts(source), "expected reject: {:?}", source);
}

/// The two-step pipeline the library exposes is exactly what `accepts`
/// wraps: tokens from the lexer, verdict from a fresh parser.
#[test]
fn pipeline_matches_convenience_wrapper() {
    for source in ["if ( x > 1 ) { y = y * 2 ; } ; ;", "int x y ;"] {
        let mut parser = Parser::new(tokenize(source));
        assert_eq!(parser.parse(), accepts(source), "pipelines disagree on {:?}", source);
    }
}

/// Canonical spaced text survives a render/tokenize cycle unchanged.
#[test]
fn canonical_text_is_stable() {
    let source = "while ( low < high ) { low = low + 1 ; } ; ;";
    let tokens = tokenize(source);

    assert_eq!(render(&tokens), source);
    assert_eq!(tokenize(&render(&tokens)), tokens);
}

/// Demo sources are read the way the original driver reads files: lines
/// joined with single spaces before tokenization.
fn read_demo(name: &str) -> String {
    let path = Path::new("demos").join(name);
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    contents.lines().collect::<Vec<_>>().join(" ")
}

#[test]
fn demo_program_is_accepted() {
    assert!(accepts(&read_demo("accepted.mini")));
}

#[test]
fn demo_program_with_missing_comma_is_rejected() {
    assert!(!accepts(&read_demo("rejected.mini")));
}
