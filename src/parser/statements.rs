//! Statement productions
//!
//! ```text
//! stmt         ::= ( if_stmt | while_stmt | block | assign_stmt | declare_stmt ) ";"
//! if_stmt      ::= "if" "(" bool_expr ")" stmt [ "else" stmt ]
//! while_stmt   ::= "while" "(" bool_expr ")" stmt
//! block        ::= "{" stmt* "}"
//! assign_stmt  ::= identifier "=" expr
//! declare_stmt ::= ( "int" | "float" ) identifier ( "," identifier )*
//! ```
//!
//! Every `stmt` alternative — the block form included — is followed by the
//! wrapping rule's semicolon. The body of an `if` or `while` is itself a
//! full `stmt` carrying its own semicolon, so a conditional or loop used as
//! a statement ends in two semicolons in sequence: the inner statement's,
//! then the wrapper's.
//!
//! All methods are `pub(crate)` extensions of [`Parser`] returning `bool`
//! and restoring the cursor on failure.

use crate::parser::lexer::Token;
use crate::parser::parse::Parser;

impl Parser {
    /// stmt: one of the five alternatives followed by a semicolon.
    pub(crate) fn parse_statement(&mut self) -> bool {
        let start = self.position;

        let matched = self.parse_if_statement()
            || self.parse_while_statement()
            || self.parse_block()
            || self.parse_assignment()
            || self.parse_declaration();

        if matched && self.match_token(&Token::Semicolon) {
            return true;
        }

        self.position = start;
        false
    }

    /// if_stmt: the branch bodies are full `stmt` productions. An `else`
    /// that is present but not followed by a valid statement fails the whole
    /// production rather than parsing as an if without else.
    pub(crate) fn parse_if_statement(&mut self) -> bool {
        let start = self.position;

        if self.match_keyword("if")
            && self.match_token(&Token::LeftParen)
            && self.parse_bool_expression()
            && self.match_token(&Token::RightParen)
            && self.parse_statement()
        {
            if self.match_keyword("else") && !self.parse_statement() {
                self.position = start;
                return false;
            }
            return true;
        }

        self.position = start;
        false
    }

    pub(crate) fn parse_while_statement(&mut self) -> bool {
        let start = self.position;

        if self.match_keyword("while")
            && self.match_token(&Token::LeftParen)
            && self.parse_bool_expression()
            && self.match_token(&Token::RightParen)
            && self.parse_statement()
        {
            return true;
        }

        self.position = start;
        false
    }

    /// block: zero or more statements between braces.
    pub(crate) fn parse_block(&mut self) -> bool {
        let start = self.position;

        if self.match_token(&Token::LeftBracket) {
            while self.parse_statement() {}
            if self.match_token(&Token::RightBracket) {
                return true;
            }
        }

        self.position = start;
        false
    }

    pub(crate) fn parse_assignment(&mut self) -> bool {
        let start = self.position;

        if self.match_identifier() && self.match_token(&Token::Equals) && self.parse_expression() {
            return true;
        }

        self.position = start;
        false
    }

    /// declare_stmt: the separator is the raw `,` word. The comma is not in
    /// the delimiter table, so spaced input hands it to the parser
    /// unclassified; a name missing after a consumed comma fails the whole
    /// declaration.
    pub(crate) fn parse_declaration(&mut self) -> bool {
        let start = self.position;

        if (self.match_keyword("int") || self.match_keyword("float")) && self.match_identifier() {
            while self.match_raw(",") {
                if !self.match_identifier() {
                    self.position = start;
                    return false;
                }
            }
            return true;
        }

        self.position = start;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    fn parser(source: &str) -> Parser {
        Parser::new(tokenize(source))
    }

    #[test]
    fn test_statement_requires_semicolon() {
        assert!(parser("x = 1 ;").parse_statement());
        assert!(!parser("x = 1").parse_statement());
    }

    #[test]
    fn test_conditional_needs_two_semicolons() {
        // the inner statement owns the first semicolon, the wrapping stmt
        // rule demands the second
        assert!(parser("if ( x > 1 ) y = 2 ; ;").parse());
        assert!(!parser("if ( x > 1 ) y = 2 ;").parse());
    }

    #[test]
    fn test_else_branch() {
        assert!(parser("if ( x == 1 ) y = 2 ; else y = 3 ; ;").parse());
        // dangling else with no statement fails the whole conditional
        assert!(!parser("if ( x == 1 ) y = 2 ; else ;").parse());
    }

    #[test]
    fn test_while_loop() {
        assert!(parser("while ( x <= 10 ) x = x + 1 ; ;").parse());
        assert!(!parser("while ( x <= 10 ) x = x + 1 ;").parse());
    }

    #[test]
    fn test_block_forms() {
        assert!(parser("{ } ;").parse());
        assert!(parser("{ x = 1 ; y = 2 ; } ;").parse());
        // a block not followed by a semicolon is not a statement
        assert!(!parser("{ }").parse());
        assert!(!parser("{ x = 1 ;").parse_statement());
    }

    #[test]
    fn test_declaration_chaining() {
        assert!(parser("int x ;").parse());
        assert!(parser("float f ;").parse());
        assert!(parser("int x , y , z ;").parse());
        assert!(!parser("int x y ;").parse());
        assert!(!parser("int x , ;").parse());
        assert!(!parser("int ;").parse());
    }

    #[test]
    fn test_keywords_are_not_reserved() {
        // `if` fails as a conditional, then matches as a plain identifier
        assert!(parser("if = 3 ;").parse());
        assert!(parser("int while ;").parse());
    }

    #[test]
    fn test_failed_statement_restores_cursor() {
        let mut p = parser("if ( x > 1 ) y = 2 ;");
        assert!(!p.parse_statement());
        assert_eq!(p.position(), 0);

        let mut p = parser("int x y ;");
        assert!(!p.parse_statement());
        assert_eq!(p.position(), 0);
    }

    #[test]
    fn test_nested_blocks() {
        assert!(parser("{ { } ; { x = 1 ; } ; } ;").parse());
        assert!(parser("while ( i < 3 ) { i = i + 1 ; } ; ;").parse());
    }
}
