//! Expression productions
//!
//! Arithmetic:
//!
//! ```text
//! expr   ::= term ( ( "+" | "-" ) term )*
//! term   ::= factor ( ( "*" | "/" | "%" ) factor )*
//! factor ::= identifier | int_lit | float_lit | "(" expr ")"
//! ```
//!
//! Boolean:
//!
//! ```text
//! bool_expr  ::= equality
//! equality   ::= conjunction ( ( "==" | "!=" ) conjunction )*
//! conjunction ::= disjunction ( "&&" disjunction )*
//! disjunction ::= comparison ( "||" comparison )*
//! comparison ::= expr ( ( ">" | "<" | ">=" | "<=" ) expr )*
//! ```
//!
//! The boolean chain is structural, not conventional precedence climbing:
//! `disjunction` bottoms out in arithmetic `expr`, so boolean operators can
//! never nest inside a parenthesized subexpression — `( x == 1 )` is not a
//! factor. Once a repetition operator has been consumed, a failing right
//! operand fails the whole production; the loop does not un-consume the
//! operator and settle for the shorter match.

use crate::parser::lexer::Token;
use crate::parser::parse::Parser;

impl Parser {
    pub(crate) fn parse_expression(&mut self) -> bool {
        let start = self.position;

        if !self.parse_term() {
            self.position = start;
            return false;
        }
        while self.match_token(&Token::Plus) || self.match_token(&Token::Minus) {
            if !self.parse_term() {
                self.position = start;
                return false;
            }
        }
        true
    }

    pub(crate) fn parse_term(&mut self) -> bool {
        let start = self.position;

        if !self.parse_factor() {
            self.position = start;
            return false;
        }
        while self.match_token(&Token::Multiply)
            || self.match_token(&Token::Divide)
            || self.match_token(&Token::Modulo)
        {
            if !self.parse_factor() {
                self.position = start;
                return false;
            }
        }
        true
    }

    /// factor: literal and identifier acceptance is by kind, not spelling.
    pub(crate) fn parse_factor(&mut self) -> bool {
        let start = self.position;

        if self.match_identifier() || self.match_literal() {
            return true;
        }

        if self.match_token(&Token::LeftParen)
            && self.parse_expression()
            && self.match_token(&Token::RightParen)
        {
            return true;
        }

        self.position = start;
        false
    }

    /// bool_expr: alias for the outermost equality chain.
    pub(crate) fn parse_bool_expression(&mut self) -> bool {
        self.parse_equality()
    }

    pub(crate) fn parse_equality(&mut self) -> bool {
        let start = self.position;

        if !self.parse_conjunction() {
            self.position = start;
            return false;
        }
        while self.match_token(&Token::EqualTo) || self.match_token(&Token::NotEqual) {
            if !self.parse_conjunction() {
                self.position = start;
                return false;
            }
        }
        true
    }

    pub(crate) fn parse_conjunction(&mut self) -> bool {
        let start = self.position;

        if !self.parse_disjunction() {
            self.position = start;
            return false;
        }
        while self.match_token(&Token::And) {
            if !self.parse_disjunction() {
                self.position = start;
                return false;
            }
        }
        true
    }

    pub(crate) fn parse_disjunction(&mut self) -> bool {
        let start = self.position;

        if !self.parse_comparison() {
            self.position = start;
            return false;
        }
        while self.match_token(&Token::Or) {
            if !self.parse_comparison() {
                self.position = start;
                return false;
            }
        }
        true
    }

    pub(crate) fn parse_comparison(&mut self) -> bool {
        let start = self.position;

        if !self.parse_expression() {
            self.position = start;
            return false;
        }
        while self.match_token(&Token::Greater)
            || self.match_token(&Token::Less)
            || self.match_token(&Token::GreaterEqual)
            || self.match_token(&Token::LessEqual)
        {
            if !self.parse_expression() {
                self.position = start;
                return false;
            }
        }
        true
    }
}
