//! # minicheck
//!
//! `minicheck` answers one question: does a piece of source text conform to
//! the grammar of a miniature imperative toy language? It is a syntax
//! acceptor, not a compiler front end — the answer is a single boolean, with
//! no parse tree, no diagnostics, and no error locations.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → accept / reject
//! ```
//!
//! 1. [`parser::lexer`] — spreads the fixed symbols apart with whitespace,
//!    splits the text into words, and classifies each word. Tokenization
//!    never fails; unrecognized words pass through and the grammar rejects
//!    them downstream.
//! 2. [`parser::parse`] — recursive descent over the immutable token
//!    sequence with an integer cursor; every grammar procedure backtracks
//!    transactionally on failure.
//!
//! ## Accepted language
//!
//! `int`/`float` declarations with comma chains, assignments, `if`/`else`,
//! `while`, braced blocks, arithmetic over `+ - * / %`, and boolean
//! conditions built from `== != && ||` over comparisons (`> < >= <=`).
//! Every statement — blocks included — carries a trailing `;`, and the body
//! of an `if` or `while` is itself a statement with its own `;`.
//!
//! ```
//! assert!(minicheck::accepts("while ( x <= 10 ) x = x + 1 ; ;"));
//! assert!(minicheck::accepts("int low , high ;"));
//! assert!(!minicheck::accepts("x = 1 ; foo"));
//! ```

pub mod parser;

use parser::lexer::tokenize;
use parser::parse::Parser;

/// Tokenize `source` and run a fresh parser over the result.
///
/// The convenience form of the two-step pipeline; returns the parser's
/// verdict unchanged.
pub fn accepts(source: &str) -> bool {
    Parser::new(tokenize(source)).parse()
}
