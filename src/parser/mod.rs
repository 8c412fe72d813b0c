//! Mini-language syntax checking
//!
//! This module decides whether source text conforms to the grammar of the
//! mini-language:
//! - [`lexer`]: tokenization (source text → tokens)
//! - [`parse`]: the backtracking cursor and the accept/reject entry point
//! - [`statements`] / [`expressions`]: the grammar procedures
//!
//! # Accepted language
//!
//! A miniature imperative language: `int`/`float` declarations with comma
//! chains, assignments, `if`/`else`, `while`, braced blocks, arithmetic over
//! `+ - * / %`, and boolean conditions built from `== != && ||` over
//! comparisons (`> < >= <=`). Every statement, blocks included, carries a
//! trailing `;`.
//!
//! # Implementation
//!
//! Hand-written recursive descent with transactional backtracking. Grammar
//! procedures return `bool` and restore the cursor on failure; there is no
//! AST, no error type, and no diagnostic channel.

pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;
