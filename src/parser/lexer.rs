//! Lexer (tokenizer) for mini-language source text
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Tokenization never fails: a word that matches no literal pattern
//! and no symbol is carried through as [`Token::Raw`] and rejected later by
//! the grammar.
//!
//! The scanner spreads every fixed symbol apart with whitespace, splits the
//! result into words, and classifies each word independently. Two-character
//! operators (`>=`, `<=`, `==`, `!=`, `&&`, `||`) are matched before the
//! single-character pass can split them.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// All token variants produced by the lexer.
///
/// Identifier and literal variants carry their original text; the fixed
/// symbols are self-describing unit variants. Keywords (`int`, `float`,
/// `if`, `while`, `else`) are ordinary [`Token::Ident`] tokens — the parser
/// matches them by lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Literals and identifiers
    Ident(String),
    IntLit(String),
    FloatLit(String),

    // Brackets
    LeftParen,    // (
    RightParen,   // )
    LeftBracket,  // {
    RightBracket, // }

    // Punctuation
    Semicolon, // ;
    Equals,    // =

    // Arithmetic
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %

    // Comparison
    Greater,      // >
    Less,         // <
    GreaterEqual, // >=
    LessEqual,    // <=
    EqualTo,      // ==
    NotEqual,     // !=

    // Logical
    And, // &&
    Or,  // ||

    /// A word that matched no pattern and no symbol. The grammar rejects it
    /// wherever it appears, except the raw `,` accepted between declared
    /// names.
    Raw(String),
}

impl Token {
    /// The surface spelling of this token: the lexeme for identifier,
    /// literal and raw kinds, the fixed symbol text otherwise.
    pub fn text(&self) -> &str {
        match self {
            Token::Ident(s) | Token::IntLit(s) | Token::FloatLit(s) | Token::Raw(s) => s,
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBracket => "{",
            Token::RightBracket => "}",
            Token::Semicolon => ";",
            Token::Equals => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Multiply => "*",
            Token::Divide => "/",
            Token::Modulo => "%",
            Token::Greater => ">",
            Token::Less => "<",
            Token::GreaterEqual => ">=",
            Token::LessEqual => "<=",
            Token::EqualTo => "==",
            Token::NotEqual => "!=",
            Token::And => "&&",
            Token::Or => "||",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) => write!(f, "identifier '{}'", s),
            Token::IntLit(s) => write!(f, "int literal {}", s),
            Token::FloatLit(s) => write!(f, "float literal {}", s),
            Token::Raw(s) => write!(f, "raw word '{}'", s),
            other => write!(f, "'{}'", other.text()),
        }
    }
}

/// Symbol spelling → token kind, for word classification.
static SYMBOL_TABLE: Lazy<FxHashMap<&'static str, Token>> = Lazy::new(|| {
    [
        ("(", Token::LeftParen),
        (")", Token::RightParen),
        ("{", Token::LeftBracket),
        ("}", Token::RightBracket),
        (";", Token::Semicolon),
        ("+", Token::Plus),
        ("-", Token::Minus),
        ("*", Token::Multiply),
        ("/", Token::Divide),
        ("%", Token::Modulo),
        (">", Token::Greater),
        ("<", Token::Less),
        (">=", Token::GreaterEqual),
        ("<=", Token::LessEqual),
        ("==", Token::EqualTo),
        ("!=", Token::NotEqual),
        ("&&", Token::And),
        ("||", Token::Or),
        ("=", Token::Equals),
    ]
    .into_iter()
    .collect()
});

/// Tokenize the entire input.
///
/// Never fails; see [`Token::Raw`] for what happens to unrecognized text.
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = spread_symbols(source)
        .split_whitespace()
        .map(classify)
        .collect();
    log::debug!("tokenized {} tokens", tokens.len());
    tokens
}

/// Join surface spellings with single spaces: the canonical spaced form,
/// which [`tokenize`] maps back onto the same token sequence.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two-character operators must be recognized before the single-character
/// pass could split them into two one-character tokens.
fn two_char_symbol(a: char, b: char) -> bool {
    matches!(
        (a, b),
        ('>', '=') | ('<', '=') | ('=', '=') | ('!', '=') | ('&', '&') | ('|', '|')
    )
}

fn one_char_symbol(ch: char) -> bool {
    matches!(
        ch,
        '(' | ')' | '{' | '}' | ';' | '+' | '-' | '*' | '/' | '%' | '>' | '<' | '='
    )
}

/// Insert whitespace boundaries around every symbol occurrence, longest
/// match first at each position.
fn spread_symbols(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut spaced = String::with_capacity(source.len() + source.len() / 2);
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() && two_char_symbol(chars[i], chars[i + 1]) {
            spaced.push(' ');
            spaced.push(chars[i]);
            spaced.push(chars[i + 1]);
            spaced.push(' ');
            i += 2;
        } else if one_char_symbol(chars[i]) {
            spaced.push(' ');
            spaced.push(chars[i]);
            spaced.push(' ');
            i += 1;
        } else {
            spaced.push(chars[i]);
            i += 1;
        }
    }

    spaced
}

/// Classify one whitespace-delimited word.
///
/// Order matters: the integer check runs before the float check, and both
/// run before the identifier check. A word like `3.14` fails the digits-only
/// integer pattern and lands in the float branch — `.` is not a delimiter,
/// so the word survives splitting intact.
fn classify(word: &str) -> Token {
    if word.bytes().all(|b| b.is_ascii_digit()) {
        return Token::IntLit(word.to_string());
    }
    if is_float_word(word) {
        return Token::FloatLit(word.to_string());
    }
    if word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Token::Ident(word.to_string());
    }
    match SYMBOL_TABLE.get(word) {
        Some(token) => token.clone(),
        None => Token::Raw(word.to_string()),
    }
}

/// `digits '.' digits` over the whole word. `3.`, `.5` and `1.2.3` all fail.
fn is_float_word(word: &str) -> bool {
    match word.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
