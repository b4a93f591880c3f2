//! logos-based lexer for arbitrary (non-token) CSS literal values.
//!
//! A literal is accepted only if it lexes to exactly one token of a kind the
//! property's category allows. `"227px"`, `"#ff00aa"` and `"calc(100% - 2rem)"`
//! are single tokens; `"1px solid"` or `"10foo"` are not.
//!
//! Token priority follows logos rules (longest match, then definition order):
//! - `10px` matches [`Token::Dimension`], not `Number` + `Ident`
//! - `rgb(0 0 0)` matches [`Token::Function`], not `Ident` + garbage; its
//!   arguments are consumed up to the matching `)` by a callback

use logos::Logos;

/// Literal value token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80`.
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Function call with balanced arguments: `calc(100% - 2rem)`, `var(--gap)`,
    /// `calc((100% - 2rem) / 3)`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9-]*\(", function_arguments)]
    Function,

    /// Number with a length or percentage unit: `10px`, `2.5rem`, `-1em`, `50%`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)(px|rem|em|%|vw|vh|vmin|vmax|dvh|svh|ch|ex|pt|fr)")]
    Dimension,

    /// Unitless number, possibly negative.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)")]
    Number,

    /// Keyword or named color.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,
}

/// Consume a function's arguments up to the matching `)`.
///
/// The lexer has already consumed the opening `(`. Unbalanced input is a lex error.
fn function_arguments(lex: &mut logos::Lexer<Token>) -> bool {
    let mut depth = 1usize;
    for (i, c) in lex.remainder().char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    lex.bump(i + 1);
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// Which literal grammar a category accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Lengths and percentages, unitless `0`, `auto`, and length-valued functions.
    Length,
    /// Hex colors, color functions, and named colors.
    Color,
    /// Unitless numbers or lengths (line-height).
    Number,
    /// Integers (z-index, numeric font-weight).
    Integer,
}

const LENGTH_FUNCTIONS: &[&str] = &["calc", "var", "min", "max", "clamp", "env"];
const COLOR_FUNCTIONS: &[&str] = &["rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color-mix", "var"];

/// Tokenize a literal into `(Token, text)` pairs.
///
/// Returns `None` if any part of the input fails to lex.
pub fn tokenize(input: &str) -> Option<Vec<(Token, &str)>> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| result.ok().map(|token| (token, &input[span])))
        .collect()
}

impl LiteralKind {
    /// Returns `true` if `raw` is a well-formed literal of this kind.
    pub fn accepts(self, raw: &str) -> bool {
        let Some(tokens) = tokenize(raw) else {
            return false;
        };
        let [(token, text)] = tokens.as_slice() else {
            return false;
        };
        let (token, text) = (*token, *text);

        match self {
            LiteralKind::Length => match token {
                Token::Dimension => true,
                Token::Number => is_zero(text),
                Token::Ident => text == "auto",
                Token::Function => function_in(text, LENGTH_FUNCTIONS),
                Token::HexColor => false,
            },
            LiteralKind::Color => match token {
                Token::HexColor => matches!(text.len() - 1, 3 | 4 | 6 | 8),
                Token::Function => function_in(text, COLOR_FUNCTIONS),
                Token::Ident => text.chars().all(|c| c.is_ascii_alphabetic()),
                Token::Dimension | Token::Number => false,
            },
            LiteralKind::Number => match token {
                Token::Number | Token::Dimension => true,
                Token::Function => function_in(text, LENGTH_FUNCTIONS),
                Token::Ident | Token::HexColor => false,
            },
            LiteralKind::Integer => match token {
                Token::Number => !text.contains('.'),
                Token::Function => function_in(text, LENGTH_FUNCTIONS),
                Token::Dimension | Token::Ident | Token::HexColor => false,
            },
        }
    }
}

fn is_zero(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(|n| n == 0.0)
}

fn function_in(text: &str, names: &[&str]) -> bool {
    text.split_once('(')
        .is_some_and(|(name, _)| names.iter().any(|n| n.eq_ignore_ascii_case(name)))
}
