//! Tokenizer for infix expressions.
//!
//! The tokenizer is permissive: it never fails. Structural problems are left
//! for the postfix converter to report. Besides splitting the input it
//! rewrites a few shorthand forms into explicit ones:
//!
//! - implicit multiplication: `2(3+4)`, `2pi`, `(a)(b)`, `(a)2`;
//! - unary minus: `-5` is a literal, `-(…)` and `-name` become `(-1 * …)`;
//! - a function name not followed by `(` captures the next operand, so
//!   `abs-3` reads as `abs(-3)`;
//! - unbalanced parentheses are balanced at the ends of the expression.

use crate::functions;
use crate::types::Operator;
use std::fmt;
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal text, possibly with a leading `-`.
    Number(String),
    /// Lowercased function, constant, variable or accessor name.
    Ident(String),
    Operator(Operator),
    Open,
    Close,
    /// A character with no meaning in an expression.
    Unrecognized(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => f.write_str(text),
            Token::Ident(name) => f.write_str(name),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Unrecognized(c) => write!(f, "{c}"),
        }
    }
}

/// Tokenizes `expr`, balancing unmatched parentheses.
pub fn tokenize(expr: &str) -> Vec<Token> {
    tokenize_with(expr, true)
}

/// Tokenizes `expr`. With `auto_balance` off, unmatched parentheses are kept
/// as written and surface later as [`crate::ExprError::MismatchedParentheses`].
pub fn tokenize_with(expr: &str, auto_balance: bool) -> Vec<Token> {
    let chars = expr
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    let mut tokenizer = Tokenizer {
        chars,
        pos: 0,
        tokens: Vec::new(),
        depth: 0,
        closers: Vec::new(),
    };
    tokenizer.run();
    tokenizer.finish(auto_balance);
    trace!(expression = expr, tokens = ?tokenizer.tokens, "tokenized");
    tokenizer.tokens
}

/// Returns true if `name` reads back as exactly one identifier token.
pub(crate) fn is_identifier(name: &str) -> bool {
    matches!(tokenize_with(name, false).as_slice(), [Token::Ident(ident)] if ident == name)
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
    /// Net parenthesis depth, synthetic parentheses included.
    depth: isize,
    /// Depths at which a synthetic `)` is owed once the operand there completes.
    /// Never decreasing from bottom to top.
    closers: Vec<isize>,
}

impl Tokenizer {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn run(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.number(String::new());
            } else if is_name_char(c) {
                self.identifier();
            } else if c == '(' {
                self.advance();
                self.operand_start(false);
                self.push_open();
            } else if c == ')' {
                self.advance();
                self.close();
            } else if let Some(op) = Operator::from_char(c) {
                self.advance();
                self.operator(op);
            } else {
                self.advance();
                self.tokens.push(Token::Unrecognized(c));
            }
        }
    }

    fn finish(&mut self, auto_balance: bool) {
        // Operands that never arrived: close what the tokenizer opened itself.
        while self.closers.pop().is_some() {
            self.tokens.push(Token::Close);
            self.depth -= 1;
        }
        if !auto_balance {
            return;
        }
        if self.depth > 0 {
            self.tokens
                .extend(std::iter::repeat(Token::Close).take(self.depth as usize));
        } else if self.depth < 0 {
            let mut balanced: Vec<Token> = std::iter::repeat(Token::Open)
                .take(self.depth.unsigned_abs())
                .collect();
            balanced.append(&mut self.tokens);
            self.tokens = balanced;
        }
        self.depth = 0;
    }

    /// Reads digits with at most one decimal point, after `prefix`.
    fn number(&mut self, mut text: String) {
        let mut seen_point = false;
        while let Some(c) = self.peek() {
            if c == '.' && !seen_point {
                seen_point = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.advance();
        }
        self.operand_start(true);
        self.tokens.push(Token::Number(text));
        self.operand_end();
    }

    fn identifier(&mut self) {
        let name = self.read_name();
        self.operand_start(false);
        if functions::is_function(&name) {
            self.tokens.push(Token::Ident(name));
            if self.peek() != Some('(') {
                self.push_open();
                self.closers.push(self.depth);
            }
        } else {
            self.tokens.push(Token::Ident(name));
            self.operand_end();
        }
    }

    /// A run of letters and underscores, with `[digits]` index and `.member`
    /// segments attached directly to it (`element[0].left`).
    fn read_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if is_name_char(c) {
                name.push(c);
                self.advance();
            } else if c == '[' {
                let Some(len) = self.index_segment_len() else {
                    break;
                };
                name.extend(&self.chars[self.pos..self.pos + len]);
                self.pos += len;
            } else if c == '.' && self.peek_at(1).is_some_and(is_name_char) {
                name.push(c);
                self.advance();
            } else {
                if c.is_ascii_digit() {
                    self.function_digits(&mut name);
                }
                break;
            }
        }
        name
    }

    /// Extends `name` with the longest run of digits at the cursor that makes
    /// it a built-in function name (`log10`, `log2`). The rest stays a number.
    fn function_digits(&mut self, name: &mut String) {
        let digits = self.chars[self.pos..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count();
        for len in (1..=digits).rev() {
            let mut candidate = name.clone();
            candidate.extend(&self.chars[self.pos..self.pos + len]);
            if functions::is_function(&candidate) {
                *name = candidate;
                self.pos += len;
                return;
            }
        }
    }

    /// Length of a `[digits]` segment at the cursor, if there is one.
    fn index_segment_len(&self) -> Option<usize> {
        let digits = self.chars[self.pos + 1..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count();
        (digits > 0 && self.peek_at(digits + 1) == Some(']')).then_some(digits + 2)
    }

    fn operator(&mut self, op: Operator) {
        if self.expects_operand() {
            match op {
                Operator::Subtract => return self.unary_minus(),
                Operator::Add => return,
                _ => {}
            }
        }
        self.tokens.push(Token::Operator(op));
    }

    fn expects_operand(&self) -> bool {
        matches!(
            self.tokens.last(),
            None | Some(Token::Operator(_)) | Some(Token::Open)
        )
    }

    fn unary_minus(&mut self) {
        match self.peek() {
            Some(c) if c.is_ascii_digit() || c == '.' => self.number("-".to_string()),
            Some(c) if c == '(' || is_name_char(c) => {
                self.push_open();
                self.tokens.push(Token::Number("-1".to_string()));
                self.tokens.push(Token::Operator(Operator::Multiply));
                self.closers.push(self.depth);
            }
            _ => {
                self.tokens.push(Token::Number("-1".to_string()));
                self.tokens.push(Token::Operator(Operator::Multiply));
            }
        }
    }

    fn push_open(&mut self) {
        self.tokens.push(Token::Open);
        self.depth += 1;
    }

    fn close(&mut self) {
        self.tokens.push(Token::Close);
        self.depth -= 1;
        // A written `)` may have closed a synthetic `(` already.
        while self.closers.last().is_some_and(|&d| d > self.depth) {
            self.closers.pop();
        }
        self.operand_end();
    }

    /// Inserts `*` when an operand directly follows another operand.
    fn operand_start(&mut self, number: bool) {
        let implicit = match self.tokens.last() {
            Some(Token::Number(_)) => !number,
            Some(Token::Close) => true,
            Some(Token::Ident(name)) => !functions::is_function(name),
            _ => false,
        };
        if implicit {
            self.tokens.push(Token::Operator(Operator::Multiply));
        }
    }

    fn operand_end(&mut self) {
        while self.closers.last() == Some(&self.depth) {
            self.closers.pop();
            self.tokens.push(Token::Close);
            self.depth -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(expr: &str) -> String {
        render_tokens(&tokenize(expr))
    }

    fn render_tokens(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_whitespace_is_discarded() {
        assert_eq!(render(" 1 2 + 3 "), "12 + 3");
        assert_eq!(render("p i"), "pi");
    }

    #[test]
    fn test_identifiers_are_lowercased() {
        assert_eq!(render("PanelLeft + Margin"), "panelleft + margin");
        assert_eq!(render("Π"), "π");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(render("3.25"), "3.25");
        assert_eq!(render(".5"), ".5");
        assert_eq!(render("1.2.3"), "1.2 .3");
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(render("2(3+4)"), "2 * ( 3 + 4 )");
        assert_eq!(render("2pi"), "2 * pi");
        assert_eq!(render("pi(2)"), "pi * ( 2 )");
        assert_eq!(render("(1)(2)"), "( 1 ) * ( 2 )");
        assert_eq!(render("(1)2"), "( 1 ) * 2");
        assert_eq!(render("(1).5"), "( 1 ) * .5");
        assert_eq!(render("(1)x"), "( 1 ) * x");
    }

    #[test]
    fn test_function_call_is_not_multiplication() {
        assert_eq!(render("sin(x)"), "sin ( x )");
    }

    #[test]
    fn test_function_without_paren_captures_operand() {
        assert_eq!(render("abs-3"), "abs ( -3 )");
        assert_eq!(render("sqrt 4 + 1"), "sqrt ( 4 ) + 1");
        assert_eq!(render("abs-(2)"), "abs ( ( -1 * ( 2 ) ) )");
    }

    #[test]
    fn test_function_names_with_digits() {
        assert_eq!(render("log10(100)"), "log10 ( 100 )");
        assert_eq!(render("log2 8"), "log2 ( 8 )");
        assert_eq!(render("log100"), "log10 ( 0 )");
        assert_eq!(render("log 5"), "log ( 5 )");
        assert_eq!(render("x2"), "x * 2");
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(render("-5 * 2"), "-5 * 2");
        assert_eq!(render("-(3+4)"), "( -1 * ( 3 + 4 ) )");
        assert_eq!(render("3 - -(2)"), "3 - ( -1 * ( 2 ) )");
        assert_eq!(render("-x + 1"), "( -1 * x ) + 1");
        assert_eq!(render("-sin(x)"), "( -1 * sin ( x ) )");
        assert_eq!(render("-(-(2))"), "( -1 * ( ( -1 * ( 2 ) ) ) )");
        assert_eq!(render("--5"), "-1 * -5");
        assert_eq!(render("2 - 3"), "2 - 3");
    }

    #[test]
    fn test_unary_plus_is_dropped() {
        assert_eq!(render("+5"), "5");
        assert_eq!(render("2*+5"), "2 * 5");
    }

    #[test]
    fn test_indexed_member_names() {
        assert_eq!(render("element[0].left + 1"), "element[0].left + 1");
        assert_eq!(render("x.5"), "x * .5");
    }

    #[test]
    fn test_auto_balance() {
        assert_eq!(render("(2+3"), "( 2 + 3 )");
        assert_eq!(render("2+3)"), "( 2 + 3 )");
        assert_eq!(render("((1"), "( ( 1 ) )");
    }

    #[test]
    fn test_strict_mode_keeps_unbalanced_parens() {
        assert_eq!(render_tokens(&tokenize_with("(2+3", false)), "( 2 + 3");
        assert_eq!(render_tokens(&tokenize_with("2+3)", false)), "2 + 3 )");
    }

    #[test]
    fn test_unrecognized_characters_pass_through() {
        assert_eq!(
            tokenize("2 # 3"),
            vec![
                Token::Number("2".into()),
                Token::Unrecognized('#'),
                Token::Number("3".into()),
            ]
        );
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("margin"));
        assert!(is_identifier("element[2].top"));
        assert!(!is_identifier("two words"));
        assert!(!is_identifier("x2"));
        assert!(!is_identifier("sin"));
        assert!(!is_identifier(""));
    }
}
