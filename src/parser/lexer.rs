//! Lexer (tokenizer) for letterloop source text
//!
//! Produces one [`Token`] per call to [`Lexer::next_token`]; the top-level
//! scan never materialises a token array. Every token is a single character
//! of source, so there is no multi-character lookahead.
//!
//! The lexer never fails. Characters outside the language become
//! [`TokenKind::Unknown`] and surface as syntax errors in the grammar.

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Operands
    Ident,  // a..z
    Number, // 0..9

    // Punctuation
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
    LParen,    // (
    RParen,    // )
    Question,  // ?
    Colon,     // :
    Semicolon, // ;
    Dot,       // .

    // Arithmetic
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Caret,   // ^

    // Statements
    Eq, // =
    Lt, // <
    Gt, // >

    End,
    Unknown,
}

/// A single lexical unit.
///
/// `ch` is the source character the token was made from; it is the payload
/// for identifiers (the variable letter) and numbers (the digit) and `'\0'`
/// for end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub ch: char,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, ch: char, location: SourceLocation) -> Self {
        Token { kind, ch, location }
    }

    /// Synthesized end-of-input token at `location`.
    pub fn end(location: SourceLocation) -> Self {
        Token::new(TokenKind::End, '\0', location)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Numeric value of a [`TokenKind::Number`] payload.
    pub fn digit_value(&self) -> Option<i32> {
        match self.kind {
            TokenKind::Number => self.ch.to_digit(10).map(|d| d as i32),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier '{}'", self.ch),
            TokenKind::Number => write!(f, "number {}", self.ch),
            TokenKind::End => write!(f, "end of input"),
            TokenKind::Unknown => {
                write!(f, "unrecognized character '{}'", self.ch.escape_default())
            }
            _ => write!(f, "'{}'", self.ch),
        }
    }
}

/// Maps a grammar symbol character to its token kind.
fn symbol_kind(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '?' => TokenKind::Question,
        ':' => TokenKind::Colon,
        ';' => TokenKind::Semicolon,
        '.' => TokenKind::Dot,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Percent,
        '^' => TokenKind::Caret,
        '=' => TokenKind::Eq,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        _ => return None,
    };
    Some(kind)
}

/// Whitespace as the language defines it: space, tab, newline, vertical tab,
/// form feed, carriage return.
fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// On-demand lexer over the program text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Skips whitespace and classifies the next character.
    ///
    /// Once the text is exhausted every call returns an end-of-input token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Token::end(loc);
        };

        let kind = match ch {
            'a'..='z' => TokenKind::Ident,
            '0'..='9' => TokenKind::Number,
            _ => symbol_kind(ch).unwrap_or(TokenKind::Unknown),
        };

        Token::new(kind, ch, loc)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_blank(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token();
            kinds.push(token.kind);
            if token.is(TokenKind::End) {
                return kinds;
            }
        }
    }

    #[test]
    fn test_statement_tokens() {
        assert_eq!(
            kinds("n = 0;"),
            vec![
                TokenKind::Ident,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_all_symbols() {
        assert_eq!(
            kinds("[]{}()?:;.+-*/%^=<>"),
            vec![
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Question,
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Caret,
                TokenKind::Eq,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_single_character_operands() {
        let mut lexer = Lexer::new("ab 42");
        let tokens: Vec<Token> = (0..4).map(|_| lexer.next_token()).collect();

        assert_eq!((tokens[0].kind, tokens[0].ch), (TokenKind::Ident, 'a'));
        assert_eq!((tokens[1].kind, tokens[1].ch), (TokenKind::Ident, 'b'));
        assert_eq!(tokens[2].digit_value(), Some(4));
        assert_eq!(tokens[3].digit_value(), Some(2));
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(
            kinds("A # !"),
            vec![TokenKind::Unknown, TokenKind::Unknown, TokenKind::Unknown, TokenKind::End]
        );
    }

    #[test]
    fn test_end_repeats() {
        let mut lexer = Lexer::new("  \t\x0B\x0C\r\n");
        assert!(lexer.next_token().is(TokenKind::End));
        assert!(lexer.next_token().is(TokenKind::End));
    }

    #[test]
    fn test_locations() {
        let mut lexer = Lexer::new("a\n  b");
        assert_eq!(lexer.next_token().location, SourceLocation::new(1, 1));
        assert_eq!(lexer.next_token().location, SourceLocation::new(2, 3));
        assert_eq!(lexer.next_token().location, SourceLocation::new(2, 4));
    }
}
