use std::fmt;

use logos::Logos;

/// Identifies the kind of a lexical token.
///
/// This enum defines all recognized token kinds in the language. Keyword
/// tokens take precedence over the identifier rule, and two-character
/// operators (`==`, `!=`, `<=`, `>=`) take precedence over their one-character
/// prefixes. Any character no rule matches produces [`TokenKind::Illegal`]
/// instead of a lexing failure.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// Identifier tokens; binding or function names such as `x` or `square`.
    /// Digits are not part of identifiers.
    #[regex(r"[A-Za-z_]+")]
    Ident,
    /// Integer literal tokens, such as `42`. The literal text is kept as-is;
    /// conversion to `i64` happens in the parser.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens. Runs from one `"` to the next with no escape
    /// handling, so a quote cannot appear inside a string.
    #[regex(r#""[^"]*""#)]
    Str,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Modulo,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `<=`
    #[token("<=")]
    Lte,
    /// `>=`
    #[token(">=")]
    Gte,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `&`
    #[token("&")]
    And,
    /// `|`
    #[token("|")]
    Or,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `return`
    #[token("return")]
    Return,

    /// Any character not covered by another rule. The low priority makes this
    /// a fallback that never shadows a real token.
    #[regex(r".", priority = 1)]
    Illegal,
    /// End of input. Also produced by an embedded NUL byte.
    #[token("\0")]
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Modulo => "MODULO",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Lte => "LTE",
            Self::Gte => "GTE",
            Self::Eq => "EQ",
            Self::NotEq => "NOT_EQ",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Return => "RETURN",
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A single lexical token: its kind plus the literal source text.
///
/// String tokens carry the text between the quotes; the end-of-input token
/// carries an empty literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind:    TokenKind,
    /// The literal text the token was read from.
    pub literal: String,
}

impl Token {
    /// The end-of-input token.
    #[must_use]
    pub const fn eof() -> Self {
        Self { kind:    TokenKind::Eof,
               literal: String::new(), }
    }
}

/// Produces a stream of [`Token`]s from a source string.
///
/// The lexer is a single pass over the input. It never fails: unrecognized
/// characters become [`TokenKind::Illegal`] tokens, and once the input is
/// exhausted every further call yields [`TokenKind::Eof`].
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "five");
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().literal, "5");
/// assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    inner:     logos::Lexer<'a, TokenKind>,
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { inner:     TokenKind::lexer(input),
               exhausted: false, }
    }

    /// Reads the next token and advances.
    ///
    /// Returns exactly one token per call. After the end of input (or an
    /// embedded NUL byte) has been reached, every subsequent call keeps
    /// returning the end-of-input token.
    pub fn next_token(&mut self) -> Token {
        if self.exhausted {
            return Token::eof();
        }

        match self.inner.next() {
            Some(Ok(TokenKind::Eof)) | None => {
                self.exhausted = true;
                Token::eof()
            },
            Some(Ok(TokenKind::Str)) => {
                let slice = self.inner.slice();
                Token { kind:    TokenKind::Str,
                        literal: slice[1..slice.len() - 1].to_string(), }
            },
            Some(Ok(kind)) => Token { kind,
                                      literal: self.inner.slice().to_string() },
            Some(Err(())) => Token { kind:    TokenKind::Illegal,
                                     literal: self.inner.slice().to_string(), },
        }
    }
}
