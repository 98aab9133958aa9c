use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub span: (usize, usize),
}

impl Token {
    /// Case-insensitive keyword check against a bare word.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(&self.kind, TokenKind::Word(w) if w.eq_ignore_ascii_case(keyword))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Unquoted word: a keyword, type name or bare identifier.
    Word(String),

    // Literals
    QuotedIdent(String),
    String(String),
    /// Hex digits of an `X'..'` or `0x..` literal.
    HexString(String),
    /// Numeric text kept as written.
    Number(String),

    // Delimiters
    LeftParen,    // (
    RightParen,   // )
    LeftBracket,  // [
    RightBracket, // ]
    Comma,        // ,
    Semicolon,    // ;

    /// Any other single character, e.g. `=` or `.`
    Symbol(char),

    // Special
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(w) => write!(f, "{}", w),
            TokenKind::QuotedIdent(s) => write!(f, "`{}`", s),
            TokenKind::String(s) => write!(f, "'{}'", s),
            TokenKind::HexString(h) => write!(f, "X'{}'", h),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::LeftBracket => write!(f, "["),
            TokenKind::RightBracket => write!(f, "]"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Symbol(c) => write!(f, "{}", c),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}
