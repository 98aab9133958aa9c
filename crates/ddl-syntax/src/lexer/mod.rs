use crate::{
    grammar::{DdlGrammar, Rule},
    lexer::{
        error::LexerError,
        token::{Token, TokenKind},
    },
};
use pest::{Parser, iterators::Pair};

pub mod error;
pub mod token;

pub struct Lexer {
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new() -> Self {
        Lexer { tokens: Vec::new() }
    }

    pub fn tokenize(&mut self, input: &str) -> Result<Vec<Token>, LexerError> {
        self.tokens.clear();

        let pairs = DdlGrammar::parse(Rule::program, input)
            .map_err(|e| LexerError::from_pest_error(e, input))?;

        for pair in pairs {
            self.process_pair(pair);
        }

        // Add EOF token
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            line: input.lines().count().max(1),
            column: input.lines().last().map(|l| l.len() + 1).unwrap_or(1),
            span: (input.len(), input.len()),
        });

        Ok(self.tokens.clone())
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn process_pair(&mut self, pair: Pair<Rule>) {
        let span = pair.as_span();
        let lexeme = span.as_str();

        let kind = match pair.as_rule() {
            Rule::word => TokenKind::Word(lexeme.to_string()),
            Rule::backtick_ident => TokenKind::QuotedIdent(unquote(lexeme, '`')),
            Rule::dquote_ident => TokenKind::QuotedIdent(unquote(lexeme, '"')),
            Rule::string => TokenKind::String(unquote(lexeme, '\'')),
            Rule::hex => TokenKind::HexString(hex_digits(lexeme)),
            Rule::number => TokenKind::Number(lexeme.to_string()),

            // Delimiters
            Rule::lparen => TokenKind::LeftParen,
            Rule::rparen => TokenKind::RightParen,
            Rule::lbracket => TokenKind::LeftBracket,
            Rule::rbracket => TokenKind::RightBracket,
            Rule::comma => TokenKind::Comma,
            Rule::semicolon => TokenKind::Semicolon,
            Rule::symbol => match lexeme.chars().next() {
                Some(c) => TokenKind::Symbol(c),
                None => return,
            },

            // EOI and silent helpers carry no token
            _ => return,
        };

        let (line, column) = span.start_pos().line_col();
        self.tokens.push(Token {
            kind,
            lexeme: lexeme.to_string(),
            line,
            column,
            span: (span.start(), span.end()),
        });
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer { tokens: vec![] }
    }
}

/// Strips the surrounding quotes and resolves doubled quotes and
/// backslash escapes.
fn unquote(lexeme: &str, quote: char) -> String {
    let inner = lexeme
        .strip_prefix(quote)
        .and_then(|s| s.strip_suffix(quote))
        .unwrap_or(lexeme);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == quote && chars.peek() == Some(&quote) {
            chars.next();
            out.push(quote);
        } else if ch == '\\' && quote != '`' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('0') => out.push('\0'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn hex_digits(lexeme: &str) -> String {
    if let Some(rest) = lexeme.strip_prefix("0x") {
        return rest.to_string();
    }
    // X'..' or x'..'
    lexeme
        .get(2..lexeme.len().saturating_sub(1))
        .unwrap_or_default()
        .to_string()
}
