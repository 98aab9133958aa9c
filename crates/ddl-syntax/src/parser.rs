//! Recursive-descent parser for reflected `CREATE TABLE` statements.
//!
//! Only the parenthesized column/key list is parsed into structure. Table
//! options after the closing parenthesis are kept as raw text.

use crate::{
    ast::table::{ColumnDefinition, KeyDefinition, KeyKind, TableDefinition},
    charset::Charset,
    error::{DdlError, DdlResult},
    lexer::{
        Lexer,
        token::{Token, TokenKind},
    },
};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Parses `SHOW CREATE TABLE` output into a [`TableDefinition`].
///
/// `charset` is the connection charset label, used only to decode hex
/// default literals.
pub fn parse(ddl: &str, charset: &str) -> DdlResult<TableDefinition> {
    debug!(len = ddl.len(), charset, "Parsing table DDL");

    let tokens = Lexer::new().tokenize(ddl)?;
    let table = Parser::new(ddl, tokens, Charset::from_label(charset)).parse_create_table()?;

    debug!(
        table = table.name(),
        columns = table.columns().len(),
        keys = table.keys().len(),
        "Parsed table DDL"
    );
    Ok(table)
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    charset: Charset,
    columns: Vec<ColumnDefinition>,
    keys: Vec<KeyDefinition>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, tokens: Vec<Token>, charset: Charset) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
            charset,
            columns: Vec::new(),
            keys: Vec::new(),
        }
    }

    fn parse_create_table(mut self) -> DdlResult<TableDefinition> {
        self.expect_keyword("CREATE")?;
        self.eat_keyword("TEMPORARY");
        self.expect_keyword("TABLE")?;
        if self.eat_keyword("IF") {
            self.expect_keyword("NOT")?;
            self.expect_keyword("EXISTS")?;
        }

        let mut name = self.parse_ident("table name")?;
        if self.peek().kind == TokenKind::Symbol('.') {
            self.advance();
            name = self.parse_ident("table name")?;
        }

        if self.peek().kind != TokenKind::LeftParen {
            return Err(self.error("expected `(` after the table name"));
        }
        self.advance();
        if self.peek().kind == TokenKind::RightParen {
            return Err(self.error("table has no columns"));
        }

        loop {
            self.parse_definition()?;
            match self.peek().kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RightParen => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => return Err(self.unbalanced()),
                _ => return Err(self.error("expected `,` or `)` after a definition")),
            }
        }

        let options = self.parse_options()?;
        Ok(TableDefinition::new(name, self.columns, self.keys, options))
    }

    /// One entry of the body: a column or a key/constraint line.
    fn parse_definition(&mut self) -> DdlResult<()> {
        let token = self.peek();
        if !matches!(token.kind, TokenKind::Word(_)) {
            return self.parse_column();
        }

        if token.is_keyword("PRIMARY") {
            self.advance();
            self.expect_keyword("KEY")?;
            self.parse_index(KeyKind::PrimaryKey, None)
        } else if token.is_keyword("UNIQUE") {
            self.advance();
            self.parse_index(KeyKind::UniqueKey, None)
        } else if token.is_keyword("KEY") || token.is_keyword("INDEX") {
            self.parse_index(KeyKind::Key, None)
        } else if token.is_keyword("FULLTEXT") {
            self.advance();
            self.parse_index(KeyKind::FullText, None)
        } else if token.is_keyword("SPATIAL") {
            self.advance();
            self.parse_index(KeyKind::Spatial, None)
        } else if token.is_keyword("VECTOR") && self.is_index_keyword(self.peek_at(1)) {
            self.advance();
            self.parse_index(KeyKind::Vector, None)
        } else if token.is_keyword("CONSTRAINT") {
            self.parse_constraint()
        } else if token.is_keyword("FOREIGN") || token.is_keyword("CHECK") {
            trace!(line = token.line, "Skipping {} definition", token.lexeme);
            self.skip_to_item_end()
        } else {
            self.parse_column()
        }
    }

    fn parse_column(&mut self) -> DdlResult<()> {
        let name = self.parse_ident("column name")?;
        if self.columns.iter().any(|c| c.name == name) {
            return Err(self.error(format!("duplicate column `{name}`")));
        }
        let mut type_text = self.parse_type()?;

        let mut column = ColumnDefinition {
            name,
            type_text: String::new(),
            nullable: true,
            default: None,
            auto_increment: false,
            comment: None,
            ordinal_position: self.columns.len(),
        };

        loop {
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::Comma | TokenKind::RightParen => break,
                TokenKind::Eof => return Err(self.unbalanced()),
                TokenKind::LeftParen => {
                    self.skip_group()?;
                }
                _ if token.is_keyword("NOT") => {
                    self.advance();
                    if self.eat_keyword("NULL") {
                        column.nullable = false;
                    }
                }
                _ if token.is_keyword("NULL") => {
                    self.advance();
                    column.nullable = true;
                }
                _ if token.is_keyword("DEFAULT") => {
                    self.advance();
                    column.default = self.parse_default()?;
                }
                _ if token.is_keyword("AUTO_INCREMENT") => {
                    self.advance();
                    column.auto_increment = true;
                }
                _ if token.is_keyword("COMMENT") => {
                    self.advance();
                    match &self.peek().kind {
                        TokenKind::String(text) => {
                            column.comment = Some(text.clone());
                            self.advance();
                        }
                        _ => return Err(self.error("expected a string after COMMENT")),
                    }
                }
                _ if token.is_keyword("SRID") => {
                    self.advance();
                    match &self.peek().kind {
                        TokenKind::Number(srid) => {
                            type_text.push_str(" SRID ");
                            type_text.push_str(srid);
                            self.advance();
                        }
                        _ => return Err(self.error("expected a number after SRID")),
                    }
                }
                _ if token.is_keyword("PRIMARY") || token.is_keyword("KEY") => {
                    self.advance();
                    self.eat_keyword("KEY");
                    self.push_inline_key(KeyKind::PrimaryKey, &column.name);
                }
                _ if token.is_keyword("UNIQUE") => {
                    self.advance();
                    self.eat_keyword("KEY");
                    self.push_inline_key(KeyKind::UniqueKey, &column.name);
                }
                _ if token.is_keyword("REFERENCES") => {
                    // reference definition ends the column line
                    trace!(column = %column.name, "Skipping inline REFERENCES");
                    self.skip_to_item_end()?;
                }
                _ if token.is_keyword("ON") => {
                    self.advance();
                    if self.eat_keyword("DELETE") {
                        self.eat_referential_action();
                    } else if self.eat_keyword("UPDATE") && !self.eat_referential_action() {
                        // ON UPDATE <expr>
                        self.parse_default()?;
                    }
                }
                _ => {
                    trace!(column = %column.name, modifier = %token.lexeme, "Skipping column modifier");
                    self.advance();
                }
            }
        }

        column.type_text = type_text;
        self.columns.push(column);
        Ok(())
    }

    /// Type name with its arguments, kept as written.
    fn parse_type(&mut self) -> DdlResult<String> {
        let token = self.peek().clone();
        if !matches!(token.kind, TokenKind::Word(_)) {
            return Err(self.error("expected a column type"));
        }
        self.advance();

        let mut end = token.span.1;
        if token.is_keyword("DOUBLE") && self.peek().is_keyword("PRECISION") {
            end = self.advance().span.1;
        }
        if self.peek().kind == TokenKind::LeftParen {
            end = self.skip_group()?.1;
        }
        let mut type_text = self.input[token.span.0..end].to_string();

        // array suffixes, e.g. INT[]
        while self.peek().kind == TokenKind::LeftBracket {
            let start = self.advance().span.0;
            loop {
                match self.peek().kind {
                    TokenKind::RightBracket => break,
                    TokenKind::Eof => return Err(self.error("missing `]` in column type")),
                    _ => {
                        self.advance();
                    }
                }
            }
            let end = self.advance().span.1;
            type_text.push_str(&self.input[start..end]);
        }

        while ["UNSIGNED", "SIGNED", "ZEROFILL"]
            .iter()
            .any(|kw| self.peek().is_keyword(kw))
        {
            type_text.push(' ');
            type_text.push_str(&self.advance().lexeme.clone());
        }

        Ok(type_text)
    }

    /// Text of a `DEFAULT` value; `None` for `NULL`.
    fn parse_default(&mut self) -> DdlResult<Option<String>> {
        let token = self.peek().clone();
        let value = match &token.kind {
            TokenKind::Word(_) if token.is_keyword("NULL") => {
                self.advance();
                None
            }
            TokenKind::String(_) | TokenKind::Number(_) => {
                self.advance();
                Some(token.lexeme)
            }
            TokenKind::HexString(digits) => {
                self.advance();
                Some(self.charset.decode_hex_literal(digits))
            }
            TokenKind::Symbol('-') | TokenKind::Symbol('+') => {
                self.advance();
                match &self.peek().kind {
                    TokenKind::Number(n) => {
                        let text = format!("{}{}", token.lexeme, n);
                        self.advance();
                        Some(text)
                    }
                    _ => return Err(self.error("expected a number after the sign")),
                }
            }
            TokenKind::Word(_) => {
                self.advance();
                let next = self.peek().clone();
                let end = match next.kind {
                    // CURRENT_TIMESTAMP(6)
                    TokenKind::LeftParen => self.skip_group()?.1,
                    // b'0101', _utf8mb4'abc'
                    TokenKind::String(_) if next.span.0 == token.span.1 => {
                        self.advance();
                        next.span.1
                    }
                    _ => token.span.1,
                };
                Some(self.input[token.span.0..end].to_string())
            }
            TokenKind::LeftParen => {
                let (start, end) = self.skip_group()?;
                Some(self.input[start..end].to_string())
            }
            TokenKind::Eof => return Err(self.unbalanced()),
            _ => return Err(self.error("expected a default value")),
        };
        Ok(value)
    }

    /// `[KEY|INDEX] [name] [USING ..] (<columns>) [options]`
    fn parse_index(&mut self, kind: KeyKind, fallback_name: Option<String>) -> DdlResult<()> {
        if self.is_index_keyword(self.peek()) {
            self.advance();
        }

        let mut name = fallback_name;
        let token = self.peek();
        let is_name = match token.kind {
            TokenKind::QuotedIdent(_) => true,
            TokenKind::Word(_) => !token.is_keyword("USING"),
            _ => false,
        };
        if is_name {
            name = Some(self.parse_ident("key name")?);
        }
        if self.eat_keyword("USING") {
            self.advance();
        }

        let columns = self.parse_key_columns()?;
        self.skip_to_item_end()?;

        self.keys.push(KeyDefinition {
            name,
            kind,
            columns,
        });
        Ok(())
    }

    fn parse_constraint(&mut self) -> DdlResult<()> {
        self.expect_keyword("CONSTRAINT")?;

        let token = self.peek();
        let has_symbol = match token.kind {
            TokenKind::QuotedIdent(_) => true,
            TokenKind::Word(_) => !["PRIMARY", "UNIQUE", "FOREIGN", "CHECK"]
                .iter()
                .any(|kw| token.is_keyword(kw)),
            _ => false,
        };
        let symbol = if has_symbol {
            Some(self.parse_ident("constraint name")?)
        } else {
            None
        };

        if self.eat_keyword("PRIMARY") {
            self.expect_keyword("KEY")?;
            self.parse_index(KeyKind::PrimaryKey, None)
        } else if self.eat_keyword("UNIQUE") {
            self.parse_index(KeyKind::UniqueKey, symbol)
        } else {
            trace!(constraint = ?symbol, "Skipping constraint");
            self.skip_to_item_end()
        }
    }

    /// `(<col> [(<len>)] [ASC|DESC], ...)`; functional parts are kept as text.
    fn parse_key_columns(&mut self) -> DdlResult<Vec<String>> {
        if self.peek().kind != TokenKind::LeftParen {
            return Err(self.error("expected `(` before key columns"));
        }
        self.advance();

        let mut columns = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::LeftParen => {
                    let (start, end) = self.skip_group()?;
                    columns.push(self.input[start + 1..end - 1].trim().to_string());
                }
                TokenKind::RightParen if columns.is_empty() => {
                    return Err(self.error("key has no columns"));
                }
                _ => {
                    columns.push(self.parse_ident("key column")?);
                    // prefix length
                    if self.peek().kind == TokenKind::LeftParen {
                        self.skip_group()?;
                    }
                    if !self.eat_keyword("ASC") {
                        self.eat_keyword("DESC");
                    }
                }
            }

            match self.peek().kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RightParen => {
                    self.advance();
                    return Ok(columns);
                }
                TokenKind::Eof => return Err(self.unbalanced()),
                _ => return Err(self.error("expected `,` or `)` in key column list")),
            }
        }
    }

    /// Everything after the body up to `;`, as raw text.
    fn parse_options(&mut self) -> DdlResult<Option<String>> {
        let start = self.pos;
        let mut depth = 0usize;

        loop {
            match self.peek().kind {
                TokenKind::Eof | TokenKind::Semicolon if depth == 0 => break,
                TokenKind::Eof => return Err(self.unbalanced()),
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    if depth == 0 {
                        return Err(self.error("unbalanced parentheses: unexpected `)`"));
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }

        if self.pos == start {
            return Ok(None);
        }
        let first = self.tokens[start].span.0;
        let last = self.tokens[self.pos - 1].span.1;
        Ok(Some(self.input[first..last].trim().to_string()))
    }

    fn push_inline_key(&mut self, kind: KeyKind, column: &str) {
        self.keys.push(KeyDefinition {
            name: None,
            kind,
            columns: vec![column.to_string()],
        });
    }

    /// Skips tokens up to the `,` or `)` that ends the current definition.
    fn skip_to_item_end(&mut self) -> DdlResult<()> {
        loop {
            match self.peek().kind {
                TokenKind::Comma | TokenKind::RightParen => return Ok(()),
                TokenKind::LeftParen => {
                    self.skip_group()?;
                }
                TokenKind::Eof => return Err(self.unbalanced()),
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Consumes a balanced `( ... )` group and returns its byte span.
    fn skip_group(&mut self) -> DdlResult<(usize, usize)> {
        let start = self.advance().span.0;
        let mut depth = 1usize;
        while depth > 0 {
            match self.peek().kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth -= 1,
                TokenKind::Eof => return Err(self.unbalanced()),
                _ => {}
            }
            self.advance();
        }
        let end = self.tokens[self.pos - 1].span.1;
        Ok((start, end))
    }

    fn parse_ident(&mut self, what: &str) -> DdlResult<String> {
        let name = match &self.peek().kind {
            TokenKind::QuotedIdent(name) | TokenKind::Word(name) => name.clone(),
            _ => return Err(self.error(format!("expected {what}"))),
        };
        self.advance();
        Ok(name)
    }

    /// `CASCADE`, `RESTRICT`, `SET NULL`, `SET DEFAULT` or `NO ACTION`.
    fn eat_referential_action(&mut self) -> bool {
        if self.eat_keyword("CASCADE") || self.eat_keyword("RESTRICT") {
            return true;
        }
        if self.peek().is_keyword("SET")
            && (self.peek_at(1).is_keyword("NULL") || self.peek_at(1).is_keyword("DEFAULT"))
        {
            self.advance();
            self.advance();
            return true;
        }
        if self.peek().is_keyword("NO") && self.peek_at(1).is_keyword("ACTION") {
            self.advance();
            self.advance();
            return true;
        }
        false
    }

    fn is_index_keyword(&self, token: &Token) -> bool {
        token.is_keyword("KEY") || token.is_keyword("INDEX")
    }

    fn expect_keyword(&mut self, keyword: &str) -> DdlResult<()> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{keyword}`")))
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.peek().is_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Tokens always end with `Eof`, which is returned past the end.
    fn peek_at(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    fn advance(&mut self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        if self.tokens[idx].kind != TokenKind::Eof {
            self.pos += 1;
        }
        &self.tokens[idx]
    }

    fn error(&self, message: impl Into<String>) -> DdlError {
        DdlError::at(self.peek(), message)
    }

    fn unbalanced(&self) -> DdlError {
        self.error("unbalanced parentheses: missing `)`")
    }
}

/// Column names referenced by keys but not declared as columns.
pub fn undeclared_key_columns(table: &TableDefinition) -> Vec<&str> {
    let declared: HashSet<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    table
        .keys()
        .iter()
        .flat_map(|k| k.columns.iter())
        .map(String::as_str)
        .filter(|c| !declared.contains(c))
        .collect()
}
