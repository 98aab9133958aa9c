//! Defines the core rendering trait and context for converting AST to SQL.

use crate::{
    error::{FragmentError, PlannerResult},
    query::dialect::Dialect,
};
use model::core::value::TypedValue;

pub mod create_index;
pub mod create_table;
pub mod expr;
pub mod partition;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer) -> PlannerResult<()>;
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details. Parentheses opened
/// through the renderer are tracked so an unbalanced statement is never
/// handed out by [`Renderer::finish`].
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<TypedValue>,
    pub dialect: &'a dyn Dialect,
    depth: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            depth: 0,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> Result<(String, Vec<TypedValue>), FragmentError> {
        if self.depth != 0 {
            return Err(FragmentError {
                fragment: self.sql,
                reason: "unclosed parenthesis",
            });
        }
        Ok((self.sql, self.params))
    }

    /// Binds a value as a parameter after checking it against its declared type.
    pub fn add_param(&mut self, value: TypedValue) -> PlannerResult<()> {
        value.validate()?;
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
        Ok(())
    }

    pub fn open_paren(&mut self) {
        self.sql.push('(');
        self.depth += 1;
    }

    pub fn close_paren(&mut self) -> Result<(), FragmentError> {
        if self.depth == 0 {
            return Err(FragmentError {
                fragment: self.sql.clone(),
                reason: "unmatched closing parenthesis",
            });
        }
        self.depth -= 1;
        self.sql.push(')');
        Ok(())
    }

    /// Appends caller-supplied SQL text (an expression, a literal, a type
    /// name) verbatim, provided its quotes and parentheses balance.
    pub fn push_fragment(&mut self, fragment: &str) -> Result<(), FragmentError> {
        check_balanced(fragment)?;
        self.sql.push_str(fragment);
        Ok(())
    }

    pub fn push_identifier(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }
}

pub(crate) fn check_balanced(fragment: &str) -> Result<(), FragmentError> {
    let fail = |reason| {
        Err(FragmentError {
            fragment: fragment.to_string(),
            reason,
        })
    };

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = fragment.chars().peekable();

    while let Some(ch) = chars.next() {
        match quote {
            Some(q) => {
                if ch == '\\' && q == '\'' {
                    chars.next();
                } else if ch == q {
                    // doubled quote is an escaped quote
                    if chars.peek() == Some(&q) {
                        chars.next();
                    } else {
                        quote = None;
                    }
                }
            }
            None => match ch {
                '\'' | '"' | '`' => quote = Some(ch),
                '(' => depth += 1,
                ')' => {
                    if depth == 0 {
                        return fail("unmatched closing parenthesis");
                    }
                    depth -= 1;
                }
                _ => {}
            },
        }
    }

    if quote.is_some() {
        return fail("unterminated quote");
    }
    if depth != 0 {
        return fail("unclosed parenthesis");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::dialect::OceanBase;

    #[test]
    fn test_balanced_fragments_pass() {
        for fragment in [
            "id",
            "YEAR(created_at)",
            "'2020/02/01'",
            "'it''s'",
            r"'a\'b'",
            "`weird)name`",
            "(a + (b * 2))",
        ] {
            assert!(check_balanced(fragment).is_ok(), "{fragment}");
        }
    }

    #[test]
    fn test_unbalanced_fragments_fail() {
        assert_eq!(
            check_balanced("YEAR(created").unwrap_err().reason,
            "unclosed parenthesis"
        );
        assert_eq!(
            check_balanced("id)").unwrap_err().reason,
            "unmatched closing parenthesis"
        );
        assert_eq!(
            check_balanced("'open").unwrap_err().reason,
            "unterminated quote"
        );
    }

    #[test]
    fn test_finish_rejects_open_paren() {
        let dialect = OceanBase::default();
        let mut renderer = Renderer::new(&dialect);
        renderer.open_paren();
        assert!(renderer.finish().is_err());
    }

    #[test]
    fn test_close_without_open_fails() {
        let dialect = OceanBase::default();
        let mut renderer = Renderer::new(&dialect);
        assert!(renderer.close_paren().is_err());
    }

    #[test]
    fn test_add_param_validates_value() {
        let dialect = OceanBase::default();
        let mut renderer = Renderer::new(&dialect);
        let too_long = TypedValue::Varchar {
            max_len: 1,
            value: "ab".to_string(),
        };
        assert!(renderer.add_param(too_long).is_err());
        assert!(renderer.params.is_empty());

        renderer.add_param(TypedValue::Int(1)).unwrap();
        let (sql, params) = renderer.finish().unwrap();
        assert_eq!(sql, "?");
        assert_eq!(params, vec![TypedValue::Int(1)]);
    }
}
