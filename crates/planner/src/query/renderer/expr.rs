use crate::{
    error::{PlannerError, PlannerResult},
    query::{
        ast::expr::{BinaryOp, BinaryOperator, Expr, FunctionCall, Ident, JsonValue, MatchAgainst},
        renderer::{Render, Renderer},
    },
};
use model::core::{utils::quote_string_literal, value::TypedValue};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::Literal(text) => Ok(r.push_fragment(text)?),
            Expr::String(text) => {
                r.sql.push_str(&quote_string_literal(text));
                Ok(())
            }
            Expr::Null => {
                r.sql.push_str("NULL");
                Ok(())
            }
            Expr::BinaryOp(op) => op.render(r),
            Expr::FunctionCall(func) => func.render(r),
            Expr::Alias { expr, alias } => {
                expr.render(r)?;
                r.sql.push_str(" AS ");
                r.push_identifier(alias);
                Ok(())
            }
            Expr::JsonValue(json) => json.render(r),
            Expr::MatchAgainst(m) => m.render(r),
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        if let Some(qualifier) = &self.qualifier {
            r.push_identifier(qualifier);
            r.sql.push('.');
        }
        r.push_identifier(&self.name);
        Ok(())
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        r.open_paren();
        self.left.render(r)?;

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
            BinaryOperator::And => " AND ",
            BinaryOperator::Or => " OR ",
        };
        r.sql.push_str(op_str);

        self.right.render(r)?;
        Ok(r.close_paren()?)
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        r.sql.push_str(&self.name);
        r.open_paren();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            arg.render(r)?;
        }
        Ok(r.close_paren()?)
    }
}

impl Render for JsonValue {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        self.validate()?;

        r.sql.push_str("JSON_VALUE");
        r.open_paren();
        self.column.render(r)?;
        r.sql.push_str(", ");
        r.sql.push_str(&quote_string_literal(&self.path));
        r.sql.push_str(" RETURNING ");
        r.push_fragment(self.returning.trim())
            .map_err(|e| PlannerError::InvalidProjection(e.to_string()))?;
        r.close_paren()
            .map_err(|e| PlannerError::InvalidProjection(e.to_string()))
    }
}

impl Render for MatchAgainst {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        if self.columns.is_empty() {
            return Err(PlannerError::InvalidProjection(
                "MATCH needs at least one column".to_string(),
            ));
        }

        r.sql.push_str("MATCH ");
        r.open_paren();
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            column.render(r)?;
        }
        r.close_paren()?;

        r.sql.push_str(" AGAINST ");
        r.open_paren();
        r.add_param(TypedValue::Varchar {
            max_len: self.query.chars().count(),
            value: self.query.clone(),
        })?;
        r.sql.push_str(" IN ");
        r.sql.push_str(self.mode.keyword());
        Ok(r.close_paren()?)
    }
}
