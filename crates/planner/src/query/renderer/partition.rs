use crate::{
    error::{FragmentError, PlannerError, PlannerResult},
    query::{
        ast::partition::{
            BoundLiteral, PartitionBound, PartitionDescriptor, PartitionEntry, PartitionScheme,
            PartitionTarget,
        },
        renderer::{Render, Renderer},
    },
};

impl Render for PartitionDescriptor {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        self.validate()?;

        // 1. PARTITION BY <kind> (<target>)
        r.sql.push_str("PARTITION BY ");
        render_method(self, r)?;

        // 2. SUBPARTITION BY ...
        if let Some(sub) = &self.subpartition {
            r.sql.push_str(" SUBPARTITION BY ");
            render_method(sub, r)?;
            match &sub.scheme {
                PartitionScheme::Buckets(count) => {
                    r.sql.push_str(" SUBPARTITIONS ");
                    r.sql.push_str(&count.to_string());
                }
                PartitionScheme::Bounded(entries) => {
                    r.sql.push_str(" SUBPARTITION TEMPLATE ");
                    render_entries("SUBPARTITION", entries, r)?;
                }
            }
        }

        // 3. PARTITIONS <n> | (<partition>, ...)
        match &self.scheme {
            PartitionScheme::Buckets(count) => {
                r.sql.push_str(" PARTITIONS ");
                r.sql.push_str(&count.to_string());
            }
            PartitionScheme::Bounded(entries) => {
                r.sql.push(' ');
                render_entries("PARTITION", entries, r)?;
            }
        }
        Ok(())
    }
}

fn render_method(desc: &PartitionDescriptor, r: &mut Renderer) -> PlannerResult<()> {
    r.sql.push_str(desc.kind.keyword());
    r.sql.push(' ');
    r.open_paren();
    match &desc.target {
        PartitionTarget::Expr(expr) => r.push_fragment(expr).map_err(invalid)?,
        PartitionTarget::Columns(columns) => {
            for (i, column) in columns.iter().enumerate() {
                if i > 0 {
                    r.sql.push(',');
                }
                r.push_fragment(column).map_err(invalid)?;
            }
        }
    }
    r.close_paren().map_err(invalid)
}

fn render_entries(keyword: &str, entries: &[PartitionEntry], r: &mut Renderer) -> PlannerResult<()> {
    r.open_paren();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            r.sql.push(',');
        }
        r.sql.push_str(keyword);
        r.sql.push(' ');
        r.push_fragment(&entry.name).map_err(invalid)?;
        render_bound(&entry.bound, r)?;
    }
    r.close_paren().map_err(invalid)
}

fn render_bound(bound: &PartitionBound, r: &mut Renderer) -> PlannerResult<()> {
    match bound {
        PartitionBound::LessThan(_) | PartitionBound::MaxValue => {
            r.sql.push_str(" VALUES LESS THAN ")
        }
        PartitionBound::In(_) | PartitionBound::Default => r.sql.push_str(" VALUES IN "),
    }

    r.open_paren();
    match bound {
        PartitionBound::LessThan(literal) => render_literal(literal, r)?,
        PartitionBound::MaxValue => r.sql.push_str("MAXVALUE"),
        PartitionBound::In(values) => {
            for (i, literal) in values.iter().enumerate() {
                if i > 0 {
                    r.sql.push(',');
                }
                render_literal(literal, r)?;
            }
        }
        PartitionBound::Default => r.sql.push_str("DEFAULT"),
    }
    r.close_paren().map_err(invalid)
}

fn render_literal(literal: &BoundLiteral, r: &mut Renderer) -> PlannerResult<()> {
    match literal {
        BoundLiteral::Int(v) => r.sql.push_str(&v.to_string()),
        BoundLiteral::Float(v) => {
            if !v.is_finite() {
                return Err(PlannerError::InvalidPartitionDescriptor(format!(
                    "bound `{v}` is not a finite number"
                )));
            }
            r.sql.push_str(&v.to_string())
        }
        BoundLiteral::Raw(text) => {
            if text.trim().is_empty() {
                return Err(PlannerError::InvalidPartitionDescriptor(
                    "bound literal is empty".to_string(),
                ));
            }
            r.push_fragment(text).map_err(invalid)?
        }
    }
    Ok(())
}

fn invalid(err: FragmentError) -> PlannerError {
    PlannerError::InvalidPartitionDescriptor(err.to_string())
}
