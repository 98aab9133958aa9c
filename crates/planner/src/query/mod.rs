use crate::{
    error::{PlannerError, PlannerResult},
    query::{
        ast::{
            expr::{Expr, Ident},
            partition::PartitionDescriptor,
        },
        dialect::{Dialect, OceanBase},
        renderer::{Render, Renderer},
    },
};
use model::core::value::TypedValue;
use tracing::debug;

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod functions;
pub mod macros;
pub mod renderer;

pub use functions::{json_value, json_value_as};

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn value(val: TypedValue) -> Expr {
    Expr::Value(val)
}

/// Renders any AST node into SQL text and its bound parameters.
pub fn to_sql<T: Render>(node: &T, dialect: &dyn Dialect) -> PlannerResult<(String, Vec<TypedValue>)> {
    let mut renderer = Renderer::new(dialect);
    node.render(&mut renderer)?;
    Ok(renderer.finish()?)
}

/// Compiles a partition descriptor into its `PARTITION BY ...` clause.
///
/// The clause is the same in every compatible mode: identifiers and
/// literals inside it are caller-supplied text and are emitted verbatim.
pub fn compile(descriptor: &PartitionDescriptor) -> PlannerResult<String> {
    let dialect = OceanBase::default();
    let mut renderer = Renderer::new(&dialect);
    descriptor.render(&mut renderer)?;
    let (clause, _) = renderer
        .finish()
        .map_err(|e| PlannerError::InvalidPartitionDescriptor(e.to_string()))?;

    debug!(
        kind = %descriptor.kind,
        subpartitioned = descriptor.subpartition.is_some(),
        len = clause.len(),
        "Compiled partition clause"
    );
    Ok(clause)
}
