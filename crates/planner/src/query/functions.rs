//! Expression builders for OceanBase-specific SQL functions: JSON
//! projection, GIS and full-text search.

use crate::{
    error::PlannerResult,
    query::ast::expr::{Expr, FunctionCall, Ident, JsonValue, MatchAgainst, SearchMode},
};
use model::core::value::LogicalType;
use tracing::debug;

/// Builds `JSON_VALUE(<column>, '<path>' RETURNING <target_type>)`.
///
/// The path is rendered as an escaped string literal. The target type must
/// be a bare type name such as `SIGNED` or `DECIMAL(10, 2)`.
pub fn json_value(column: &str, path: &str, target_type: &str) -> PlannerResult<Expr> {
    let json = JsonValue {
        column: column_ident(column),
        path: path.to_string(),
        returning: target_type.trim().to_string(),
    };
    json.validate()?;

    debug!(column, path, target_type = %json.returning, "Built JSON_VALUE projection");
    Ok(Expr::JsonValue(json))
}

/// Same as [`json_value`], with the target type taken from a logical type.
pub fn json_value_as(column: &str, path: &str, target: &LogicalType) -> PlannerResult<Expr> {
    json_value(column, path, &target.sql_type())
}

pub fn st_geom_from_text(wkt: &str, srid: Option<u32>) -> Expr {
    let mut args = vec![Expr::String(wkt.to_string())];
    if let Some(srid) = srid {
        args.push(Expr::Literal(srid.to_string()));
    }
    call("ST_GeomFromText", args)
}

pub fn st_distance(left: Expr, right: Expr) -> Expr {
    call("st_distance", vec![left, right])
}

/// True when the two geometries are within `distance` of each other.
pub fn st_dwithin(left: Expr, right: Expr, distance: f64) -> Expr {
    call("_st_dwithin", vec![left, right, Expr::Literal(distance.to_string())])
}

pub fn st_astext(geometry: Expr) -> Expr {
    call("ST_AsText", vec![geometry])
}

/// Full-text search over the columns of a `FULLTEXT` index.
pub fn match_against(columns: &[&str], query: &str, mode: SearchMode) -> Expr {
    Expr::MatchAgainst(MatchAgainst {
        columns: columns.iter().map(|c| column_ident(c)).collect(),
        query: query.to_string(),
        mode,
    })
}

fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::FunctionCall(FunctionCall {
        name: name.to_string(),
        args,
    })
}

/// Splits `table.column` into a qualified identifier.
fn column_ident(column: &str) -> Ident {
    match column.split_once('.') {
        Some((qualifier, name)) => Ident {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        },
        None => Ident {
            qualifier: None,
            name: column.to_string(),
        },
    }
}
