//! Defines the AST for table partitioning clauses.

use crate::error::{PlannerError, PlannerResult};
use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKind {
    Range,
    RangeColumns,
    List,
    ListColumns,
    Hash,
    Key,
}

impl PartitionKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            PartitionKind::Range => "RANGE",
            PartitionKind::RangeColumns => "RANGE COLUMNS",
            PartitionKind::List => "LIST",
            PartitionKind::ListColumns => "LIST COLUMNS",
            PartitionKind::Hash => "HASH",
            PartitionKind::Key => "KEY",
        }
    }

    /// Whether the partitioning key is a column list rather than an expression.
    pub fn is_columns_form(&self) -> bool {
        matches!(
            self,
            PartitionKind::RangeColumns | PartitionKind::ListColumns | PartitionKind::Key
        )
    }

    pub fn is_range(&self) -> bool {
        matches!(self, PartitionKind::Range | PartitionKind::RangeColumns)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, PartitionKind::List | PartitionKind::ListColumns)
    }

    /// Hash and key partitions are sized by a bucket count instead of bounds.
    pub fn is_bucketed(&self) -> bool {
        matches!(self, PartitionKind::Hash | PartitionKind::Key)
    }
}

impl fmt::Display for PartitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What the rows are partitioned on.
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionTarget {
    Expr(String),
    Columns(Vec<String>),
}

/// A single boundary literal, rendered without re-quoting.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundLiteral {
    Int(i64),
    Float(f64),
    /// Passed through verbatim, e.g. `'2020/02/01'` or `TO_DAYS('2024-01-01')`.
    Raw(String),
}

impl From<i64> for BoundLiteral {
    fn from(v: i64) -> Self {
        BoundLiteral::Int(v)
    }
}

impl From<i32> for BoundLiteral {
    fn from(v: i32) -> Self {
        BoundLiteral::Int(i64::from(v))
    }
}

impl From<u32> for BoundLiteral {
    fn from(v: u32) -> Self {
        BoundLiteral::Int(i64::from(v))
    }
}

impl From<f64> for BoundLiteral {
    fn from(v: f64) -> Self {
        BoundLiteral::Float(v)
    }
}

impl From<&str> for BoundLiteral {
    fn from(v: &str) -> Self {
        BoundLiteral::Raw(v.to_string())
    }
}

impl From<String> for BoundLiteral {
    fn from(v: String) -> Self {
        BoundLiteral::Raw(v)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartitionBound {
    /// `VALUES LESS THAN (<literal>)`
    LessThan(BoundLiteral),
    /// `VALUES LESS THAN (MAXVALUE)`
    MaxValue,
    /// `VALUES IN (<literal>, ...)`
    In(Vec<BoundLiteral>),
    /// `VALUES IN (DEFAULT)`
    Default,
}

impl PartitionBound {
    fn is_range_shape(&self) -> bool {
        matches!(self, PartitionBound::LessThan(_) | PartitionBound::MaxValue)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionEntry {
    pub name: String,
    pub bound: PartitionBound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartitionScheme {
    Bounded(Vec<PartitionEntry>),
    Buckets(u32),
}

/// Represents a complete `PARTITION BY ...` clause, optionally carrying a
/// sub-partition scheme applied uniformly to every partition.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionDescriptor {
    pub kind: PartitionKind,
    pub target: PartitionTarget,
    pub scheme: PartitionScheme,
    pub subpartition: Option<Box<PartitionDescriptor>>,
}

impl PartitionDescriptor {
    /// Checks every structural invariant of the descriptor and its
    /// sub-partition.
    pub fn validate(&self) -> PlannerResult<()> {
        self.validate_level("partition")?;
        if let Some(sub) = &self.subpartition {
            if sub.subpartition.is_some() {
                return Err(invalid(
                    "sub-partitions cannot carry a nested sub-partition".to_string(),
                ));
            }
            sub.validate_level("subpartition")?;
        }
        Ok(())
    }

    fn validate_level(&self, level: &str) -> PlannerResult<()> {
        match &self.target {
            PartitionTarget::Expr(expr) => {
                if self.kind.is_columns_form() {
                    return Err(invalid(format!(
                        "{level} by {} requires a column list, got expression `{expr}`",
                        self.kind
                    )));
                }
                if expr.trim().is_empty() {
                    return Err(invalid(format!("{level} expression is empty")));
                }
            }
            PartitionTarget::Columns(columns) => {
                if !self.kind.is_columns_form() {
                    return Err(invalid(format!(
                        "{level} by {} requires an expression, got a column list",
                        self.kind
                    )));
                }
                if columns.is_empty() {
                    return Err(invalid(format!("{level} column list is empty")));
                }
                if let Some(blank) = columns.iter().find(|c| c.trim().is_empty()) {
                    return Err(invalid(format!("{level} column name `{blank}` is blank")));
                }
            }
        }

        match &self.scheme {
            PartitionScheme::Buckets(count) => {
                if !self.kind.is_bucketed() {
                    return Err(invalid(format!(
                        "{level} by {} needs bounds, not a bucket count",
                        self.kind
                    )));
                }
                if *count == 0 {
                    return Err(invalid(format!("{level} bucket count must be positive")));
                }
            }
            PartitionScheme::Bounded(entries) => {
                if self.kind.is_bucketed() {
                    return Err(invalid(format!(
                        "{level} by {} takes a bucket count, not bounds",
                        self.kind
                    )));
                }
                self.validate_entries(level, entries)?;
            }
        }
        Ok(())
    }

    fn validate_entries(&self, level: &str, entries: &[PartitionEntry]) -> PlannerResult<()> {
        if entries.is_empty() {
            return Err(invalid(format!("{level} list is empty")));
        }

        let mut seen = HashSet::new();
        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(invalid(format!("{level} name is empty")));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(invalid(format!(
                    "duplicate {level} name `{}`",
                    entry.name
                )));
            }
            if self.kind.is_range() != entry.bound.is_range_shape() {
                return Err(invalid(format!(
                    "{level} `{}` has a bound that does not match {}",
                    entry.name, self.kind
                )));
            }
            if let PartitionBound::In(values) = &entry.bound {
                if values.is_empty() {
                    return Err(invalid(format!(
                        "{level} `{}` has an empty value list",
                        entry.name
                    )));
                }
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> PlannerError {
    PlannerError::InvalidPartitionDescriptor(message)
}
