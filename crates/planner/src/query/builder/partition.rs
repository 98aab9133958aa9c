//! Provides a fluent builder for constructing `PartitionDescriptor` values.

use crate::query::ast::partition::{
    BoundLiteral, PartitionBound, PartitionDescriptor, PartitionEntry, PartitionKind,
    PartitionScheme, PartitionTarget,
};

#[derive(Debug, Clone)]
pub struct PartitionBuilder {
    desc: PartitionDescriptor,
}

impl PartitionBuilder {
    fn new(kind: PartitionKind, target: PartitionTarget, scheme: PartitionScheme) -> Self {
        Self {
            desc: PartitionDescriptor {
                kind,
                target,
                scheme,
                subpartition: None,
            },
        }
    }

    fn bounded(kind: PartitionKind, target: PartitionTarget) -> Self {
        Self::new(kind, target, PartitionScheme::Bounded(Vec::new()))
    }

    pub fn range(expr: &str) -> Self {
        Self::bounded(PartitionKind::Range, PartitionTarget::Expr(expr.to_string()))
    }

    pub fn range_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::bounded(PartitionKind::RangeColumns, columns_target(columns))
    }

    pub fn list(expr: &str) -> Self {
        Self::bounded(PartitionKind::List, PartitionTarget::Expr(expr.to_string()))
    }

    pub fn list_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::bounded(PartitionKind::ListColumns, columns_target(columns))
    }

    pub fn hash(expr: &str, partitions: u32) -> Self {
        Self::new(
            PartitionKind::Hash,
            PartitionTarget::Expr(expr.to_string()),
            PartitionScheme::Buckets(partitions),
        )
    }

    pub fn key<I, S>(columns: I, partitions: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            PartitionKind::Key,
            columns_target(columns),
            PartitionScheme::Buckets(partitions),
        )
    }

    /// Adds `PARTITION <name> VALUES LESS THAN (<bound>)`.
    pub fn less_than(self, name: &str, bound: impl Into<BoundLiteral>) -> Self {
        self.entry(name, PartitionBound::LessThan(bound.into()))
    }

    /// Adds `PARTITION <name> VALUES LESS THAN (MAXVALUE)`.
    pub fn max_value(self, name: &str) -> Self {
        self.entry(name, PartitionBound::MaxValue)
    }

    /// Adds `PARTITION <name> VALUES IN (<values>)`.
    pub fn values_in<I, L>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<BoundLiteral>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.entry(name, PartitionBound::In(values))
    }

    /// Adds `PARTITION <name> VALUES IN (DEFAULT)`.
    pub fn default_values(self, name: &str) -> Self {
        self.entry(name, PartitionBound::Default)
    }

    /// Applies `sub` uniformly to every partition.
    pub fn subpartition(mut self, sub: PartitionDescriptor) -> Self {
        self.desc.subpartition = Some(Box::new(sub));
        self
    }

    pub fn build(self) -> PartitionDescriptor {
        self.desc
    }

    fn entry(mut self, name: &str, bound: PartitionBound) -> Self {
        let entry = PartitionEntry {
            name: name.to_string(),
            bound,
        };
        if let PartitionScheme::Bounded(entries) = &mut self.desc.scheme {
            entries.push(entry);
        } else {
            // Bounds on a bucketed kind are rejected at compile time.
            self.desc.scheme = PartitionScheme::Bounded(vec![entry]);
        }
        self
    }
}

fn columns_target<I, S>(columns: I) -> PartitionTarget
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    PartitionTarget::Columns(columns.into_iter().map(Into::into).collect())
}
