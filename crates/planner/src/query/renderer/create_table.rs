use crate::{
    error::{PlannerError, PlannerResult},
    query::{
        ast::{
            common::TableRef,
            create_table::{ColumnDef, CreateTable, TableConstraint},
        },
        renderer::{Render, Renderer},
    },
};
use model::core::{data_type::CompatibleMode, utils::quote_string_literal};
use std::collections::HashSet;
use tracing::debug;

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        self.validate()?;

        r.sql.push_str("CREATE TABLE ");
        if self.if_not_exists {
            r.sql.push_str("IF NOT EXISTS ");
        }
        render_table_ref(&self.table, r);
        r.sql.push(' ');
        r.open_paren();

        let num_cols = self.columns.len();
        for (i, col) in self.columns.iter().enumerate() {
            r.sql.push_str("\n\t");
            col.render(r)?;
            if i < num_cols - 1 || !self.constraints.is_empty() {
                r.sql.push(',');
            }
        }

        for (i, constraint) in self.constraints.iter().enumerate() {
            r.sql.push_str("\n\t");
            constraint.render(r)?;
            if i < self.constraints.len() - 1 {
                r.sql.push(',');
            }
        }

        r.sql.push('\n');
        r.close_paren()?;

        if let Some(options) = &self.options {
            r.sql.push(' ');
            r.push_fragment(options.trim())?;
        }
        if let Some(partition) = &self.partition {
            r.sql.push(' ');
            partition.render(r)?;
        }
        r.sql.push(';');

        debug!(
            table = %self.table.name,
            columns = num_cols,
            partitioned = self.partition.is_some(),
            "Rendered CREATE TABLE"
        );
        Ok(())
    }
}

impl CreateTable {
    fn validate(&self) -> PlannerResult<()> {
        let invalid = |msg: String| Err(PlannerError::InvalidTable(msg));

        if self.table.name.trim().is_empty() {
            return invalid("table name is empty".to_string());
        }
        if self.columns.is_empty() {
            return invalid(format!("table `{}` has no columns", self.table.name));
        }

        let mut names = HashSet::new();
        for col in &self.columns {
            if !names.insert(col.name.as_str()) {
                return invalid(format!("duplicate column `{}`", col.name));
            }
        }
        for constraint in &self.constraints {
            let columns = constraint.columns();
            if columns.is_empty() {
                return invalid("constraint has no columns".to_string());
            }
            if let Some(missing) = columns.iter().find(|c| !names.contains(*c)) {
                return invalid(format!("constraint references unknown column `{missing}`"));
            }
        }
        Ok(())
    }
}

impl Render for ColumnDef {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        let mode = r.dialect.compatible_mode();

        // Name and Type
        r.push_identifier(&self.name);
        r.sql.push(' ');
        let data_type = r.dialect.render_data_type(&self.data_type);
        r.push_fragment(&data_type)?;

        // Oracle mode wants the identity clause ahead of constraints
        if self.auto_increment && mode == CompatibleMode::Oracle {
            r.sql.push_str(" GENERATED BY DEFAULT AS IDENTITY");
        }

        // Constraints
        if self.is_primary_key {
            r.sql.push_str(" PRIMARY KEY");
        }
        if !self.is_nullable {
            r.sql.push_str(" NOT NULL");
        }
        if self.auto_increment && mode.is_mysql_mode() {
            r.sql.push_str(" AUTO_INCREMENT");
        }
        if let Some(default) = &self.default_value {
            r.sql.push_str(" DEFAULT ");
            default.render(r)?;
        }
        if let Some(comment) = &self.comment {
            if !mode.is_mysql_mode() {
                return Err(PlannerError::InvalidTable(format!(
                    "column `{}`: inline comments need MySQL mode",
                    self.name
                )));
            }
            r.sql.push_str(" COMMENT ");
            r.sql.push_str(&quote_string_literal(comment));
        }
        Ok(())
    }
}

impl Render for TableConstraint {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        match self {
            TableConstraint::PrimaryKey { columns } => {
                r.sql.push_str("PRIMARY KEY ");
                render_columns(columns, r)?;
            }
            TableConstraint::Unique { name, columns } => {
                r.sql.push_str("UNIQUE KEY ");
                render_key_name(name.as_deref(), r);
                render_columns(columns, r)?;
            }
            TableConstraint::Index { name, columns } => {
                r.sql.push_str("KEY ");
                render_key_name(name.as_deref(), r);
                render_columns(columns, r)?;
            }
            TableConstraint::Spatial { name, columns } => {
                r.sql.push_str("SPATIAL KEY ");
                render_key_name(name.as_deref(), r);
                render_columns(columns, r)?;
            }
            TableConstraint::FullText {
                name,
                columns,
                parser,
            } => {
                r.sql.push_str("FULLTEXT INDEX ");
                render_key_name(name.as_deref(), r);
                render_columns(columns, r)?;
                render_parser(parser.as_deref(), r)?;
            }
            TableConstraint::Vector {
                name,
                column,
                params,
            } => {
                r.sql.push_str("VECTOR INDEX ");
                render_key_name(name.as_deref(), r);
                render_columns(std::slice::from_ref(column), r)?;
                if !params.is_empty() {
                    r.sql.push_str(" WITH ");
                    r.open_paren();
                    for (i, (key, value)) in params.iter().enumerate() {
                        if i > 0 {
                            r.sql.push_str(", ");
                        }
                        r.push_fragment(key)?;
                        r.sql.push('=');
                        r.push_fragment(value)?;
                    }
                    r.close_paren()?;
                }
            }
        }
        Ok(())
    }
}

fn render_key_name(name: Option<&str>, r: &mut Renderer) {
    if let Some(name) = name {
        r.push_identifier(name);
        r.sql.push(' ');
    }
}

pub(super) fn render_parser(parser: Option<&str>, r: &mut Renderer) -> PlannerResult<()> {
    if let Some(parser) = parser {
        r.sql.push_str(" WITH PARSER ");
        r.push_fragment(parser)?;
    }
    Ok(())
}

pub(super) fn render_table_ref(table: &TableRef, r: &mut Renderer) {
    if let Some(schema) = &table.schema {
        r.push_identifier(schema);
        r.sql.push('.');
    }
    r.push_identifier(&table.name);
}

pub(super) fn render_columns(columns: &[String], r: &mut Renderer) -> PlannerResult<()> {
    r.open_paren();
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        r.push_identifier(column);
    }
    Ok(r.close_paren()?)
}

#[cfg(test)]
mod tests {
    use crate::{
        error::PlannerError,
        query::{
            ast::{create_table::TableConstraint, expr::Expr},
            builder::{create_table::CreateTableBuilder, partition::PartitionBuilder},
            dialect::OceanBase,
            to_sql,
        },
        table_ref,
    };
    use model::core::data_type::{ColumnType, CompatibleMode};
    use tracing_test::traced_test;

    #[test]
    fn test_render_create_table() {
        let ast = CreateTableBuilder::new(table_ref!("users"))
            .if_not_exists()
            .column("id", ColumnType::BigInt)
            .auto_increment()
            .add()
            .column("email", ColumnType::VarChar(255))
            .add()
            .column("active", ColumnType::Boolean)
            .default_value(Expr::Literal("TRUE".to_string()))
            .comment("soft delete flag")
            .add()
            .primary_key(["id"])
            .build();

        let (sql, params) = to_sql(&ast, &OceanBase::default()).unwrap();

        let expected_sql = "CREATE TABLE IF NOT EXISTS `users` (
\t`id` BIGINT NOT NULL AUTO_INCREMENT,
\t`email` VARCHAR(255) NOT NULL,
\t`active` BOOLEAN NOT NULL DEFAULT TRUE COMMENT 'soft delete flag',
\tPRIMARY KEY (`id`)
);";
        assert_eq!(sql, expected_sql);
        assert!(params.is_empty());
    }

    #[test]
    #[traced_test]
    fn test_render_vector_table_with_partition() {
        let ast = CreateTableBuilder::new(table_ref!("test", "items"))
            .column("id", ColumnType::Int)
            .primary_key()
            .add()
            .column("embedding", ColumnType::Vector(3))
            .add()
            .column("tags", ColumnType::Array(Box::new(ColumnType::VarChar(20))))
            .nullable()
            .default_value(Expr::Null)
            .add()
            .column("geo", ColumnType::Point { srid: Some(4326) })
            .add()
            .constraint(TableConstraint::Vector {
                name: Some("vidx".to_string()),
                column: "embedding".to_string(),
                params: vec![
                    ("distance".to_string(), "l2".to_string()),
                    ("type".to_string(), "hnsw".to_string()),
                    ("lib".to_string(), "vsag".to_string()),
                ],
            })
            .options("DEFAULT CHARSET=utf8mb4")
            .partition(PartitionBuilder::hash("id", 4).build())
            .build();

        let (sql, _) = to_sql(&ast, &OceanBase::default()).unwrap();

        let expected_sql = "CREATE TABLE `test`.`items` (
\t`id` INT PRIMARY KEY NOT NULL,
\t`embedding` VECTOR(3) NOT NULL,
\t`tags` ARRAY(VARCHAR(20)) DEFAULT NULL,
\t`geo` POINT SRID 4326 NOT NULL,
\tVECTOR INDEX `vidx` (`embedding`) WITH (distance=l2, type=hnsw, lib=vsag)
) DEFAULT CHARSET=utf8mb4 PARTITION BY HASH (id) PARTITIONS 4;";
        assert_eq!(sql, expected_sql);
        assert!(logs_contain("Rendered CREATE TABLE"));
    }

    #[test]
    fn test_render_keys_and_fulltext() {
        let ast = CreateTableBuilder::new(table_ref!("docs"))
            .column("id", ColumnType::BigInt)
            .add()
            .column("title", ColumnType::VarChar(200))
            .add()
            .column("body", ColumnType::LongText)
            .add()
            .primary_key(["id"])
            .constraint(TableConstraint::Unique {
                name: Some("uk_title".to_string()),
                columns: vec!["title".to_string()],
            })
            .constraint(TableConstraint::Index {
                name: Some("idx_title_id".to_string()),
                columns: vec!["title".to_string(), "id".to_string()],
            })
            .constraint(TableConstraint::FullText {
                name: Some("ft_body".to_string()),
                columns: vec!["body".to_string()],
                parser: Some("ngram".to_string()),
            })
            .build();

        let (sql, _) = to_sql(&ast, &OceanBase::default()).unwrap();
        assert!(sql.contains("\tUNIQUE KEY `uk_title` (`title`),\n"));
        assert!(sql.contains("\tKEY `idx_title_id` (`title`, `id`),\n"));
        assert!(sql.ends_with("\tFULLTEXT INDEX `ft_body` (`body`) WITH PARSER ngram\n);"));
    }

    #[test]
    fn test_render_unnamed_and_spatial_keys() {
        let ast = CreateTableBuilder::new(table_ref!("places"))
            .column("a", ColumnType::Int)
            .add()
            .column("g", ColumnType::Point { srid: Some(4326) })
            .add()
            .constraint(TableConstraint::Index {
                name: None,
                columns: vec!["a".to_string()],
            })
            .constraint(TableConstraint::Spatial {
                name: Some("sg".to_string()),
                columns: vec!["g".to_string()],
            })
            .constraint(TableConstraint::Spatial {
                name: None,
                columns: vec!["g".to_string()],
            })
            .build();

        let (sql, _) = to_sql(&ast, &OceanBase::default()).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE `places` (
\t`a` INT NOT NULL,
\t`g` POINT SRID 4326 NOT NULL,
\tKEY (`a`),
\tSPATIAL KEY `sg` (`g`),
\tSPATIAL KEY (`g`)
);"
        );
    }

    #[test]
    fn test_render_oracle_mode_types() {
        let ast = CreateTableBuilder::new(table_ref!("T1"))
            .column("ID", ColumnType::BigInt)
            .auto_increment()
            .add()
            .column("NAME", ColumnType::VarChar(30))
            .nullable()
            .add()
            .build();

        let (sql, _) = to_sql(&ast, &OceanBase::new(CompatibleMode::Oracle)).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE \"T1\" (\n\t\"ID\" NUMBER(19) GENERATED BY DEFAULT AS IDENTITY NOT NULL,\n\t\"NAME\" VARCHAR2(30)\n);"
        );
    }

    #[test]
    fn test_invalid_tables_are_rejected() {
        let empty = CreateTableBuilder::new(table_ref!("t")).build();
        assert!(matches!(
            to_sql(&empty, &OceanBase::default()),
            Err(PlannerError::InvalidTable(_))
        ));

        let unknown_key = CreateTableBuilder::new(table_ref!("t"))
            .column("a", ColumnType::Int)
            .add()
            .primary_key(["b"])
            .build();
        assert!(matches!(
            to_sql(&unknown_key, &OceanBase::default()),
            Err(PlannerError::InvalidTable(_))
        ));

        let bad_partition = CreateTableBuilder::new(table_ref!("t"))
            .column("a", ColumnType::Int)
            .add()
            .partition(PartitionBuilder::hash("a", 0).build())
            .build();
        assert!(matches!(
            to_sql(&bad_partition, &OceanBase::default()),
            Err(PlannerError::InvalidPartitionDescriptor(_))
        ));
    }
}
