#[cfg(test)]
mod tests {
    use crate::utils::{ORDERS_TABLE_DDL, PLACES_TABLE_DDL, VECTOR_TABLE_DDL, to_create_table};
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use ddl_syntax::{ast::table::KeyKind, parse, parser::undeclared_key_columns};
    use model::{
        core::value::{LogicalType, TypedValue},
        error::ValueError,
    };
    use planner::{
        PlannerError, compile,
        query::{
            ast::expr::Expr, builder::partition::PartitionBuilder, dialect::OceanBase,
            json_value, json_value_as, to_sql,
        },
    };
    use serde_json::json;
    use std::str::FromStr;
    use tracing_test::traced_test;

    /// Parse -> render -> parse, returning both definitions.
    fn round_trip(ddl: &str) -> (ddl_syntax::ast::table::TableDefinition, String) {
        let table = parse(ddl, "utf8mb4").unwrap();
        let (sql, params) = to_sql(&to_create_table(&table), &OceanBase::default()).unwrap();
        assert!(params.is_empty());
        (table, sql)
    }

    // Scenario: reflect a table, regenerate its DDL and reflect it again.
    // Expected Outcome: columns and keys are identical on both sides.
    #[test]
    #[traced_test]
    fn tc01_round_trip_preserves_columns_and_keys() {
        let (original, sql) = round_trip(ORDERS_TABLE_DDL);
        let reparsed = parse(&sql, "utf8mb4").unwrap();

        assert_eq!(reparsed.name(), original.name());
        assert_eq!(reparsed.columns(), original.columns());
        assert_eq!(reparsed.keys(), original.keys());
        assert_eq!(reparsed.options(), Some("DEFAULT CHARSET = utf8mb4"));
        assert!(undeclared_key_columns(&reparsed).is_empty());
        assert!(logs_contain("Parsed table DDL"));
    }

    #[test]
    fn tc02_round_trip_vector_table() {
        let (original, sql) = round_trip(VECTOR_TABLE_DDL);
        let reparsed = parse(&sql, "utf8mb4").unwrap();

        assert_eq!(reparsed.columns().len(), 4);
        assert_eq!(reparsed.columns(), original.columns());
        assert_eq!(reparsed.keys()[0].kind, KeyKind::PrimaryKey);
        assert_eq!(reparsed.options(), original.options());
    }

    #[test]
    fn tc03_regenerated_ddl_is_deterministic() {
        let (_, first) = round_trip(ORDERS_TABLE_DDL);
        let (_, second) = round_trip(ORDERS_TABLE_DDL);
        assert_eq!(first, second);
        assert!(first.starts_with("CREATE TABLE `orders` (\n\t`id` bigint NOT NULL AUTO_INCREMENT,"));
    }

    #[test]
    fn tc04_column_order_survives_round_trip() {
        let (_, sql) = round_trip(ORDERS_TABLE_DDL);
        let reparsed = parse(&sql, "utf8mb4").unwrap();

        let names: Vec<&str> = reparsed.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["id", "code", "amount", "created_at", "note", "embedding"]
        );
        for (i, col) in reparsed.columns().iter().enumerate() {
            assert_eq!(col.ordinal_position, i);
        }
    }

    // Scenario: a partitioned table is generated and reflected back.
    // Expected Outcome: the partition clause lands verbatim in the options text.
    #[test]
    #[traced_test]
    fn tc05_partitioned_table_reflects_partition_clause() {
        let partition = PartitionBuilder::range_columns(["log_date"])
            .less_than("M202001", "'2020/02/01'")
            .max_value("MMAX")
            .build();
        let clause = compile(&partition).unwrap();

        let mut table = to_create_table(
            &parse(
                "CREATE TABLE `logs` (`id` bigint NOT NULL, `log_date` date NOT NULL)",
                "utf8",
            )
            .unwrap(),
        );
        table.partition = Some(partition);

        let (sql, _) = to_sql(&table, &OceanBase::default()).unwrap();
        let reparsed = parse(&sql, "utf8").unwrap();

        assert_eq!(reparsed.options(), Some(clause.as_str()));
        assert!(logs_contain("Compiled partition clause"));
    }

    // Scenario: project a JSON path as DECIMAL and convert the fetched value.
    // Expected Outcome: the SQL names the column and path, the value rounds half-up.
    #[test]
    fn tc06_json_projection_with_decimal_result() {
        let projection = json_value("meta", "$.price", "DECIMAL(10, 2)").unwrap();
        let (sql, _) = to_sql(&projection, &OceanBase::default()).unwrap();
        assert_eq!(sql, "JSON_VALUE(`meta`, '$.price' RETURNING DECIMAL(10, 2))");

        let fetched =
            TypedValue::decimal(10, 2, BigDecimal::from_str("123.456").unwrap()).unwrap();
        assert_eq!(fetched.to_json().unwrap(), json!(123.46));
    }

    #[test]
    fn tc07_json_projection_typed_targets() {
        let target = LogicalType::Varchar { max_len: 16 };
        let projection = json_value_as("t.meta", "$.name", &target).unwrap();
        let (sql, _) = to_sql(&Expr::alias(projection, "name"), &OceanBase::default()).unwrap();
        assert_eq!(
            sql,
            "JSON_VALUE(`t`.`meta`, '$.name' RETURNING VARCHAR(16)) AS `name`"
        );

        let ts = NaiveDate::from_ymd_opt(2024, 12, 30)
            .unwrap()
            .and_hms_opt(3, 35, 30)
            .unwrap();
        assert_eq!(
            TypedValue::timestamp(ts).to_json().unwrap(),
            json!("2024-12-30T03:35:30")
        );

        assert_eq!(
            TypedValue::varchar(4, "too long"),
            Err(ValueError::ValueTooLong {
                max_len: 4,
                actual: 8
            })
        );
    }

    #[test]
    fn tc08_invalid_inputs_are_rejected_before_rendering() {
        assert!(matches!(
            json_value("meta", "$.a", "CHAR(1)); DROP TABLE t"),
            Err(PlannerError::InvalidProjection(_))
        ));
        assert!(matches!(
            compile(&PartitionBuilder::hash("id", 0).build()),
            Err(PlannerError::InvalidPartitionDescriptor(_))
        ));
        assert!(parse("CREATE TABLE t (a int", "utf8").is_err());
    }

    // Scenario: a table with unnamed secondary keys and spatial keys is
    // regenerated and reflected again.
    // Expected Outcome: key names stay absent and spatial keys stay spatial.
    #[test]
    fn tc09_round_trip_keeps_unnamed_and_spatial_keys() {
        let (original, sql) = round_trip(PLACES_TABLE_DDL);
        let reparsed = parse(&sql, "utf8mb4").unwrap();

        assert_eq!(reparsed.keys(), original.keys());
        assert_eq!(reparsed.columns(), original.columns());

        let kinds: Vec<(Option<&str>, KeyKind)> = reparsed
            .keys()
            .iter()
            .map(|k| (k.name.as_deref(), k.kind))
            .collect();
        assert_eq!(
            kinds,
            [
                (None, KeyKind::PrimaryKey),
                (None, KeyKind::Key),
                (None, KeyKind::Key),
                (Some("idx_geo"), KeyKind::Spatial),
                (None, KeyKind::Spatial),
            ]
        );
        assert!(sql.contains("\tKEY (`name`),\n"));
        assert!(sql.contains("\tSPATIAL KEY `idx_geo` (`geo`),\n"));
    }

    #[test]
    fn tc10_minimal_unnamed_key_round_trip() {
        let (original, sql) = round_trip("CREATE TABLE t (a int, KEY (a))");
        let reparsed = parse(&sql, "utf8").unwrap();

        assert_eq!(reparsed.keys(), original.keys());
        assert_eq!(reparsed.keys()[0].name, None);
    }
}
