use ddl_syntax::{ast::table::KeyKind, parse};

const VECTOR_TABLE: &str = "CREATE TABLE `test_table` (
  `id` varchar(4096) NOT NULL,
  `text` longtext DEFAULT NULL,
  `embeddings` VECTOR(1024) DEFAULT NULL,
  `metadata` json DEFAULT NULL,
  PRIMARY KEY (`id`)
) DEFAULT CHARSET = utf8mb4 ROW_FORMAT = DYNAMIC COMPRESSION = 'zstd_1.3.8' REPLICA_NUM = 1 BLOCK_SIZE = 16384 USE_BLOOM_FILTER = FALSE TABLET_SIZE = 134217728 PCTFREE = 0
";

#[test]
fn test_two_column_body() {
    let ddl = "CREATE TABLE `t` (`id` varchar(4096) NOT NULL, `meta` json DEFAULT NULL, PRIMARY KEY (`id`))";
    let table = parse(ddl, "utf8").unwrap();

    let columns = table.columns();
    assert_eq!(columns.len(), 2);

    assert_eq!(columns[0].name, "id");
    assert_eq!(columns[0].type_text, "varchar(4096)");
    assert!(!columns[0].nullable);
    assert_eq!(columns[0].default, None);

    assert_eq!(columns[1].name, "meta");
    assert_eq!(columns[1].type_text, "json");
    assert!(columns[1].nullable);
    assert_eq!(columns[1].default, None);

    assert_eq!(table.keys().len(), 1);
    assert_eq!(table.keys()[0].kind, KeyKind::PrimaryKey);
    assert_eq!(table.keys()[0].name, None);
    assert_eq!(table.keys()[0].columns, vec!["id".to_string()]);
}

#[test]
fn test_vector_table_with_options() {
    let table = parse(VECTOR_TABLE, "utf8").unwrap();

    assert_eq!(table.name(), "test_table");
    assert_eq!(table.columns().len(), 4);
    assert_eq!(table.keys().len(), 1);

    let embeddings = table.column("embeddings").unwrap();
    assert_eq!(embeddings.type_text, "VECTOR(1024)");
    assert_eq!(embeddings.ordinal_position, 2);

    assert_eq!(
        table.options(),
        Some(
            "DEFAULT CHARSET = utf8mb4 ROW_FORMAT = DYNAMIC COMPRESSION = 'zstd_1.3.8' REPLICA_NUM = 1 BLOCK_SIZE = 16384 USE_BLOOM_FILTER = FALSE TABLET_SIZE = 134217728 PCTFREE = 0"
        )
    );
}

#[test]
fn test_ordinal_positions_follow_declaration_order() {
    let table = parse(VECTOR_TABLE, "utf8").unwrap();

    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "text", "embeddings", "metadata"]);
    for (i, column) in table.columns().iter().enumerate() {
        assert_eq!(column.ordinal_position, i);
    }
}

#[test]
fn test_gis_and_array_columns() {
    let ddl = "CREATE TABLE `places` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `geo` point NOT NULL /*!80003 SRID 4326 */,
  `tags` ARRAY(VARCHAR(20)) DEFAULT NULL,
  `sparse` SPARSEVECTOR DEFAULT NULL,
  `note` varchar(64) COLLATE utf8mb4_bin DEFAULT 'n/a' COMMENT 'free ''text''',
  PRIMARY KEY (`id`),
  SPATIAL KEY `idx_geo` (`geo`) BLOCK_SIZE 16384 LOCAL
) AUTO_INCREMENT = 1000001 DEFAULT CHARSET = utf8mb4;";
    let table = parse(ddl, "utf8mb4").unwrap();

    let geo = table.column("geo").unwrap();
    assert_eq!(geo.type_text, "point SRID 4326");
    assert!(!geo.nullable);

    assert_eq!(table.column("tags").unwrap().type_text, "ARRAY(VARCHAR(20))");
    assert_eq!(table.column("sparse").unwrap().type_text, "SPARSEVECTOR");
    assert!(table.column("id").unwrap().auto_increment);

    let note = table.column("note").unwrap();
    assert_eq!(note.default.as_deref(), Some("'n/a'"));
    assert_eq!(note.comment.as_deref(), Some("free 'text'"));

    assert_eq!(table.keys()[1].kind, KeyKind::Spatial);
    assert_eq!(table.keys()[1].name.as_deref(), Some("idx_geo"));
    assert_eq!(
        table.options(),
        Some("AUTO_INCREMENT = 1000001 DEFAULT CHARSET = utf8mb4")
    );
}

#[test]
fn test_partition_options_are_kept_raw() {
    let ddl = "CREATE TABLE `logs` (
  `id` bigint NOT NULL,
  `log_date` date NOT NULL
) DEFAULT CHARSET = utf8mb4
 partition by range columns(log_date)
(partition M202001 values less than ('2020/02/01'),
partition MMAX values less than (MAXVALUE))";
    let table = parse(ddl, "utf8mb4").unwrap();

    let options = table.options().unwrap();
    assert!(options.starts_with("DEFAULT CHARSET = utf8mb4"));
    assert!(options.ends_with("values less than (MAXVALUE))"));
}

#[test]
fn test_definition_serializes() {
    let table = parse("CREATE TABLE t (a int NOT NULL)", "utf8").unwrap();
    let json = serde_json::to_value(&table).unwrap();

    assert_eq!(json["name"], "t");
    assert_eq!(json["columns"][0]["type_text"], "int");
    assert_eq!(json["columns"][0]["nullable"], false);
}
