use ddl_syntax::{
    ast::table::{KeyDefinition, KeyKind},
    parse,
};

fn key(name: Option<&str>, kind: KeyKind, columns: &[&str]) -> KeyDefinition {
    KeyDefinition {
        name: name.map(str::to_string),
        kind,
        columns: columns.iter().map(|c| c.to_string()).collect(),
    }
}

#[test]
fn test_all_key_kinds() {
    let ddl = "CREATE TABLE `docs` (
  `id` bigint NOT NULL,
  `code` varchar(32) NOT NULL,
  `title` varchar(255) DEFAULT NULL,
  `body` longtext,
  `embedding` VECTOR(3) DEFAULT NULL,
  PRIMARY KEY (`id`),
  UNIQUE KEY `uk_code` (`code`) BLOCK_SIZE 16384 LOCAL,
  KEY `idx_title` (`title`(10), `id` DESC) USING BTREE,
  FULLTEXT KEY `ft_body` (`body`) WITH PARSER ngram,
  VECTOR KEY `vidx` (`embedding`) WITH (DISTANCE=L2, TYPE=HNSW, LIB=VSAG)
)";
    let table = parse(ddl, "utf8mb4").unwrap();

    assert_eq!(
        table.keys(),
        &[
            key(None, KeyKind::PrimaryKey, &["id"]),
            key(Some("uk_code"), KeyKind::UniqueKey, &["code"]),
            key(Some("idx_title"), KeyKind::Key, &["title", "id"]),
            key(Some("ft_body"), KeyKind::FullText, &["body"]),
            key(Some("vidx"), KeyKind::Vector, &["embedding"]),
        ]
    );
    assert_eq!(table.primary_key(), Some(&table.keys()[0]));
    assert_eq!(table.columns().len(), 5);
}

#[test]
fn test_constraints() {
    let ddl = "CREATE TABLE `orders` (
  `id` int NOT NULL,
  `user_id` int NOT NULL,
  CONSTRAINT `pk_orders` PRIMARY KEY (`id`),
  CONSTRAINT `uk_user` UNIQUE (`user_id`),
  CONSTRAINT `fk_user` FOREIGN KEY (`user_id`) REFERENCES `users` (`id`) ON DELETE CASCADE,
  CONSTRAINT `chk_id` CHECK ((`id` > 0))
)";
    let table = parse(ddl, "utf8").unwrap();

    assert_eq!(
        table.keys(),
        &[
            key(None, KeyKind::PrimaryKey, &["id"]),
            key(Some("uk_user"), KeyKind::UniqueKey, &["user_id"]),
        ]
    );
}

#[test]
fn test_functional_key_part_is_kept() {
    let ddl = "CREATE TABLE t (a json, KEY `idx_a` ((cast(json_extract(`a`, '$.x') as unsigned))))";
    let table = parse(ddl, "utf8").unwrap();

    assert_eq!(
        table.keys()[0].columns,
        vec!["cast(json_extract(`a`, '$.x') as unsigned)".to_string()]
    );
}
