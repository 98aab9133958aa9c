use ddl_syntax::ast::table::{KeyKind, TableDefinition};
use model::core::data_type::ColumnType;
use planner::query::ast::{
    common::TableRef,
    create_table::{ColumnDef, CreateTable, TableConstraint},
    expr::Expr,
};

/// `SHOW CREATE TABLE` output of a vector store table with the options
/// OceanBase appends.
pub const VECTOR_TABLE_DDL: &str = "CREATE TABLE `test_table` (
  `id` varchar(4096) NOT NULL,
  `text` longtext DEFAULT NULL,
  `embeddings` VECTOR(1024) DEFAULT NULL,
  `metadata` json DEFAULT NULL,
  PRIMARY KEY (`id`)
) DEFAULT CHARSET = utf8mb4 ROW_FORMAT = DYNAMIC COMPRESSION = 'zstd_1.3.8' REPLICA_NUM = 1 BLOCK_SIZE = 16384 USE_BLOOM_FILTER = FALSE TABLET_SIZE = 134217728 PCTFREE = 0";

/// A table touching every column modifier and key kind that survives a
/// render/parse round trip.
pub const ORDERS_TABLE_DDL: &str = "CREATE TABLE `orders` (
  `id` bigint NOT NULL AUTO_INCREMENT,
  `code` varchar(32) NOT NULL DEFAULT '' COMMENT 'external ''code''',
  `amount` decimal(10,2) NOT NULL DEFAULT '0.00',
  `created_at` datetime(6) DEFAULT CURRENT_TIMESTAMP(6),
  `note` longtext,
  `embedding` VECTOR(3) DEFAULT NULL,
  PRIMARY KEY (`id`),
  UNIQUE KEY `uk_code` (`code`),
  KEY `idx_created` (`created_at`, `id`),
  FULLTEXT KEY `ft_note` (`note`) WITH PARSER ngram,
  VECTOR KEY `vidx` (`embedding`) WITH (DISTANCE=L2, TYPE=HNSW, LIB=VSAG)
) DEFAULT CHARSET = utf8mb4";

/// Unnamed secondary keys next to named and unnamed spatial keys.
pub const PLACES_TABLE_DDL: &str = "CREATE TABLE `places` (
  `id` int NOT NULL,
  `name` varchar(64) DEFAULT NULL,
  `geo` point NOT NULL /*!80003 SRID 4326 */,
  `area` geometry NOT NULL,
  PRIMARY KEY (`id`),
  KEY (`name`),
  KEY (`name`, `id`),
  SPATIAL KEY `idx_geo` (`geo`),
  SPATIAL KEY (`area`)
) DEFAULT CHARSET = utf8mb4";

/// Converts a reflected definition back into a renderable `CreateTable`.
///
/// Column types and defaults are carried as raw text. Key names are kept as
/// reflected, so unnamed keys render unnamed.
pub fn to_create_table(table: &TableDefinition) -> CreateTable {
    let columns = table
        .columns()
        .iter()
        .map(|col| ColumnDef {
            name: col.name.clone(),
            data_type: ColumnType::Custom(col.type_text.clone()),
            is_nullable: col.nullable,
            is_primary_key: false,
            auto_increment: col.auto_increment,
            default_value: col.default.clone().map(Expr::Literal),
            comment: col.comment.clone(),
        })
        .collect();

    let constraints = table
        .keys()
        .iter()
        .map(|key| {
            let name = key.name.clone();
            let columns = key.columns.clone();
            match key.kind {
                KeyKind::PrimaryKey => TableConstraint::PrimaryKey { columns },
                KeyKind::UniqueKey => TableConstraint::Unique { name, columns },
                KeyKind::Key => TableConstraint::Index { name, columns },
                KeyKind::Spatial => TableConstraint::Spatial { name, columns },
                KeyKind::FullText => TableConstraint::FullText {
                    name,
                    columns,
                    parser: None,
                },
                KeyKind::Vector => TableConstraint::Vector {
                    name,
                    column: columns.into_iter().next().unwrap_or_default(),
                    params: Vec::new(),
                },
            }
        })
        .collect();

    CreateTable {
        table: TableRef::new(table.name()),
        columns,
        constraints,
        if_not_exists: false,
        options: table.options().map(str::to_string),
        partition: None,
    }
}
