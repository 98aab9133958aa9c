use crate::error::ValueError;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

/// SQL mode of an OceanBase tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CompatibleMode {
    #[default]
    MySql,
    Oracle,
}

impl CompatibleMode {
    pub fn parse(mode: &str) -> Result<Self, ValueError> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(CompatibleMode::MySql),
            "oracle" => Ok(CompatibleMode::Oracle),
            _ => Err(ValueError::UnknownCompatibleMode(mode.to_string())),
        }
    }

    pub fn is_mysql_mode(&self) -> bool {
        matches!(self, CompatibleMode::MySql)
    }
}

impl TryFrom<String> for CompatibleMode {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CompatibleMode::parse(&value)
    }
}

impl From<CompatibleMode> for String {
    fn from(mode: CompatibleMode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for CompatibleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatibleMode::MySql => write!(f, "mysql"),
            CompatibleMode::Oracle => write!(f, "oracle"),
        }
    }
}

/// Column type used when generating `CREATE TABLE` statements, including
/// the OceanBase vector, array and GIS types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnType {
    Boolean,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal { precision: u32, scale: u32 },
    Char(u32),
    VarChar(u32),
    Text,
    LongText,
    Json,
    Date,
    DateTime,
    Timestamp,
    Blob,
    /// Dense float vector with a fixed dimension.
    Vector(u32),
    SparseVector,
    Array(Box<ColumnType>),
    Point { srid: Option<u32> },
    /// Type text emitted verbatim, e.g. a reflected vendor type.
    Custom(String),
}

impl ColumnType {
    pub fn sql_name(&self, mode: CompatibleMode) -> Cow<'_, str> {
        match (self, mode) {
            (ColumnType::Boolean, CompatibleMode::MySql) => Cow::Borrowed("BOOLEAN"),
            (ColumnType::Boolean, CompatibleMode::Oracle) => Cow::Borrowed("NUMBER(1)"),
            (ColumnType::SmallInt, _) => Cow::Borrowed("SMALLINT"),
            (ColumnType::Int, _) => Cow::Borrowed("INT"),
            (ColumnType::BigInt, CompatibleMode::MySql) => Cow::Borrowed("BIGINT"),
            (ColumnType::BigInt, CompatibleMode::Oracle) => Cow::Borrowed("NUMBER(19)"),
            (ColumnType::Float, _) => Cow::Borrowed("FLOAT"),
            (ColumnType::Double, CompatibleMode::MySql) => Cow::Borrowed("DOUBLE"),
            (ColumnType::Double, CompatibleMode::Oracle) => Cow::Borrowed("BINARY_DOUBLE"),
            (ColumnType::Decimal { precision, scale }, CompatibleMode::MySql) => {
                Cow::Owned(format!("DECIMAL({precision}, {scale})"))
            }
            (ColumnType::Decimal { precision, scale }, CompatibleMode::Oracle) => {
                Cow::Owned(format!("NUMBER({precision}, {scale})"))
            }
            (ColumnType::Char(len), _) => Cow::Owned(format!("CHAR({len})")),
            (ColumnType::VarChar(len), CompatibleMode::MySql) => {
                Cow::Owned(format!("VARCHAR({len})"))
            }
            (ColumnType::VarChar(len), CompatibleMode::Oracle) => {
                Cow::Owned(format!("VARCHAR2({len})"))
            }
            (ColumnType::Text, CompatibleMode::MySql) => Cow::Borrowed("TEXT"),
            (ColumnType::LongText, CompatibleMode::MySql) => Cow::Borrowed("LONGTEXT"),
            (ColumnType::Text | ColumnType::LongText, CompatibleMode::Oracle) => {
                Cow::Borrowed("CLOB")
            }
            (ColumnType::Json, _) => Cow::Borrowed("JSON"),
            (ColumnType::Date, _) => Cow::Borrowed("DATE"),
            (ColumnType::DateTime, CompatibleMode::MySql) => Cow::Borrowed("DATETIME"),
            (ColumnType::DateTime | ColumnType::Timestamp, CompatibleMode::Oracle) => {
                Cow::Borrowed("TIMESTAMP")
            }
            (ColumnType::Timestamp, CompatibleMode::MySql) => Cow::Borrowed("TIMESTAMP"),
            (ColumnType::Blob, _) => Cow::Borrowed("BLOB"),
            (ColumnType::Vector(dim), _) => Cow::Owned(format!("VECTOR({dim})")),
            (ColumnType::SparseVector, _) => Cow::Borrowed("SPARSEVECTOR"),
            (ColumnType::Array(inner), _) => Cow::Owned(format!("ARRAY({})", inner.sql_name(mode))),
            (ColumnType::Point { srid: Some(srid) }, _) => Cow::Owned(format!("POINT SRID {srid}")),
            (ColumnType::Point { srid: None }, _) => Cow::Borrowed("POINT"),
            (ColumnType::Custom(name), _) => Cow::Borrowed(name),
        }
    }
}
