use crate::error::ValueError;
use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};
use std::{fmt, str::FromStr};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Logical type of a virtual JSON-table column, with the parameters needed
/// to validate values of that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    Bool,
    Int,
    Timestamp,
    Varchar { max_len: usize },
    Decimal { precision: u32, scale: u32 },
}

impl LogicalType {
    /// Target type name for `JSON_VALUE(... RETURNING <type>)`.
    pub fn sql_type(&self) -> String {
        match self {
            LogicalType::Bool => "UNSIGNED".to_string(),
            LogicalType::Int => "SIGNED".to_string(),
            LogicalType::Timestamp => "DATETIME".to_string(),
            LogicalType::Varchar { max_len } => format!("VARCHAR({max_len})"),
            LogicalType::Decimal { precision, scale } => format!("DECIMAL({precision}, {scale})"),
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql_type())
    }
}

/// A scalar tagged with its declared logical type.
///
/// Decimals are rounded half-up to their scale when constructed and are
/// always projected to JSON as numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Bool(bool),
    Int(i64),
    Timestamp {
        value: NaiveDateTime,
        offset: Option<FixedOffset>,
    },
    Varchar {
        max_len: usize,
        value: String,
    },
    Decimal {
        precision: u32,
        scale: u32,
        value: BigDecimal,
    },
}

impl TypedValue {
    pub fn timestamp(value: NaiveDateTime) -> Self {
        TypedValue::Timestamp {
            value,
            offset: None,
        }
    }

    pub fn timestamp_tz(value: DateTime<FixedOffset>) -> Self {
        TypedValue::Timestamp {
            value: value.naive_local(),
            offset: Some(*value.offset()),
        }
    }

    pub fn varchar(max_len: usize, value: impl Into<String>) -> Result<Self, ValueError> {
        let value = value.into();
        check_length(&value, max_len)?;
        Ok(TypedValue::Varchar { max_len, value })
    }

    pub fn decimal(precision: u32, scale: u32, value: BigDecimal) -> Result<Self, ValueError> {
        let value = round_decimal(&value, precision, scale)?;
        Ok(TypedValue::Decimal {
            precision,
            scale,
            value,
        })
    }

    pub fn decimal_from_f64(precision: u32, scale: u32, value: f64) -> Result<Self, ValueError> {
        let parsed = BigDecimal::from_str(&value.to_string())
            .map_err(|e| ValueError::InvalidDecimal(format!("{value}: {e}")))?;
        Self::decimal(precision, scale, parsed)
    }

    pub fn logical_type(&self) -> LogicalType {
        match self {
            TypedValue::Bool(_) => LogicalType::Bool,
            TypedValue::Int(_) => LogicalType::Int,
            TypedValue::Timestamp { .. } => LogicalType::Timestamp,
            TypedValue::Varchar { max_len, .. } => LogicalType::Varchar { max_len: *max_len },
            TypedValue::Decimal {
                precision, scale, ..
            } => LogicalType::Decimal {
                precision: *precision,
                scale: *scale,
            },
        }
    }

    /// Checks the value against its type parameters without rendering it.
    pub fn validate(&self) -> Result<(), ValueError> {
        match self {
            TypedValue::Varchar { max_len, value } => check_length(value, *max_len),
            TypedValue::Decimal {
                precision,
                scale,
                value,
            } => round_decimal(value, *precision, *scale).map(|_| ()),
            TypedValue::Bool(_) | TypedValue::Int(_) | TypedValue::Timestamp { .. } => Ok(()),
        }
    }

    pub fn to_json(&self) -> Result<JsonValue, ValueError> {
        match self {
            TypedValue::Bool(v) => Ok(JsonValue::Bool(*v)),
            TypedValue::Int(v) => Ok(JsonValue::from(*v)),
            TypedValue::Timestamp { value, offset } => {
                let mut text = value.format(TIMESTAMP_FORMAT).to_string();
                if let Some(offset) = offset {
                    text.push_str(&offset.to_string());
                }
                Ok(JsonValue::String(text))
            }
            TypedValue::Varchar { max_len, value } => {
                check_length(value, *max_len)?;
                Ok(JsonValue::String(value.clone()))
            }
            TypedValue::Decimal {
                precision,
                scale,
                value,
            } => {
                let rounded = round_decimal(value, *precision, *scale)?;
                let out_of_range = || ValueError::ValueOutOfRange {
                    value: rounded.to_string(),
                    precision: *precision,
                    scale: *scale,
                };
                let float = rounded
                    .to_string()
                    .parse::<f64>()
                    .map_err(|_| out_of_range())?;
                Number::from_f64(float)
                    .map(JsonValue::Number)
                    .ok_or_else(out_of_range)
            }
        }
    }
}

impl From<bool> for TypedValue {
    fn from(v: bool) -> Self {
        TypedValue::Bool(v)
    }
}

impl From<i64> for TypedValue {
    fn from(v: i64) -> Self {
        TypedValue::Int(v)
    }
}

impl From<NaiveDateTime> for TypedValue {
    fn from(v: NaiveDateTime) -> Self {
        TypedValue::timestamp(v)
    }
}

fn check_length(value: &str, max_len: usize) -> Result<(), ValueError> {
    let actual = value.chars().count();
    if actual > max_len {
        return Err(ValueError::ValueTooLong { max_len, actual });
    }
    Ok(())
}

fn round_decimal(value: &BigDecimal, precision: u32, scale: u32) -> Result<BigDecimal, ValueError> {
    if precision == 0 || scale > precision {
        return Err(ValueError::InvalidDecimal(format!(
            "DECIMAL({precision}, {scale}) is not a valid type"
        )));
    }

    let rounded = value.with_scale_round(i64::from(scale), RoundingMode::HalfUp);
    let integer_digits = rounded.digits().saturating_sub(u64::from(scale));
    if integer_digits > u64::from(precision - scale) {
        return Err(ValueError::ValueOutOfRange {
            value: value.to_string(),
            precision,
            scale,
        });
    }
    Ok(rounded)
}
