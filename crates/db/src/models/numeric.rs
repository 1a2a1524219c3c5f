//! Numeric request values passed through to MySQL untouched.

use serde::Deserialize;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::mysql::MySqlTypeInfo;
use sqlx::{Encode, MySql, Type};

/// A numeric column value as the client sent it.
///
/// JSON numbers stay numbers; JSON strings and every form value stay text.
/// Nothing is parsed here: the value is bound with its own type and MySQL
/// coerces it or rejects it (`"10000"` becomes `10000`, `""` fails under
/// strict mode).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Int(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl Type<MySql> for NumericInput {
    fn type_info() -> MySqlTypeInfo {
        <str as Type<MySql>>::type_info()
    }

    fn compatible(ty: &MySqlTypeInfo) -> bool {
        <i64 as Type<MySql>>::compatible(ty)
            || <f64 as Type<MySql>>::compatible(ty)
            || <str as Type<MySql>>::compatible(ty)
    }
}

impl<'q> Encode<'q, MySql> for NumericInput {
    fn encode_by_ref(&self, buf: &mut Vec<u8>) -> Result<IsNull, BoxDynError> {
        match self {
            NumericInput::Int(value) => <i64 as Encode<'q, MySql>>::encode_by_ref(value, buf),
            NumericInput::Float(value) => <f64 as Encode<'q, MySql>>::encode_by_ref(value, buf),
            NumericInput::Text(value) => <String as Encode<'q, MySql>>::encode_by_ref(value, buf),
        }
    }

    fn produces(&self) -> Option<MySqlTypeInfo> {
        Some(match self {
            NumericInput::Int(_) => <i64 as Type<MySql>>::type_info(),
            NumericInput::Float(_) => <f64 as Type<MySql>>::type_info(),
            NumericInput::Text(_) => <str as Type<MySql>>::type_info(),
        })
    }
}
