mod float;
mod key;

#[cfg(test)]
mod tests;

pub use float::Float64;
pub use key::IndexKey;

use serde::Serialize;
use thiserror::Error as ThisError;

///
/// ValueShapeError
///
/// Raised while converting raw JSON into attribute values; surfaces as the
/// deserialization failure kind during initialization.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValueShapeError {
    #[error("nested objects are not supported as attribute values")]
    Object,

    #[error("nested lists are not supported as list elements")]
    NestedList,

    #[error("non-finite number is not representable")]
    NonFiniteNumber,
}

///
/// Value
///
/// Tagged union for attribute payloads: string, boolean, number, or an
/// ordered list of scalars. No nested objects at the attribute level.
///
/// Derived `PartialEq` is structural; the coercing equality relation used by
/// search is [`Value::matches`].
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Float(Float64),
    Int(i64),
    List(Vec<Self>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    /// Canonical comparable key for this value; `None` for unkeyable shapes.
    #[must_use]
    pub fn index_key(&self) -> Option<IndexKey> {
        IndexKey::for_value(self)
    }

    /// Total, never-failing equality against a query value.
    ///
    /// Scalar vs scalar compares canonical keys (numeric text equals its
    /// number, booleans only equal booleans); a stored list matches when any
    /// element matches; every other combination is "no match".
    #[must_use]
    pub fn matches(&self, query: &Self) -> bool {
        let Some(query_key) = query.index_key() else {
            return false;
        };

        match self {
            Self::List(items) => items
                .iter()
                .any(|item| item.index_key().is_some_and(|key| key == query_key)),
            _ => self.index_key().is_some_and(|key| key == query_key),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueShapeError;

    fn try_from(raw: serde_json::Value) -> Result<Self, Self::Error> {
        match raw {
            serde_json::Value::Null => Ok(Self::Null),
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Self::Uint(u))
                } else if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else {
                    let f = n.as_f64().ok_or(ValueShapeError::NonFiniteNumber)?;
                    let f = Float64::try_new(f).ok_or(ValueShapeError::NonFiniteNumber)?;
                    Ok(Self::Float(f))
                }
            }
            serde_json::Value::String(s) => Ok(Self::Text(s)),
            serde_json::Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    if item.is_array() {
                        return Err(ValueShapeError::NestedList);
                    }
                    out.push(Self::try_from(item)?);
                }
                Ok(Self::List(out))
            }
            serde_json::Value::Object(_) => Err(ValueShapeError::Object),
        }
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool    => Bool,
    Float64 => Float,
    i8      => Int,
    i16     => Int,
    i32     => Int,
    i64     => Int,
    &str    => Text,
    String  => Text,
    u8      => Uint,
    u16     => Uint,
    u32     => Uint,
    u64     => Uint,
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}
