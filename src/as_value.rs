use crate::Value;
use anyhow::Error;
use std::{any, collections::BTreeMap};
use uuid::Uuid;

/// Convert both ways between Rust types and `Value`.
pub trait AsValue {
    /// Convert into owned `Value`.
    fn as_value(self) -> Value;
    /// Try to convert a dynamic `Value` into `Self`.
    fn try_from_value(value: Value) -> anyhow::Result<Self>
    where
        Self: Sized;
}

impl AsValue for Value {
    fn as_value(self) -> Value {
        self
    }
    fn try_from_value(value: Value) -> anyhow::Result<Self> {
        Ok(value)
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Varchar(value.into())
    }
}

macro_rules! impl_as_value {
    ($source:ty, $variant:path, $from:expr) => {
        impl AsValue for $source {
            fn as_value(self) -> Value {
                $variant(self.into())
            }
            fn try_from_value(value: Value) -> anyhow::Result<Self> {
                match value {
                    $variant(v) => $from(v),
                    other => Err(Error::msg(format!(
                        "Cannot convert {:?} into {}",
                        other,
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}

impl_as_value!(bool, Value::Boolean, Ok);
impl_as_value!(i8, Value::Int64, |v: i64| Ok(i8::try_from(v)?));
impl_as_value!(i16, Value::Int64, |v: i64| Ok(i16::try_from(v)?));
impl_as_value!(i32, Value::Int64, |v: i64| Ok(i32::try_from(v)?));
impl_as_value!(i64, Value::Int64, Ok);
impl_as_value!(u8, Value::Int64, |v: i64| Ok(u8::try_from(v)?));
impl_as_value!(u16, Value::Int64, |v: i64| Ok(u16::try_from(v)?));
impl_as_value!(u32, Value::Int64, |v: i64| Ok(u32::try_from(v)?));
impl_as_value!(f32, Value::Float64, |v: f64| Ok(v as f32));
impl_as_value!(f64, Value::Float64, Ok);
impl_as_value!(String, Value::Varchar, Ok);
impl_as_value!(Vec<u8>, Value::Blob, Ok);
impl_as_value!(Uuid, Value::Uuid, Ok);
impl_as_value!(serde_json::Value, Value::Json, Ok);

macro_rules! impl_list_as_value {
    ($element:ty) => {
        impl AsValue for Vec<$element> {
            fn as_value(self) -> Value {
                Value::List(self.into_iter().map(AsValue::as_value).collect())
            }
            fn try_from_value(value: Value) -> anyhow::Result<Self> {
                match value {
                    Value::List(list) => {
                        list.into_iter().map(<$element>::try_from_value).collect()
                    }
                    other => Err(Error::msg(format!(
                        "Cannot convert {:?} into {}",
                        other,
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}

// u8 lists stay blobs.
impl_list_as_value!(Value);
impl_list_as_value!(bool);
impl_list_as_value!(i64);
impl_list_as_value!(f64);
impl_list_as_value!(String);
impl_list_as_value!(Uuid);

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
    fn try_from_value(value: Value) -> anyhow::Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(T::try_from_value(value)?))
    }
}

impl<T: AsValue> AsValue for BTreeMap<String, T> {
    fn as_value(self) -> Value {
        Value::Map(self.into_iter().map(|(k, v)| (k, v.as_value())).collect())
    }
    fn try_from_value(value: Value) -> anyhow::Result<Self> {
        match value {
            Value::Map(map) => map
                .into_iter()
                .map(|(k, v)| Ok((k, T::try_from_value(v)?)))
                .collect(),
            other => Err(Error::msg(format!(
                "Cannot convert {:?} into {}",
                other,
                any::type_name::<Self>(),
            ))),
        }
    }
}
