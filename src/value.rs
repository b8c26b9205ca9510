use std::collections::BTreeMap;
use uuid::Uuid;

/// Dynamic runtime value handed to provider operations as an argument.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int64(i64),
    Float64(f64),
    Varchar(String),
    Blob(Vec<u8>),
    Uuid(Uuid),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Json(serde_json::Value),
}

/// Kind of a `Value`, used as the runtime type reference during resolution
/// and binding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Matches any value.
    #[default]
    Any,
    Boolean,
    Integer,
    Float,
    Text,
    Blob,
    Uuid,
    List,
    Map,
    Json,
}

impl Value {
    /// True for the NULL value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Kind of this value. NULL reports `Any` as it is acceptable everywhere.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Any,
            Value::Boolean(..) => ValueKind::Boolean,
            Value::Int64(..) => ValueKind::Integer,
            Value::Float64(..) => ValueKind::Float,
            Value::Varchar(..) => ValueKind::Text,
            Value::Blob(..) => ValueKind::Blob,
            Value::Uuid(..) => ValueKind::Uuid,
            Value::List(..) => ValueKind::List,
            Value::Map(..) => ValueKind::Map,
            Value::Json(..) => ValueKind::Json,
        }
    }
}

impl ValueKind {
    /// Structural compatibility: whether a parameter declared with this kind
    /// accepts `value`. `Any` accepts everything, every kind accepts NULL,
    /// otherwise the kinds must match.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueKind::Any, _) => true,
            (_, Value::Null) => true,
            _ => *self == value.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_compatibility() {
        assert!(ValueKind::Any.accepts(&Value::Varchar("a".into())));
        assert!(ValueKind::Integer.accepts(&Value::Null));
        assert!(ValueKind::Integer.accepts(&Value::Int64(7)));
        assert!(!ValueKind::Integer.accepts(&Value::Varchar("7".into())));
        assert!(ValueKind::Map.accepts(&Value::Map(Default::default())));
        assert!(!ValueKind::Blob.accepts(&Value::List(vec![])));
    }

    #[test]
    fn null_kind_is_any() {
        assert_eq!(Value::Null.kind(), ValueKind::Any);
        assert!(ValueKind::Text.accepts(&Value::Null));
    }
}
