use crate::{AsValue, Value, ValueKind};
use std::collections::BTreeMap;

/// Runtime argument payload for one execution.
///
/// A payload is owned by the caller for the duration of a single binding and
/// is never retained by the source. The three variants cover the supported
/// calling conventions: no argument, a single opaque argument, or a named
/// mapping driving positional extraction.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Payload {
    /// No caller argument.
    #[default]
    None,
    /// Single opaque argument.
    Value(Value),
    /// Name to value mapping for named argument invocation.
    Named(BTreeMap<String, Value>),
}

impl Payload {
    /// Single argument payload.
    pub fn value(value: impl AsValue) -> Self {
        Payload::Value(value.as_value())
    }

    /// Named mapping payload from (name, value) pairs.
    pub fn named<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsValue,
    {
        Payload::Named(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.as_value()))
                .collect(),
        )
    }

    /// True when no argument was supplied.
    pub fn is_none(&self) -> bool {
        matches!(self, Payload::None)
    }

    /// Value stored under `name`, for named payloads.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Payload::Named(map) => map.get(name),
            _ => None,
        }
    }

    /// Runtime type reference handed to the templating engine.
    pub fn reference_kind(&self) -> ValueKind {
        match self {
            Payload::None => ValueKind::Any,
            Payload::Value(value) => value.kind(),
            Payload::Named(..) => ValueKind::Map,
        }
    }

    /// View of the whole payload as a single positional argument.
    pub(crate) fn as_single_value(&self) -> Value {
        match self {
            Payload::None => Value::Null,
            Payload::Value(value) => value.clone(),
            Payload::Named(map) => Value::Map(map.clone()),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Value(value)
    }
}

impl From<BTreeMap<String, Value>> for Payload {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Payload::Named(value)
    }
}
