use crate::{Value, ValueKind};
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// Owning context on whose behalf a namespaced provider generates SQL,
/// usually the data access interface requesting the statement.
#[derive(Default, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Namespace {
    /// Logical name of the calling context.
    pub name: Cow<'static, str>,
}

impl Namespace {
    /// New namespace reference.
    pub const fn new(name: Cow<'static, str>) -> Self {
        Self { name }
    }
    /// True if unnamed.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl From<&'static str> for Namespace {
    fn from(value: &'static str) -> Self {
        Namespace::new(value.into())
    }
}

impl From<String> for Namespace {
    fn from(value: String) -> Self {
        Namespace::new(value.into())
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Declared parameter of a provider operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamDef {
    /// Logical parameter name used for named argument lookup.
    pub name: &'static str,
    /// Declared value kind, `Any` when unconstrained.
    pub kind: ValueKind,
}

impl ParamDef {
    /// New parameter declaration.
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self { name, kind }
    }
    /// Unconstrained parameter.
    pub const fn any(name: &'static str) -> Self {
        Self::new(name, ValueKind::Any)
    }
}

/// Callable kind of a declared operation.
pub enum OperationKind<P> {
    /// Produces raw SQL text.
    Sql(fn(&P, &[Value]) -> anyhow::Result<String>),
    /// Exposed but not a SQL factory, skipped by resolution.
    Auxiliary,
}

impl<P> Clone for OperationKind<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for OperationKind<P> {}

/// A single operation exposed by a provider type.
pub struct OperationDef<P> {
    /// Name resolution matches against.
    pub name: &'static str,
    /// Declared parameter shape in order.
    pub params: Vec<ParamDef>,
    /// Callable kind.
    pub kind: OperationKind<P>,
}

impl<P> OperationDef<P> {
    /// Declare a SQL producing operation.
    pub fn sql(
        name: &'static str,
        params: impl Into<Vec<ParamDef>>,
        call: fn(&P, &[Value]) -> anyhow::Result<String>,
    ) -> Self {
        Self {
            name,
            params: params.into(),
            kind: OperationKind::Sql(call),
        }
    }
    /// Declare an exposed operation that does not produce SQL text.
    pub fn auxiliary(name: &'static str, params: impl Into<Vec<ParamDef>>) -> Self {
        Self {
            name,
            params: params.into(),
            kind: OperationKind::Auxiliary,
        }
    }
}

/// A type exposing named operations that produce raw SQL text.
///
/// Providers are stateless per call factories: every invocation constructs a
/// fresh instance via [`SqlProvider::create`], so no state leaks across calls
/// or threads.
pub trait SqlProvider: Default + Send + Sync + 'static {
    /// Enumerates the operations this provider exposes, in declaration order.
    fn operations() -> Vec<OperationDef<Self>>;

    /// True when the generated SQL depends on the calling namespace.
    ///
    /// Descriptors targeting such a provider must carry an owning namespace,
    /// enforced eagerly at resolution.
    fn requires_namespace() -> bool {
        false
    }

    /// Receives the owning namespace on a fresh instance before invocation.
    fn set_namespace(&mut self, _namespace: Namespace) {}

    /// Per call factory. Failures are reported as invocation errors.
    fn create() -> anyhow::Result<Self> {
        Ok(Self::default())
    }
}
