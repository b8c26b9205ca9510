use crate::{Namespace, OperationDef, OperationKind, ParamDef, SqlProvider, Value};
use std::{
    any,
    fmt::{self, Debug},
    sync::Arc,
};

/// Type erased invoker: constructs a fresh provider instance, applies the
/// owning namespace and calls the operation.
pub(crate) type InvokeFn =
    Arc<dyn Fn(Option<&Namespace>, &[Value]) -> anyhow::Result<String> + Send + Sync>;

/// Type erased record of one exposed operation, produced by enumerating a
/// provider type.
#[derive(Clone)]
pub struct OperationHandle {
    pub(crate) name: &'static str,
    pub(crate) params: Arc<[ParamDef]>,
    pub(crate) invoke: Option<InvokeFn>,
}

impl OperationHandle {
    /// Operation name.
    pub fn name(&self) -> &'static str {
        self.name
    }
    /// True when the operation produces SQL text.
    pub fn is_sql(&self) -> bool {
        self.invoke.is_some()
    }
    /// Declared parameter shape in order.
    pub fn params(&self) -> &[ParamDef] {
        &self.params
    }
    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Debug for OperationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationHandle")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("sql", &self.is_sql())
            .finish()
    }
}

fn erase<P: SqlProvider>(def: OperationDef<P>) -> OperationHandle {
    let invoke = match def.kind {
        OperationKind::Sql(call) => {
            let invoke: InvokeFn = Arc::new(move |namespace, args| {
                let mut provider = P::create()?;
                if let Some(namespace) = namespace {
                    provider.set_namespace(namespace.clone());
                }
                call(&provider, args)
            });
            Some(invoke)
        }
        OperationKind::Auxiliary => None,
    };
    OperationHandle {
        name: def.name,
        params: def.params.into(),
        invoke,
    }
}

/// Immutable description of a provider operation to invoke, created once at
/// configuration time.
///
/// Capturing a descriptor enumerates the provider's exposed operations and
/// records its type name and namespace capability; the descriptor is then
/// handed to [`resolve`](crate::resolve) which validates it against the
/// supported calling conventions.
#[derive(Clone, Debug)]
pub struct ProviderDescriptor {
    provider: &'static str,
    requires_namespace: bool,
    namespace: Option<Namespace>,
    operation: String,
    operations: Vec<OperationHandle>,
}

impl ProviderDescriptor {
    /// Capture provider type `P` targeting `operation`.
    pub fn new<P: SqlProvider>(operation: impl Into<String>) -> Self {
        Self {
            provider: any::type_name::<P>(),
            requires_namespace: P::requires_namespace(),
            namespace: None,
            operation: operation.into(),
            operations: P::operations().into_iter().map(erase).collect(),
        }
    }

    /// Attach the owning context.
    pub fn with_namespace(mut self, namespace: impl Into<Namespace>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Provider type name.
    pub fn provider(&self) -> &'static str {
        self.provider
    }
    /// Targeted operation name.
    pub fn operation(&self) -> &str {
        &self.operation
    }
    /// Owning context, if attached.
    pub fn namespace(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }
    /// Namespace capability flag of the provider type.
    pub fn requires_namespace(&self) -> bool {
        self.requires_namespace
    }
    /// Every exposed operation of the provider type.
    pub fn operations(&self) -> &[OperationHandle] {
        &self.operations
    }
}
