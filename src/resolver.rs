use crate::{
    ConfigurationError, Namespace, OperationHandle, ParamDef, ParamNameResolver,
    ProviderDescriptor, Value, descriptor::InvokeFn,
};
use std::{
    fmt::{self, Debug},
    sync::Arc,
};

/// The validated, cached result of resolving a provider descriptor to one
/// concrete operation and its argument names.
///
/// Immutable after construction and cheap to clone (the invoke handle is
/// shared), so a single resolution can be published to arbitrarily many
/// concurrent callers.
#[derive(Clone)]
pub struct ResolvedOperation {
    provider: &'static str,
    operation: &'static str,
    params: Arc<[ParamDef]>,
    argument_names: Arc<[String]>,
    namespace: Option<Namespace>,
    invoke: InvokeFn,
}

impl ResolvedOperation {
    /// Provider type name.
    pub fn provider(&self) -> &'static str {
        self.provider
    }
    /// Selected operation name.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
    /// Parameter shape of the selected operation.
    pub fn params(&self) -> &[ParamDef] {
        &self.params
    }
    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
    /// Ordered logical argument names used for named payloads.
    pub fn argument_names(&self) -> &[String] {
        &self.argument_names
    }
    /// Owning context threaded into every invocation.
    pub fn namespace(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }

    /// Invoke the operation on a fresh provider instance.
    pub(crate) fn invoke(&self, args: &[Value]) -> anyhow::Result<String> {
        (self.invoke)(self.namespace.as_ref(), args)
    }
}

impl Debug for ResolvedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedOperation")
            .field("provider", &self.provider)
            .field("operation", &self.operation)
            .field("params", &self.params)
            .field("argument_names", &self.argument_names)
            .field("namespace", &self.namespace)
            .finish()
    }
}

/// Select the single SQL producing operation matching `descriptor`.
///
/// Fails fast with [`ConfigurationError`] when the operation is missing or
/// overloaded, when a namespace aware provider has no owning namespace, or
/// when argument name resolution misbehaves. Pure given the same descriptor,
/// intended to run once while the statement is configured.
pub fn resolve(
    descriptor: &ProviderDescriptor,
    names: &dyn ParamNameResolver,
) -> Result<ResolvedOperation, ConfigurationError> {
    let provider = descriptor.provider();
    let target = descriptor.operation();
    if descriptor.requires_namespace() && descriptor.namespace().is_none() {
        return Err(ConfigurationError::new(
            provider,
            format!(
                "the provider is namespace aware, operation '{target}' needs an owning namespace"
            ),
        ));
    }
    let mut selected: Option<(&OperationHandle, &InvokeFn)> = None;
    let candidates = descriptor
        .operations()
        .iter()
        .filter(|op| op.name() == target)
        .filter_map(|op| op.invoke.as_ref().map(|invoke| (op, invoke)));
    for candidate in candidates {
        if selected.is_some() {
            return Err(ConfigurationError::new(
                provider,
                format!(
                    "operation '{target}' is found multiple times, SQL provider operations can not overload"
                ),
            ));
        }
        selected = Some(candidate);
    }
    let Some((operation, invoke)) = selected else {
        return Err(ConfigurationError::new(
            provider,
            format!("operation '{target}' not found"),
        ));
    };
    let argument_names = names.names(operation).map_err(|e| {
        ConfigurationError::with_cause(
            provider,
            format!("could not resolve the argument names of operation '{target}'"),
            e,
        )
    })?;
    if argument_names.len() != operation.arity() {
        return Err(ConfigurationError::new(
            provider,
            format!(
                "argument name resolution produced {} names for operation '{target}' of arity {}",
                argument_names.len(),
                operation.arity(),
            ),
        ));
    }
    log::debug!("Resolved SQL provider operation {}.{}", provider, target);
    Ok(ResolvedOperation {
        provider,
        operation: operation.name(),
        params: operation.params.clone(),
        argument_names: argument_names.into(),
        namespace: descriptor.namespace().cloned(),
        invoke: invoke.clone(),
    })
}
