use crate::{
    BoundStatement, ConfigurationError, DeclaredNameResolver, InvocationError, ParamNameResolver,
    Payload, ProviderDescriptor, ResolvedOperation, Result, SqlTemplate, TokenTemplate, Value,
    ValueKind, resolve,
};
use std::sync::Arc;

/// A configured source of executable statements: the sole operational entry
/// point once a statement is mapped.
pub trait SqlSource: Send + Sync {
    /// Produce the bound statement for one execution with `payload`.
    fn bound_statement(&self, payload: &Payload) -> Result<BoundStatement>;
}

/// Static SQL text, parsed once at construction.
#[derive(Clone, Debug)]
pub struct StaticSqlSource {
    statement: BoundStatement,
}

impl StaticSqlSource {
    /// Parse `sql` eagerly through `template`.
    pub fn new(sql: &str, template: &dyn SqlTemplate) -> anyhow::Result<Self> {
        Ok(Self {
            statement: template.parse(sql, ValueKind::Any, &Default::default())?,
        })
    }
}

impl SqlSource for StaticSqlSource {
    fn bound_statement(&self, _payload: &Payload) -> Result<BoundStatement> {
        Ok(self.statement.clone())
    }
}

/// Provider backed SQL source: the invocation and binding engine.
///
/// Resolution happens eagerly at construction and is cached for the lifetime
/// of the source; every [`bind`](ProviderSqlSource::bind) call is an
/// independent transaction over the shared, immutable resolution. The source
/// holds no per call state, so one instance can serve arbitrarily many
/// concurrent callers.
pub struct ProviderSqlSource {
    resolved: ResolvedOperation,
    template: Arc<dyn SqlTemplate>,
}

impl ProviderSqlSource {
    /// Resolve `descriptor` using the default templating engine and argument
    /// name resolver. Fails fast when the descriptor can never be satisfied.
    pub fn new(descriptor: ProviderDescriptor) -> Result<Self, ConfigurationError> {
        let template = TokenTemplate::new().map_err(|e| {
            ConfigurationError::with_cause(
                descriptor.provider(),
                "could not create the statement templating engine",
                e,
            )
        })?;
        Self::with_parts(descriptor, Arc::new(template), &DeclaredNameResolver)
    }

    /// Resolve `descriptor` against explicit collaborators.
    pub fn with_parts(
        descriptor: ProviderDescriptor,
        template: Arc<dyn SqlTemplate>,
        names: &dyn ParamNameResolver,
    ) -> Result<Self, ConfigurationError> {
        let resolved = resolve(&descriptor, names).inspect_err(|e| log::error!("{e}"))?;
        Ok(Self { resolved, template })
    }

    /// The cached resolution backing this source.
    pub fn resolved(&self) -> &ResolvedOperation {
        &self.resolved
    }

    /// Bind one execution: adapt `payload` to the operation's calling
    /// convention, invoke it on a fresh provider instance and hand the
    /// resulting text to the templating engine.
    ///
    /// Adaptation rules, first match wins:
    /// * zero arity operations are invoked with no arguments, the payload is
    ///   ignored;
    /// * a single parameter accepting the payload receives it whole (absent
    ///   payloads become NULL; a single `Map` or `Any` parameter receives a
    ///   named payload as one map, taking precedence over per name
    ///   extraction);
    /// * a named payload is extracted positionally through the resolved
    ///   argument names, absent names become NULL;
    /// * anything else fails with [`InvocationError`] without invoking the
    ///   operation.
    pub fn bind(&self, payload: &Payload) -> Result<BoundStatement, InvocationError> {
        let sql = self.produce_sql(payload)?;
        self.template
            .parse(&sql, payload.reference_kind(), &Default::default())
            .map_err(|e| {
                self.error(
                    "the templating engine could not parse the operation output",
                    Some(e),
                )
            })
    }

    fn produce_sql(&self, payload: &Payload) -> Result<String, InvocationError> {
        let resolved = &self.resolved;
        let arity = resolved.arity();
        let result = if arity == 0 {
            resolved.invoke(&[])
        } else if arity == 1 && self.single_compatible(payload) {
            resolved.invoke(&[payload.as_single_value()])
        } else if let Payload::Named(values) = payload {
            let args = resolved
                .argument_names()
                .iter()
                .map(|name| values.get(name).cloned().unwrap_or(Value::Null))
                .collect::<Vec<_>>();
            resolved.invoke(&args)
        } else {
            return Err(self.error(
                format!(
                    "cannot invoke an operation holding {} using this payload, supply a named mapping payload instead",
                    if arity == 1 {
                        "a named argument"
                    } else {
                        "multiple arguments"
                    },
                ),
                None,
            ));
        };
        result.map_err(|e| self.error("the provider operation failed", Some(e)))
    }

    fn single_compatible(&self, payload: &Payload) -> bool {
        let kind = self.resolved.params()[0].kind;
        match payload {
            Payload::None => true,
            Payload::Value(value) => kind.accepts(value),
            Payload::Named(..) => matches!(kind, ValueKind::Any | ValueKind::Map),
        }
    }

    fn error(&self, message: impl Into<String>, cause: Option<anyhow::Error>) -> InvocationError {
        let error = match cause {
            Some(cause) => InvocationError::with_cause(
                self.resolved.provider(),
                self.resolved.operation(),
                message,
                cause,
            ),
            None => {
                InvocationError::new(self.resolved.provider(), self.resolved.operation(), message)
            }
        };
        log::error!("{error}");
        error
    }
}

impl std::fmt::Debug for ProviderSqlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSqlSource").finish_non_exhaustive()
    }
}

impl SqlSource for ProviderSqlSource {
    fn bound_statement(&self, payload: &Payload) -> Result<BoundStatement> {
        Ok(self.bind(payload)?)
    }
}
