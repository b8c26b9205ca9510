use std::error::Error as StdError;

/// Boxed foreign failure preserved as an error source.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Raised only during resolution: the provider descriptor can never be
/// satisfied (operation missing, ambiguous overload, missing required owning
/// namespace). Fatal to configuring the statement, never retried.
#[derive(Debug, thiserror::Error)]
#[error("Cannot create a SQL source for provider '{provider}': {message}")]
pub struct ConfigurationError {
    provider: String,
    message: String,
    #[source]
    cause: Option<BoxError>,
}

impl ConfigurationError {
    pub(crate) fn new(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            message: message.into(),
            cause: None,
        }
    }

    pub(crate) fn with_cause(
        provider: impl Into<String>,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            provider: provider.into(),
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Provider type name the failure refers to.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Human readable cause.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Raised only during binding: a specific call could not be completed
/// (incompatible payload shape, provider construction failure, the operation
/// failed, or downstream templating failed). Does not invalidate the resolved
/// operation for subsequent calls.
#[derive(Debug, thiserror::Error)]
#[error("Error invoking SQL provider operation '{provider}.{operation}': {message}")]
pub struct InvocationError {
    provider: String,
    operation: String,
    message: String,
    #[source]
    cause: Option<BoxError>,
}

impl InvocationError {
    pub(crate) fn new(
        provider: impl Into<String>,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            operation: operation.into(),
            message: message.into(),
            cause: None,
        }
    }

    pub(crate) fn with_cause(
        provider: impl Into<String>,
        operation: impl Into<String>,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            cause: Some(cause.into()),
            ..Self::new(provider, operation, message)
        }
    }

    /// Provider type name the failure refers to.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Operation name the failure refers to.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Human readable cause.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}
