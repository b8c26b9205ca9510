use crate::OperationHandle;

/// Produces the ordered logical argument names of an operation, used to drive
/// named mapping payloads.
///
/// The resolver is a collaborator seam: implementations may derive names from
/// any source as long as the result aligns 1:1 with the operation's declared
/// parameters. Misaligned output is rejected during resolution.
pub trait ParamNameResolver: Send + Sync {
    /// Ordered names aligned with the operation's parameters.
    fn names(&self, operation: &OperationHandle) -> anyhow::Result<Vec<String>>;
}

/// Default resolver: declared parameter names with a positional `arg{i}`
/// fallback for unnamed parameters.
#[derive(Default, Clone, Copy, Debug)]
pub struct DeclaredNameResolver;

impl ParamNameResolver for DeclaredNameResolver {
    fn names(&self, operation: &OperationHandle) -> anyhow::Result<Vec<String>> {
        Ok(operation
            .params()
            .iter()
            .enumerate()
            .map(|(i, param)| {
                if param.name.is_empty() {
                    format!("arg{i}")
                } else {
                    param.name.to_string()
                }
            })
            .collect())
    }
}
