use crate::{BoundStatement, ParameterMapping, Value, ValueKind};
use anyhow::{Context, Error};
use regex::Regex;
use std::collections::BTreeMap;

/// Statement text templating engine: turns raw SQL text plus the payload's
/// runtime type reference into an executable parameterized statement.
///
/// Consumed as a collaborator by [`ProviderSqlSource`](crate::ProviderSqlSource),
/// which forwards the provider operation output unchanged.
pub trait SqlTemplate: Send + Sync {
    /// Parse `sql` into a bound statement.
    fn parse(
        &self,
        sql: &str,
        reference: ValueKind,
        extra: &BTreeMap<String, Value>,
    ) -> anyhow::Result<BoundStatement>;
}

const TOKEN_PATTERN: &str = r"#\{\s*([A-Za-z_][A-Za-z0-9_.\[\]]*)\s*\}";

/// Default templating engine: rewrites `#{property}` tokens into positional
/// `?` placeholders, recording one [`ParameterMapping`] per occurrence.
#[derive(Clone, Debug)]
pub struct TokenTemplate {
    token: Regex,
}

impl TokenTemplate {
    /// Compile the token pattern once, reused by every parse.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            token: Regex::new(TOKEN_PATTERN)
                .context("Could not compile the placeholder token pattern")?,
        })
    }
}

impl SqlTemplate for TokenTemplate {
    fn parse(
        &self,
        sql: &str,
        reference: ValueKind,
        extra: &BTreeMap<String, Value>,
    ) -> anyhow::Result<BoundStatement> {
        let mut out = String::with_capacity(sql.len());
        let mut parameters = Vec::new();
        let mut position = 0;
        for captures in self.token.captures_iter(sql) {
            if let (Some(token), Some(property)) = (captures.get(0), captures.get(1)) {
                out.push_str(&sql[position..token.start()]);
                out.push('?');
                parameters.push(ParameterMapping::new(property.as_str()));
                position = token.end();
            }
        }
        out.push_str(&sql[position..]);
        if let Some(at) = out.find("#{") {
            return Err(Error::msg(format!(
                "Unclosed or malformed placeholder token at offset {at} in: {}",
                crate::truncate_long!(sql),
            )));
        }
        Ok(BoundStatement {
            sql: out,
            parameters,
            reference,
            extra: extra.clone(),
        })
    }
}
