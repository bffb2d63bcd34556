/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Caller-supplied query arguments

use crate::error::AppError;
use crate::model::endpoint::Endpoint;

/// Ordered set of query arguments supplied by the caller
///
/// Absent optional values are never recorded, so they cannot leak into the
/// query string as placeholder text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    pairs: Vec<(String, String)>,
}

impl QueryArgs {
    /// Creates an empty argument set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, replacing any earlier value for the same name
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name.into(), value.to_string());
        self
    }

    /// Adds a value only when it is present
    #[must_use]
    pub fn with_opt<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    fn set(&mut self, name: String, value: String) {
        match self.pairs.iter_mut().find(|(existing, _)| *existing == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Value supplied for `name`, if any
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true when no argument was supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Merges the caller arguments with the endpoint's declared defaults
    ///
    /// Parameters come out in declaration order. Indexed families keep the
    /// order in which the caller added them. Names the endpoint does not
    /// declare are rejected.
    pub fn resolve(&self, endpoint: &Endpoint) -> Result<Vec<(String, String)>, AppError> {
        if let Some((unknown, _)) = self
            .pairs
            .iter()
            .find(|(name, _)| endpoint.query_param(name).is_none())
        {
            return Err(AppError::InvalidInput(format!(
                "{} does not accept query parameter '{}'",
                endpoint.name, unknown
            )));
        }

        let mut resolved = Vec::with_capacity(endpoint.query.len());
        for param in endpoint.query {
            if param.indexed {
                resolved.extend(
                    self.pairs
                        .iter()
                        .filter(|(name, _)| param.accepts(name))
                        .cloned(),
                );
                continue;
            }
            let value = self
                .get(param.name)
                .map(str::to_string)
                .or_else(|| param.default.resolve());
            if let Some(value) = value {
                resolved.push((param.name.to_string(), value));
            }
        }
        Ok(resolved)
    }
}
