use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for symbol lookup
#[async_trait]
pub trait SymbolService: Send + Sync {
    /// Searches symbols matching a criteria expression, e.g. `N=MSFT&C=Stock`
    async fn search_symbols(&self, criteria: &str) -> Result<Value, AppError>;

    /// Suggests symbols for a partial text
    ///
    /// # Arguments
    /// * `text` - Partial symbol or name
    /// * `top` - Maximum number of suggestions
    /// * `filter` - OData filter, e.g. `Category eq 'Stock'`
    async fn suggest_symbols(
        &self,
        text: &str,
        top: Option<u32>,
        filter: Option<&str>,
    ) -> Result<Value, AppError>;
}
