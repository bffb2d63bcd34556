use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Service for confirming, placing and managing orders
///
/// Order bodies are any serializable value matching the API schema. They are
/// sent as JSON without validation; the typed models in
/// [`crate::model::requests`] are a convenience, not a requirement.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Estimates an order without placing it (`Confirmations`)
    async fn confirm_order<B: Serialize + Sync + ?Sized>(
        &self,
        order: &B,
    ) -> Result<Value, AppError>;

    /// Estimates an order group without placing it (`Confirmations`)
    async fn confirm_group_order<B: Serialize + Sync + ?Sized>(
        &self,
        group: &B,
    ) -> Result<Value, AppError>;

    /// Places an order (`Orders`)
    async fn place_order<B: Serialize + Sync + ?Sized>(&self, order: &B)
    -> Result<Value, AppError>;

    /// Places an order group (`Orders`)
    async fn place_group_order<B: Serialize + Sync + ?Sized>(
        &self,
        group: &B,
    ) -> Result<Value, AppError>;

    /// Replaces an open order, returning the whole response body
    async fn replace_order<B: Serialize + Sync + ?Sized>(
        &self,
        order_id: &str,
        replacement: &B,
    ) -> Result<Value, AppError>;

    /// Cancels an open order, returning the whole response body
    async fn cancel_order(&self, order_id: &str) -> Result<Value, AppError>;

    /// Gets activation triggers (`ActivationTriggers`)
    async fn get_activation_triggers(&self) -> Result<Value, AppError>;

    /// Gets order routes (`Routes`)
    async fn get_routes(&self) -> Result<Value, AppError>;
}
