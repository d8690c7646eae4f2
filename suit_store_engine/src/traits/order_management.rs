use thiserror::Error;

use crate::db_types::{NewOrderItem, OrderGroupId, OrderItem};

#[derive(Debug, Clone, Error)]
pub enum OrderApiError {
    #[error("An order must contain at least one item")]
    EmptyOrder,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for OrderApiError {
    fn from(e: sqlx::Error) -> Self {
        OrderApiError::DatabaseError(e.to_string())
    }
}

/// Persistence of checkout submissions. Rows are append-only; there is no update or cancellation path.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Inserts one row per item, all stamped with `group_id`, inside a single transaction.
    ///
    /// The batch is all-or-nothing: if any insert fails, the whole transaction rolls back and no row of the
    /// submission is persisted. Returns the inserted rows.
    async fn insert_order_items(
        &self,
        group_id: &OrderGroupId,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrderApiError>;

    /// Fetches all rows belonging to one checkout submission, in insertion order.
    async fn fetch_order_items(&self, group_id: &OrderGroupId) -> Result<Vec<OrderItem>, OrderApiError>;
}
