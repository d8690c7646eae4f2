use std::fmt::Debug;

use log::info;

use crate::{
    db_types::{NewOrderItem, OrderGroupId, OrderItem},
    traits::{OrderApiError, OrderManagement},
};

/// The `OrderApi` persists checkout submissions on top of an [`OrderManagement`] backend.
pub struct OrderApi<B> {
    db: B,
}

impl<B: Debug> Debug for OrderApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderApi ({:?})", self.db)
    }
}

impl<B> OrderApi<B>
where B: OrderManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Records a checkout submission: stamps a fresh random [`OrderGroupId`] on the items and persists them
    /// all-or-nothing. Returns the group id together with the inserted rows.
    ///
    /// An empty submission is rejected rather than silently recorded as nothing.
    pub async fn record_order(
        &self,
        items: Vec<NewOrderItem>,
    ) -> Result<(OrderGroupId, Vec<OrderItem>), OrderApiError> {
        if items.is_empty() {
            return Err(OrderApiError::EmptyOrder);
        }
        let group_id = OrderGroupId::random();
        let rows = self.db.insert_order_items(&group_id, items).await?;
        info!("🗃️ Recorded order group [{group_id}] with {} items", rows.len());
        Ok((group_id, rows))
    }

    /// Fetches the rows of a previously recorded submission.
    pub async fn items_for_group(&self, group_id: &OrderGroupId) -> Result<Vec<OrderItem>, OrderApiError> {
        self.db.fetch_order_items(group_id).await
    }
}
