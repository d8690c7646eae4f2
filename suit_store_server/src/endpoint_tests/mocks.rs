use mockall::mock;
use suit_store_engine::{
    db_types::{LoginRecord, NewOrderItem, NewUser, OrderGroupId, OrderItem, Product},
    traits::{
        CatalogApiError,
        CatalogManagement,
        OrderApiError,
        OrderManagement,
        UserApiError,
        UserManagement,
    },
};

mock! {
    pub CatalogManager {}
    impl CatalogManagement for CatalogManager {
        async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, CatalogApiError>;
        async fn fetch_product_by_id(&self, id: i64) -> Result<Option<Product>, CatalogApiError>;
    }
}

mock! {
    pub UserManager {}
    impl UserManagement for UserManager {
        async fn create_user(&self, user: NewUser) -> Result<i64, UserApiError>;
        async fn fetch_user_by_email(&self, email: &str) -> Result<Option<LoginRecord>, UserApiError>;
    }
}

mock! {
    pub OrderManager {}
    impl OrderManagement for OrderManager {
        async fn insert_order_items(&self, group_id: &OrderGroupId, items: Vec<NewOrderItem>) -> Result<Vec<OrderItem>, OrderApiError>;
        async fn fetch_order_items(&self, group_id: &OrderGroupId) -> Result<Vec<OrderItem>, OrderApiError>;
    }
}
