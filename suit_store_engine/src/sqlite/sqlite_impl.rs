//! `SqliteDatabase` is a concrete implementation of a Suit Store Engine backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the traits defined in the [`crate::traits`]
//! module.
use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;

use super::db::{new_pool, orders, products, users};
use crate::{
    db_types::{LoginRecord, NewOrderItem, NewUser, OrderGroupId, OrderItem, Product},
    traits::{CatalogApiError, CatalogManagement, OrderApiError, OrderManagement, UserApiError, UserManagement},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new connection pool for the given database URL and returns a new instance of `SqliteDatabase`.
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl CatalogManagement for SqliteDatabase {
    async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, CatalogApiError> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_products(category, &mut conn).await
    }

    async fn fetch_product_by_id(&self, id: i64) -> Result<Option<Product>, CatalogApiError> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_product_by_id(id, &mut conn).await
    }
}

impl UserManagement for SqliteDatabase {
    async fn create_user(&self, user: NewUser) -> Result<i64, UserApiError> {
        let mut conn = self.pool.acquire().await?;
        users::insert_user(user, &mut conn).await
    }

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<LoginRecord>, UserApiError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_user_by_email(email, &mut conn).await
    }
}

impl OrderManagement for SqliteDatabase {
    /// Persists every item of a checkout submission in a single transaction. A failure on any row rolls the whole
    /// submission back, so the orders table never holds a partial checkout.
    async fn insert_order_items(
        &self,
        group_id: &OrderGroupId,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrderApiError> {
        let mut tx = self.pool.begin().await?;
        let mut rows = Vec::with_capacity(items.len());
        for item in &items {
            let row = orders::insert_order_item(group_id, item, &mut tx).await?;
            rows.push(row);
        }
        tx.commit().await?;
        debug!("🗃️ Order group [{group_id}] saved with {} rows", rows.len());
        Ok(rows)
    }

    async fn fetch_order_items(&self, group_id: &OrderGroupId) -> Result<Vec<OrderItem>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_order_items(group_id, &mut conn).await
    }
}
