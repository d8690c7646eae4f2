use thiserror::Error;

use crate::db_types::Product;

#[derive(Debug, Clone, Error)]
pub enum CatalogApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for CatalogApiError {
    fn from(e: sqlx::Error) -> Self {
        CatalogApiError::DatabaseError(e.to_string())
    }
}

/// Read access to the product catalog. The catalog is maintained elsewhere; this system only ever reads it.
#[allow(async_fn_in_trait)]
pub trait CatalogManagement {
    /// Fetches all products, or only those in `category` when one is given. Rows come back in storage order;
    /// no further ordering is guaranteed.
    async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, CatalogApiError>;

    /// Fetches a single product by id. Returns `None` when no row matches.
    async fn fetch_product_by_id(&self, id: i64) -> Result<Option<Product>, CatalogApiError>;
}
