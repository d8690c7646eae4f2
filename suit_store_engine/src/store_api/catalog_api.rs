use std::fmt::Debug;

use crate::{
    db_types::Product,
    traits::{CatalogApiError, CatalogManagement},
};

/// The `CatalogApi` provides a unified API for reading the product catalog.
pub struct CatalogApi<B> {
    db: B,
}

impl<B: Debug> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi ({:?})", self.db)
    }
}

impl<B> CatalogApi<B>
where B: CatalogManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Returns all products, or only those in `category` when a filter is given.
    pub async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, CatalogApiError> {
        self.db.fetch_products(category).await
    }

    /// Returns a single product by id, or `None` if no row matches.
    pub async fn product_by_id(&self, id: i64) -> Result<Option<Product>, CatalogApiError> {
        self.db.fetch_product_by_id(id).await
    }
}
