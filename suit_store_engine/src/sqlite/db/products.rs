use sqlx::SqliteConnection;

use crate::{db_types::Product, traits::CatalogApiError};

/// Returns all products, or only those whose category matches the filter. No pagination; rows come back in
/// storage order.
pub async fn fetch_products(
    category: Option<&str>,
    conn: &mut SqliteConnection,
) -> Result<Vec<Product>, CatalogApiError> {
    let products = match category {
        Some(category) => {
            sqlx::query_as("SELECT * FROM products WHERE category = $1").bind(category).fetch_all(conn).await?
        },
        None => sqlx::query_as("SELECT * FROM products").fetch_all(conn).await?,
    };
    Ok(products)
}

pub async fn fetch_product_by_id(id: i64, conn: &mut SqliteConnection) -> Result<Option<Product>, CatalogApiError> {
    let product = sqlx::query_as("SELECT * FROM products WHERE id = $1").bind(id).fetch_optional(conn).await?;
    Ok(product)
}
