use sqlx::SqliteConnection;

use crate::{
    db_types::{NewOrderItem, OrderGroupId, OrderItem},
    traits::OrderApiError,
};

/// Inserts a single order row using the given connection. This is not atomic on its own: callers persisting a
/// whole checkout submission must wrap the inserts in a transaction and pass `&mut *tx` as the connection
/// argument, so a failure anywhere rolls back every row of the submission.
pub async fn insert_order_item(
    group_id: &OrderGroupId,
    item: &NewOrderItem,
    conn: &mut SqliteConnection,
) -> Result<OrderItem, OrderApiError> {
    let row = sqlx::query_as(
        r#"
            INSERT INTO orders (
                order_group_id,
                product_id,
                product_name,
                product_quantity,
                product_color,
                price,
                total_price,
                customer_email,
                shipping_city,
                shipping_country,
                first_name,
                last_name,
                shipping_address,
                postal_code,
                phone_number,
                payment_method,
                billing_address
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *;
        "#,
    )
    .bind(group_id.as_str())
    .bind(item.product_id)
    .bind(&item.product_name)
    .bind(item.product_quantity)
    .bind(&item.product_color)
    .bind(item.price)
    .bind(item.total_price)
    .bind(&item.customer_email)
    .bind(&item.shipping_city)
    .bind(&item.shipping_country)
    .bind(&item.first_name)
    .bind(&item.last_name)
    .bind(&item.shipping_address)
    .bind(&item.postal_code)
    .bind(&item.phone_number)
    .bind(&item.payment_method)
    .bind(&item.billing_address)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

/// Returns all rows belonging to one checkout submission, in insertion order.
pub async fn fetch_order_items(
    group_id: &OrderGroupId,
    conn: &mut SqliteConnection,
) -> Result<Vec<OrderItem>, OrderApiError> {
    let rows = sqlx::query_as("SELECT * FROM orders WHERE order_group_id = $1 ORDER BY id")
        .bind(group_id.as_str())
        .fetch_all(conn)
        .await?;
    Ok(rows)
}
