use actix_web::{http::StatusCode, web, web::ServiceConfig};
use serde_json::{json, Value};
use suit_store_engine::{db_types::Product, CatalogApi};

use super::helpers::get_request;
use crate::{
    endpoint_tests::mocks::MockCatalogManager,
    routes::{ProductByIdRoute, ProductsRoute},
};

fn catalog_fixture() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Navy Two Piece".to_string(),
            category: "suits".to_string(),
            price: 199.99,
            img: "navy-two-piece.png".to_string(),
        },
        Product {
            id: 2,
            name: "Silk Tie".to_string(),
            category: "accessories".to_string(),
            price: 19.99,
            img: "silk-tie.png".to_string(),
        },
    ]
}

fn configure(cfg: &mut ServiceConfig) {
    let mut catalog = MockCatalogManager::new();
    catalog.expect_fetch_products().returning(|category| {
        let products = catalog_fixture()
            .into_iter()
            .filter(|p| category.map(|c| p.category == c).unwrap_or(true))
            .collect();
        Ok(products)
    });
    catalog
        .expect_fetch_product_by_id()
        .returning(|id| Ok(catalog_fixture().into_iter().find(|p| p.id == id)));
    let api = CatalogApi::new(catalog);
    cfg.service(ProductsRoute::<MockCatalogManager>::new())
        .service(ProductByIdRoute::<MockCatalogManager>::new())
        .app_data(web::Data::new(api));
}

#[actix_web::test]
async fn list_all_products() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/suitsProducts", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let products: Vec<Value> = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Navy Two Piece");
}

#[actix_web::test]
async fn list_products_filtered_by_category() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/suitsProducts?category=suits", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let products: Vec<Value> = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["category"], "suits");
}

#[actix_web::test]
async fn fetch_single_product() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/suitsProducts/2", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let product: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(
        product,
        json!({"id": 2, "name": "Silk Tie", "category": "accessories", "price": 19.99, "img": "silk-tie.png"})
    );
}

#[actix_web::test]
async fn missing_product_is_not_found() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/suitsProducts/9999", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::NOT_FOUND);
    let err: Value = serde_json::from_str(&body).expect("Invalid JSON body");
    assert_eq!(err["error"], "The data was not found. Product not found");
}
