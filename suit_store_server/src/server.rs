use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use paypal_tools::{PayPalApi, PayPalConfig};
use stripe_tools::{StripeApi, StripeConfig};
use suit_store_engine::{AccountApi, CatalogApi, OrderApi, SqliteDatabase};

use crate::{
    config::{ServerConfig, StorefrontUrls},
    errors::ServerError,
    routes::{
        create_checkout_session,
        create_paypal_order,
        health,
        logout,
        CompleteOrderRoute,
        LoginRoute,
        ProductByIdRoute,
        ProductsRoute,
        RegisterRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let stripe = new_stripe_api(config.stripe_config.clone())?;
    let paypal = new_paypal_api(config.paypal_config.clone())?;
    let srv = create_server_instance(config, db, stripe, paypal)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn new_stripe_api(config: StripeConfig) -> Result<StripeApi, ServerError> {
    StripeApi::new(config).map_err(|e| ServerError::InitializeError(e.to_string()))
}

pub fn new_paypal_api(config: PayPalConfig) -> Result<PayPalApi, ServerError> {
    PayPalApi::new(config).map_err(|e| ServerError::InitializeError(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    stripe: StripeApi,
    paypal: PayPalApi,
) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let catalog_api = CatalogApi::new(db.clone());
        let accounts_api = AccountApi::new(db.clone());
        let orders_api = OrderApi::new(db.clone());
        let urls = StorefrontUrls::new(&config.storefront_base_url);
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("ssg::access_log"))
            .app_data(web::Data::new(catalog_api))
            .app_data(web::Data::new(accounts_api))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(stripe.clone()))
            .app_data(web::Data::new(paypal.clone()))
            .app_data(web::Data::new(urls))
            .service(health)
            .service(logout)
            .service(ProductsRoute::<SqliteDatabase>::new())
            .service(ProductByIdRoute::<SqliteDatabase>::new())
            .service(RegisterRoute::<SqliteDatabase>::new())
            .service(LoginRoute::<SqliteDatabase>::new())
            .service(CompleteOrderRoute::<SqliteDatabase>::new())
            .service(create_checkout_session)
            .service(create_paypal_order)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
