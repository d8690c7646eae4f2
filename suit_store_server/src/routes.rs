//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause
//! the current worker to stop processing new requests. For this reason, any long, non-cpu-bound operation (e.g.
//! I/O, database operations, provider calls, etc.) must be expressed as futures or asynchronous functions. Async
//! handlers get executed concurrently by worker threads and thus don't block execution.
use actix_web::{get, post, web, HttpResponse, Responder};
use log::*;
use paypal_tools::{order_total, PayPalApi};
use stripe_tools::{line_items_from_products, StripeApi};
use suit_store_engine::{
    db_types::NewOrderItem,
    traits::{CatalogManagement, OrderManagement, UserManagement},
    AccountApi,
    CatalogApi,
    OrderApi,
};

use crate::{
    config::StorefrontUrls,
    data_objects::{
        CheckoutSessionRequest,
        CheckoutSessionResponse,
        LoginRequest,
        LoginResponse,
        MessageResponse,
        OrderCompletedResponse,
        PayPalOrderRequest,
        PayPalOrderResponse,
        ProductQuery,
        RegisterRequest,
        RegisterResponse,
    },
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Catalog  ----------------------------------------------------
route!(products => Get "/suitsProducts" impl CatalogManagement);
/// Returns the product catalog, optionally filtered by the `category` query parameter. Rows come back in
/// storage order; there is no pagination.
pub async fn products<B: CatalogManagement>(
    query: web::Query<ProductQuery>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let category = query.into_inner().category;
    debug!("💻️ GET products (category: {category:?})");
    let products = api.products(category.as_deref()).await?;
    Ok(HttpResponse::Ok().json(products))
}

route!(product_by_id => Get "/suitsProducts/{id}" impl CatalogManagement);
pub async fn product_by_id<B: CatalogManagement>(
    path: web::Path<i64>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ GET product {id}");
    let product =
        api.product_by_id(id).await?.ok_or_else(|| ServerError::NoRecordFound("Product not found".to_string()))?;
    Ok(HttpResponse::Ok().json(product))
}

//----------------------------------------------   Accounts  ----------------------------------------------------
route!(register => Post "/register" impl UserManagement);
/// Route handler for the registration endpoint
///
/// The password is hashed before storage and never persisted raw. A duplicate email fails atomically on the
/// backend's unique index and maps to 409 Conflict; there is no racy pre-insert existence check.
pub async fn register<B: UserManagement>(
    body: web::Json<RegisterRequest>,
    api: web::Data<AccountApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    debug!("💻️ POST register ({})", req.email);
    let user_id = api.register(&req.name, &req.email, &req.password).await?;
    Ok(HttpResponse::Ok().json(RegisterResponse::success(user_id)))
}

route!(login => Post "/login" impl UserManagement);
/// Route handler for the login endpoint
///
/// An unknown email maps to 404, a password mismatch to 401. On success the sanitized profile (name, email,
/// avatar-or-default) is returned -- never the stored hash.
pub async fn login<B: UserManagement>(
    body: web::Json<LoginRequest>,
    api: web::Data<AccountApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    debug!("💻️ POST login ({})", req.email);
    let profile = api.authenticate(&req.email, &req.password).await?;
    Ok(HttpResponse::Ok().json(LoginResponse::success(profile)))
}

/// The server holds no session state, so logout is an acknowledgment that tells the caller to discard its
/// client-held token.
#[post("/logout")]
pub async fn logout() -> impl Responder {
    trace!("💻️ POST logout");
    HttpResponse::Ok().json(MessageResponse { message: "Logout successful".to_string() })
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(complete_order => Post "/completeOrder" impl OrderManagement);
/// Route handler for the order persistence endpoint
///
/// Persists the submitted cart one row per item, all-or-nothing, under a fresh order group id. The group id is
/// returned so the storefront can correlate the checkout with its persisted rows.
pub async fn complete_order<B: OrderManagement>(
    body: web::Json<Vec<NewOrderItem>>,
    api: web::Data<OrderApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let items = body.into_inner();
    debug!("💻️ POST completeOrder ({} items)", items.len());
    let (group_id, _rows) = api.record_order(items).await?;
    Ok(HttpResponse::Ok().json(OrderCompletedResponse::success(group_id)))
}

//----------------------------------------------   Payments  ----------------------------------------------------
/// Route handler for card checkout session creation
///
/// Converts the submitted products into provider line items (minor-unit amounts, absolute image URLs) and
/// requests a hosted payment page. Only the session id goes back to the storefront.
#[post("/create-checkout-session")]
pub async fn create_checkout_session(
    body: web::Json<CheckoutSessionRequest>,
    api: web::Data<StripeApi>,
    urls: web::Data<StorefrontUrls>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    debug!("💻️ POST create-checkout-session ({} products)", req.products.len());
    let line_items = line_items_from_products(&req.products, urls.image_base())?;
    let session = api.create_checkout_session(&line_items, &urls.card_redirects()).await?;
    Ok(HttpResponse::Ok().json(CheckoutSessionResponse { id: session.id }))
}

/// Route handler for wallet order creation
///
/// The aggregate amount is the two-decimal sum of the cart's line totals. The provider's `approve` link is the
/// only thing the storefront needs back; its absence is an explicit server error.
#[post("/create-paypal-order")]
pub async fn create_paypal_order(
    body: web::Json<PayPalOrderRequest>,
    api: web::Data<PayPalApi>,
    urls: web::Data<StorefrontUrls>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    let total = order_total(req.cart_items.iter().map(|item| item.total_price));
    debug!("💻️ POST create-paypal-order ({} items, total {total})", req.cart_items.len());
    let order = api.create_order(&total, req.user_details.as_ref(), &urls.wallet_redirects()).await?;
    let approval_url = order.approval_url()?.to_string();
    Ok(HttpResponse::Ok().json(PayPalOrderResponse { approval_url }))
}
