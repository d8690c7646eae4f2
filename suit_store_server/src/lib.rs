//! # Suit Store Server
//! This module hosts the REST server for the Suit Store Gateway. It is responsible for:
//! Serving the product catalog to the storefront.
//! Registering and authenticating shoppers.
//! Persisting checkout submissions as order rows.
//! Creating payment sessions against the card and wallet providers.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/suitsProducts` and `/suitsProducts/{id}`: catalog reads.
//! * `/register`, `/login`, `/logout`: account management.
//! * `/completeOrder`: order persistence.
//! * `/create-checkout-session` and `/create-paypal-order`: payment session creation.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
