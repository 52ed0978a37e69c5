#![doc = "The `bookstore` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, repository layer, authentication"]
#![doc = "mechanisms, routing configuration, and error handling for the bookstore"]
#![doc = "catalog API. It is used by the main binary (`main.rs`) to construct and"]
#![doc = "run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
