//! # Payment gateway server
//! This crate hosts the HTTP delivery layer for the payment gateway. It is responsible for:
//! decoding inbound requests into engine types, performing presence/non-zero validation of required fields, invoking
//! the engine workflows, and mapping workflow outcomes onto HTTP responses.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! * `POST /merchants`: register a merchant (with its default settings).
//! * `POST /merchants/set_child`: link a merchant as an authorized child of a parent.
//! * `POST /transactions`: submit a transaction. Child-owned submissions require an authorization edge.
//! * `PUT /transactions/{id}`: overwrite a transaction.
//! * `GET /transactions/{id}`: fetch a transaction.
//! * `GET /health`: a health check route that returns a 200 OK response.
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
