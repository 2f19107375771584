//! Application metadata service: CRUD over application records held in an
//! in-memory repository, exposed over HTTP with axum.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
