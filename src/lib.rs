//! Stockwatch: product inventory with low-stock alerts.

pub mod auth;
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod notify;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
