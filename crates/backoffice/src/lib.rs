//! Shopdesk Back Office library.
//!
//! Exposes the back office's modules so the API can be embedded and
//! integration tested. The binary in `main.rs` is a thin wrapper around
//! [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
