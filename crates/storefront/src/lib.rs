//! El Navegante storefront library.
//!
//! The public restaurant site (landing page, menu, order composer) and the
//! menu JSON API, exposed as a library so the router can be tested and
//! reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
