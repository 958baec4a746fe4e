//! El Navegante Core - Shared domain library.
//!
//! This crate provides the types and pure logic used by every El Navegante
//! component:
//! - `storefront` - Public site and `/api/sections` endpoint
//! - `cli` - Migrations and menu seeding
//!
//! # Architecture
//!
//! The core crate contains no I/O: no database access, no HTTP, no logging.
//! Menu aggregation and cart composition live here so they can be tested
//! without a running store.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and prices
//! - [`menu`] - Sections, products, and the section/product grouping
//! - [`order`] - Cart lines, customer info, and the order composer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod menu;
pub mod order;
pub mod types;

pub use menu::{MenuItem, MenuSection, Product, Section, group_by_section, orphaned_products};
pub use order::{CartLine, CustomerField, CustomerInfo, CustomerInfoError, OrderComposer, OrderPayload};
pub use types::*;
