//! JSON API routes.

pub mod sections;
