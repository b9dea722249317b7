//! HTTP request handlers, one module per domain.

pub mod admin;
pub mod category;
pub mod document;
pub mod health;
pub mod share;
