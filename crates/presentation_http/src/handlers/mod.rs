//! HTTP request handlers

pub mod common;
pub mod health;
pub mod readings;
