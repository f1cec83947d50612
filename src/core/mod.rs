// src/core/mod.rs
pub mod config;
pub mod service;

pub use service::{rng_for, PasswordService, ServiceError};
