//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - User registration with bcrypt password hashing
//! - JWT token pair issuance and validation
//! - Login/logout session lifecycle
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod tokens;
pub mod validators;


pub use extractors::AuthedUser;
pub use routes::auth_routes;
