//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- session-token and OAuth-state token issuing and validation.
//! - [`discord`] -- Discord OAuth identity provider adapter.

pub mod discord;
pub mod jwt;
pub mod password;
