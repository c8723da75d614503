//! Workflow operations.
//!
//! Every operation takes the caller's principal (or `None` when anonymous)
//! and passes it through [`cardforge_core::roles::authorize`] before touching
//! storage, so a role mismatch never produces a partial effect. Handlers stay
//! thin: extract, call one operation, wrap the result.

pub mod accounts;
pub mod catalog;
pub mod dashboard;
pub mod directory;
pub mod ownership;
pub mod submissions;
