//! Domain rules for the cardforge card catalog.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers call into
//! these modules to validate input, authorize principals, and derive display
//! values.

pub mod cards;
pub mod error;
pub mod pagination;
pub mod players;
pub mod roles;
pub mod submissions;
pub mod types;
