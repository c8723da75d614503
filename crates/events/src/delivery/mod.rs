//! External delivery channels for catalog notices.

pub mod webhook;
