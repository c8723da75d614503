//! Request extractors.
//!
//! - [`auth::CurrentSession`] -- resolves the caller's principal from a Bearer
//!   token without rejecting anonymous requests; role checks happen in the
//!   service layer through [`cardforge_core::roles::authorize`].

pub mod auth;
