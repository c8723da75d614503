pub mod admin;
pub mod auth;
pub mod cards;
pub mod me;
pub mod players;
pub mod submissions;
