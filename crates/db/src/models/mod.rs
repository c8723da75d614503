pub mod admin;
pub mod card;
pub mod card_queue;
pub mod player;
pub mod submission;
