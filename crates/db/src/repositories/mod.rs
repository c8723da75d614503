//! Repository layer: one zero-sized struct per table, each exposing async
//! associated functions that take the pool explicitly.

pub mod admin_repo;
pub mod card_queue_repo;
pub mod card_repo;
pub mod player_repo;
pub mod revoked_token_repo;
pub mod submission_repo;

pub use admin_repo::AdminRepo;
pub use card_queue_repo::CardQueueRepo;
pub use card_repo::CardRepo;
pub use player_repo::PlayerRepo;
pub use revoked_token_repo::RevokedTokenRepo;
pub use submission_repo::SubmissionRepo;
