//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod campaign_repo;
pub mod client_repo;
pub mod note_repo;

pub use campaign_repo::CampaignRepo;
pub use client_repo::ClientRepo;
pub use note_repo::NoteRepo;
