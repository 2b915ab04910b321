//! Campaign tracker integration.
//!
//! Reads campaign rows from an Airtable base and writes the shareable copy
//! link back onto a row. The integration is optional: when credentials are
//! missing, [`AirtableConfig::from_env`] returns `None`.

pub mod api;
pub mod config;

pub use api::{AirtableApi, AirtableApiError, AirtableRecord};
pub use config::AirtableConfig;
