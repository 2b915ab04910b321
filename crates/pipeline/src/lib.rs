//! Copy generation pipeline.
//!
//! - [`generation::CopyGenerator`] turns one email plan (or one campaign
//!   brief) into a structured draft through the language model.
//! - [`sequencer::Sequencer`] drives a whole flow strategy, substituting a
//!   fallback draft for any email that fails.
//! - [`record::FlowRecordBuilder`] persists finished flows and copies as
//!   shareable records.
//! - [`scrape::WebsiteScraper`] fetches brand context from client sites.

pub mod error;
pub mod generation;
pub mod parse;
pub mod prompt;
pub mod record;
pub mod scrape;
pub mod sequencer;

pub use error::GenerationError;
pub use generation::CopyGenerator;
pub use record::{FinalizedCopy, FinalizedFlow, FlowDraft, FlowEdit, FlowRecordBuilder, RecordError};
pub use scrape::{ScrapeError, WebsiteScraper};
pub use sequencer::Sequencer;
