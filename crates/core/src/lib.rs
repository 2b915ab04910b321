//! Domain core for the copy generation service.
//!
//! Pure, I/O-free building blocks: flow types and their email template
//! catalogues, the strategy builder, the per-email context assembler,
//! website insight extraction, content blocks, and the persisted record
//! shapes. Everything that talks to the network or disk lives in the
//! sibling crates.

pub mod blocks;
pub mod brand;
pub mod context;
pub mod error;
pub mod flow;
pub mod flow_type;
pub mod ids;
pub mod insights;
pub mod records;
pub mod strategy;
pub mod templates;
pub mod types;
pub mod validation;
