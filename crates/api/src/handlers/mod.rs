pub mod airtable;
pub mod campaign;
pub mod client;
pub mod copy;
pub mod flow;
pub mod note;
