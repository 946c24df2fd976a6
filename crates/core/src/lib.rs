//! Core domain logic for the casamiento invitation site.
//!
//! Everything in this crate is pure: submission remapping, confirmation-row
//! key normalization, the read-strategy payload parsers, and table filtering
//! all operate on in-memory values so they can be tested without network
//! access. The web crate owns all I/O.

pub mod confirmations;
pub mod filter;
pub mod read;
pub mod rsvp;

pub use confirmations::ConfirmationRow;
pub use filter::{filter_rows, RowFilter};
pub use read::{parse_gviz_rows, parse_json_rows, ReadError};
pub use rsvp::{ForwardedRecord, RsvpSubmission};
