//! Wire-format records for the gateway's JSON API.
//!
//! Requests are validated with `validator` before they leave the process.
//! Responses are deliberately lenient: every field may be missing and
//! decodes to `None` or an empty list.

pub mod account;
pub mod card;
pub mod charge;
pub mod checkout;
pub mod customer;
mod envelope;
pub mod rules;
pub mod threeds;
pub mod vault;
pub mod wallet;

pub use envelope::{Envelope, ErrorEnvelope, GatewayErrorBody, Resource};
