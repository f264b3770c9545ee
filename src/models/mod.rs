//! Domain models and the mappers that build them from gateway envelopes.
//!
//! Every mapper is a `From<Envelope<_>>` impl: total, pure, and lenient.
//! Absent text fields become empty strings, absent amounts and optional
//! details stay `None`, absent lists become empty.

mod account;
mod card;
mod charge;
mod checkout;
mod customer;
pub mod state;
mod threeds;
mod vault;
mod wallet;

pub use account::{LinkedPaymentToken, SetupToken, WalletClientId};
pub use card::CardToken;
pub use charge::ChargeDetails;
pub use checkout::CheckoutIntent;
pub use customer::{Customer, PaymentSource};
pub use state::{Failure, OperationState};
pub use threeds::ThreeDsToken;
pub use vault::VaultToken;
pub use wallet::{WalletCallback, WalletCharge, WalletChargeToken};

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}
