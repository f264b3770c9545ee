//! paydock-rs
//!
//! Client core for a payment gateway REST API: typed DTOs, pure mappers to
//! domain models, repositories that make one gateway call on the IO
//! context, and use cases that hand back explicit results.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod dto;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod state;
pub mod usecases;

pub use state::PaymentSdk;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
