//! # Hedera NFT Demo
//!
//! A one-shot walkthrough against the Hedera testnet: provision two
//! accounts, create a non-fungible token class, mint two serials,
//! associate both accounts with the class and transfer the serials out
//! of the treasury.
//!
//! ## Quick Start
//! ```bash
//! OPERATOR_ID=0.0.12345 OPERATOR_KEY=302e02... cargo run --bin nft-demo
//! ```
//!
//! Transaction construction, signing, submission and receipt polling are
//! the Hedera SDK's job; this crate only sequences the calls and reports
//! the identifiers and statuses each receipt carries.

pub mod client;
pub mod config;
mod error;
pub mod ledger;
pub mod workflow;

pub use config::{Config, Operator};
pub use error::Error;
