//! Process configuration, sourced from the environment.

use hedera::{AccountId, PrivateKey};
use serde::Deserialize;

use crate::error::Error;

/// Configuration for one workflow run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Operator account id, e.g. `0.0.12345`. Required.
    pub operator_id: String,

    /// Operator private key, DER or raw hex. Required.
    pub operator_key: String,

    #[serde(default = "defaults::network")]
    pub network: String,

    /// Starting balance (in hbar) funded into each new account.
    #[serde(default = "defaults::initial_balance")]
    pub initial_balance: i64,

    #[serde(default = "defaults::token_name")]
    pub token_name: String,

    #[serde(default = "defaults::token_symbol")]
    pub token_symbol: String,
}

impl Config {
    /// Load from `nft-demo.toml` (optional) with environment overrides.
    /// `OPERATOR_ID` and `OPERATOR_KEY` must be present in one of the two.
    pub fn load() -> Result<Self, Error> {
        config::Config::builder()
            .add_source(config::File::with_name("nft-demo").required(false))
            .add_source(config::Environment::default().try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Parse the operator credentials into typed form.
    pub fn operator(&self) -> Result<Operator, Error> {
        let account_id = self
            .operator_id
            .parse::<AccountId>()
            .map_err(|e| Error::Config(format!("invalid OPERATOR_ID: {e}")))?;
        let key = self
            .operator_key
            .parse::<PrivateKey>()
            .map_err(|e| Error::Config(format!("invalid OPERATOR_KEY: {e}")))?;
        Ok(Operator { account_id, key })
    }
}

/// The identity that funds new accounts and holds treasury, supply and
/// admin authority for the token class.
#[derive(Clone)]
pub struct Operator {
    pub account_id: AccountId,
    pub key: PrivateKey,
}

mod defaults {
    pub fn network() -> String {
        "testnet".into()
    }

    pub fn initial_balance() -> i64 {
        100
    }

    pub fn token_name() -> String {
        "MyToken".into()
    }

    pub fn token_symbol() -> String {
        "MT".into()
    }
}
