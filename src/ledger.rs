//! The capability seam between the workflow and the network.
//!
//! Every state-changing request yields a [`Receipt`]. Business-rule
//! rejections (un-associated receiver, serial not owned by the sender,
//! duplicate association) come back as `Ok(Receipt)` with a
//! [`TxStatus::Rejected`] status so callers can observe them; transport
//! and client failures come back as `Err`.

use std::fmt;

use hedera::{AccountId, Hbar, PrivateKey, PublicKey, TokenId};

use crate::error::Error;

/// Terminal consensus status of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    Rejected(String),
}

impl TxStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, TxStatus::Success)
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxStatus::Success => f.write_str("SUCCESS"),
            TxStatus::Rejected(status) => f.write_str(status),
        }
    }
}

/// What the network reports back for a submitted transaction: a terminal
/// status plus any newly assigned identifiers. Receipts are the only way
/// identifiers and success/failure are observed.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub status: TxStatus,
    /// Set by account-create receipts.
    pub account_id: Option<AccountId>,
    /// Set by token-create receipts.
    pub token_id: Option<TokenId>,
    /// Serial numbers assigned by a mint, in mint order.
    pub serials: Vec<i64>,
}

impl Receipt {
    pub fn success() -> Self {
        Self {
            status: TxStatus::Success,
            account_id: None,
            token_id: None,
            serials: Vec::new(),
        }
    }

    pub fn rejected(status: impl Into<String>) -> Self {
        Self {
            status: TxStatus::Rejected(status.into()),
            account_id: None,
            token_id: None,
            serials: Vec::new(),
        }
    }

    /// Escalate a rejection to a fatal error for steps the rest of the
    /// run depends on.
    pub fn require_success(self, op: &str) -> Result<Self, Error> {
        match self.status {
            TxStatus::Success => Ok(self),
            TxStatus::Rejected(ref status) => Err(Error::Rejected(format!("{op}: {status}"))),
        }
    }

    pub fn new_account_id(&self) -> Result<AccountId, Error> {
        self.account_id
            .clone()
            .ok_or_else(|| Error::Ledger("receipt carries no account id".into()))
    }

    pub fn new_token_id(&self) -> Result<TokenId, Error> {
        self.token_id
            .clone()
            .ok_or_else(|| Error::Ledger("receipt carries no token id".into()))
    }
}

/// Parameters of a non-fungible token class. Type, decimals, initial
/// supply and supply model are fixed by the workflow: non-fungible
/// unique, 0, 0, infinite.
#[derive(Debug, Clone)]
pub struct NftClass {
    pub name: String,
    pub symbol: String,
    /// Account holding all newly minted serials until transferred.
    pub treasury: AccountId,
}

/// The ledger operations the workflow sequences. Signing is delegated:
/// each operation takes the key material whose signature the network
/// requires for that step.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    /// Create an account owned by `key`, funded out of the operator's
    /// balance.
    async fn create_account(&self, key: PublicKey, initial_balance: Hbar)
        -> Result<Receipt, Error>;

    /// Define a new NFT class. `admin_key` becomes both supply and admin
    /// authority and must sign.
    async fn create_nft_class(
        &self,
        class: &NftClass,
        admin_key: &PrivateKey,
    ) -> Result<Receipt, Error>;

    /// Mint one serial per metadata entry, owned by the treasury. Serial
    /// numbers are assigned sequentially starting at 1. Signed by the
    /// supply key.
    async fn mint_nfts(
        &self,
        token_id: TokenId,
        metadata: Vec<Vec<u8>>,
        supply_key: &PrivateKey,
    ) -> Result<Receipt, Error>;

    /// Opt an account into holding the given token classes. Must be
    /// signed by the account's own key; association cannot be forced.
    async fn associate(
        &self,
        account_id: AccountId,
        token_ids: Vec<TokenId>,
        account_key: &PrivateKey,
    ) -> Result<Receipt, Error>;

    /// Move one serial from `from` to `to`, signed by the current
    /// owner's key. The network rejects the transfer if `from` no longer
    /// owns the serial or `to` is not associated with the class.
    async fn transfer_nft(
        &self,
        token_id: TokenId,
        serial: u64,
        from: AccountId,
        to: AccountId,
        owner_key: &PrivateKey,
    ) -> Result<Receipt, Error>;
}
