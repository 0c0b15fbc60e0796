//! The linear account → token → mint → associate → transfer walkthrough.
//!
//! Strictly sequential: each step's receipt carries the identifier the
//! next step needs, so ordering is a hard data dependency. Any `Err`
//! aborts the remaining sequence; there is no retry or compensation at
//! this layer.

use hedera::{AccountId, Hbar, PrivateKey, TokenId};
use tracing::info;

use crate::config::{Config, Operator};
use crate::error::Error;
use crate::ledger::{Ledger, NftClass, TxStatus};

/// Metadata attached to the minted serials, in mint order.
pub const SERIAL_METADATA: [&str; 2] = ["FirstTokenMetadata", "SecoudTokenMetadata"];

/// Identifiers and terminal statuses gathered along one run.
#[derive(Debug)]
pub struct Summary {
    pub alice: AccountId,
    pub bob: AccountId,
    pub token_id: TokenId,
    /// Serial numbers the mint receipt reported.
    pub serials: Vec<u64>,
    pub first_transfer: TxStatus,
    pub second_transfer: TxStatus,
}

/// Run the whole workflow once against `ledger`.
pub async fn run<L: Ledger>(
    ledger: &L,
    operator: &Operator,
    config: &Config,
) -> Result<Summary, Error> {
    let balance = Hbar::new(config.initial_balance);

    // Two throwaway parties, each with freshly generated key material.
    let alice_key = PrivateKey::generate_ed25519();
    let alice = ledger
        .create_account(alice_key.public_key(), balance)
        .await?
        .require_success("account create")?
        .new_account_id()?;
    info!(account = %alice, "Alice account created");

    let bob_key = PrivateKey::generate_ed25519();
    let bob = ledger
        .create_account(bob_key.public_key(), balance)
        .await?
        .require_success("account create")?
        .new_account_id()?;
    info!(account = %bob, "Bob account created");

    let class = NftClass {
        name: config.token_name.clone(),
        symbol: config.token_symbol.clone(),
        treasury: operator.account_id.clone(),
    };
    let token_id = ledger
        .create_nft_class(&class, &operator.key)
        .await?
        .require_success("token create")?
        .new_token_id()?;
    info!(token = %token_id, "NFT class created");

    let metadata = SERIAL_METADATA
        .iter()
        .map(|entry| entry.as_bytes().to_vec())
        .collect();
    let mint = ledger
        .mint_nfts(token_id, metadata, &operator.key)
        .await?
        .require_success("token mint")?;
    let serials: Vec<u64> = mint.serials.iter().map(|s| *s as u64).collect();
    if serials.len() != SERIAL_METADATA.len() {
        return Err(Error::Ledger(format!(
            "mint receipt reported {} serials, expected {}",
            serials.len(),
            SERIAL_METADATA.len()
        )));
    }
    info!(serials = ?serials, "Serials minted to treasury");

    // Each account opts into the class with its own signature; the
    // treasury cannot force association.
    for (party, account, key) in [
        ("Alice", alice.clone(), &alice_key),
        ("Bob", bob.clone(), &bob_key),
    ] {
        ledger
            .associate(account.clone(), vec![token_id], key)
            .await?
            .require_success("token associate")?;
        info!(party, account = %account, "Associated with token");
    }

    let first = ledger
        .transfer_nft(
            token_id,
            serials[0],
            operator.account_id.clone(),
            alice.clone(),
            &operator.key,
        )
        .await?;
    info!(status = %first.status, "First serial transferred to Alice");

    // The second serial goes to Alice as well; Bob ends the run holding
    // nothing.
    let second = ledger
        .transfer_nft(
            token_id,
            serials[1],
            operator.account_id.clone(),
            alice.clone(),
            &operator.key,
        )
        .await?;
    info!(status = %second.status, "Second serial transferred to Alice");

    Ok(Summary {
        alice,
        bob,
        token_id,
        serials,
        first_transfer: first.status,
        second_transfer: second.status,
    })
}
