//! Hedera SDK adapter for the [`Ledger`] capability.

use hedera::{
    AccountCreateTransaction, AccountId, Client, Hbar, PrivateKey, PublicKey,
    TokenAssociateTransaction,
    TokenCreateTransaction, TokenId, TokenMintTransaction, TokenSupplyType, TokenType,
    TransactionResponse, TransferTransaction,
};
use tracing::info;

use crate::config::Operator;
use crate::error::Error;
use crate::ledger::{Ledger, NftClass, Receipt, TxStatus};

/// One client handle per process, bound to the operator identity at
/// startup and never reconfigured mid-run.
pub struct HederaLedger {
    client: Client,
}

impl HederaLedger {
    /// Connect to the named network (`testnet`, `previewnet`, `mainnet`)
    /// authenticated as the operator.
    pub fn connect(network: &str, operator: &Operator) -> Result<Self, Error> {
        let client = Client::for_name(network)
            .map_err(|e| Error::Config(format!("unknown network `{network}`: {e}")))?;
        client.set_operator(operator.account_id.clone(), operator.key.clone());
        info!(network, operator = %operator.account_id, "Ledger client ready");
        Ok(Self { client })
    }

    /// Poll the receipt for a submitted transaction. A consensus-level
    /// rejection is a terminal outcome, not an error; anything else
    /// (transport, timeout) is.
    async fn settle(&self, response: TransactionResponse) -> Result<Receipt, Error> {
        match response.get_receipt(&self.client).await {
            Ok(receipt) => Ok(Receipt {
                status: TxStatus::Success,
                account_id: receipt.account_id,
                token_id: receipt.token_id,
                serials: receipt.serials,
            }),
            Err(hedera::Error::ReceiptStatus { status, .. }) => {
                Ok(Receipt::rejected(format!("{status:?}")))
            }
            Err(e) => Err(Error::Ledger(format!("receipt retrieval failed: {e}"))),
        }
    }
}

impl Ledger for HederaLedger {
    async fn create_account(
        &self,
        key: PublicKey,
        initial_balance: Hbar,
    ) -> Result<Receipt, Error> {
        let response = AccountCreateTransaction::new()
            .key(key)
            .initial_balance(initial_balance)
            .execute(&self.client)
            .await
            .map_err(|e| Error::Ledger(format!("account create failed: {e}")))?;
        self.settle(response).await
    }

    async fn create_nft_class(
        &self,
        class: &NftClass,
        admin_key: &PrivateKey,
    ) -> Result<Receipt, Error> {
        let mut tx = TokenCreateTransaction::new();
        tx.name(class.name.clone())
            .symbol(class.symbol.clone())
            .token_type(TokenType::NonFungibleUnique)
            .decimals(0)
            .initial_supply(0)
            .treasury_account_id(class.treasury.clone())
            .token_supply_type(TokenSupplyType::Infinite)
            .supply_key(admin_key.public_key())
            .admin_key(admin_key.public_key())
            .freeze_with(&self.client)
            .map_err(|e| Error::Ledger(format!("token create freeze failed: {e}")))?
            .sign(admin_key.clone());
        let response = tx
            .execute(&self.client)
            .await
            .map_err(|e| Error::Ledger(format!("token create failed: {e}")))?;
        self.settle(response).await
    }

    async fn mint_nfts(
        &self,
        token_id: TokenId,
        metadata: Vec<Vec<u8>>,
        supply_key: &PrivateKey,
    ) -> Result<Receipt, Error> {
        let mut tx = TokenMintTransaction::new();
        tx.token_id(token_id)
            .metadata(metadata)
            .freeze_with(&self.client)
            .map_err(|e| Error::Ledger(format!("token mint freeze failed: {e}")))?
            .sign(supply_key.clone());
        let response = tx
            .execute(&self.client)
            .await
            .map_err(|e| Error::Ledger(format!("token mint failed: {e}")))?;
        self.settle(response).await
    }

    async fn associate(
        &self,
        account_id: AccountId,
        token_ids: Vec<TokenId>,
        account_key: &PrivateKey,
    ) -> Result<Receipt, Error> {
        let mut tx = TokenAssociateTransaction::new();
        tx.account_id(account_id)
            .token_ids(token_ids)
            .freeze_with(&self.client)
            .map_err(|e| Error::Ledger(format!("token associate freeze failed: {e}")))?
            .sign(account_key.clone());
        let response = tx
            .execute(&self.client)
            .await
            .map_err(|e| Error::Ledger(format!("token associate failed: {e}")))?;
        self.settle(response).await
    }

    async fn transfer_nft(
        &self,
        token_id: TokenId,
        serial: u64,
        from: AccountId,
        to: AccountId,
        owner_key: &PrivateKey,
    ) -> Result<Receipt, Error> {
        let mut tx = TransferTransaction::new();
        tx.nft_transfer(token_id.nft(serial), from, to)
            .freeze_with(&self.client)
            .map_err(|e| Error::Ledger(format!("nft transfer freeze failed: {e}")))?
            .sign(owner_key.clone());
        let response = tx
            .execute(&self.client)
            .await
            .map_err(|e| Error::Ledger(format!("nft transfer failed: {e}")))?;
        self.settle(response).await
    }
}
