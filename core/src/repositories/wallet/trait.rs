//! Wallet repository trait defining the interface for wallet persistence.

use async_trait::async_trait;

use crate::domain::entities::wallet::CarbonWallet;
use crate::errors::DomainError;

/// Repository contract for carbon wallet persistence.
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// Persist a new wallet, assigning its id.
    ///
    /// Fails with `AlreadyExists` when the user already has a wallet; the
    /// user id is a unique key.
    async fn create(&self, wallet: CarbonWallet) -> Result<CarbonWallet, DomainError>;

    /// Find a wallet by its owning user.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<CarbonWallet>, DomainError>;
}
