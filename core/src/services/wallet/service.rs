//! Carbon wallet access with lazy creation

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::wallet::CarbonWallet;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::WalletRepository;

/// Wallet access. A user's wallet is created on first read; the repository
/// enforces the one-wallet-per-user unique key.
pub struct WalletService<W: WalletRepository> {
    repository: Arc<W>,
}

impl<W: WalletRepository> WalletService<W> {
    pub fn new(repository: Arc<W>) -> Self {
        Self { repository }
    }

    /// Fetch the wallet for a user, creating an empty one on first access.
    pub async fn get_or_create(&self, user_id: i64) -> DomainResult<CarbonWallet> {
        if let Some(wallet) = self.repository.find_by_user_id(user_id).await? {
            return Ok(wallet);
        }

        match self.repository.create(CarbonWallet::new(user_id)).await {
            Ok(wallet) => {
                info!(event = "wallet_created", user_id = user_id, "Created wallet lazily");
                Ok(wallet)
            }
            // Lost the race against a concurrent creation; the winner's
            // wallet is the one to return.
            Err(DomainError::AlreadyExists { .. }) => self
                .repository
                .find_by_user_id(user_id)
                .await?
                .ok_or_else(|| DomainError::Internal {
                    message: format!("wallet for user {} vanished after creation race", user_id),
                }),
            Err(e) => Err(e),
        }
    }

    /// Explicitly create a wallet; fails with `AlreadyExists` when the user
    /// already has one.
    pub async fn create(&self, user_id: i64) -> DomainResult<CarbonWallet> {
        let wallet = self.repository.create(CarbonWallet::new(user_id)).await?;
        info!(event = "wallet_created", user_id = user_id, "Created wallet");
        Ok(wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryWalletRepository;

    fn service() -> WalletService<InMemoryWalletRepository> {
        WalletService::new(Arc::new(InMemoryWalletRepository::new()))
    }

    #[tokio::test]
    async fn test_get_or_create_is_lazy() {
        let service = service();

        let wallet = service.get_or_create(7).await.unwrap();
        assert_eq!(wallet.user_id, 7);
        assert_eq!(wallet.total_credits, 0);
        assert_eq!(wallet.cash_balance, 0);

        // Second access returns the same wallet, not a new one
        let again = service.get_or_create(7).await.unwrap();
        assert_eq!(again.id, wallet.id);
    }

    #[tokio::test]
    async fn test_explicit_create_rejects_duplicates() {
        let service = service();

        service.create(7).await.unwrap();
        let err = service.create(7).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_wallets_are_per_user() {
        let service = service();

        let first = service.get_or_create(1).await.unwrap();
        let second = service.get_or_create(2).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
