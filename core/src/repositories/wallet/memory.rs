//! In-memory wallet repository for development and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::wallet::CarbonWallet;
use crate::errors::DomainError;

use super::r#trait::WalletRepository;

/// Wallet repository backed by a process-local map keyed by user id
pub struct InMemoryWalletRepository {
    wallets: RwLock<HashMap<i64, CarbonWallet>>,
    next_id: AtomicI64,
}

impl InMemoryWalletRepository {
    pub fn new() -> Self {
        Self {
            wallets: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryWalletRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletRepository for InMemoryWalletRepository {
    async fn create(&self, mut wallet: CarbonWallet) -> Result<CarbonWallet, DomainError> {
        let mut wallets = self.wallets.write().unwrap();
        if wallets.contains_key(&wallet.user_id) {
            return Err(DomainError::AlreadyExists {
                resource: format!("wallet for user {}", wallet.user_id),
            });
        }
        wallet.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        wallets.insert(wallet.user_id, wallet.clone());
        Ok(wallet)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<CarbonWallet>, DomainError> {
        Ok(self.wallets.read().unwrap().get(&user_id).cloned())
    }
}
