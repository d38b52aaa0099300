//! In-memory account store using a Tokio mutex for single-node deployments.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use staykey_core::error::AppError;
use staykey_core::result::AppResult;
use staykey_entity::account::{Account, Role};

use super::UserStore;

/// In-memory account store guarded by a Tokio mutex.
///
/// Uniqueness checks and the insert happen under one lock acquisition, so
/// a losing check-then-save race between concurrent callers surfaces as
/// `DuplicateEmail`/`DuplicateId` from `save`, never as a silent overwrite.
///
/// Suitable for single-node deployments and tests only.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    /// Accounts keyed by id.
    accounts: Arc<Mutex<HashMap<i64, Account>>>,
}

impl MemoryUserStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        Ok(self.accounts.lock().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .await
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.accounts.lock().await.contains_key(&id))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self
            .accounts
            .lock()
            .await
            .values()
            .any(|a| a.email == email))
    }

    async fn save(&self, account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.lock().await;

        if accounts
            .values()
            .any(|a| a.email == account.email && a.id != account.id)
        {
            return Err(AppError::duplicate_email(format!(
                "Email '{}' is already in use",
                account.email
            )));
        }

        // Lifecycle operations never change an account's email, so a row
        // under this id with a different email is an id collision between
        // distinct accounts, not an update.
        if let Some(existing) = accounts.get(&account.id) {
            if existing.email != account.email {
                return Err(AppError::duplicate_id(format!(
                    "Account id {} is already taken",
                    account.id
                )));
            }
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn delete(&self, account: &Account) -> AppResult<()> {
        self.accounts.lock().await.remove(&account.id);
        Ok(())
    }

    async fn list_by_role(&self, role: Role) -> AppResult<Vec<Account>> {
        let mut matched: Vec<Account> = self
            .accounts
            .lock()
            .await
            .values()
            .filter(|a| a.role == role)
            .cloned()
            .collect();
        matched.sort_by_key(|a| a.id);
        Ok(matched)
    }

    async fn list_all(&self) -> AppResult<Vec<Account>> {
        let mut all: Vec<Account> = self.accounts.lock().await.values().cloned().collect();
        all.sort_by_key(|a| a.id);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use staykey_core::ErrorKind;
    use staykey_entity::account::CreatedVia;

    fn account(id: i64, email: &str) -> Account {
        Account {
            id,
            email: email.into(),
            display_name: "Test".into(),
            phone: None,
            birth_date: None,
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
            role: Role::Client,
            created_via: CreatedVia::Local,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn save_rejects_duplicate_email_across_ids() {
        let store = MemoryUserStore::new();
        store.save(account(1, "a@x.com")).await.unwrap();
        let err = store.save(account(2, "a@x.com")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);
    }

    #[tokio::test]
    async fn save_rejects_id_collision_between_distinct_accounts() {
        let store = MemoryUserStore::new();
        store.save(account(1, "a@x.com")).await.unwrap();
        let err = store.save(account(1, "b@x.com")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateId);
    }

    #[tokio::test]
    async fn save_allows_update_of_same_account() {
        let store = MemoryUserStore::new();
        store.save(account(1, "a@x.com")).await.unwrap();
        let mut updated = account(1, "a@x.com");
        updated.display_name = "Renamed".into();
        store.save(updated).await.unwrap();
        let found = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.display_name, "Renamed");
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let store = MemoryUserStore::new();
        let saved = store.save(account(1, "a@x.com")).await.unwrap();
        store.delete(&saved).await.unwrap();
        assert!(!store.exists_by_id(1).await.unwrap());
    }

    #[tokio::test]
    async fn list_by_role_filters() {
        let store = MemoryUserStore::new();
        store.save(account(1, "a@x.com")).await.unwrap();
        let mut host = account(2, "b@x.com");
        host.role = Role::Host;
        store.save(host).await.unwrap();

        let hosts = store.list_by_role(Role::Host).await.unwrap();
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].id, 2);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }
}
