//! Shared setup for integration tests.

use std::sync::Arc;

use chrono::Utc;
use staykey_auth::password::CredentialHasher;
use staykey_auth::token::TokenService;
use staykey_core::config::auth::AuthConfig;
use staykey_entity::account::{Account, CreatedVia, NewAccount, Role};
use staykey_service::store::MemoryUserStore;
use staykey_service::user::UserLifecycleManager;

/// Everything a test needs to drive the lifecycle manager directly.
pub struct TestHarness {
    pub manager: UserLifecycleManager,
    pub store: Arc<MemoryUserStore>,
    pub tokens: Arc<TokenService>,
    pub hasher: Arc<CredentialHasher>,
    pub config: AuthConfig,
}

impl TestHarness {
    /// Builds a manager over a fresh in-memory store with a disposable
    /// signing secret.
    pub fn new() -> Self {
        let config = AuthConfig::with_secret("integration-test-secret");
        let store = Arc::new(MemoryUserStore::new());
        let hasher = Arc::new(CredentialHasher::new());
        let tokens = Arc::new(TokenService::new(&config));
        let manager =
            UserLifecycleManager::new(store.clone(), hasher.clone(), tokens.clone(), &config);
        Self {
            manager,
            store,
            tokens,
            hasher,
            config,
        }
    }

    /// Seeds an account with the given role directly through the store,
    /// bypassing creation-time authorization. Returns the stored account.
    pub async fn seed_account(&self, id: i64, email: &str, password: &str, role: Role) -> Account {
        use staykey_service::store::UserStore;

        let now = Utc::now();
        let account = Account {
            id,
            email: email.into(),
            display_name: format!("Seeded {id}"),
            phone: None,
            birth_date: None,
            password_hash: self.hasher.hash(password).unwrap(),
            role,
            created_via: CreatedVia::Local,
            created_at: now,
            updated_at: now,
        };
        self.store.save(account).await.unwrap()
    }
}

/// A minimal creation request with a caller-supplied id.
pub fn new_account(email: &str, password: &str, id: i64) -> NewAccount {
    NewAccount {
        email: email.into(),
        password: password.into(),
        display_name: format!("User {id}"),
        phone: None,
        birth_date: None,
        requested_id: Some(id),
    }
}

/// A minimal creation request letting the manager allocate the id.
pub fn new_account_auto_id(email: &str, password: &str) -> NewAccount {
    NewAccount {
        email: email.into(),
        password: password.into(),
        display_name: email.into(),
        phone: None,
        birth_date: None,
        requested_id: None,
    }
}
