//! Maps verified external identities to local accounts.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use staykey_auth::password::CredentialHasher;
use staykey_core::config::auth::AuthConfig;
use staykey_core::result::AppResult;
use staykey_entity::account::{Account, CreatedVia, ExternalIdentity, Role};

use crate::ids;
use crate::store::UserStore;

/// Links a verified external identity to a local account, creating one on
/// first sight.
///
/// The upstream federation step has already verified the provider's
/// assertion; this linker trusts the identity completely.
#[derive(Clone)]
pub struct IdentityLinker {
    /// Account persistence.
    store: Arc<dyn UserStore>,
    /// Credential hasher, used only to mint unusable placeholders.
    hasher: Arc<CredentialHasher>,
    /// Id allocation retry budget.
    id_allocation_attempts: u32,
}

impl std::fmt::Debug for IdentityLinker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityLinker")
            .field("id_allocation_attempts", &self.id_allocation_attempts)
            .finish()
    }
}

impl IdentityLinker {
    /// Creates a new identity linker.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<CredentialHasher>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            store,
            hasher,
            id_allocation_attempts: config.id_allocation_attempts,
        }
    }

    /// Resolves the external identity to a local account.
    ///
    /// An existing account is returned unchanged — federation never
    /// overwrites local fields. Otherwise a new account is created with a
    /// fresh random id, the default role, and an unusable password hash,
    /// so the account cannot authenticate via the local credential path.
    pub async fn resolve_or_create(&self, identity: &ExternalIdentity) -> AppResult<Account> {
        if let Some(existing) = self.store.find_by_email(&identity.email).await? {
            return Ok(existing);
        }

        let id = ids::allocate_id(self.store.as_ref(), self.id_allocation_attempts).await?;
        let now = Utc::now();
        let account = Account {
            id,
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            phone: None,
            birth_date: None,
            password_hash: self.hasher.unusable_hash()?,
            role: Role::default(),
            created_via: CreatedVia::Federated,
            created_at: now,
            updated_at: now,
        };

        let saved = self.store.save(account).await?;
        info!(
            account_id = saved.id,
            email = %saved.email,
            "Account created from federated identity"
        );
        Ok(saved)
    }
}
