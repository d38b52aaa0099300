//! Account lifecycle orchestration — create, login, update, delete, assign-role.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use staykey_auth::password::{CredentialHasher, PasswordValue};
use staykey_auth::policy::AuthorizationPolicy;
use staykey_auth::token::{SessionToken, TokenService};
use staykey_core::config::auth::AuthConfig;
use staykey_core::error::AppError;
use staykey_core::result::AppResult;
use staykey_entity::account::{
    Account, AccountUpdate, CreatedVia, Credentials, ExternalIdentity, NewAccount, Role,
};

use crate::federation::IdentityLinker;
use crate::ids;
use crate::store::UserStore;

/// Orchestrates account lifecycle operations.
///
/// Every operation is atomic at the account-record granularity; the store
/// collaborator owns row-level atomicity and uniqueness enforcement. No
/// shared in-process mutable state lives here, so independent requests
/// can run concurrently.
#[derive(Clone)]
pub struct UserLifecycleManager {
    /// Account persistence.
    store: Arc<dyn UserStore>,
    /// Credential hashing.
    hasher: Arc<CredentialHasher>,
    /// Session token issuance.
    tokens: Arc<TokenService>,
    /// Authorization rules.
    policy: AuthorizationPolicy,
    /// Federated identity linking.
    linker: IdentityLinker,
    /// Id allocation retry budget.
    id_allocation_attempts: u32,
}

impl std::fmt::Debug for UserLifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLifecycleManager")
            .field("id_allocation_attempts", &self.id_allocation_attempts)
            .finish()
    }
}

impl UserLifecycleManager {
    /// Creates a new lifecycle manager wired to the given collaborators.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<CredentialHasher>,
        tokens: Arc<TokenService>,
        config: &AuthConfig,
    ) -> Self {
        let linker = IdentityLinker::new(Arc::clone(&store), Arc::clone(&hasher), config);
        Self {
            store,
            hasher,
            tokens,
            policy: AuthorizationPolicy::new(),
            linker,
            id_allocation_attempts: config.id_allocation_attempts,
        }
    }

    /// Creates a new local account.
    ///
    /// Fails `DuplicateEmail`/`DuplicateId` on taken identifiers and
    /// `Unauthorized` when a non-default role is requested by anyone but
    /// an admin actor. When no id is requested, a fresh one is drawn via
    /// the same bounded retry loop the federation path uses.
    pub async fn create_user(
        &self,
        data: NewAccount,
        requested_role: Option<Role>,
        actor_id: Option<i64>,
    ) -> AppResult<Account> {
        if self.store.exists_by_email(&data.email).await? {
            return Err(AppError::duplicate_email(format!(
                "Email '{}' is already in use",
                data.email
            )));
        }

        if let Some(id) = data.requested_id {
            if self.store.exists_by_id(id).await? {
                return Err(AppError::duplicate_id(format!(
                    "Account id {id} is already taken"
                )));
            }
        }

        let role = requested_role.unwrap_or_default();
        // A supplied actor id must resolve before any authorization runs;
        // an absent actor id means an anonymous self-registration.
        let actor = match actor_id {
            Some(id) => Some(self.require_account(id).await?),
            None => None,
        };
        self.policy.require_creation_role(role, actor.as_ref())?;

        let id = match data.requested_id {
            Some(id) => id,
            None => ids::allocate_id(self.store.as_ref(), self.id_allocation_attempts).await?,
        };

        let password_hash = self
            .hasher
            .ensure_hashed(PasswordValue::Plaintext(data.password))?;

        let now = Utc::now();
        let account = Account {
            id,
            email: data.email,
            display_name: data.display_name,
            phone: data.phone,
            birth_date: data.birth_date,
            password_hash,
            role,
            created_via: CreatedVia::Local,
            created_at: now,
            updated_at: now,
        };

        let saved = self.store.save(account).await?;
        info!(
            account_id = saved.id,
            email = %saved.email,
            role = %saved.role,
            "Account created"
        );
        Ok(saved)
    }

    /// Authenticates local credentials and issues a session token.
    ///
    /// Unknown email, wrong password, and internal lookup failures all
    /// collapse into one opaque `InvalidCredentials` outcome so callers
    /// cannot enumerate accounts.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<(Account, SessionToken)> {
        let account = match self.store.find_by_email(&credentials.email).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                warn!(email = %credentials.email, "Login attempt for unknown email");
                return Err(AppError::invalid_credentials());
            }
            Err(e) => {
                warn!(error = %e, "Account lookup failed during login");
                return Err(AppError::invalid_credentials());
            }
        };

        let verified = self
            .hasher
            .verify(&credentials.password, &account.password_hash)
            .unwrap_or(false);
        if !verified {
            warn!(account_id = account.id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials());
        }

        let token = self.tokens.issue(&account)?;
        info!(account_id = account.id, "Login successful");
        Ok((account, token))
    }

    /// Resolves a verified federated identity and issues a session token.
    ///
    /// Creates the account on first sight, then behaves like a successful
    /// local login.
    pub async fn federated_login(
        &self,
        identity: &ExternalIdentity,
    ) -> AppResult<(Account, SessionToken)> {
        let account = self.linker.resolve_or_create(identity).await?;
        let token = self.tokens.issue(&account)?;
        info!(account_id = account.id, "Federated login successful");
        Ok((account, token))
    }

    /// Updates a target account's mutable fields.
    ///
    /// Both actor and target must exist (`NotFound` before any
    /// authorization check); the actor must be the target or an admin.
    /// The password changes only when a non-blank value is supplied.
    pub async fn update_user(
        &self,
        target_id: i64,
        data: AccountUpdate,
        actor_id: i64,
    ) -> AppResult<Account> {
        let actor = self.require_account(actor_id).await?;
        let mut target = self.require_account(target_id).await?;
        self.policy.require_can_modify(&actor, &target)?;

        if let Some(display_name) = data.display_name {
            target.display_name = display_name;
        }
        if let Some(phone) = data.phone {
            target.phone = Some(phone);
        }
        if let Some(birth_date) = data.birth_date {
            target.birth_date = Some(birth_date);
        }
        if let Some(password) = data.password {
            if !password.trim().is_empty() {
                target.password_hash = self
                    .hasher
                    .ensure_hashed(PasswordValue::Plaintext(password))?;
            }
        }
        target.updated_at = Utc::now();

        let saved = self.persist(target).await?;
        info!(actor_id, target_id, "Account updated");
        Ok(saved)
    }

    /// Hard-deletes a target account.
    ///
    /// Same resolution and self-or-admin discipline as `update_user`.
    pub async fn delete_user(&self, target_id: i64, actor_id: i64) -> AppResult<()> {
        let actor = self.require_account(actor_id).await?;
        let target = self.require_account(target_id).await?;
        self.policy.require_can_modify(&actor, &target)?;

        self.store.delete(&target).await?;
        info!(actor_id, target_id, "Account deleted");
        Ok(())
    }

    /// Sets a target account's role. Admin only.
    ///
    /// The actor is resolved and checked before the target is touched, so
    /// a denied attempt leaves the target unchanged.
    pub async fn assign_role(
        &self,
        target_id: i64,
        new_role: Role,
        actor_id: i64,
    ) -> AppResult<Account> {
        let actor = self.require_account(actor_id).await?;
        self.policy.require_can_assign_role(&actor)?;

        let mut target = self.require_account(target_id).await?;
        let old_role = target.role;
        target.role = new_role;
        target.updated_at = Utc::now();

        let saved = self.persist(target).await?;
        info!(
            actor_id,
            target_id,
            old_role = %old_role,
            new_role = %new_role,
            "Account role changed"
        );
        Ok(saved)
    }

    /// Gets a single account by id.
    pub async fn get_user(&self, id: i64) -> AppResult<Account> {
        self.require_account(id).await
    }

    /// Finds an account by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Account> {
        self.store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No account for email '{email}'")))
    }

    /// Lists all accounts.
    pub async fn list_users(&self) -> AppResult<Vec<Account>> {
        self.store.list_all().await
    }

    /// Lists accounts holding the given role.
    pub async fn list_by_role(&self, role: Role) -> AppResult<Vec<Account>> {
        self.store.list_by_role(role).await
    }

    /// Saves a modified account record.
    ///
    /// The stored password value is classified before the write, so a
    /// plaintext that entered the record untagged is hashed exactly once
    /// here and an existing hash passes through untouched.
    async fn persist(&self, mut account: Account) -> AppResult<Account> {
        account.password_hash = self
            .hasher
            .ensure_hashed(PasswordValue::from_stored(account.password_hash))?;
        self.store.save(account).await
    }

    /// Resolves an account or fails `NotFound`.
    async fn require_account(&self, id: i64) -> AppResult<Account> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Account {id} not found")))
    }
}
