//! The persistence collaborator boundary.

pub mod memory;

use async_trait::async_trait;

use staykey_core::result::AppResult;
use staykey_entity::account::{Account, Role};

pub use memory::MemoryUserStore;

/// The opaque account store this core consumes.
///
/// Row-level atomicity and unique-constraint enforcement on email and id
/// are the store's responsibility; `save` must surface a losing insert
/// race as `DuplicateId`/`DuplicateEmail` rather than silently clobbering.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find an account by its stable id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>>;

    /// Find an account by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Whether an account with the given id exists.
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// Whether an account with the given email exists.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert or update an account and return the stored row.
    async fn save(&self, account: Account) -> AppResult<Account>;

    /// Delete an account record.
    async fn delete(&self, account: &Account) -> AppResult<()>;

    /// List all accounts holding the given role.
    async fn list_by_role(&self, role: Role) -> AppResult<Vec<Account>>;

    /// List all accounts.
    async fn list_all(&self) -> AppResult<Vec<Account>>;
}
